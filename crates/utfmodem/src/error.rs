use alloc::string::String;

use thiserror::Error;

/// Error returned by [`Codec::for_label`](crate::Codec::for_label) when a
/// label does not resolve to any codec.
///
/// This is the crate's only error type. Malformed *data* never produces an
/// error; decoders substitute the configured replacement character instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown encoding label: {label:?}")]
pub struct UnknownEncoding {
    /// The label as the caller supplied it, before normalization.
    pub label: String,
}
