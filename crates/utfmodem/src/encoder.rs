//! The encoder session variants and their common dispatch surface.

use alloc::vec::Vec;

use crate::{
    base64::Base64Encoder,
    cesu8::Cesu8Encoder,
    passthrough::{BinaryEncoder, HexEncoder, Utf8Encoder},
    utf32::{Utf32AutoEncoder, Utf32Encoder},
    wide,
};

/// An encoder session: text (UTF-16 code units) in, bytes out.
///
/// One variant per encoder kind, dispatched statically. A session processes
/// one logical stream: any number of [`feed`](Self::feed) calls, then one
/// [`finish`](Self::finish), which consumes the session and flushes whatever
/// partial input it still held.
///
/// # Examples
///
/// ```rust
/// use utfmodem::{Codec, EncoderOptions};
///
/// let mut encoder = Codec::Cesu8.encoder(EncoderOptions::default());
/// let mut bytes = encoder.feed_str("a\u{1F4A9}");
/// bytes.extend(encoder.finish());
/// assert_eq!(bytes, [0x61, 0xED, 0xA0, 0xBD, 0xED, 0xB2, 0xA9]);
/// ```
#[derive(Debug)]
pub enum Encoder {
    Utf8(Utf8Encoder),
    Binary(BinaryEncoder),
    Hex(HexEncoder),
    Base64(Base64Encoder),
    Cesu8(Cesu8Encoder),
    Utf32(Utf32Encoder),
    Utf32Auto(Utf32AutoEncoder),
}

impl Encoder {
    /// Estimate of the bytes [`feed`](Self::feed) would produce for `text`,
    /// for buffer pre-sizing. Exact for every encoding except base64, where
    /// it is an upper bound.
    #[must_use]
    pub fn byte_len(&self, text: &[u16]) -> usize {
        match self {
            Self::Utf8(e) => e.byte_len(text),
            Self::Binary(e) => e.byte_len(text),
            Self::Hex(e) => e.byte_len(text),
            Self::Base64(e) => e.byte_len(text),
            Self::Cesu8(e) => e.byte_len(text),
            Self::Utf32(e) => e.byte_len(text),
            Self::Utf32Auto(e) => e.byte_len(text),
        }
    }

    /// Encodes a chunk of code units, returning the bytes that could be
    /// produced so far. Input that cannot be interpreted yet (a trailing
    /// high surrogate, a partial base64 quad) is retained for the next call.
    pub fn feed(&mut self, text: &[u16]) -> Vec<u8> {
        match self {
            Self::Utf8(e) => e.feed(text),
            Self::Binary(e) => e.feed(text),
            Self::Hex(e) => e.feed(text),
            Self::Base64(e) => e.feed(text),
            Self::Cesu8(e) => e.feed(text),
            Self::Utf32(e) => e.feed(text),
            Self::Utf32Auto(e) => e.feed(text),
        }
    }

    /// Convenience for well-formed input: feeds the UTF-16 code units of a
    /// `&str`.
    pub fn feed_str(&mut self, text: &str) -> Vec<u8> {
        self.feed(&wide::units_of(text))
    }

    /// Ends the stream, flushing any retained partial input.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        match self {
            Self::Utf8(e) => e.finish(),
            Self::Binary(e) => e.finish(),
            Self::Hex(e) => e.finish(),
            Self::Base64(e) => e.finish(),
            Self::Cesu8(e) => e.finish(),
            Self::Utf32(e) => e.finish(),
            Self::Utf32Auto(e) => e.finish(),
        }
    }

    /// True iff the session retains input that could not yet be encoded.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        match self {
            Self::Utf8(e) => e.has_pending(),
            Self::Binary(e) => e.has_pending(),
            Self::Hex(e) => e.has_pending(),
            Self::Base64(e) => e.has_pending(),
            Self::Cesu8(e) => e.has_pending(),
            Self::Utf32(e) => e.has_pending(),
            Self::Utf32Auto(e) => e.has_pending(),
        }
    }

    /// The byte-order mark the external BOM wrapper should prepend, if this
    /// session requests one. Only the UTF-32 auto encoder does, and only
    /// unless its options opted out.
    #[must_use]
    pub fn bom(&self) -> Option<&'static [u8]> {
        match self {
            Self::Utf32Auto(e) => e.bom(),
            _ => None,
        }
    }
}
