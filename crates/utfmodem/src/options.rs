/// Byte order of a UTF-32 stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    /// Least-significant byte first (`utf-32le`).
    #[default]
    Little,
    /// Most-significant byte first (`utf-32be`).
    Big,
}

/// Configuration for encoder sessions.
///
/// Only the UTF-32 auto encoder consults these fields; every other encoder
/// kind ignores them.
///
/// # Examples
///
/// ```rust
/// use utfmodem::{Codec, EncoderOptions, Endianness};
///
/// let encoder = Codec::Utf32Auto.encoder(EncoderOptions {
///     default_endian: Endianness::Big,
///     ..Default::default()
/// });
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EncoderOptions {
    /// Whether the surrounding byte-order-mark wrapper should prepend a BOM
    /// for the endianness the auto encoder settles on.
    ///
    /// The wrapper itself is external; this flag only controls what
    /// [`Encoder::bom`](crate::Encoder::bom) reports.
    ///
    /// # Default
    ///
    /// `true`
    pub add_bom: bool,

    /// Endianness the UTF-32 auto encoder delegates to.
    ///
    /// # Default
    ///
    /// `Endianness::Little`
    pub default_endian: Endianness,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            add_bom: true,
            default_endian: Endianness::Little,
        }
    }
}

/// Configuration for decoder sessions.
#[derive(Debug, Clone, Copy)]
pub struct DecoderOptions {
    /// The character substituted for every locally indivisible invalid unit
    /// of input, such as a malformed CESU-8 sequence or an out-of-range
    /// UTF-32 code point.
    ///
    /// # Default
    ///
    /// U+FFFD REPLACEMENT CHARACTER
    pub replacement: char,

    /// Endianness the UTF-32 auto decoder falls back to when neither a BOM
    /// nor the content heuristic decides.
    ///
    /// # Default
    ///
    /// `Endianness::Little`
    pub default_endian: Endianness,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            replacement: char::REPLACEMENT_CHARACTER,
            default_endian: Endianness::Little,
        }
    }
}
