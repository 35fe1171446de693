//! The decoder session variants and their common dispatch surface.

use alloc::vec::Vec;

use crate::{
    base64::Base64Decoder,
    cesu8::Cesu8Decoder,
    passthrough::{BinaryDecoder, HexDecoder, Utf8Decoder},
    utf32::{Utf32AutoDecoder, Utf32Decoder},
};

/// A decoder session: bytes in, text (UTF-16 code units) out.
///
/// One variant per decoder kind, dispatched statically. Malformed input
/// never errors; each locally indivisible invalid unit becomes one
/// replacement character.
///
/// # Examples
///
/// ```rust
/// use utfmodem::{Codec, DecoderOptions, wide};
///
/// let mut decoder = Codec::Cesu8.decoder(DecoderOptions::default());
/// let mut units = decoder.feed(&[0xED, 0xA0, 0xBD, 0xED, 0xB2, 0xA9]);
/// units.extend(decoder.finish());
/// assert_eq!(wide::to_string_lossy(&units), "\u{1F4A9}");
/// ```
#[derive(Debug)]
pub enum Decoder {
    Utf8(Utf8Decoder),
    Binary(BinaryDecoder),
    Hex(HexDecoder),
    Base64(Base64Decoder),
    Cesu8(Cesu8Decoder),
    Utf32(Utf32Decoder),
    Utf32Auto(Utf32AutoDecoder),
}

impl Decoder {
    /// Decodes a chunk of bytes, returning the code units that could be
    /// produced so far. Bytes that cannot be interpreted yet (a partial
    /// multi-byte sequence, an undetected stream head) are retained for the
    /// next call.
    pub fn feed(&mut self, src: &[u8]) -> Vec<u16> {
        match self {
            Self::Utf8(d) => d.feed(src),
            Self::Binary(d) => d.feed(src),
            Self::Hex(d) => d.feed(src),
            Self::Base64(d) => d.feed(src),
            Self::Cesu8(d) => d.feed(src),
            Self::Utf32(d) => d.feed(src),
            Self::Utf32Auto(d) => d.feed(src),
        }
    }

    /// Ends the stream, flushing or discarding retained state as the
    /// encoding dictates (CESU-8 replaces a truncated sequence; UTF-32 drops
    /// trailing partial code points).
    #[must_use]
    pub fn finish(self) -> Vec<u16> {
        match self {
            Self::Utf8(d) => d.finish(),
            Self::Binary(d) => d.finish(),
            Self::Hex(d) => d.finish(),
            Self::Base64(d) => d.finish(),
            Self::Cesu8(d) => d.finish(),
            Self::Utf32(d) => d.finish(),
            Self::Utf32Auto(d) => d.finish(),
        }
    }

    /// True iff the session retains bytes that could not yet be decoded.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        match self {
            Self::Utf8(d) => d.has_pending(),
            Self::Binary(d) => d.has_pending(),
            Self::Hex(d) => d.has_pending(),
            Self::Base64(d) => d.has_pending(),
            Self::Cesu8(d) => d.has_pending(),
            Self::Utf32(d) => d.has_pending(),
            Self::Utf32Auto(d) => d.has_pending(),
        }
    }
}
