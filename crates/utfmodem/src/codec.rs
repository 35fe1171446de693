//! Codec descriptors: the immutable configuration a session is built from.

use alloc::string::{String, ToString};

use crate::{
    base64::{Base64Decoder, Base64Encoder},
    cesu8::{Cesu8Decoder, Cesu8Encoder},
    decoder::Decoder,
    encoder::Encoder,
    error::UnknownEncoding,
    options::{DecoderOptions, EncoderOptions, Endianness},
    passthrough::{BinaryDecoder, BinaryEncoder, HexDecoder, HexEncoder, Utf8Decoder, Utf8Encoder},
    utf32::{Utf32AutoDecoder, Utf32AutoEncoder, Utf32Decoder, Utf32Encoder},
};

/// A codec descriptor. Immutable; acts as the factory for encoder and
/// decoder sessions.
///
/// # Examples
///
/// ```rust
/// use utfmodem::{Codec, DecoderOptions, Endianness};
///
/// let codec = Codec::for_label("UTF-32LE").unwrap();
/// assert_eq!(codec, Codec::Utf32 { endian: Endianness::Little });
/// assert!(codec.bom_aware());
///
/// let mut decoder = codec.decoder(DecoderOptions::default());
/// assert_eq!(decoder.feed(&[0x41, 0x00, 0x00, 0x00]), [0x41]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// UTF-8 pass-through.
    Utf8,
    /// ISO-8859-1 low-byte pass-through.
    Binary,
    /// Hex text on the string side, raw bytes on the byte side.
    Hex,
    /// Base64 text on the string side, raw bytes on the byte side.
    Base64,
    /// CESU-8, with the Modified-UTF-8 NUL accepted on decode.
    Cesu8,
    /// UTF-32 in a fixed byte order.
    Utf32 {
        /// Byte order of the stream.
        endian: Endianness,
    },
    /// UTF-32 with the byte order detected from a BOM or stream content
    /// (decode) or chosen up front with a BOM request (encode).
    Utf32Auto,
}

impl Codec {
    /// Resolves a codec label.
    ///
    /// Lookup is case-insensitive and ignores `-`, `_` and spaces, so
    /// `"UTF-32LE"`, `"utf32le"` and `"utf_32_le"` all resolve. `"ucs4"`
    /// labels alias their `"utf32"` counterparts, and `"unicode11utf8"`
    /// aliases `"utf8"`.
    ///
    /// # Errors
    ///
    /// [`UnknownEncoding`] when the label matches no codec.
    pub fn for_label(label: &str) -> Result<Self, UnknownEncoding> {
        let mut key = String::with_capacity(label.len());
        for ch in label.chars() {
            match ch {
                '-' | '_' | ' ' => {}
                _ => key.extend(ch.to_lowercase()),
            }
        }
        match key.as_str() {
            "utf8" | "unicode11utf8" => Ok(Self::Utf8),
            "binary" => Ok(Self::Binary),
            "hex" => Ok(Self::Hex),
            "base64" => Ok(Self::Base64),
            "cesu8" => Ok(Self::Cesu8),
            "utf32le" | "ucs4le" => Ok(Self::Utf32 {
                endian: Endianness::Little,
            }),
            "utf32be" | "ucs4be" => Ok(Self::Utf32 {
                endian: Endianness::Big,
            }),
            "utf32" | "ucs4" => Ok(Self::Utf32Auto),
            _ => Err(UnknownEncoding {
                label: label.to_string(),
            }),
        }
    }

    /// The canonical name of this codec.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Binary => "binary",
            Self::Hex => "hex",
            Self::Base64 => "base64",
            Self::Cesu8 => "cesu8",
            Self::Utf32 {
                endian: Endianness::Little,
            } => "utf32le",
            Self::Utf32 {
                endian: Endianness::Big,
            } => "utf32be",
            Self::Utf32Auto => "utf32",
        }
    }

    /// Whether streams in this encoding may start with a byte-order mark the
    /// external BOM wrapper should strip or prepend. Informational; the
    /// sessions themselves never touch BOMs, except that the auto decoder
    /// uses one for endianness detection.
    #[must_use]
    pub fn bom_aware(&self) -> bool {
        match self {
            Self::Utf8 | Self::Cesu8 | Self::Utf32 { .. } | Self::Utf32Auto => true,
            Self::Binary | Self::Hex | Self::Base64 => false,
        }
    }

    /// Creates an encoder session.
    #[must_use]
    pub fn encoder(&self, options: EncoderOptions) -> Encoder {
        match self {
            Self::Utf8 => Encoder::Utf8(Utf8Encoder::new()),
            Self::Binary => Encoder::Binary(BinaryEncoder::new()),
            Self::Hex => Encoder::Hex(HexEncoder::new()),
            Self::Base64 => Encoder::Base64(Base64Encoder::new()),
            Self::Cesu8 => Encoder::Cesu8(Cesu8Encoder::new()),
            Self::Utf32 { endian } => Encoder::Utf32(Utf32Encoder::new(*endian)),
            Self::Utf32Auto => Encoder::Utf32Auto(Utf32AutoEncoder::new(options)),
        }
    }

    /// Creates a decoder session.
    ///
    /// CESU-8 always gets the custom state-machine decoder: Rust's native
    /// UTF-8 machinery rejects surrogate byte sequences, so the pass-through
    /// decoder can never reproduce a CESU-8 surrogate pair.
    #[must_use]
    pub fn decoder(&self, options: DecoderOptions) -> Decoder {
        match self {
            Self::Utf8 => Decoder::Utf8(Utf8Decoder::new()),
            Self::Binary => Decoder::Binary(BinaryDecoder::new()),
            Self::Hex => Decoder::Hex(HexDecoder::new()),
            Self::Base64 => Decoder::Base64(Base64Decoder::new()),
            Self::Cesu8 => Decoder::Cesu8(Cesu8Decoder::new(options)),
            Self::Utf32 { endian } => Decoder::Utf32(Utf32Decoder::new(*endian, options)),
            Self::Utf32Auto => Decoder::Utf32Auto(Utf32AutoDecoder::new(options)),
        }
    }
}
