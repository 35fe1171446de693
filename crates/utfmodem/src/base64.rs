//! Base64 sessions.
//!
//! In this system's terminology base64 *encoding* turns base64 text into raw
//! bytes (text in, bytes out), so the streaming session lives on the encoder
//! side: base64 must be decoded in 4-character quads, and a chunk boundary
//! can fall anywhere inside one.

use alloc::vec::Vec;

use ::base64::{
    Engine as _,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig, general_purpose::STANDARD},
};

/// Unpadded engine that, like the host byte/string primitive, accepts short
/// tails with nonzero trailing bits.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

fn is_alphabet(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'+' || byte == b'/'
}

/// Decodes a whole number of quads, or a 2..3-character tail. Input is
/// pre-filtered to the standard alphabet, so the engine cannot reject it.
fn decode_quads(quads: &[u8]) -> Vec<u8> {
    LENIENT.decode(quads).unwrap_or_default()
}

/// Streaming base64 encoder session: base64 text in, raw bytes out.
///
/// Between chunks it holds the 0..3 characters that do not yet form a full
/// quad. Characters outside the base64 alphabet (padding, whitespace,
/// anything non-ASCII) are skipped, matching the tolerant host decoder.
#[derive(Debug, Default)]
pub struct Base64Encoder {
    /// Alphabet characters carried over until a quad completes.
    pending: Vec<u8>,
}

impl Base64Encoder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Upper-bound estimate of the bytes still to come out of the pending
    /// prefix plus `text`: `floor(3n/4)` over the non-padding characters.
    /// Suitable for buffer pre-sizing, never below the actual output length.
    #[must_use]
    pub fn byte_len(&self, text: &[u16]) -> usize {
        let units = text.iter().filter(|&&unit| unit != u16::from(b'=')).count();
        (self.pending.len() + units) * 3 / 4
    }

    pub fn feed(&mut self, text: &[u16]) -> Vec<u8> {
        let mut quads = core::mem::take(&mut self.pending);
        quads.reserve(text.len());
        quads.extend(
            text.iter()
                .filter_map(|&unit| u8::try_from(unit).ok())
                .filter(|&byte| is_alphabet(byte)),
        );
        let rem = quads.len() % 4;
        self.pending = quads.split_off(quads.len() - rem);
        decode_quads(&quads)
    }

    /// Ends the stream, draining the pending prefix. A 2- or 3-character
    /// tail still yields its bytes; a single character carries fewer than
    /// eight bits and is dropped.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        if self.pending.len() < 2 {
            return Vec::new();
        }
        decode_quads(&self.pending)
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

/// Base64 decoder session: raw bytes in, padded base64 text out.
///
/// A stateless adapter; chunks are rendered independently, so feed input in
/// multiples of three bytes when the concatenation must equal a single-shot
/// rendering.
#[derive(Debug, Default)]
pub struct Base64Decoder;

impl Base64Decoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn feed(&mut self, src: &[u8]) -> Vec<u16> {
        STANDARD.encode(src).bytes().map(u16::from).collect()
    }

    #[must_use]
    pub fn finish(self) -> Vec<u16> {
        Vec::new()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        false
    }
}
