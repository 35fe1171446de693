//! Stateless adapters over the host byte/string primitives: UTF-8, binary
//! (ISO-8859-1 low byte) and hex.
//!
//! These sessions never retain state between chunks; `has_pending` is always
//! false and `finish` emits nothing.

use alloc::{string::String, vec::Vec};

use crate::wide;

/// UTF-8 encoder session.
///
/// Unpaired surrogates cannot be expressed in UTF-8 and encode as the
/// replacement character. A surrogate pair split across two chunks counts as
/// two unpaired halves; feed whole pairs within one chunk.
#[derive(Debug, Default)]
pub struct Utf8Encoder;

impl Utf8Encoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Exact number of bytes [`feed`](Self::feed) will produce for `text`.
    #[must_use]
    pub fn byte_len(&self, text: &[u16]) -> usize {
        let mut len = 0;
        let mut iter = text.iter().copied().peekable();
        while let Some(unit) = iter.next() {
            len += match unit {
                0..=0x7F => 1,
                0x80..=0x7FF => 2,
                unit if wide::is_high_surrogate(unit)
                    && iter.peek().copied().is_some_and(wide::is_low_surrogate) =>
                {
                    iter.next();
                    4
                }
                // Lone surrogates become U+FFFD, itself three bytes.
                _ => 3,
            };
        }
        len
    }

    pub fn feed(&mut self, text: &[u16]) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.byte_len(text));
        let mut buf = [0u8; 4];
        for item in char::decode_utf16(text.iter().copied()) {
            let ch = item.unwrap_or(char::REPLACEMENT_CHARACTER);
            out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
        }
        out
    }

    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        Vec::new()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        false
    }
}

/// UTF-8 decoder session: lossy conversion per chunk.
#[derive(Debug, Default)]
pub struct Utf8Decoder;

impl Utf8Decoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn feed(&mut self, src: &[u8]) -> Vec<u16> {
        String::from_utf8_lossy(src).encode_utf16().collect()
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

/// Binary encoder session: the low byte of every code unit.
#[derive(Debug, Default)]
pub struct BinaryEncoder;

impl BinaryEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn byte_len(&self, text: &[u16]) -> usize {
        text.len()
    }

    pub fn feed(&mut self, text: &[u16]) -> Vec<u8> {
        text.iter().map(|&unit| unit as u8).collect()
    }

    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        Vec::new()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        false
    }
}

/// Binary decoder session: each byte as the matching code unit, ISO-8859-1
/// style.
#[derive(Debug, Default)]
pub struct BinaryDecoder;

impl BinaryDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn feed(&mut self, src: &[u8]) -> Vec<u16> {
        src.iter().map(|&byte| u16::from(byte)).collect()
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

/// Hex encoder session: ASCII hex text in, raw bytes out.
///
/// Parsing stops at the first code unit that is not a hex digit; a trailing
/// odd digit is dropped.
#[derive(Debug, Default)]
pub struct HexEncoder;

impl HexEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn byte_len(&self, text: &[u16]) -> usize {
        text.len() / 2
    }

    pub fn feed(&mut self, text: &[u16]) -> Vec<u8> {
        let mut out = Vec::with_capacity(text.len() / 2);
        let mut high: Option<u8> = None;
        for &unit in text {
            let digit = char::from_u32(u32::from(unit)).and_then(|ch| ch.to_digit(16));
            let Some(digit) = digit else { break };
            match high.take() {
                None => high = Some(digit as u8),
                Some(h) => out.push(h << 4 | digit as u8),
            }
        }
        out
    }

    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        Vec::new()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        false
    }
}

/// Hex decoder session: raw bytes in, lowercase hex text out.
#[derive(Debug, Default)]
pub struct HexDecoder;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

impl HexDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn feed(&mut self, src: &[u8]) -> Vec<u16> {
        let mut out = Vec::with_capacity(src.len() * 2);
        for &byte in src {
            out.push(u16::from(HEX_DIGITS[usize::from(byte >> 4)]));
            out.push(u16::from(HEX_DIGITS[usize::from(byte & 0x0F)]));
        }
        out
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
