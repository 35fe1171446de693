//! UTF-32 in both byte orders, plus the auto-detecting variants.
//!
//! The encoder assembles UTF-16 surrogate pairs into 32-bit code points; the
//! decoder does the reverse with an overflow buffer for code points split
//! across chunk boundaries. The auto decoder buffers the head of the stream
//! and picks an endianness from a byte-order mark or a content heuristic
//! before delegating.

use alloc::vec::Vec;

use crate::{
    options::{DecoderOptions, EncoderOptions, Endianness},
    wide,
};

/// Byte-order mark for little-endian UTF-32.
pub const UTF32LE_BOM: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];
/// Byte-order mark for big-endian UTF-32.
pub const UTF32BE_BOM: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];

/// UTF-32 encoder session for a fixed endianness.
///
/// A high surrogate at the end of a chunk is held back until the next chunk
/// shows whether it pairs; lone surrogates are emitted as 32-bit code points
/// unchanged so that ill-formed UTF-16 (as produced by some filesystems)
/// survives a round trip.
#[derive(Debug)]
pub struct Utf32Encoder {
    endian: Endianness,
    /// Held-back high surrogate; zero means none.
    pending_high: u16,
}

impl Utf32Encoder {
    #[must_use]
    pub fn new(endian: Endianness) -> Self {
        Self {
            endian,
            pending_high: 0,
        }
    }

    #[must_use]
    pub fn endian(&self) -> Endianness {
        self.endian
    }

    /// Number of bytes `text` encodes to: four per code unit, with a
    /// surrogate pair contributing four in total. A high surrogate held over
    /// from an earlier chunk is not counted.
    #[must_use]
    pub fn byte_len(&self, text: &[u16]) -> usize {
        let mut len = 0;
        let mut iter = text.iter().copied().peekable();
        while let Some(unit) = iter.next() {
            len += 4;
            if wide::is_high_surrogate(unit)
                && iter.peek().copied().is_some_and(wide::is_low_surrogate)
            {
                iter.next();
            }
        }
        len
    }

    fn push_code_point(&self, out: &mut Vec<u8>, code_point: u32) {
        match self.endian {
            Endianness::Little => out.extend_from_slice(&code_point.to_le_bytes()),
            Endianness::Big => out.extend_from_slice(&code_point.to_be_bytes()),
        }
    }

    /// Encodes a chunk of code units as 32-bit code points.
    pub fn feed(&mut self, text: &[u16]) -> Vec<u8> {
        let mut out = Vec::with_capacity(text.len() * 4 + 4);
        for &unit in text {
            if self.pending_high != 0 {
                let high = self.pending_high;
                self.pending_high = 0;
                if wide::is_low_surrogate(unit) {
                    self.push_code_point(&mut out, wide::combine_surrogates(high, unit));
                    continue;
                }
                // The pair never materialized; the held unit goes out as-is.
                self.push_code_point(&mut out, u32::from(high));
            }
            if wide::is_high_surrogate(unit) {
                self.pending_high = unit;
            } else {
                self.push_code_point(&mut out, u32::from(unit));
            }
        }
        out
    }

    /// Ends the stream, flushing a held-back high surrogate as a lone code
    /// point.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        let mut out = Vec::new();
        if self.pending_high != 0 {
            self.push_code_point(&mut out, u32::from(self.pending_high));
        }
        out
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending_high != 0
    }
}

/// UTF-32 decoder session for a fixed endianness.
#[derive(Debug)]
pub struct Utf32Decoder {
    endian: Endianness,
    /// Bytes of a code point split across chunk boundaries.
    overflow: [u8; 4],
    overflow_len: u8,
    replacement: char,
}

impl Utf32Decoder {
    #[must_use]
    pub fn new(endian: Endianness, options: DecoderOptions) -> Self {
        Self {
            endian,
            overflow: [0; 4],
            overflow_len: 0,
            replacement: options.replacement,
        }
    }

    /// Interprets one 4-byte group. Read as signed so that a set high bit in
    /// the most significant position lands below zero and a single range
    /// comparison rejects it along with everything past U+10FFFF.
    fn emit(&self, group: [u8; 4], out: &mut Vec<u16>) {
        let code_point = match self.endian {
            Endianness::Little => i32::from_le_bytes(group),
            Endianness::Big => i32::from_be_bytes(group),
        };
        if code_point < 0 || code_point > 0x10FFFF {
            wide::push_char(out, self.replacement);
        } else {
            wide::push_code_point(out, code_point as u32);
        }
    }

    /// Decodes a chunk of bytes into UTF-16 code units. Any trailing 0..3
    /// bytes wait in the overflow buffer for the next chunk.
    pub fn feed(&mut self, src: &[u8]) -> Vec<u16> {
        let mut out = Vec::with_capacity(src.len() / 4 * 2 + 2);
        let mut i = 0;
        if self.overflow_len > 0 {
            while self.overflow_len < 4 && i < src.len() {
                self.overflow[usize::from(self.overflow_len)] = src[i];
                self.overflow_len += 1;
                i += 1;
            }
            if self.overflow_len == 4 {
                self.overflow_len = 0;
                self.emit(self.overflow, &mut out);
            }
        }
        let mut groups = src[i..].chunks_exact(4);
        for group in groups.by_ref() {
            self.emit([group[0], group[1], group[2], group[3]], &mut out);
        }
        for &byte in groups.remainder() {
            self.overflow[usize::from(self.overflow_len)] = byte;
            self.overflow_len += 1;
        }
        out
    }

    /// Ends the stream. A trailing partial code point is dropped, not
    /// replaced.
    #[must_use]
    pub fn finish(self) -> Vec<u16> {
        Vec::new()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.overflow_len > 0
    }
}

/// UTF-32 encoder that picks an endianness up front and reports the matching
/// byte-order mark for the external BOM wrapper to prepend.
#[derive(Debug)]
pub struct Utf32AutoEncoder {
    inner: Utf32Encoder,
    add_bom: bool,
}

impl Utf32AutoEncoder {
    #[must_use]
    pub fn new(options: EncoderOptions) -> Self {
        Self {
            inner: Utf32Encoder::new(options.default_endian),
            add_bom: options.add_bom,
        }
    }

    /// The byte-order mark the surrounding wrapper should prepend, unless
    /// the session opted out.
    #[must_use]
    pub fn bom(&self) -> Option<&'static [u8]> {
        let bom: &'static [u8; 4] = match self.inner.endian() {
            Endianness::Little => &UTF32LE_BOM,
            Endianness::Big => &UTF32BE_BOM,
        };
        self.add_bom.then_some(bom)
    }

    #[must_use]
    pub fn byte_len(&self, text: &[u16]) -> usize {
        self.inner.byte_len(text)
    }

    pub fn feed(&mut self, text: &[u16]) -> Vec<u8> {
        self.inner.feed(text)
    }

    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.inner.finish()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.inner.has_pending()
    }
}

/// How many bytes the auto decoder buffers before running detection
/// mid-stream. `finish` detects on whatever arrived.
const DETECT_MIN_BYTES: usize = 32;

/// How many 4-byte groups the heuristic scores at most.
const DETECT_MAX_GROUPS: usize = 100;

/// Picks an endianness for a UTF-32 stream head.
///
/// A byte-order mark in the first group decides immediately. Otherwise each
/// group votes: a group that can only be a valid code point in one byte
/// order, or that is a BMP character in one byte order, counts for that
/// order. Ties fall back to `default`.
pub(crate) fn detect_endianness(data: &[u8], default: Endianness) -> Endianness {
    if data.len() >= 4 {
        let head = [data[0], data[1], data[2], data[3]];
        if head == UTF32LE_BOM {
            return Endianness::Little;
        }
        if head == UTF32BE_BOM {
            return Endianness::Big;
        }
    }

    let mut invalid_le: i32 = 0;
    let mut invalid_be: i32 = 0;
    let mut bmp_le: i32 = 0;
    let mut bmp_be: i32 = 0;
    for group in data.chunks_exact(4).take(DETECT_MAX_GROUPS) {
        let (b0, b1, b2, b3) = (group[0], group[1], group[2], group[3]);
        if b0 != 0 || b1 > 0x10 {
            // Read big-endian this would sit above U+10FFFF.
            invalid_be += 1;
        }
        if b3 != 0 || b2 > 0x10 {
            invalid_le += 1;
        }
        if b0 == 0 && b1 == 0 && (b2 | b3) != 0 {
            bmp_be += 1;
        }
        if (b0 | b1) != 0 && b2 == 0 && b3 == 0 {
            bmp_le += 1;
        }
    }

    let score_le = bmp_le - invalid_le;
    let score_be = bmp_be - invalid_be;
    if score_le > score_be {
        Endianness::Little
    } else if score_be > score_le {
        Endianness::Big
    } else {
        default
    }
}

/// UTF-32 decoder that buffers the head of the stream until it can choose an
/// endianness, then delegates to the concrete decoder.
#[derive(Debug)]
pub struct Utf32AutoDecoder {
    /// Input accumulated before an endianness was chosen.
    buffered: Vec<u8>,
    inner: Option<Utf32Decoder>,
    options: DecoderOptions,
}

impl Utf32AutoDecoder {
    #[must_use]
    pub fn new(options: DecoderOptions) -> Self {
        Self {
            buffered: Vec::new(),
            inner: None,
            options,
        }
    }

    /// Runs detection on the accumulated head and replays it through the
    /// freshly chosen delegate.
    fn choose_and_replay(&mut self) -> Vec<u16> {
        let pending = core::mem::take(&mut self.buffered);
        let endian = detect_endianness(&pending, self.options.default_endian);
        let inner = self.inner.insert(Utf32Decoder::new(endian, self.options));
        inner.feed(&pending)
    }

    /// Decodes a chunk of bytes. Until enough input has arrived for the
    /// endianness heuristic, output is withheld; the first chunk past the
    /// threshold replays the whole accumulation.
    pub fn feed(&mut self, src: &[u8]) -> Vec<u16> {
        if let Some(inner) = &mut self.inner {
            return inner.feed(src);
        }
        self.buffered.extend_from_slice(src);
        if self.buffered.len() < DETECT_MIN_BYTES {
            return Vec::new();
        }
        self.choose_and_replay()
    }

    /// Ends the stream. If no endianness was chosen yet, detection runs on
    /// whatever is buffered, possibly nothing at all, in which case the
    /// default wins and there is nothing to replay.
    #[must_use]
    pub fn finish(mut self) -> Vec<u16> {
        let mut out = Vec::new();
        if self.inner.is_none() {
            out = self.choose_and_replay();
        }
        if let Some(inner) = self.inner {
            out.extend(inner.finish());
        }
        out
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        match &self.inner {
            Some(inner) => inner.has_pending(),
            None => !self.buffered.is_empty(),
        }
    }
}
