//! Streaming codec sessions for the UTF-32 / CESU-8 family of text
//! encodings.
//!
//! Each [`Codec`] descriptor is a factory for single-use [`Encoder`] and
//! [`Decoder`] sessions. A session accepts input in arbitrary chunks,
//! carries partial-character state across chunk boundaries, substitutes a
//! configurable replacement character for malformed input, and flushes its
//! residue on `finish`. Text travels as raw UTF-16 code units (`&[u16]` /
//! `Vec<u16>`) because several of these encodings deliberately preserve lone
//! surrogates; the [`wide`] module adapts to and from `str`.
//!
//! # Examples
//!
//! ```rust
//! use utfmodem::{Codec, DecoderOptions, wide};
//!
//! let codec = Codec::for_label("utf-32").unwrap();
//! let mut decoder = codec.decoder(DecoderOptions::default());
//! let mut units = decoder.feed(b"H\0\0\0i\0\0\0");
//! units.extend(decoder.finish());
//! assert_eq!(wide::to_string_lossy(&units), "Hi");
//! ```

#![no_std]
#![allow(missing_docs)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod base64;
mod cesu8;
mod chunk_utils;
mod codec;
mod decoder;
mod encoder;
mod error;
mod options;
mod passthrough;
mod utf32;
pub mod wide;

pub use base64::{Base64Decoder, Base64Encoder};
pub use cesu8::{Cesu8Decoder, Cesu8Encoder};
pub use chunk_utils::{produce_byte_chunks, produce_chunks};
pub use codec::Codec;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::UnknownEncoding;
pub use options::{DecoderOptions, EncoderOptions, Endianness};
pub use passthrough::{
    BinaryDecoder, BinaryEncoder, HexDecoder, HexEncoder, Utf8Decoder, Utf8Encoder,
};
pub use utf32::{
    UTF32BE_BOM, UTF32LE_BOM, Utf32AutoDecoder, Utf32AutoEncoder, Utf32Decoder, Utf32Encoder,
};

#[cfg(test)]
mod tests;
