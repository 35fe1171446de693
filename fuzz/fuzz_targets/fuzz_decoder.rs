#![no_main]
use libfuzzer_sys::fuzz_target;
use utfmodem::{Codec, DecoderOptions, Endianness};

const HEADER: usize = 5; // 1 codec selector + 4-byte split seed

fn codec_for(selector: u8) -> Codec {
    match selector % 7 {
        0 => Codec::Utf8,
        1 => Codec::Binary,
        2 => Codec::Hex,
        3 => Codec::Base64,
        4 => Codec::Cesu8,
        5 => Codec::Utf32 {
            endian: Endianness::Little,
        },
        _ => Codec::Utf32Auto,
    }
}

/// Decoders that must produce identical output for every partition of the
/// input: the byte-stateful ones plus the byte-wise maps. The per-chunk
/// renderers (utf8, base64) and the detection-sensitive auto decoder only
/// have to survive.
fn chunk_invariant(codec: Codec) -> bool {
    matches!(
        codec,
        Codec::Cesu8 | Codec::Utf32 { .. } | Codec::Binary | Codec::Hex
    )
}

/// Split `payload` into chunks using a deterministic seed. Each chunk is at
/// least one byte.
fn split_into_chunks(payload: &[u8], split_seed: usize) -> Vec<&[u8]> {
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < payload.len() {
        let remaining = payload.len() - start;
        let size = (split_seed % remaining) + 1;
        chunks.push(&payload[start..start + size]);
        start += size;
    }
    chunks
}

fn decode(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let codec = codec_for(data[0]);
    let split_seed = u32::from_le_bytes([data[1], data[2], data[3], data[4]]) as usize;
    let payload = &data[HEADER..];

    let mut single = codec.decoder(DecoderOptions::default());
    let mut expected = single.feed(payload);
    expected.extend(single.finish());

    let mut chunked = codec.decoder(DecoderOptions::default());
    let mut actual = Vec::new();
    for chunk in split_into_chunks(payload, split_seed) {
        actual.extend(chunked.feed(chunk));
    }
    actual.extend(chunked.finish());

    if chunk_invariant(codec) {
        assert_eq!(actual, expected);
    }
}

fuzz_target!(|data: &[u8]| decode(data));
