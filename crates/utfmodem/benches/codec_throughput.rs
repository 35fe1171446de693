//! Benchmark – streaming codec sessions under varying chunk counts.
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use utfmodem::{
    Codec, DecoderOptions, EncoderOptions, produce_byte_chunks, produce_chunks, wide,
};

/// Deterministic mixed-plane text whose CESU-8 rendering is at least
/// `target_len` bytes: ASCII, two-byte, three-byte and surrogate-pair
/// content in rotation, so no single fast path dominates.
fn make_text_payload(target_len: usize) -> String {
    let cycle = "ab\u{E9}\u{65E5}\u{1F4A9}";
    let mut s = String::new();
    while s.len() < target_len {
        s.push_str(cycle);
    }
    s
}

/// Run a decoder over `payload` split into `parts` chunks, returning the
/// number of code units produced so that Criterion can black-box the work.
fn run_decoder(codec: Codec, payload: &[u8], parts: usize) -> usize {
    let mut decoder = codec.decoder(DecoderOptions::default());
    let mut produced = 0usize;
    for chunk in produce_byte_chunks(payload, parts) {
        produced += decoder.feed(chunk).len();
    }
    produced + decoder.finish().len()
}

fn bench_cesu8_decode(c: &mut Criterion) {
    let text = make_text_payload(64 * 1024);
    let mut encoder = Codec::Cesu8.encoder(EncoderOptions::default());
    let payload = encoder.feed_str(&text);

    let mut group = c.benchmark_group("cesu8_decode_split");
    for &parts in &[1usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(parts), &parts, |b, &parts| {
            b.iter(|| {
                let count = run_decoder(Codec::Cesu8, black_box(&payload), parts);
                black_box(count);
            });
        });
    }
    group.finish();
}

fn bench_utf32_decode(c: &mut Criterion) {
    let text = make_text_payload(64 * 1024);
    let codec = Codec::for_label("utf-32le").expect("label resolves");
    let mut encoder = codec.encoder(EncoderOptions::default());
    let payload = encoder.feed_str(&text);

    let mut group = c.benchmark_group("utf32le_decode_split");
    for &parts in &[1usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(parts), &parts, |b, &parts| {
            b.iter(|| {
                let count = run_decoder(codec, black_box(&payload), parts);
                black_box(count);
            });
        });
    }
    group.finish();
}

fn bench_base64_stream(c: &mut Criterion) {
    // Base64 text rendering of pseudo-random bytes.
    let raw: Vec<u8> = (0u32..48 * 1024)
        .map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8)
        .collect();
    let mut decoder = Codec::Base64.decoder(DecoderOptions::default());
    let text = wide::to_string_lossy(&decoder.feed(&raw));

    let mut group = c.benchmark_group("base64_stream_split");
    for &parts in &[1usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(parts), &parts, |b, &parts| {
            b.iter(|| {
                let mut encoder = Codec::Base64.encoder(EncoderOptions::default());
                let mut produced = 0usize;
                for chunk in produce_chunks(black_box(&text), parts) {
                    produced += encoder.feed_str(chunk).len();
                }
                produced += encoder.finish().len();
                black_box(produced);
            });
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! {
    name = benches;
    config = criterion();
    targets = bench_cesu8_decode, bench_utf32_decode, bench_base64_stream
}
criterion_main!(benches);
