use alloc::vec;

use crate::{
    base64::Base64Decoder,
    passthrough::{BinaryDecoder, BinaryEncoder, HexDecoder, HexEncoder, Utf8Decoder, Utf8Encoder},
    wide,
};

#[test]
fn utf8_round_trips_well_formed_text() {
    let text = "caf\u{E9} \u{65E5}\u{672C} \u{1F4A9}";
    let mut encoder = Utf8Encoder::new();
    let bytes = encoder.feed(&wide::units_of(text));
    assert_eq!(bytes, text.as_bytes());

    let mut decoder = Utf8Decoder::new();
    assert_eq!(decoder.feed(&bytes), wide::units_of(text));
}

#[test]
fn utf8_byte_len_is_exact() {
    let encoder = Utf8Encoder::new();
    let cases: &[&str] = &["", "abc", "caf\u{E9}", "\u{65E5}", "\u{1F4A9}x"];
    for case in cases {
        assert_eq!(encoder.byte_len(&wide::units_of(case)), case.len(), "{case:?}");
    }
    // a lone surrogate costs the three bytes of U+FFFD
    assert_eq!(encoder.byte_len(&[0xD800]), 3);
}

#[test]
fn utf8_replaces_lone_surrogates() {
    let mut encoder = Utf8Encoder::new();
    assert_eq!(encoder.feed(&[0x41, 0xD800, 0x42]), "A\u{FFFD}B".as_bytes());
}

#[test]
fn utf8_decoder_is_lossy_on_malformed_bytes() {
    let mut decoder = Utf8Decoder::new();
    assert_eq!(
        decoder.feed(&[0x41, 0xFF, 0x42]),
        wide::units_of("A\u{FFFD}B")
    );
}

#[test]
fn native_utf8_rejects_cesu8_surrogate_sequences() {
    // The reason CESU-8 carries its own decoder: the standard machinery
    // refuses surrogate byte sequences outright.
    assert!(core::str::from_utf8(&[0xED, 0xA0, 0xBD, 0xED, 0xB2, 0xA9]).is_err());
}

#[test]
fn binary_uses_the_low_byte() {
    let mut encoder = BinaryEncoder::new();
    assert_eq!(encoder.feed(&[0x41, 0xFF, 0x1234]), [0x41, 0xFF, 0x34]);
    assert_eq!(encoder.byte_len(&[0x41, 0xFF, 0x1234]), 3);

    let mut decoder = BinaryDecoder::new();
    assert_eq!(decoder.feed(&[0x41, 0xFF]), vec![0x41, 0xFF]);
}

#[test]
fn hex_encoder_parses_digit_pairs() {
    let mut encoder = HexEncoder::new();
    assert_eq!(encoder.feed(&wide::units_of("48656c6C6f")), b"Hello");
    assert_eq!(encoder.byte_len(&wide::units_of("48656c6c6f")), 5);
}

#[test]
fn hex_encoder_stops_at_the_first_non_digit() {
    let mut encoder = HexEncoder::new();
    assert_eq!(encoder.feed(&wide::units_of("4865zz6c")), b"He");
}

#[test]
fn hex_encoder_drops_a_trailing_odd_digit() {
    let mut encoder = HexEncoder::new();
    assert_eq!(encoder.feed(&wide::units_of("486")), b"H");
    assert!(!encoder.has_pending());
}

#[test]
fn hex_decoder_renders_lowercase_pairs() {
    let mut decoder = HexDecoder::new();
    let units = decoder.feed(b"\x00\xAB\xFF");
    assert_eq!(wide::to_string_lossy(&units), "00abff");
}

#[test]
fn base64_decoder_renders_padded_text() {
    let mut decoder = Base64Decoder::new();
    let units = decoder.feed(b"Ma");
    assert_eq!(wide::to_string_lossy(&units), "TWE=");
    let mut decoder = Base64Decoder::new();
    let units = decoder.feed(b"Hello, world!");
    assert_eq!(wide::to_string_lossy(&units), "SGVsbG8sIHdvcmxkIQ==");
}

#[test]
fn stateless_sessions_never_report_pending_input() {
    assert!(!Utf8Encoder::new().has_pending());
    assert!(!Utf8Decoder::new().has_pending());
    assert!(!BinaryEncoder::new().has_pending());
    assert!(!BinaryDecoder::new().has_pending());
    assert!(!HexEncoder::new().has_pending());
    assert!(!HexDecoder::new().has_pending());
    assert!(!Base64Decoder::new().has_pending());
}

#[test]
fn finish_is_a_no_op_for_stateless_sessions() {
    assert!(Utf8Encoder::new().finish().is_empty());
    assert!(Utf8Decoder::new().finish().is_empty());
    assert!(BinaryEncoder::new().finish().is_empty());
    assert!(HexDecoder::new().finish().is_empty());
}

#[test]
fn utf8_decoder_strays_are_independent_per_chunk() {
    // The pass-through decoder converts chunk by chunk; splitting inside a
    // multi-byte sequence yields replacements rather than state.
    let mut decoder = Utf8Decoder::new();
    let mut units = decoder.feed(&[0xE6]);
    units.extend(decoder.feed(&[0x97, 0xA5]));
    assert_ne!(units, wide::units_of("\u{65E5}"));
}
