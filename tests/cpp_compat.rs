// Copyright 2025 Karpeles Lab Inc.
// Tests against byte vectors from the C++ reference implementation

use minsnap::{decode, decode_len, encode, is_valid};

#[test]
fn test_decode_reference_literal_block() {
    // "Wikipedia is a free, web-based, collaborative, multilingual
    // encyclopedia project." as emitted by the reference encoder: a
    // varint length of 81 and a single long-form literal.
    let text: &[u8] = b"Wikipedia is a free, web-based, collaborative, multilingual encyclopedia project.";
    assert_eq!(text.len(), 81);

    let mut compressed = vec![0x51, 0xf0, 0x50];
    compressed.extend_from_slice(text);

    assert!(is_valid(&compressed));
    assert_eq!(decode(&compressed).unwrap(), text);
}

#[test]
fn test_decode_short_literal_block() {
    // "Hello, World!": varint 13, one short-form literal.
    let data = vec![
        0x0d, // varint: 13 bytes uncompressed
        0x30, // literal, 13 bytes (0x0c << 2 | 0x00)
        b'H', b'e', b'l', b'l', b'o', b',', b' ', b'W', b'o', b'r', b'l', b'd', b'!',
    ];

    assert_eq!(decode(&data).unwrap(), b"Hello, World!");
}

#[test]
fn test_decode_overlapping_copy2() {
    // Literal "abcd" followed by a 5-byte copy at offset 4: the copy
    // overlaps its own output and extends the pattern.
    let data = vec![
        0x09, // varint: 9 bytes uncompressed
        0x0c, // literal, 4 bytes ((4-1) << 2 | TAG_LITERAL)
        b'a', b'b', b'c', b'd',
        0x12, 0x04, 0x00, // copy2: length=5 ((5-1) << 2 | TAG_COPY2), offset=4
    ];

    assert_eq!(decode(&data).unwrap(), b"abcdabcda");
}

#[test]
fn test_decode_copy1_run() {
    // Literal "aaaa" followed by copy1 length 4, offset 4.
    let data = vec![0x08, 0x0c, b'a', b'a', b'a', b'a', 0x01, 0x04];
    assert_eq!(decode(&data).unwrap(), b"aaaaaaaa");
}

#[test]
fn test_decode_copy1_offset_high_bits() {
    // Copy1 keeps offset bits 8..10 in the tag's top three bits.
    // 2100 'a's, then a 4-byte copy from offset 1500 = 0b101_11011100:
    // tag = (5 << 5) | (0 << 2) | 0x01 = 0xa1, follow-on byte 0xdc.
    let mut data = vec![0xb8, 0x10]; // varint: 2104
    data.push(0xf4); // literal, long form, two length bytes
    data.extend_from_slice(&2099u16.to_le_bytes());
    data.extend(std::iter::repeat(b'a').take(2100));
    data.extend_from_slice(&[0xa1, 0xdc]);

    let decoded = decode(&data).unwrap();
    assert_eq!(decoded.len(), 2104);
    assert!(decoded.iter().all(|&b| b == b'a'));
}

#[test]
fn test_decode_copy4_reaches_past_64k() {
    // A 65536-byte literal followed by a copy whose offset only fits the
    // four-byte form.
    let mut data = Vec::new();
    data.extend_from_slice(&[0x84, 0x80, 0x04]); // varint: 65540
    data.extend_from_slice(&[0xf4, 0xff, 0xff]); // literal, 65536 bytes
    data.extend(std::iter::repeat(b'x').take(65536));
    data.extend_from_slice(&[0x0f, 0x00, 0x00, 0x01, 0x00]); // copy4: len 4, offset 65536

    let decoded = decode(&data).unwrap();
    assert_eq!(decoded.len(), 65540);
    assert!(decoded.iter().all(|&b| b == b'x'));
}

#[test]
fn test_encode_prefix_matches_reference() {
    // The reference encoder's exact bytes for the two degenerate blocks.
    assert_eq!(encode(b"").unwrap(), vec![0x00]);
    assert_eq!(encode(b"A").unwrap(), vec![0x01, 0x00, 0x41]);
}

#[test]
fn test_length_prefix_is_plain_varint() {
    for (input_len, prefix) in [
        (0usize, vec![0x00u8]),
        (1, vec![0x01]),
        (127, vec![0x7f]),
        (128, vec![0x80, 0x01]),
        (65536, vec![0x80, 0x80, 0x04]),
    ] {
        let data = vec![b'v'; input_len];
        let compressed = encode(&data).unwrap();
        assert_eq!(&compressed[..prefix.len()], &prefix[..]);
        assert_eq!(decode_len(&compressed).unwrap(), (input_len, prefix.len()));
    }
}
