#![no_main]

use libfuzzer_sys::fuzz_target;
use minsnap::{decode, encode, encode_better};

fuzz_target!(|data: &[u8]| {
    // Skip very large inputs to avoid OOM
    if data.len() > 1_000_000 {
        return;
    }

    let compressed = encode(data).expect("encode failed");
    let decompressed = decode(&compressed).expect("decode of own output failed");
    assert_eq!(data, &decompressed[..], "roundtrip failed");

    let compressed = encode_better(data).expect("encode_better failed");
    let decompressed = decode(&compressed).expect("decode of better output failed");
    assert_eq!(data, &decompressed[..], "better roundtrip failed");
});
