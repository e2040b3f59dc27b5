#![no_main]

use libfuzzer_sys::fuzz_target;
use minsnap::{decode, decode_len, is_valid};

fuzz_target!(|data: &[u8]| {
    // A copy-2 tag yields at most 64 bytes for 3 of input, so anything
    // declaring more than 32x the input length cannot be satisfied. The
    // validator must reject it without us materializing the buffer.
    if let Ok((dlen, _)) = decode_len(data) {
        if dlen > data.len().saturating_mul(32) + 1024 {
            assert!(!is_valid(data));
            return;
        }
    }

    // Arbitrary bytes must either decode or fail cleanly, and the
    // validator must agree with the decoder either way.
    let result = decode(data);
    assert_eq!(is_valid(data), result.is_ok());
});
