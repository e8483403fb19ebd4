//! ULEB128 decoder fuzzer.
//!
//! Tests that arbitrary bytes either decode to a value that re-encodes
//! consistently or are rejected as truncated, without panicking.

use honggfuzz::fuzz;
use leb128_rs::testing::test_unsigned_decode;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            test_unsigned_decode(data);
        });
    }
}
