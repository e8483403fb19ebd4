//! Value round-trip fuzzer.
//!
//! Builds an arbitrary-precision integer from the input and checks
//! encode → decode for both variants, plus the encoded-length helpers.

use honggfuzz::fuzz;
use leb128_rs::testing::test_value_roundtrip;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            test_value_roundtrip(data);
        });
    }
}
