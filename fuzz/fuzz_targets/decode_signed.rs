//! SLEB128 decoder fuzzer.
//!
//! Same checks as the unsigned target, with minimality judged by the signed
//! termination rule.

use honggfuzz::fuzz;
use leb128_rs::testing::test_signed_decode;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            test_signed_decode(data);
        });
    }
}
