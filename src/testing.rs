//! Testing utilities shared by the integration tests and the fuzz targets.
//!
//! This module is gated behind the `testing` feature.
//!
//! # Provided helpers
//!
//! - [`test_unsigned_decode`]: decode arbitrary bytes as ULEB128 and check the framing invariants
//! - [`test_signed_decode`]: decode arbitrary bytes as SLEB128 and check the framing invariants
//! - [`test_value_roundtrip`]: build an arbitrary integer and round-trip it through both variants
//! - [`byte_diff_report`]: pretty-print a byte-level diff between two encodings
//! - [`assert_encoding`]: assert byte-for-byte equality of an encoding

use core::fmt::Write;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use arbitrary::{Arbitrary, Unstructured};
use num_bigint::{BigInt, BigUint};

use crate::encoding::constants::{CONTINUATION, PAYLOAD_MASK, SIGN_BIT};
use crate::encoding::{
    decode_signed, decode_signed_slice, decode_unsigned, decode_unsigned_slice, encode_signed,
    encode_signed_into, encode_unsigned, encode_unsigned_into, signed_len, unsigned_len,
};
use crate::errors::Error;
use crate::sink::ByteCount;

/// Pretty-print a byte-level diff between two encodings.
///
/// Returns a human-readable string describing where they differ.
#[must_use]
pub fn byte_diff_report(label: &str, expected: &[u8], actual: &[u8]) -> String {
    if expected == actual {
        return format!("{label}: MATCH ({} bytes)", expected.len());
    }

    let mut report = format!(
        "{label}: MISMATCH\n  expected len: {}\n  actual len:   {}\n",
        expected.len(),
        actual.len()
    );

    let min_len = expected.len().min(actual.len());
    let first_diff = (0..min_len).find(|&i| expected[i] != actual[i]);

    if let Some(pos) = first_diff {
        let _ = writeln!(
            report,
            "  first diff at byte {pos}: expected 0x{:02x}, actual 0x{:02x}",
            expected[pos], actual[pos]
        );
    } else {
        report.push_str("  common prefix matches, difference is in length only\n");
    }

    let _ = writeln!(report, "  expected: {expected:02x?}");
    let _ = writeln!(report, "  actual:   {actual:02x?}");

    report
}

/// Assert that `actual` is byte-for-byte equal to `expected`.
///
/// # Panics
///
/// Panics with a detailed diff report if the bytes don't match.
pub fn assert_encoding(label: &str, expected: &[u8], actual: &[u8]) {
    assert!(expected == actual, "{}", byte_diff_report(label, expected, actual));
}

/// Check that a successful decode consumed exactly one framed value.
fn check_terminated(data: &[u8], len: usize) {
    assert!((1..=data.len()).contains(&len), "Consumed {len} of {} bytes", data.len());
    assert!(
        data[..len - 1].iter().all(|byte| byte & CONTINUATION != 0),
        "Stopped early in {data:02x?}"
    );
    assert_eq!(data[len - 1] & CONTINUATION, 0, "Overran terminator in {data:02x?}");
}

/// Check that a failed decode really had no terminator to find.
fn check_truncated(data: &[u8], error: Error) {
    let Error::UnexpectedEof(offset) = error;
    assert_eq!(offset, data.len(), "Wrong EOF offset for {data:02x?}");
    assert!(
        data.iter().all(|byte| byte & CONTINUATION != 0),
        "Missed a terminator in {data:02x?}"
    );
}

/// Decode `data` as ULEB128 and verify the result against the encoder.
///
/// Any input is acceptable: truncated input must be reported as such, and a
/// decoded value must re-encode to no more bytes than were consumed, and to
/// exactly those bytes when they were already minimal.
///
/// # Panics
///
/// Panics if any invariant is violated.
pub fn test_unsigned_decode(data: &[u8]) {
    let (value, len) = match decode_unsigned_slice(data) {
        Ok(decoded) => decoded,
        Err(error) => return check_truncated(data, error),
    };
    check_terminated(data, len);

    assert_eq!(decode_unsigned(data.iter()), Ok(value.clone()));

    let encoded = encode_unsigned(&value);
    assert!(encoded.len() <= len);
    assert_eq!(decode_unsigned(&encoded), Ok(value));

    let framed = &data[..len];
    let minimal = len == 1 || framed[len - 1] & PAYLOAD_MASK != 0;
    if minimal {
        assert_encoding("uleb128", framed, &encoded);
    }
}

/// Decode `data` as SLEB128 and verify the result against the encoder.
///
/// The same invariants as [`test_unsigned_decode`] apply, with minimality
/// judged by the signed termination rule.
///
/// # Panics
///
/// Panics if any invariant is violated.
pub fn test_signed_decode(data: &[u8]) {
    let (value, len) = match decode_signed_slice(data) {
        Ok(decoded) => decoded,
        Err(error) => return check_truncated(data, error),
    };
    check_terminated(data, len);

    assert_eq!(decode_signed(data.iter()), Ok(value.clone()));

    let encoded = encode_signed(&value);
    assert!(encoded.len() <= len);
    assert_eq!(decode_signed(&encoded), Ok(value));

    let framed = &data[..len];
    // A trailing 0x00 or 0x7F group is redundant when the group before it
    // already sign-extends to the same bit.
    let redundant = len > 1
        && match framed[len - 1] {
            0x00 => framed[len - 2] & SIGN_BIT == 0,
            0x7F => framed[len - 2] & SIGN_BIT != 0,
            _ => false,
        };
    if !redundant {
        assert_encoding("sleb128", framed, &encoded);
    }
}

/// Build an arbitrary integer from `data` and round-trip it through both
/// variants, checking the length helpers along the way.
///
/// Inputs too short to build an integer are ignored.
///
/// # Panics
///
/// Panics if any round-trip or length check fails.
pub fn test_value_roundtrip(data: &[u8]) {
    let mut u = Unstructured::new(data);
    let Ok(value) = BigInt::arbitrary(&mut u) else {
        return;
    };

    let signed = encode_signed(&value);
    assert_eq!(signed.len(), signed_len(&value));
    assert_eq!(decode_signed_slice(&signed), Ok((value.clone(), signed.len())));

    let mut appended = Vec::from([0xFFu8]);
    encode_signed_into(&value, &mut appended);
    assert_encoding("sleb128 appended", &signed, &appended[1..]);

    let magnitude: BigUint = value.magnitude().clone();
    let unsigned = encode_unsigned(&magnitude);
    assert_eq!(unsigned.len(), unsigned_len(&magnitude));
    assert_eq!(decode_unsigned_slice(&unsigned), Ok((magnitude.clone(), unsigned.len())));

    let mut count = ByteCount::new();
    encode_unsigned_into(&magnitude, &mut count);
    assert_eq!(count.get(), unsigned.len());
}
