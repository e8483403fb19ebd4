//! Benchmark of the LEB128 codecs across value magnitudes.
//!
//! Each group encodes and decodes the same values at a few bit widths, from
//! single-byte values up to numbers well past machine-word size, comparing
//! fresh-buffer encoding with appending into a reused sink.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use leb128_rs::{
    BigInt, BigUint, decode_signed_slice, decode_unsigned_slice, encode_signed,
    encode_signed_into, encode_unsigned, encode_unsigned_into,
};
use std::hint::black_box;

/// Bit widths of the benchmarked values.
const WIDTHS: &[usize] = &[6, 63, 128, 1024];

/// A value with every bit of `width` set.
fn all_ones(width: usize) -> BigUint {
    (BigUint::from(1u32) << width) - 1u32
}

fn benchmark_unsigned(c: &mut Criterion) {
    let mut group = c.benchmark_group("uleb128");

    for &width in WIDTHS {
        let value = all_ones(width);
        let encoded = encode_unsigned(&value);

        group.bench_with_input(BenchmarkId::new("encode", width), &value, |b, value| {
            b.iter(|| black_box(encode_unsigned(black_box(value))));
        });

        group.bench_with_input(BenchmarkId::new("encode_into", width), &value, |b, value| {
            let mut buf: Vec<u8> = Vec::with_capacity(encoded.len());
            b.iter(|| {
                buf.clear();
                encode_unsigned_into(black_box(value), &mut buf);
                black_box(buf.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("decode", width), &encoded, |b, encoded| {
            b.iter(|| black_box(decode_unsigned_slice(black_box(encoded))));
        });
    }

    group.finish();
}

fn benchmark_signed(c: &mut Criterion) {
    let mut group = c.benchmark_group("sleb128");

    for &width in WIDTHS {
        let value = -BigInt::from(all_ones(width));
        let encoded = encode_signed(&value);

        group.bench_with_input(BenchmarkId::new("encode", width), &value, |b, value| {
            b.iter(|| black_box(encode_signed(black_box(value))));
        });

        group.bench_with_input(BenchmarkId::new("encode_into", width), &value, |b, value| {
            let mut buf: Vec<u8> = Vec::with_capacity(encoded.len());
            b.iter(|| {
                buf.clear();
                encode_signed_into(black_box(value), &mut buf);
                black_box(buf.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("decode", width), &encoded, |b, encoded| {
            b.iter(|| black_box(decode_signed_slice(black_box(encoded))));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_unsigned, benchmark_signed);
criterion_main!(benches);
