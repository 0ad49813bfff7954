use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gfpack::galois::GaloisField;
use gfpack::poly::{self, scalar};
use gfpack::{Gf16, Gf8, ReedSolomon};
use std::hint::black_box;

/// Word-parallel scaling against one table lookup per coefficient
fn bench_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale");

    let p8 = 0o7654_3210_7654_3210_7654 & poly::low_bits(60);
    group.bench_function("gf8_packed", |b| {
        b.iter(|| poly::scale::<Gf8>(black_box(p8), black_box(5)))
    });
    group.bench_function("gf8_scalar", |b| {
        b.iter(|| scalar::scale::<Gf8>(black_box(p8), black_box(5)))
    });

    let p16 = 0xFED_CBA9_8765_4321;
    group.bench_function("gf16_packed", |b| {
        b.iter(|| poly::scale::<Gf16>(black_box(p16), black_box(0xB)))
    });
    group.bench_function("gf16_scalar", |b| {
        b.iter(|| scalar::scale::<Gf16>(black_box(p16), black_box(0xB)))
    });

    group.finish();
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_mul");

    for terms in [2u32, 4, 7] {
        let p = 0x123_4567 & poly::low_bits(7 * 4);
        let q = 0x5_A3C1 & poly::low_bits(terms * 4);
        group.bench_with_input(BenchmarkId::new("gf16_packed", terms), &q, |b, &q| {
            b.iter(|| poly::mul::<Gf16>(black_box(p), black_box(q)))
        });
        group.bench_with_input(BenchmarkId::new("gf16_scalar", terms), &q, |b, &q| {
            b.iter(|| scalar::mul::<Gf16>(black_box(p), black_box(q)))
        });
    }

    group.finish();
}

fn bench_field_mul(c: &mut Criterion) {
    c.bench_function("gf16_field_mul_all_pairs", |b| {
        b.iter(|| {
            let mut acc = 0u8;
            for x in 0..16u8 {
                for y in 0..16u8 {
                    acc ^= Gf16::mul(black_box(x), black_box(y));
                }
            }
            acc
        })
    });
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let rs8 = ReedSolomon::<Gf8>::new(4).unwrap();
    group.bench_function("gf8_encode", |b| {
        b.iter(|| rs8.encode(black_box(0o123)))
    });
    group.bench_function("gf8_decode_two_errors", |b| {
        b.iter(|| rs8.decode(black_box(0o30013), 0, 0x7F))
    });

    let rs16 = ReedSolomon::<Gf16>::new(6).unwrap();
    let codeword = rs16.encode(0xABC);
    let damaged = codeword ^ 0x300_0000_0500_0020;
    group.bench_function("gf16_decode_three_errors", |b| {
        b.iter(|| rs16.decode(black_box(damaged), 0, 0x7FFF))
    });
    group.bench_function("gf16_decode_six_erasures", |b| {
        b.iter(|| rs16.decode(black_box(damaged), 0b100_0000_0110_0111, 0x7FFF))
    });

    group.finish();
}

criterion_group!(benches, bench_scale, bench_mul, bench_field_mul, bench_codec);
criterion_main!(benches);
