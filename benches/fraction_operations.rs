// benches/fraction_operations.rs
//
// 分数演算のベンチマーク
// 文字列パース・四則演算・小数表記（循環節探索）のコストを測定

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fraction_core::Fraction;

/// ベンチマーク1: 文字列リテラルのパース
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for literal in ["1234", "123/456", "123.45'6'", "123 1/2"].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(literal), literal, |b, &literal| {
            b.iter(|| black_box(Fraction::new(literal)).ok());
        });
    }
    group.finish();
}

/// ベンチマーク2: 浮動小数点数の変換（Farey 探索）
fn bench_float_conversion(c: &mut Criterion) {
    c.bench_function("float_conversion", |b| {
        b.iter(|| black_box(Fraction::new(black_box(3.14159))).ok());
    });
}

/// ベンチマーク3: 調和級数の部分和（分母が大きくなる加算）
fn bench_harmonic_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("harmonic_sum");

    for terms in [10u32, 100, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(terms), terms, |b, &terms| {
            b.iter(|| {
                let mut sum = Fraction::zero();
                for k in 1..=terms {
                    sum = &sum + &Fraction::new((1u32, k)).unwrap_or_default();
                }
                black_box(sum)
            });
        });
    }
    group.finish();
}

/// ベンチマーク4: 循環小数の表記
fn bench_decimal_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_string");

    for denominator in [7u32, 97, 1999].iter() {
        let f = Fraction::new((1u32, *denominator)).unwrap_or_default();
        group.bench_with_input(BenchmarkId::from_parameter(denominator), &f, |b, f| {
            b.iter(|| black_box(f.to_decimal_string(15)));
        });
    }
    group.finish();
}

/// ベンチマーク5: 有理数乗（素因数分解）
fn bench_rational_pow(c: &mut Criterion) {
    let base = Fraction::new((1_000_000u32, 729u32)).unwrap_or_default();
    let exponent = Fraction::new((2u32, 3u32)).unwrap_or_default();
    c.bench_function("rational_pow", |b| {
        b.iter(|| black_box(base.pow(&exponent)).ok());
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_float_conversion,
    bench_harmonic_sum,
    bench_decimal_string,
    bench_rational_pow
);
criterion_main!(benches);
