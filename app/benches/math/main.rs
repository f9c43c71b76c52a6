/*
 * // Copyright 2026 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ddouble::{DDouble, cos, divqq, exp, log, mulqq, sin, sqrt};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("libm::exp", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::exp(i as f64 / 1000.0 - 0.5));
            }
        })
    });

    c.bench_function("ddouble: exp", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(exp(DDouble::from_f64(i as f64 / 1000.0 - 0.5)));
            }
        })
    });

    c.bench_function("libm::log", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::log(i as f64));
            }
        })
    });

    c.bench_function("ddouble: log", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(log(DDouble::from_f64(i as f64)));
            }
        })
    });

    c.bench_function("libm::sin", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::sin(i as f64));
            }
        })
    });

    c.bench_function("ddouble: sin", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sin(DDouble::from_f64(i as f64)));
            }
        })
    });

    c.bench_function("ddouble: cos", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(cos(DDouble::from_f64(i as f64)));
            }
        })
    });

    c.bench_function("ddouble: sqrt", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sqrt(DDouble::from_f64(i as f64)));
            }
        })
    });

    c.bench_function("ddouble: mul div", |b| {
        let y = DDouble::new(1.0000001, 1e-20);
        b.iter(|| {
            let mut x = DDouble::ONE;
            for _ in 1..1000 {
                x = divqq(mulqq(x, y), y);
            }
            black_box(x)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
