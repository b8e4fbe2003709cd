//! Performance benchmarks for signal generation.
//!
//! Run with: cargo bench

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dmac::data::sma;
use dmac::{Bar, DualMaCrossover, PriceField, TradingAlgo};

/// Generate synthetic bars for benchmarking.
fn generate_bars(count: usize) -> Vec<Bar> {
    let mut price = 100.0;
    (0..count)
        .map(|i| {
            let noise = ((i as f64 * 0.7).sin() * 2.0 + (i as f64 * 1.3).cos()) * 0.5;
            price += 0.001 * price + noise;
            price = price.max(50.0);

            Bar::new(
                Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
                    + chrono::Duration::days(i as i64),
                price - 1.0,
                price + 2.0,
                price - 2.0,
                price + 0.5,
                1_000_000.0,
            )
        })
        .collect()
}

fn bench_sma(c: &mut Criterion) {
    let bars = generate_bars(1000);

    let mut group = c.benchmark_group("sma");
    for period in [10, 50, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(period), period, |b, &period| {
            b.iter(|| sma(black_box(&bars), PriceField::Close, period))
        });
    }
    group.finish();
}

fn bench_on_bar(c: &mut Criterion) {
    let bars = generate_bars(1000);
    let algo = DualMaCrossover::on_close(50, 200);

    c.bench_function("dual_ma_on_bar", |b| {
        b.iter(|| algo.on_bar(black_box(&bars)))
    });
}

criterion_group!(benches, bench_sma, bench_on_bar);
criterion_main!(benches);
