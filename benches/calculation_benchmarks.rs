//! Performance benchmarks for the Vacation Payroll Engine.
//!
//! Covers a single payout, the audited pipeline against YAML-loaded tables,
//! bracket resolution on its own, and batches of 100 and 1000 employees.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use vacation_payroll_engine::calculation::{builtin_tables, resolve_bracket};
use vacation_payroll_engine::config::ConfigLoader;
use vacation_payroll_engine::models::VacationCalculationInput;
use vacation_payroll_engine::{calculate_vacation, calculate_vacation_batch, calculate_vacation_with_tables};

/// Builds `count` inputs with varied salaries, sold days, advances and dependents.
fn create_inputs(count: usize) -> Vec<VacationCalculationInput> {
    (0..count)
        .map(|i| {
            let salary = Decimal::new(150_000 + (i as i64 * 7_919) % 1_200_000, 2);
            let sold_days = (i % 11) as i32;
            VacationCalculationInput::new(salary, 30, sold_days)
                .with_13th_advance(i % 2 == 0)
                .with_dependents((i % 4) as i32)
        })
        .collect()
}

/// Benchmark: Single vacation payout with built-in tables.
fn bench_single_calculation(c: &mut Criterion) {
    let input = VacationCalculationInput::new(Decimal::new(3000, 0), 30, 10)
        .with_13th_advance(true)
        .with_dependents(1);

    c.bench_function("single_calculation", |b| {
        b.iter(|| black_box(calculate_vacation(black_box(&input))))
    });
}

/// Benchmark: Audited calculation against tables loaded from YAML.
fn bench_audited_calculation(c: &mut Criterion) {
    let loader = ConfigLoader::load("./config/tax_tables").expect("Failed to load config");
    let tables = loader.tables().latest();
    let input = VacationCalculationInput::new(Decimal::new(6500, 0), 30, 0).with_dependents(2);

    c.bench_function("audited_calculation", |b| {
        b.iter(|| black_box(calculate_vacation_with_tables(black_box(&input), tables)))
    });
}

/// Benchmark: Bracket resolution across the IRRF table.
fn bench_bracket_resolution(c: &mut Criterion) {
    let irrf = &builtin_tables().latest().irrf.brackets;
    let mut group = c.benchmark_group("bracket_resolution");

    for value in [2000i64, 2600, 3500, 4500, 9000] {
        group.bench_with_input(BenchmarkId::new("irrf", value), &value, |b, &value| {
            b.iter(|| black_box(resolve_bracket(Decimal::new(value, 0), irrf)))
        });
    }

    group.finish();
}

/// Benchmark: Batches of 100 and 1000 payouts.
fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_processing");

    for count in [100usize, 1000] {
        let inputs = create_inputs(count);
        group.throughput(Throughput::Elements(count as u64));
        if count >= 1000 {
            group.sample_size(10);
        }
        group.bench_with_input(BenchmarkId::new("batch", count), &inputs, |b, inputs| {
            b.iter(|| black_box(calculate_vacation_batch(inputs, builtin_tables())))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_calculation,
    bench_audited_calculation,
    bench_bracket_resolution,
    bench_batches,
);
criterion_main!(benches);
