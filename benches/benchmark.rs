//! Benchmarks for stripe_card performance testing.
//!
//! Run with: cargo bench

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stripe_card::{
    card::{Card, FixedClock},
    detect, expiry, is_valid_card, is_valid_card_number, luhn, mask, validate_card_number,
    CardFields, Validity,
};

// Test card numbers
const VISA: &str = "4242424242424242";
const VISA_FORMATTED: &str = "4242 4242 4242 4242";
const MASTERCARD_2: &str = "2223003122003222";
const AMEX: &str = "378282246310005";
const DINERS: &str = "30569309025904";

const VISA_DIGITS: [u8; 16] = [4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2];

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// Benchmark brand detection
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    // MasterCard is tested last, so it walks the whole table
    for (name, number) in [
        ("amex", AMEX),
        ("diners", DINERS),
        ("visa", VISA),
        ("visa_formatted", VISA_FORMATTED),
        ("mastercard_2_series", MASTERCARD_2),
        ("partial", "42"),
    ] {
        group.bench_function(name, |b| b.iter(|| detect::classify(black_box(number))));
    }

    group.finish();
}

/// Benchmark Luhn algorithm specifically
fn bench_luhn(c: &mut Criterion) {
    let mut group = c.benchmark_group("luhn");

    group.bench_function("luhn_digits", |b| {
        b.iter(|| luhn::validate(black_box(&VISA_DIGITS)))
    });

    group.bench_function("luhn_str", |b| {
        b.iter(|| luhn::is_valid_luhn(black_box(VISA)))
    });

    group.bench_function("luhn_str_invalid_char", |b| {
        b.iter(|| luhn::is_valid_luhn(black_box(VISA_FORMATTED)))
    });

    group.finish();
}

/// Benchmark number and whole-card validation
fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");
    let today = today();

    group.bench_function("is_valid_card_number", |b| {
        b.iter(|| is_valid_card_number(black_box(AMEX)))
    });

    group.bench_function("validate_card_number", |b| {
        b.iter(|| validate_card_number(black_box(AMEX)))
    });

    let fields = CardFields::new(VISA, "123", 12, 30);
    group.bench_function("is_valid_card", |b| {
        b.iter(|| is_valid_card(black_box(&fields), today))
    });

    group.bench_function("validity_evaluate", |b| {
        b.iter(|| Validity::evaluate(black_box(&fields), today))
    });

    group.bench_function("expiry_two_digit_year", |b| {
        b.iter(|| expiry::is_valid_date(black_box(12), black_box(30), today))
    });

    group.finish();
}

/// Benchmark batches of mixed valid/invalid numbers
fn bench_mixed_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_batch");

    for size in [100, 1000, 10000] {
        let cards: Vec<&str> = (0..size)
            .map(|i| match i % 5 {
                0 => "4242424242424241", // Invalid (wrong checksum)
                1 => MASTERCARD_2,
                2 => AMEX,
                3 => DINERS,
                _ => VISA,
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("count_valid", size), &cards, |b, cards| {
            b.iter(|| {
                cards
                    .iter()
                    .filter(|n| is_valid_card_number(black_box(n)))
                    .count()
            })
        });
    }

    group.finish();
}

/// Benchmark the Card entity's recompute on every edit
fn bench_card_entity(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_entity");

    group.bench_function("type_number", |b| {
        b.iter(|| {
            let mut card = Card::with_clock(FixedClock(today()));
            for end in 1..=VISA.len() {
                card.set_number(&VISA[..end]);
            }
            black_box(card.is_valid_card_number())
        })
    });

    group.bench_function("mask_number", |b| {
        b.iter(|| mask::mask_number(black_box(VISA)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_classify,
    bench_luhn,
    bench_validation,
    bench_mixed_batch,
    bench_card_entity,
);
criterion_main!(benches);
