//! Fuzz target for expiration validation.
//!
//! Tests that expiration checks never panic and agree with each other.

#![no_main]

use arbitrary::Arbitrary;
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use stripe_card::expiry;

#[derive(Debug, Arbitrary)]
struct Input {
    month: i32,
    year: i32,
    days_from_ce: i32,
}

fuzz_target!(|input: Input| {
    let Some(today) = NaiveDate::from_num_days_from_ce_opt(input.days_from_ce) else {
        return;
    };

    // These should never panic
    let _ = expiry::normalize_year(input.year, today);
    let _ = expiry::is_valid_year(input.year, today);
    let valid = expiry::is_valid_date(input.month, input.year, today);
    let result = expiry::validate_expiration(input.month, input.year, today);

    assert_eq!(valid, result.is_ok(), "{:?}", input);

    // If validation succeeds, test other methods
    if let Ok(date) = result {
        assert!(!date.is_expired(today));
        let _ = date.months_until_expiry(today);
        let _ = date.format_short();
        let _ = date.format_long();
        let _ = date.to_string();
    }
});
