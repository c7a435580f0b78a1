//! Fuzz target for card validation.
//!
//! Tests that validation never panics on arbitrary input and that the
//! boolean and diagnostic entry points agree.

#![no_main]

use arbitrary::Arbitrary;
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use stripe_card::{
    card::{Card, FixedClock},
    is_valid_card, is_valid_card_number, validate_card, validate_card_number, CardFields, Validity,
};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    number: &'a str,
    cvc: &'a str,
    month: i32,
    year: i32,
}

fuzz_target!(|input: Input<'_>| {
    let Some(today) = NaiveDate::from_ymd_opt(2024, 6, 15) else {
        return;
    };

    assert_eq!(
        is_valid_card_number(input.number),
        validate_card_number(input.number).is_ok()
    );

    let fields = CardFields::new(input.number, input.cvc, input.month, input.year);
    let valid = is_valid_card(&fields, today);
    assert_eq!(valid, validate_card(&fields, today).is_ok());
    assert_eq!(valid, Validity::evaluate(&fields, today).card);

    // The entity's cache agrees with the pure functions
    let mut card = Card::with_clock(FixedClock(today));
    card.set_number(input.number);
    card.set_cvc(input.cvc);
    card.set_expiration_month(input.month);
    card.set_expiration_year(input.year);
    assert_eq!(card.is_valid_card(), valid);
    let _ = format!("{:?}", card);
});
