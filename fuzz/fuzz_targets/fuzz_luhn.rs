//! Fuzz target for Luhn algorithm.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use libfuzzer_sys::fuzz_target;
use stripe_card::{generate, luhn};

fuzz_target!(|data: &str| {
    // String entry point never panics; non-digits always fail
    let valid = luhn::is_valid_luhn(data);
    if valid {
        assert!(!data.is_empty());
        assert!(data.bytes().all(|b| b.is_ascii_digit()));
    }

    // Clamp bytes to valid digit range
    let digits: Vec<u8> = data.bytes().map(|b| b % 10).collect();
    if digits.is_empty() {
        return;
    }

    let _ = luhn::validate(&digits);

    // Adding the check digit should make it valid
    let check = luhn::generate_check_digit(&digits);
    assert!(check <= 9, "Check digit should be 0-9");
    let mut with_check = digits.clone();
    with_check.push(check);
    assert!(luhn::validate(&with_check), "Adding check digit should make valid");

    let base: String = digits.iter().map(|d| (b'0' + d) as char).collect();
    let appended = generate::append_check_digit(&base).unwrap();
    assert!(luhn::is_valid_luhn(&appended));
});
