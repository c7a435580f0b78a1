//! Fuzz target for brand detection.
//!
//! Tests that classification never panics and ignores separators.

#![no_main]

use libfuzzer_sys::fuzz_target;
use stripe_card::{detect, mask, CardBrand};

fuzz_target!(|data: &str| {
    let brand = detect::classify(data);
    let cleaned = detect::clean_number(data);

    assert_eq!(brand, detect::classify(&cleaned));
    if cleaned.chars().count() < detect::MIN_DETECTION_CHARS {
        assert_eq!(brand, CardBrand::Unknown);
    }
    if brand.is_known() {
        assert!(detect::has_prefix(&cleaned, brand));
    }

    // Masking must never panic either
    let _ = mask::mask_number(data);
    let _ = mask::last_four(data);
});
