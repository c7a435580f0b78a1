//! Fuzz target for CVC validation.
//!
//! Tests that CVC functions never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use stripe_card::{cvc, length, CardBrand};

fuzz_target!(|data: &str| {
    for brand in CardBrand::ALL {
        let valid = cvc::is_valid_cvc(data, brand);
        assert_eq!(valid, cvc::validate_cvc(data, brand).is_ok());

        if valid {
            assert_eq!(data.len(), length::max_cvc_length(brand));
            assert!(data.bytes().any(|b| b != b'0'));
        }

        // Error messages never echo the input
        if let Err(e) = cvc::validate_cvc(data, brand) {
            let _ = e.code();
            let _ = format!("{}", e);
        }
    }
});
