//! CVC (card verification code) validation.
//!
//! A CVC is valid for a brand when it consists only of ASCII digits, has
//! exactly the brand's CVC length, and is not all zeros.
//!
//! - American Express: 4 digits (printed on the front)
//! - All other brands: 3 digits (printed on the back)
//!
//! # Example
//!
//! ```
//! use stripe_card::cvc::{is_valid_cvc, validate_cvc};
//! use stripe_card::CardBrand;
//!
//! assert!(is_valid_cvc("333", CardBrand::Visa));
//! assert!(!is_valid_cvc("33", CardBrand::Visa));
//! assert!(is_valid_cvc("3333", CardBrand::AmericanExpress));
//!
//! assert!(validate_cvc("000", CardBrand::Visa).is_err());
//! ```

use crate::error::ValidationError;
use crate::length::max_cvc_length;
use crate::CardBrand;

/// Checks a CVC for the given brand.
#[inline]
pub fn is_valid_cvc(cvc: &str, brand: CardBrand) -> bool {
    validate_cvc(cvc, brand).is_ok()
}

/// Validates a CVC for the given brand, reporting the first problem.
///
/// Checks run in order: empty, non-digit characters, length, all zeros.
pub fn validate_cvc(cvc: &str, brand: CardBrand) -> Result<(), ValidationError> {
    if cvc.is_empty() {
        return Err(ValidationError::EmptyCvc);
    }

    if let Some(position) = cvc.chars().position(|c| !c.is_ascii_digit()) {
        return Err(ValidationError::InvalidCvcCharacter { position });
    }

    let expected = max_cvc_length(brand);
    if cvc.len() != expected {
        return Err(ValidationError::InvalidCvcLength {
            brand,
            length: cvc.len(),
            expected,
        });
    }

    if cvc.bytes().all(|b| b == b'0') {
        return Err(ValidationError::ZeroCvc);
    }

    Ok(())
}
