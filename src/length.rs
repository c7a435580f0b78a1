//! Brand-specific length rules for card numbers and CVCs.

use crate::CardBrand;

/// Card number length for brands without a specific rule.
pub const STANDARD_CARD_NUMBER_LENGTH: usize = 16;

/// CVC length for brands without a specific rule.
pub const STANDARD_CVC_LENGTH: usize = 3;

/// Returns the expected number of digits in a card number for the brand.
///
/// - American Express: 15
/// - Diners Club: 14
/// - Everything else, including `Unknown`: 16
#[inline]
pub const fn max_card_number_length(brand: CardBrand) -> usize {
    match brand {
        CardBrand::AmericanExpress => 15,
        CardBrand::DinersClub => 14,
        _ => STANDARD_CARD_NUMBER_LENGTH,
    }
}

/// Returns the expected CVC length for the brand.
///
/// American Express uses a 4 digit code printed on the front; every other
/// brand uses 3 digits.
#[inline]
pub const fn max_cvc_length(brand: CardBrand) -> usize {
    match brand {
        CardBrand::AmericanExpress => 4,
        _ => STANDARD_CVC_LENGTH,
    }
}

/// Returns true if `number` has exactly the length expected for `brand`.
///
/// Length is counted in characters of the string as given.
///
/// # Example
///
/// ```
/// use stripe_card::length::is_valid_card_length;
/// use stripe_card::CardBrand;
///
/// assert!(is_valid_card_length("371449635398431", CardBrand::AmericanExpress));
/// assert!(!is_valid_card_length("3787344936", CardBrand::AmericanExpress));
/// ```
#[inline]
pub fn is_valid_card_length(number: &str, brand: CardBrand) -> bool {
    number.chars().count() == max_card_number_length(brand)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_number_lengths() {
        assert_eq!(max_card_number_length(CardBrand::AmericanExpress), 15);
        assert_eq!(max_card_number_length(CardBrand::DinersClub), 14);
        assert_eq!(max_card_number_length(CardBrand::Visa), 16);
        assert_eq!(max_card_number_length(CardBrand::MasterCard), 16);
        assert_eq!(max_card_number_length(CardBrand::Discover), 16);
        assert_eq!(max_card_number_length(CardBrand::Jcb), 16);
        assert_eq!(max_card_number_length(CardBrand::Unknown), 16);
    }

    #[test]
    fn test_cvc_lengths() {
        assert_eq!(max_cvc_length(CardBrand::AmericanExpress), 4);
        for brand in CardBrand::ALL {
            if brand != CardBrand::AmericanExpress {
                assert_eq!(max_cvc_length(brand), 3);
            }
        }
    }

    #[test]
    fn test_valid_card_length() {
        assert!(is_valid_card_length("4012888888881881", CardBrand::Visa));
        assert!(!is_valid_card_length("4111111111111", CardBrand::Visa));
        assert!(is_valid_card_length("38520000023237", CardBrand::DinersClub));
        assert!(!is_valid_card_length("305693094", CardBrand::DinersClub));
        assert!(!is_valid_card_length("", CardBrand::Unknown));
    }

    #[test]
    fn test_longer_than_expected_is_invalid() {
        assert!(!is_valid_card_length("41111111111111111", CardBrand::Visa));
        assert!(!is_valid_card_length("3714496353984310", CardBrand::AmericanExpress));
    }
}
