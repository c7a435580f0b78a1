//! Test card number generation.
//!
//! Generated numbers start with one of the brand's prefixes, have the
//! brand's card number length and end with a correct Luhn check digit, so
//! they pass every client-side check. They are not connected to real
//! accounts and are meant for tests only.
//!
//! # Example
//!
//! ```
//! use stripe_card::generate::generate_card_deterministic;
//! use stripe_card::{detect, is_valid_card_number, CardBrand};
//!
//! let number = generate_card_deterministic(CardBrand::DinersClub).unwrap();
//! assert_eq!(number, "30000000000004");
//! assert_eq!(detect::classify(&number), CardBrand::DinersClub);
//! assert!(is_valid_card_number(&number));
//! ```

use crate::detect::prefixes;
use crate::length::max_card_number_length;
use crate::{luhn, CardBrand};

#[cfg(feature = "generate")]
use rand::Rng;

/// Returns the prefix used when generating numbers for a brand.
///
/// `Unknown` has no prefix.
#[inline]
pub fn prefix_for_brand(brand: CardBrand) -> Option<&'static str> {
    prefixes(brand).first().copied()
}

/// Appends the Luhn check digit to an all-digit base number.
///
/// Returns `None` if `base` is empty or contains a non-digit.
///
/// # Example
///
/// ```
/// use stripe_card::generate::append_check_digit;
///
/// assert_eq!(append_check_digit("411111111111111").as_deref(), Some("4111111111111111"));
/// assert_eq!(append_check_digit("41x1"), None);
/// ```
pub fn append_check_digit(base: &str) -> Option<String> {
    let digits = luhn::to_digits(base).filter(|d| !d.is_empty())?;
    let check = luhn::generate_check_digit(&digits);

    let mut number = String::with_capacity(base.len() + 1);
    number.push_str(base);
    number.push((b'0' + check) as char);
    Some(number)
}

/// Generates a valid card number for the brand without randomness.
///
/// The digits between the prefix and the check digit are zeros, so the same
/// brand always yields the same number. Returns `None` for `Unknown`.
pub fn generate_card_deterministic(brand: CardBrand) -> Option<String> {
    let prefix = prefix_for_brand(brand)?;
    generate_card_deterministic_with_prefix(prefix, max_card_number_length(brand))
}

/// Generates a valid card number with a custom prefix, zero filled.
///
/// Returns `None` if the prefix is not all digits or leaves no room for the
/// check digit.
pub fn generate_card_deterministic_with_prefix(prefix: &str, length: usize) -> Option<String> {
    if prefix.len() >= length {
        return None;
    }

    let base = format!("{:0<width$}", prefix, width = length - 1);
    append_check_digit(&base)
}

/// Generates a valid card number for the brand using random digits.
///
/// Returns `None` for `Unknown`. Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_card(brand: CardBrand) -> Option<String> {
    let prefix = prefix_for_brand(brand)?;
    generate_card_with_prefix(prefix, max_card_number_length(brand))
}

/// Generates a valid card number with the given prefix and length.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_card_with_prefix(prefix: &str, length: usize) -> Option<String> {
    let mut rng = rand::thread_rng();
    generate_card_with_rng(prefix, length, &mut rng)
}

/// Generates a valid card number using a provided RNG.
///
/// Useful for reproducible generation with a seeded RNG. Returns `None` if
/// the prefix is not all digits or leaves no room for the check digit.
#[cfg(feature = "generate")]
pub fn generate_card_with_rng<R: Rng>(prefix: &str, length: usize, rng: &mut R) -> Option<String> {
    if prefix.len() >= length {
        return None;
    }

    let mut base = String::with_capacity(length);
    base.push_str(prefix);
    while base.len() < length - 1 {
        base.push((b'0' + rng.gen_range(0..10u8)) as char);
    }

    append_check_digit(&base)
}

/// Generates `count` random valid card numbers for the brand.
///
/// Returns an empty list for `Unknown`. Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_cards(brand: CardBrand, count: usize) -> Vec<String> {
    (0..count).filter_map(|_| generate_card(brand)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::classify;
    use crate::validate::is_valid_card_number;

    #[test]
    fn test_prefix_for_brand() {
        assert_eq!(prefix_for_brand(CardBrand::Visa), Some("4"));
        assert_eq!(prefix_for_brand(CardBrand::AmericanExpress), Some("34"));
        assert_eq!(prefix_for_brand(CardBrand::MasterCard), Some("2221"));
        assert_eq!(prefix_for_brand(CardBrand::Unknown), None);
    }

    #[test]
    fn test_deterministic_cards_are_valid() {
        for brand in CardBrand::ALL {
            match generate_card_deterministic(brand) {
                Some(number) => {
                    assert_eq!(classify(&number), brand, "{}", number);
                    assert!(is_valid_card_number(&number), "{}", number);
                }
                None => assert_eq!(brand, CardBrand::Unknown),
            }
        }
    }

    #[test]
    fn test_deterministic_is_stable() {
        assert_eq!(
            generate_card_deterministic(CardBrand::Visa),
            generate_card_deterministic(CardBrand::Visa)
        );
        assert_eq!(
            generate_card_deterministic(CardBrand::Visa).as_deref(),
            Some("4000000000000002")
        );
    }

    #[test]
    fn test_deterministic_with_prefix() {
        let number = generate_card_deterministic_with_prefix("411111", 16).unwrap();
        assert!(number.starts_with("411111"));
        assert_eq!(number.len(), 16);
        assert!(luhn::is_valid_luhn(&number));

        assert_eq!(generate_card_deterministic_with_prefix("4111", 4), None);
        assert_eq!(generate_card_deterministic_with_prefix("4a", 16), None);
    }

    #[test]
    fn test_append_check_digit() {
        assert_eq!(append_check_digit("37828224631000").as_deref(), Some("378282246310005"));
        assert_eq!(append_check_digit(""), None);
    }

    #[cfg(feature = "generate")]
    #[test]
    fn test_random_cards_are_valid() {
        for brand in CardBrand::ALL {
            for number in generate_cards(brand, 20) {
                assert_eq!(classify(&number), brand, "{}", number);
                assert!(is_valid_card_number(&number), "{}", number);
            }
        }
        assert!(generate_cards(CardBrand::Unknown, 5).is_empty());
    }

    #[cfg(feature = "generate")]
    #[test]
    fn test_seeded_rng_is_reproducible() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let a = generate_card_with_rng("4", 16, &mut StdRng::seed_from_u64(7));
        let b = generate_card_with_rng("4", 16, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.is_some_and(|n| n.len() == 16));
    }
}
