//! Card brand detection using IIN prefix matching.
//!
//! The Issuer Identification Number (IIN) is the leading part of a card number.
//! Brands are tested against a fixed prefix table in a fixed priority order;
//! the first brand with a matching prefix wins.
//!
//! Prefixes follow
//! <http://en.wikipedia.org/wiki/Bank_card_number#Issuer_identification_number_.28IIN.29>.

use crate::CardBrand;

/// Minimum number of characters needed before a brand is reported.
///
/// Shorter partial input always classifies as `Unknown`.
pub const MIN_DETECTION_CHARS: usize = 4;

const AMERICAN_EXPRESS_PREFIXES: &[&str] = &["34", "37"];

const DISCOVER_PREFIXES: &[&str] = &["60", "62", "64", "65"];

const JCB_PREFIXES: &[&str] = &["35"];

const DINERS_CLUB_PREFIXES: &[&str] = &[
    "300", "301", "302", "303", "304", "305", "309", "36", "38", "39",
];

const VISA_PREFIXES: &[&str] = &["4"];

const MASTERCARD_PREFIXES: &[&str] = &[
    "2221", "2222", "2223", "2224", "2225", "2226", "2227", "2228", "2229", // 2221-2229
    "223", "224", "225", "226", "227", "228", "229", // 223-229
    "23", "24", "25", "26", // 23-26
    "270", "271", "2720", // 270-2720
    "50", "51", "52", "53", "54", "55", // 50-55
    "67",
];

/// Order in which brands are tested. Must not change.
const DETECTION_ORDER: [CardBrand; 6] = [
    CardBrand::AmericanExpress,
    CardBrand::Discover,
    CardBrand::Jcb,
    CardBrand::DinersClub,
    CardBrand::Visa,
    CardBrand::MasterCard,
];

/// Returns the number prefixes assigned to a brand.
///
/// `Unknown` has no prefixes.
///
/// # Example
///
/// ```
/// use stripe_card::detect::prefixes;
/// use stripe_card::CardBrand;
///
/// assert_eq!(prefixes(CardBrand::AmericanExpress), &["34", "37"]);
/// assert!(prefixes(CardBrand::Unknown).is_empty());
/// ```
#[inline]
pub const fn prefixes(brand: CardBrand) -> &'static [&'static str] {
    match brand {
        CardBrand::AmericanExpress => AMERICAN_EXPRESS_PREFIXES,
        CardBrand::Discover => DISCOVER_PREFIXES,
        CardBrand::Jcb => JCB_PREFIXES,
        CardBrand::DinersClub => DINERS_CLUB_PREFIXES,
        CardBrand::Visa => VISA_PREFIXES,
        CardBrand::MasterCard => MASTERCARD_PREFIXES,
        CardBrand::Unknown => &[],
    }
}

/// Removes whitespace and hyphens from a card number.
///
/// Other characters are kept as-is; classification does not validate digits.
pub fn clean_number(number: &str) -> String {
    number
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Detects the card brand from a (possibly formatted, possibly partial) number.
///
/// Whitespace and hyphens are ignored. Fewer than four remaining characters
/// always give `Unknown`.
///
/// # Example
///
/// ```
/// use stripe_card::detect::classify;
/// use stripe_card::CardBrand;
///
/// assert_eq!(classify("4111 1111 1111 1111"), CardBrand::Visa);
/// assert_eq!(classify("3782-822463-10005"), CardBrand::AmericanExpress);
/// assert_eq!(classify("411"), CardBrand::Unknown);
/// ```
pub fn classify(number: &str) -> CardBrand {
    let cleaned = clean_number(number);
    if cleaned.chars().count() < MIN_DETECTION_CHARS {
        return CardBrand::Unknown;
    }

    DETECTION_ORDER
        .into_iter()
        .find(|brand| has_prefix(&cleaned, *brand))
        .unwrap_or(CardBrand::Unknown)
}

/// Returns true if `number` starts with one of the brand's prefixes.
#[inline]
pub fn has_prefix(number: &str, brand: CardBrand) -> bool {
    prefixes(brand).iter().any(|prefix| number.starts_with(prefix))
}
