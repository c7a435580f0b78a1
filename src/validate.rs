//! Combined validation of card fields.
//!
//! This module ties brand detection, the Luhn check, the length rules, CVC
//! rules and expiration rules into card-level verdicts:
//!
//! - [`is_valid_card_number`] - Luhn valid and the right length for its brand
//! - [`is_valid_card`] - valid number, valid CVC and unexpired date
//! - [`Validity::evaluate`] - every flag at once, for callers that cache them
//! - [`validate_card`] - the first failure as a [`ValidationError`]
//!
//! All functions are pure. The current date is an argument.

use chrono::NaiveDate;

use crate::detect::classify;
use crate::error::ValidationError;
use crate::length::{is_valid_card_length, max_card_number_length};
use crate::{cvc, expiry, luhn, CardBrand};

/// Borrowed view of the fields that take part in validation.
///
/// `brand` is the brand the owner has cached for the number. It is used for
/// the CVC rule; number checks always classify `number` afresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardFields<'a> {
    /// Card number, digits only.
    pub number: &'a str,
    /// Card verification code.
    pub cvc: &'a str,
    /// Expiration month (1-12).
    pub expiration_month: i32,
    /// Expiration year, two or four digits.
    pub expiration_year: i32,
    /// Cached brand.
    pub brand: CardBrand,
}

impl<'a> CardFields<'a> {
    /// Creates fields with the brand classified from `number`.
    pub fn new(number: &'a str, cvc: &'a str, expiration_month: i32, expiration_year: i32) -> Self {
        Self {
            number,
            cvc,
            expiration_month,
            expiration_year,
            brand: classify(number),
        }
    }
}

/// Validates a card number: Luhn checksum plus exact length for its brand.
///
/// A Luhn-valid number with the wrong length is invalid.
///
/// # Example
///
/// ```
/// use stripe_card::is_valid_card_number;
///
/// assert!(is_valid_card_number("378282246310005"));
/// assert!(!is_valid_card_number("6011111111111112227"));
/// ```
pub fn is_valid_card_number(number: &str) -> bool {
    luhn::is_valid_luhn(number) && is_valid_card_length(number, classify(number))
}

/// Validates a card number and reports why it fails.
///
/// Checks run in order: empty, non-digit characters, checksum, length for
/// the detected brand. Returns the detected brand on success.
pub fn validate_card_number(number: &str) -> Result<CardBrand, ValidationError> {
    if number.is_empty() {
        return Err(ValidationError::EmptyNumber);
    }

    if let Some((position, character)) = number
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_digit())
    {
        return Err(ValidationError::InvalidCharacter {
            position,
            character,
        });
    }

    if !luhn::is_valid_luhn(number) {
        return Err(ValidationError::InvalidChecksum);
    }

    let brand = classify(number);
    if !is_valid_card_length(number, brand) {
        return Err(ValidationError::InvalidLengthForBrand {
            brand,
            length: number.len(),
            expected: max_card_number_length(brand),
        });
    }

    Ok(brand)
}

/// Returns true if the number, CVC and expiration date are all valid.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use stripe_card::{is_valid_card, CardFields};
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let fields = CardFields::new("4242424242424242", "123", 12, 2030);
/// assert!(is_valid_card(&fields, today));
/// ```
pub fn is_valid_card(fields: &CardFields<'_>, today: NaiveDate) -> bool {
    is_valid_card_number(fields.number)
        && cvc::is_valid_cvc(fields.cvc, fields.brand)
        && expiry::is_valid_date(fields.expiration_month, fields.expiration_year, today)
}

/// Validates all card fields, returning the first failure.
///
/// Fields are checked in the order number, expiration, CVC.
pub fn validate_card(fields: &CardFields<'_>, today: NaiveDate) -> Result<(), ValidationError> {
    validate_card_number(fields.number)?;
    expiry::validate_expiration(fields.expiration_month, fields.expiration_year, today)?;
    cvc::validate_cvc(fields.cvc, fields.brand)?;
    Ok(())
}

/// Every derived validity flag for a set of card fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Validity {
    /// Number passes Luhn and has the right length.
    pub card_number: bool,
    /// Number has the right length for its brand.
    pub card_length: bool,
    /// Month is between 1 and 12.
    pub expiration_month: bool,
    /// Year normalizes to this year or later.
    pub expiration_year: bool,
    /// Month/year has not passed.
    pub expiration_date: bool,
    /// CVC is valid for the cached brand.
    pub cvc: bool,
    /// Number, CVC and date are all valid.
    pub card: bool,
}

impl Validity {
    /// Computes every flag for `fields` as of `today`.
    pub fn evaluate(fields: &CardFields<'_>, today: NaiveDate) -> Self {
        let card_length = is_valid_card_length(fields.number, classify(fields.number));
        let card_number = card_length && luhn::is_valid_luhn(fields.number);
        let expiration_month = expiry::is_valid_month(fields.expiration_month);
        let expiration_year = expiry::is_valid_year(fields.expiration_year, today);
        let expiration_date =
            expiry::is_valid_date(fields.expiration_month, fields.expiration_year, today);
        let cvc = cvc::is_valid_cvc(fields.cvc, fields.brand);

        Self {
            card_number,
            card_length,
            expiration_month,
            expiration_year,
            expiration_date,
            cvc,
            card: card_number && cvc && expiration_date,
        }
    }
}
