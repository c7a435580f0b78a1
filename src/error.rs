//! Validation errors for card fields.
//!
//! The boolean predicates in this crate never fail. These errors come from
//! the diagnostic `validate_*` functions, which report why a field is
//! invalid. Each error maps to the error code the payments API uses for the
//! same problem, so client-side and server-side failures can be handled alike.

use crate::CardBrand;
use std::fmt;

/// Why a card field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The card number is empty.
    EmptyNumber,

    /// The card number contains a character that is not a digit.
    InvalidCharacter {
        /// Position of the character (0-indexed, in characters).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// The Luhn checksum failed.
    InvalidChecksum,

    /// The card number length does not match the detected brand.
    InvalidLengthForBrand {
        /// The brand detected from the number prefix.
        brand: CardBrand,
        /// The actual number of characters.
        length: usize,
        /// The length expected for the brand.
        expected: usize,
    },

    /// The CVC is empty.
    EmptyCvc,

    /// The CVC contains a character that is not a digit.
    InvalidCvcCharacter {
        /// Position of the character (0-indexed, in characters).
        position: usize,
    },

    /// The CVC length does not match the brand.
    InvalidCvcLength {
        /// The brand the CVC was checked against.
        brand: CardBrand,
        /// The actual number of digits.
        length: usize,
        /// The length expected for the brand.
        expected: usize,
    },

    /// The CVC is all zeros.
    ZeroCvc,

    /// The expiration month is not between 1 and 12.
    InvalidExpiryMonth {
        /// The month as given.
        month: i32,
    },

    /// The expiration year is in the past or cannot be normalized.
    InvalidExpiryYear {
        /// The year as given.
        year: i32,
    },

    /// The expiration month has passed in the current year.
    ExpiredCard {
        /// The expiration month.
        month: i32,
        /// The normalized expiration year.
        year: i32,
    },
}

impl ValidationError {
    /// Returns the payments API error code for this failure.
    ///
    /// # Example
    ///
    /// ```
    /// use stripe_card::ValidationError;
    ///
    /// assert_eq!(ValidationError::InvalidChecksum.code(), "invalid_number");
    /// assert_eq!(ValidationError::ZeroCvc.code(), "invalid_cvc");
    /// ```
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyNumber
            | Self::InvalidCharacter { .. }
            | Self::InvalidChecksum
            | Self::InvalidLengthForBrand { .. } => "invalid_number",
            Self::EmptyCvc
            | Self::InvalidCvcCharacter { .. }
            | Self::InvalidCvcLength { .. }
            | Self::ZeroCvc => "invalid_cvc",
            Self::InvalidExpiryMonth { .. } => "invalid_expiry_month",
            Self::InvalidExpiryYear { .. } => "invalid_expiry_year",
            Self::ExpiredCard { .. } => "expired_card",
        }
    }

    /// Returns the card field the error refers to.
    pub const fn field(&self) -> Field {
        match self {
            Self::EmptyNumber
            | Self::InvalidCharacter { .. }
            | Self::InvalidChecksum
            | Self::InvalidLengthForBrand { .. } => Field::Number,
            Self::EmptyCvc
            | Self::InvalidCvcCharacter { .. }
            | Self::InvalidCvcLength { .. }
            | Self::ZeroCvc => Field::Cvc,
            Self::InvalidExpiryMonth { .. } | Self::ExpiredCard { .. } => Field::ExpirationMonth,
            Self::InvalidExpiryYear { .. } => Field::ExpirationYear,
        }
    }
}

/// Card input fields, as named by the payments API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The card number.
    Number,
    /// The card verification code.
    Cvc,
    /// The expiration month.
    ExpirationMonth,
    /// The expiration year.
    ExpirationYear,
}

impl Field {
    /// Returns the parameter name used in API requests.
    pub const fn param(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Cvc => "cvc",
            Self::ExpirationMonth => "exp_month",
            Self::ExpirationYear => "exp_year",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyNumber => write!(f, "card number is empty"),

            // The character itself may be part of a card number; keep it out.
            Self::InvalidCharacter { position, .. } => {
                write!(
                    f,
                    "invalid character at position {} (card number must contain only digits)",
                    position
                )
            }

            Self::InvalidChecksum => {
                write!(f, "invalid checksum (Luhn check failed) - please verify the card number")
            }

            Self::InvalidLengthForBrand {
                brand,
                length,
                expected,
            } => {
                write!(
                    f,
                    "{} card numbers must have {} digits, got {}",
                    brand, expected, length
                )
            }

            Self::EmptyCvc => write!(f, "CVC is empty"),

            Self::InvalidCvcCharacter { position } => {
                write!(f, "invalid CVC character at position {}", position)
            }

            Self::InvalidCvcLength {
                brand,
                length,
                expected,
            } => {
                write!(
                    f,
                    "{} cards require a {} digit CVC, got {}",
                    brand, expected, length
                )
            }

            Self::ZeroCvc => write!(f, "CVC must not be all zeros"),

            Self::InvalidExpiryMonth { month } => {
                write!(f, "invalid expiration month {}: must be 1-12", month)
            }

            Self::InvalidExpiryYear { year } => {
                write!(f, "invalid expiration year {}", year)
            }

            Self::ExpiredCard { month, year } => {
                write!(f, "card expired ({:02}/{})", month, year)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
