//! # stripe_card
//!
//! Client-side payment card validation, as done before a card is sent to
//! the payments API for tokenization.
//!
//! ## Features
//!
//! - Card brand detection from number prefixes (6 brands)
//! - Luhn checksum validation
//! - Brand-specific card number and CVC length rules
//! - Expiration month/year validation with two digit years
//! - A [`Card`] entity that caches validity flags and emits change events
//! - Card number masking for logs
//!
//! ## Quick Start
//!
//! ```rust
//! use stripe_card::{detect, is_valid_card_number, CardBrand};
//!
//! assert_eq!(detect::classify("4242424242424242"), CardBrand::Visa);
//! assert!(is_valid_card_number("4242424242424242"));
//! assert!(!is_valid_card_number("4242424242424241"));
//! ```
//!
//! ## Validating All Fields
//!
//! ```rust
//! use chrono::NaiveDate;
//! use stripe_card::{is_valid_card, validate_card, CardFields};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//!
//! let fields = CardFields::new("378282246310005", "1234", 12, 30);
//! assert!(is_valid_card(&fields, today));
//!
//! // Amex needs a four digit CVC
//! let fields = CardFields::new("378282246310005", "123", 12, 30);
//! let err = validate_card(&fields, today).unwrap_err();
//! assert_eq!(err.code(), "invalid_cvc");
//! ```
//!
//! ## The Card Entity
//!
//! ```rust
//! use stripe_card::card::{Card, FixedClock};
//! use stripe_card::CardBrand;
//!
//! let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let mut card = Card::with_clock(FixedClock(today));
//!
//! card.set_number("6011111111111117");
//! card.set_cvc("123");
//! card.set_expiration_month(1);
//! card.set_expiration_year(2025);
//!
//! assert_eq!(card.brand(), CardBrand::Discover);
//! assert!(card.is_valid_card());
//! assert_eq!(card.masked_number(), "****-****-****-1117");
//! ```
//!
//! ## Supported Card Brands
//!
//! | Brand | Prefixes | Length | CVC |
//! |-------|----------|--------|-----|
//! | American Express | 34, 37 | 15 | 4 |
//! | Discover | 60, 62, 64, 65 | 16 | 3 |
//! | JCB | 35 | 16 | 3 |
//! | Diners Club | 300-305, 309, 36, 38, 39 | 14 | 3 |
//! | Visa | 4 | 16 | 3 |
//! | Mastercard | 2221-2720, 50-55, 67 | 16 | 3 |
//!
//! Prefixes are checked in the table's order and the first match wins.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize brands and reported attributes by their wire names |
//! | `generate` | Random test card generation |
//! | `cli` | Command-line tool |
//!
//! ## Security
//!
//! - Card numbers and CVCs held by [`Card`] are zeroized when replaced or dropped
//! - `Debug` output and log events show masked numbers only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod brand;
pub mod card;
pub mod cvc;
pub mod detect;
pub mod error;
pub mod expiry;
pub mod generate;
pub mod length;
pub mod luhn;
pub mod mask;
pub mod validate;
pub mod wire;

// Re-export main types at crate root
pub use brand::CardBrand;
pub use card::{Card, CardEvent, Clock, FixedClock, SystemClock, ValidityFlag};
pub use error::{Field, ValidationError};
pub use validate::{
    is_valid_card, is_valid_card_number, validate_card, validate_card_number, CardFields, Validity,
};
pub use wire::{CvcCheck, FundingType, TokenizationMethod};
