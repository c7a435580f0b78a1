//! Card expiration month/year validation.
//!
//! Expiration years may be given with two digits. A two digit year borrows
//! its leading digits from the current calendar year, so with a current year
//! of 2024 an input of `35` means 2035 and `11` means 2011.
//!
//! Every function takes `today` explicitly; nothing in this module reads the
//! clock except [`today`] itself.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use stripe_card::expiry::{is_valid_date, is_valid_year, normalize_year};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//!
//! assert_eq!(normalize_year(35, today), Some(2035));
//! assert!(is_valid_year(35, today));
//! assert!(!is_valid_year(11, today));
//!
//! assert!(is_valid_date(6, 2024, today));
//! assert!(!is_valid_date(5, 2024, today));
//! ```

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

use crate::error::ValidationError;

/// Returns the local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Returns true if `month` is between 1 and 12.
#[inline]
pub const fn is_valid_month(month: i32) -> bool {
    month >= 1 && month <= 12
}

/// Expands a two digit year using the leading digits of the current year.
///
/// The expansion is textual: the current year's string loses as many
/// trailing characters as `year` has digits, and `year` is appended. Years
/// outside `0..100` are returned unchanged.
///
/// Returns `None` when the current year has no more digits than the input,
/// which leaves nothing to borrow.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use stripe_card::expiry::normalize_year;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(normalize_year(35, today), Some(2035));
/// assert_eq!(normalize_year(7, today), Some(2027));
/// assert_eq!(normalize_year(2031, today), Some(2031));
/// ```
pub fn normalize_year(year: i32, today: NaiveDate) -> Option<i32> {
    if !(0..100).contains(&year) {
        return Some(year);
    }

    let current = today.year().to_string();
    let input = year.to_string();
    if current.len() <= input.len() {
        return None;
    }

    let prefix = current.get(..current.len() - input.len())?;
    format!("{prefix}{input}").parse().ok()
}

/// Returns true if the year, after normalization, is this year or later.
///
/// There is no upper bound. A normalized year of 0 is rejected.
pub fn is_valid_year(year: i32, today: NaiveDate) -> bool {
    match normalize_year(year, today) {
        Some(normalized) => normalized != 0 && normalized >= today.year(),
        None => false,
    }
}

/// Returns true if the month/year pair has not expired as of `today`.
///
/// A card stays valid through the whole of its expiration month.
pub fn is_valid_date(month: i32, year: i32, today: NaiveDate) -> bool {
    if !is_valid_month(month) || !is_valid_year(year, today) {
        return false;
    }

    match normalize_year(year, today) {
        Some(normalized) if normalized == today.year() => month >= today.month() as i32,
        Some(_) => true,
        None => false,
    }
}

/// A validated expiration date with a four digit year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpirationDate {
    year: i32,
    month: u32,
}

impl ExpirationDate {
    /// Creates an expiration date from a month and a full year.
    ///
    /// Returns `None` if the month is not between 1 and 12.
    pub fn new(month: u32, year: i32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Returns the full year.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns true if the expiration month is before the month of `today`.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        (self.year, self.month) < (today.year(), today.month())
    }

    /// Returns the number of whole months from `today`'s month to expiry.
    ///
    /// Returns 0 if already expired or expiring this month.
    pub fn months_until_expiry(&self, today: NaiveDate) -> u32 {
        let expiry = i64::from(self.year) * 12 + i64::from(self.month);
        let current = i64::from(today.year()) * 12 + i64::from(today.month());
        u32::try_from(expiry - current).unwrap_or(0)
    }

    /// Formats as MM/YY.
    pub fn format_short(&self) -> String {
        format!("{:02}/{:02}", self.month, self.year.rem_euclid(100))
    }

    /// Formats as MM/YYYY.
    pub fn format_long(&self) -> String {
        format!("{:02}/{:04}", self.month, self.year)
    }
}

impl fmt::Display for ExpirationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_short())
    }
}

/// Validates an expiration month and year as of `today`.
///
/// Returns the normalized date, or the first problem found: the month, then
/// the year, then whether the date has passed.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use stripe_card::expiry::validate_expiration;
/// use stripe_card::ValidationError;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
///
/// let date = validate_expiration(1, 35, today).unwrap();
/// assert_eq!(date.year(), 2035);
///
/// assert_eq!(
///     validate_expiration(13, 2030, today),
///     Err(ValidationError::InvalidExpiryMonth { month: 13 })
/// );
/// ```
pub fn validate_expiration(
    month: i32,
    year: i32,
    today: NaiveDate,
) -> Result<ExpirationDate, ValidationError> {
    if !is_valid_month(month) {
        return Err(ValidationError::InvalidExpiryMonth { month });
    }

    let normalized = normalize_year(year, today)
        .filter(|normalized| *normalized != 0)
        .ok_or(ValidationError::InvalidExpiryYear { year })?;

    if normalized < today.year() {
        return Err(ValidationError::InvalidExpiryYear { year });
    }

    let date = ExpirationDate {
        year: normalized,
        month: month as u32,
    };
    if date.is_expired(today) {
        return Err(ValidationError::ExpiredCard {
            month,
            year: normalized,
        });
    }

    Ok(date)
}
