//! Luhn checksum for card numbers.
//!
//! The Luhn ("modulus 10") formula catches single-digit typos and most
//! adjacent transpositions in identification numbers.

/// Doubled digit with 9 subtracted when the result exceeds 9.
/// Index is the digit (0-9).
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Checks a card number string with the Luhn algorithm.
///
/// Returns `false` for an empty string or as soon as any character is not an
/// ASCII digit. Separators are not stripped here.
///
/// # Example
///
/// ```
/// use stripe_card::luhn::is_valid_luhn;
///
/// assert!(is_valid_luhn("4111111111111111"));
/// assert!(!is_valid_luhn("4111111111111112"));
/// assert!(!is_valid_luhn("4111-1111-1111-1111"));
/// ```
pub fn is_valid_luhn(number: &str) -> bool {
    match to_digits(number) {
        Some(digits) => validate(&digits),
        None => false,
    }
}

/// Converts an all-digit string to digit values.
///
/// Returns `None` if any character is not an ASCII digit.
pub fn to_digits(number: &str) -> Option<Vec<u8>> {
    number
        .bytes()
        .map(|b| b.is_ascii_digit().then(|| b - b'0'))
        .collect()
}

/// Validates a sequence of digit values (0-9) with the Luhn algorithm.
///
/// # Example
///
/// ```
/// use stripe_card::luhn::validate;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate(&digits));
///
/// let invalid = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
/// assert!(!validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10).
///
/// The rightmost digit is not doubled; every second digit moving left is.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 1 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum()
}

/// Computes the check digit to append to `digits`.
///
/// Every digit shifts one place left once the check digit is appended, so
/// the digits doubled here are the ones at even positions from the right.
///
/// # Example
///
/// ```
/// use stripe_card::luhn::generate_check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 0 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}
