//! Masking for card numbers shown in logs and debug output.
//!
//! Only the last four digits of a card number may be displayed. Everything
//! in this crate that prints a card (the `Card` entity's `Debug`, tracing
//! events, the CLI) goes through these functions.

/// Returns the last four digits of a card number.
///
/// Non-digit characters are skipped. Shorter numbers return all their digits.
///
/// # Example
///
/// ```
/// use stripe_card::mask::last_four;
///
/// assert_eq!(last_four("4242 4242 4242 4242"), "4242");
/// assert_eq!(last_four("12"), "12");
/// ```
pub fn last_four(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(|c| c.is_ascii_digit()).collect();
    digits[digits.len().saturating_sub(4)..].iter().collect()
}

/// Masks a card number showing only the last 4 digits.
///
/// Format: `****-****-****-1234`. Input with four digits or fewer is fully
/// masked, so a partial number never leaks.
///
/// # Example
///
/// ```
/// use stripe_card::mask::mask_number;
///
/// assert_eq!(mask_number("4111111111111111"), "****-****-****-1111");
/// assert_eq!(mask_number("378282246310005"), "****-****-***-0005");
/// assert_eq!(mask_number("123"), "***");
/// ```
pub fn mask_number(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let masked_count = len - 4;
    let mut result = String::with_capacity(len + len / 4);

    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    result.push('-');
    result.extend(&digits[masked_count..]);
    result
}

/// Masks a CVC completely.
#[inline]
pub fn mask_cvc(cvc: &str) -> String {
    "*".repeat(cvc.chars().count())
}
