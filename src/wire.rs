//! Card attributes reported by the payments API.
//!
//! These values come back on card records and are not validated client-side.
//! Each maps to and from the string used on the wire; unrecognised strings
//! map to the `Unknown` variant.

use std::fmt;

/// How the card is funded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FundingType {
    /// Credit card.
    Credit,
    /// Debit card.
    Debit,
    /// Prepaid card.
    Prepaid,
    /// Not reported.
    #[default]
    Unknown,
}

impl FundingType {
    /// Returns the wire string.
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
            Self::Prepaid => "prepaid",
            Self::Unknown => "unknown",
        }
    }

    /// Parses a wire string, falling back to `Unknown`.
    pub fn from_wire_name(name: &str) -> Self {
        match name {
            "credit" => Self::Credit,
            "debit" => Self::Debit,
            "prepaid" => Self::Prepaid,
            _ => Self::Unknown,
        }
    }
}

/// Result of the issuer's CVC check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CvcCheck {
    /// The CVC matched.
    Pass,
    /// The CVC did not match.
    Fail,
    /// The issuer does not support CVC checks.
    Unavailable,
    /// The CVC was provided but not yet checked.
    Unchecked,
    /// Not reported.
    #[default]
    Unknown,
}

impl CvcCheck {
    /// Returns the wire string.
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Unavailable => "unavailable",
            Self::Unchecked => "unchecked",
            Self::Unknown => "unknown",
        }
    }

    /// Parses a wire string, falling back to `Unknown`.
    pub fn from_wire_name(name: &str) -> Self {
        match name {
            "pass" => Self::Pass,
            "fail" => Self::Fail,
            "unavailable" => Self::Unavailable,
            "unchecked" => Self::Unchecked,
            _ => Self::Unknown,
        }
    }
}

/// Wallet used to tokenize the card, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenizationMethod {
    /// Apple Pay.
    ApplePay,
    /// Android Pay.
    AndroidPay,
    /// Entered directly, or not reported.
    #[default]
    Unknown,
}

impl TokenizationMethod {
    /// Returns the wire string.
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::ApplePay => "apple_pay",
            Self::AndroidPay => "android_pay",
            Self::Unknown => "unknown",
        }
    }

    /// Parses a wire string, falling back to `Unknown`.
    pub fn from_wire_name(name: &str) -> Self {
        match name {
            "apple_pay" => Self::ApplePay,
            "android_pay" => Self::AndroidPay,
            _ => Self::Unknown,
        }
    }
}

macro_rules! impl_wire_traits {
    ($($ty:ty),+ $(,)?) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.wire_name())
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.wire_name())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let name = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from_wire_name(&name))
            }
        }
    )+};
}

impl_wire_traits!(FundingType, CvcCheck, TokenizationMethod);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_funding_type_names() {
        for funding in [
            FundingType::Credit,
            FundingType::Debit,
            FundingType::Prepaid,
            FundingType::Unknown,
        ] {
            assert_eq!(FundingType::from_wire_name(funding.wire_name()), funding);
        }
        assert_eq!(FundingType::from_wire_name("charge"), FundingType::Unknown);
    }

    #[test]
    fn test_cvc_check_names() {
        for check in [
            CvcCheck::Pass,
            CvcCheck::Fail,
            CvcCheck::Unavailable,
            CvcCheck::Unchecked,
            CvcCheck::Unknown,
        ] {
            assert_eq!(CvcCheck::from_wire_name(check.wire_name()), check);
        }
        assert_eq!(CvcCheck::from_wire_name("PASS"), CvcCheck::Unknown);
    }

    #[test]
    fn test_tokenization_method_names() {
        assert_eq!(
            TokenizationMethod::from_wire_name("apple_pay"),
            TokenizationMethod::ApplePay
        );
        assert_eq!(
            TokenizationMethod::from_wire_name("android_pay"),
            TokenizationMethod::AndroidPay
        );
        assert_eq!(
            TokenizationMethod::from_wire_name("masterpass"),
            TokenizationMethod::Unknown
        );
        assert_eq!(TokenizationMethod::ApplePay.to_string(), "apple_pay");
    }

    #[test]
    fn test_defaults_are_unknown() {
        assert_eq!(FundingType::default(), FundingType::Unknown);
        assert_eq!(CvcCheck::default(), CvcCheck::Unknown);
        assert_eq!(TokenizationMethod::default(), TokenizationMethod::Unknown);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&FundingType::Debit).unwrap(), "\"debit\"");
        let check: CvcCheck = serde_json::from_str("\"unavailable\"").unwrap();
        assert_eq!(check, CvcCheck::Unavailable);
        let method: TokenizationMethod = serde_json::from_str("\"google_pay\"").unwrap();
        assert_eq!(method, TokenizationMethod::Unknown);
    }
}
