//! Card brands and their REST wire names.
//!
//! The wire name is what the payments API sends and expects in the `brand`
//! field of a card record. Display labels are kept in a separate map so that
//! user-facing text can change without touching the API mapping.

use std::fmt;

/// Card networks recognised by the SDK.
///
/// The brand is derived from the card number prefix (see [`crate::detect`]).
/// Numbers matching no known prefix, or too short to tell, are `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardBrand {
    /// American Express - prefixes 34, 37
    AmericanExpress,
    /// Discover - prefixes 60, 62, 64, 65
    Discover,
    /// JCB - prefix 35
    Jcb,
    /// Diners Club - prefixes 300-305, 309, 36, 38, 39
    DinersClub,
    /// Visa - prefix 4
    Visa,
    /// MasterCard - prefixes 2221-2720, 50-55, 67
    MasterCard,
    /// No prefix matched, or not enough digits yet.
    #[default]
    Unknown,
}

impl CardBrand {
    /// Every brand, `Unknown` last.
    pub const ALL: [CardBrand; 7] = [
        CardBrand::AmericanExpress,
        CardBrand::Discover,
        CardBrand::Jcb,
        CardBrand::DinersClub,
        CardBrand::Visa,
        CardBrand::MasterCard,
        CardBrand::Unknown,
    ];

    /// Returns the name used for this brand on the wire.
    #[inline]
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::AmericanExpress => "American Express",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::DinersClub => "Diners Club",
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::Unknown => "Unknown",
        }
    }

    /// Maps a wire name back to a brand.
    ///
    /// Matching is exact. Anything unrecognised becomes `Unknown`, so server
    /// records with brands the SDK does not know about still load.
    pub fn from_wire_name(name: &str) -> Self {
        match name {
            "American Express" => Self::AmericanExpress,
            "Discover" => Self::Discover,
            "JCB" => Self::Jcb,
            "Diners Club" => Self::DinersClub,
            "Visa" => Self::Visa,
            "MasterCard" => Self::MasterCard,
            _ => Self::Unknown,
        }
    }

    /// Returns a human-readable label for the brand.
    #[inline]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::AmericanExpress => "American Express",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::DinersClub => "Diners Club",
            Self::Visa => "Visa",
            Self::MasterCard => "Mastercard",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns true for every brand except `Unknown`.
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CardBrand {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CardBrand {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_wire_name(&name))
    }
}
