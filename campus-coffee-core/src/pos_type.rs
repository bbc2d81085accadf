//! Kinds of point of sale listed in the directory.
//!
//! OSM encodes the kind in `amenity` or `shop` tags. Parsing is
//! case-insensitive but otherwise exact: `vending_machine` matches,
//! `vending machine` does not.
//!
//! # Examples
//! ```
//! use campus_coffee_core::PosType;
//!
//! assert_eq!("cafe".parse::<PosType>(), Ok(PosType::Cafe));
//! assert_eq!(PosType::EspressoStand.to_string(), "ESPRESSO_STAND");
//! ```

use thiserror::Error;

/// Point-of-sale classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum PosType {
    /// Counter or cart serving espresso drinks.
    EspressoStand,
    /// Sit-down café.
    Cafe,
    /// Unattended coffee machine.
    VendingMachine,
    /// Bakery selling coffee alongside baked goods.
    Bakery,
}

/// Returned when a tag value names no known [`PosType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown point-of-sale type '{value}'")]
pub struct UnknownPosType {
    /// The rejected input, as supplied.
    pub value: String,
}

impl PosType {
    /// Canonical upper-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EspressoStand => "ESPRESSO_STAND",
            Self::Cafe => "CAFE",
            Self::VendingMachine => "VENDING_MACHINE",
            Self::Bakery => "BAKERY",
        }
    }
}

impl std::fmt::Display for PosType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PosType {
    type Err = UnknownPosType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ESPRESSO_STAND" => Ok(Self::EspressoStand),
            "CAFE" => Ok(Self::Cafe),
            "VENDING_MACHINE" => Ok(Self::VendingMachine),
            "BAKERY" => Ok(Self::Bakery),
            _ => Err(UnknownPosType {
                value: s.to_owned(),
            }),
        }
    }
}
