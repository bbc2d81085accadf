//! University campuses a point of sale can belong to.
//!
//! Read from the `campus` or `seuhd:campus` OSM tags with the same
//! case-insensitive matching as [`PosType`](crate::PosType).

use thiserror::Error;

/// Campus classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum CampusType {
    /// Old town campus.
    Altstadt,
    /// Bergheim campus.
    Bergheim,
    /// Im Neuenheimer Feld.
    Inf,
    /// Neuenheim district.
    Neuenheim,
}

/// Returned when a tag value names no known [`CampusType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown campus '{value}'")]
pub struct UnknownCampusType {
    /// The rejected input, as supplied.
    pub value: String,
}

impl CampusType {
    /// Canonical upper-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Altstadt => "ALTSTADT",
            Self::Bergheim => "BERGHEIM",
            Self::Inf => "INF",
            Self::Neuenheim => "NEUENHEIM",
        }
    }
}

impl std::fmt::Display for CampusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CampusType {
    type Err = UnknownCampusType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ALTSTADT" => Ok(Self::Altstadt),
            "BERGHEIM" => Ok(Self::Bergheim),
            "INF" => Ok(Self::Inf),
            "NEUENHEIM" => Ok(Self::Neuenheim),
            _ => Err(UnknownCampusType {
                value: s.to_owned(),
            }),
        }
    }
}
