use std::time::SystemTime;

use crate::{CampusType, PosType};

/// A point of sale as the directory presents it.
///
/// The address is flat and the house number is free text such as `"12a"`.
/// Storage splits it into a numeric part and a suffix; see the entity
/// mapper in `campus-coffee-data`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    /// Storage id, absent until persisted.
    pub id: Option<u64>,
    /// Creation timestamp assigned by storage.
    pub created_at: Option<SystemTime>,
    /// Last update timestamp assigned by storage.
    pub updated_at: Option<SystemTime>,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Kind of point of sale.
    pub pos_type: Option<PosType>,
    /// Campus the point of sale belongs to.
    pub campus: Option<CampusType>,
    /// Street name.
    pub street: Option<String>,
    /// House number including any suffix, e.g. `"12a"`.
    pub house_number: Option<String>,
    /// Postal code.
    pub postal_code: Option<u32>,
    /// City.
    pub city: Option<String>,
}
