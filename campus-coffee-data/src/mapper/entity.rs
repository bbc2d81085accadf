use std::time::SystemTime;

use campus_coffee_core::{CampusType, PosType};

/// Stored form of a point of sale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PosEntity {
    /// Storage id.
    pub id: Option<u64>,
    /// Creation timestamp.
    pub created_at: Option<SystemTime>,
    /// Last update timestamp.
    pub updated_at: Option<SystemTime>,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Kind of point of sale.
    pub pos_type: Option<PosType>,
    /// Campus the point of sale belongs to.
    pub campus: Option<CampusType>,
    /// Embedded address.
    pub address: Option<AddressEntity>,
}

/// Stored address with the house number split into number and suffix.
///
/// `house_number` and `house_number_suffix` are always written together
/// from one free-text house number.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressEntity {
    /// Street name.
    pub street: Option<String>,
    /// Digits of the house number.
    pub house_number: Option<u32>,
    /// First non-digit character of the house number.
    pub house_number_suffix: Option<char>,
    /// Postal code.
    pub postal_code: Option<u32>,
    /// City.
    pub city: Option<String>,
}
