//! Conversion between the domain [`Pos`] and its stored [`PosEntity`].
//!
//! Street, postal code and city pass through unchanged. The free-text
//! house number is split on the way into storage and merged on the way
//! out; see [`split_house_number`] and [`merge_house_number`].

mod entity;
mod house_number;

use campus_coffee_core::Pos;

pub use entity::{AddressEntity, PosEntity};
pub use house_number::{HouseNumberParts, merge_house_number, split_house_number};

/// Build the domain view of a stored point of sale.
///
/// An entity without an address yields a point of sale without address
/// fields. A stored suffix without a number is dropped.
#[must_use]
pub fn pos_from_entity(source: &PosEntity) -> Pos {
    let address = source.address.as_ref();
    Pos {
        id: source.id,
        created_at: source.created_at,
        updated_at: source.updated_at,
        name: source.name.clone(),
        description: source.description.clone(),
        pos_type: source.pos_type,
        campus: source.campus,
        street: address.and_then(|a| a.street.clone()),
        house_number: address
            .and_then(|a| merge_house_number(a.house_number, a.house_number_suffix)),
        postal_code: address.and_then(|a| a.postal_code),
        city: address.and_then(|a| a.city.clone()),
    }
}

/// Build a new stored point of sale, including id and timestamps.
#[must_use]
pub fn pos_to_entity(source: &Pos) -> PosEntity {
    let mut address = AddressEntity::default();
    apply_address(source, &mut address);
    PosEntity {
        id: source.id,
        created_at: source.created_at,
        updated_at: source.updated_at,
        name: source.name.clone(),
        description: source.description.clone(),
        pos_type: source.pos_type,
        campus: source.campus,
        address: Some(address),
    }
}

/// Copy a point of sale onto an existing stored entity.
///
/// Id and timestamps belong to storage and are left alone. The address is
/// updated in place, or created when missing, and a blank house number
/// clears any stored number and suffix.
pub fn update_entity(source: &Pos, target: &mut PosEntity) {
    target.name.clone_from(&source.name);
    target.description.clone_from(&source.description);
    target.pos_type = source.pos_type;
    target.campus = source.campus;
    let address = target.address.get_or_insert_with(AddressEntity::default);
    apply_address(source, address);
}

fn apply_address(source: &Pos, address: &mut AddressEntity) {
    address.street.clone_from(&source.street);
    address.city.clone_from(&source.city);
    address.postal_code = source.postal_code;

    let parts = split_house_number(source.house_number.as_deref());
    address.house_number = parts.number;
    address.house_number_suffix = parts.suffix;
}
