//! Facade crate for the campus coffee point-of-sale directory.
//!
//! This crate re-exports the core domain types and, behind the `osm-http`
//! feature, the OpenStreetMap lookup adapter and the entity mapper.

#![forbid(unsafe_code)]

pub use campus_coffee_core::{
    CampusType, OsmDataError, OsmDataService, OsmNode, Pos, PosType, UnknownCampusType,
    UnknownPosType,
};

#[cfg(feature = "osm-http")]
pub use campus_coffee_data::mapper::{
    AddressEntity, HouseNumberParts, PosEntity, merge_house_number, pos_from_entity,
    pos_to_entity, split_house_number, update_entity,
};
#[cfg(feature = "osm-http")]
pub use campus_coffee_data::osm::{
    HttpOsmDataService, HttpOsmDataServiceBuildError, HttpOsmDataServiceConfig,
};
