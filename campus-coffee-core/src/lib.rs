//! Core domain types for the campus coffee directory.
//!
//! Holds the point-of-sale model, the record produced by an OpenStreetMap
//! lookup and the [`OsmDataService`] port adapters implement. No I/O lives
//! here; see `campus-coffee-data` for the HTTP adapter.

#![forbid(unsafe_code)]

pub mod campus;
pub mod osm_data;
mod osm_node;
mod pos;
pub mod pos_type;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use campus::{CampusType, UnknownCampusType};
pub use osm_data::{OsmDataError, OsmDataService};
pub use osm_node::OsmNode;
pub use pos::Pos;
pub use pos_type::{PosType, UnknownPosType};
