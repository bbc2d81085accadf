//! Data access adapters for the campus coffee directory.
//!
//! Responsibilities:
//! - Fetch single OpenStreetMap nodes over HTTP and extract their
//!   point-of-sale fields ([`osm`]).
//! - Map between the domain point of sale and its stored entity, splitting
//!   and merging house numbers ([`mapper`]).
//!
//! Boundaries:
//! - Domain types and the lookup trait live in `campus-coffee-core`.
//! - Building a point of sale from an OSM node is left to callers.
//!
//! Invariants:
//! - No global mutable state; every call owns its parsing context.

#![forbid(unsafe_code)]

pub mod mapper;
pub mod osm;
