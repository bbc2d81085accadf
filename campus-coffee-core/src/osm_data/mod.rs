//! Look up OpenStreetMap nodes by id.
//!
//! The [`OsmDataService`] trait abstracts the remote lookup so the domain
//! does not depend on a particular HTTP client or document format. Every
//! lookup failure surfaces as [`OsmDataError::NodeNotFound`].

mod error;
mod service;

pub use error::OsmDataError;
pub use service::OsmDataService;
