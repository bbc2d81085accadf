//! OpenStreetMap node lookup over HTTP.
//!
//! This module provides [`HttpOsmDataService`], an implementation of
//! [`campus_coffee_core::OsmDataService`] backed by the OSM API v0.6, and
//! [`parse_node_document`], which turns the API's XML answer into an
//! [`campus_coffee_core::OsmNode`].
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use campus_coffee_core::OsmDataService;
//! use campus_coffee_data::osm::{HttpOsmDataService, HttpOsmDataServiceConfig};
//!
//! let config = HttpOsmDataServiceConfig::default()
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("campus-coffee-import/1.0");
//! let service = HttpOsmDataService::with_config(config)?;
//!
//! let node = service.fetch_node(5_589_879_349)?;
//! println!("{:?} at {:?}", node.name, node.street);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod document;
mod provider;

pub use document::{NodeDocumentError, parse_node_document};
pub use provider::{
    DEFAULT_BASE_URL, DEFAULT_USER_AGENT, HttpOsmDataService, HttpOsmDataServiceBuildError,
    HttpOsmDataServiceConfig,
};
