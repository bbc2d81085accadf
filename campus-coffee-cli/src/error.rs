//! Error types emitted by the campus coffee CLI.

use std::sync::Arc;

use campus_coffee_core::OsmDataError;
use campus_coffee_data::osm::HttpOsmDataServiceBuildError;
use thiserror::Error;

/// Errors emitted by the campus coffee CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required positional argument is missing after configuration merging.
    #[error("missing <{field}> (pass it as an argument or set {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Constructing the OSM lookup service failed.
    #[error("failed to build OSM data service for {base_url:?}: {source}")]
    BuildOsmDataService {
        base_url: String,
        #[source]
        source: HttpOsmDataServiceBuildError,
    },
    /// The node lookup failed.
    #[error(transparent)]
    FetchNode(#[from] OsmDataError),
    /// Serialising the node failed.
    #[error("failed to serialise OSM node: {0}")]
    SerialiseNode(#[source] serde_json::Error),
    /// Writing the node to the output failed.
    #[error("failed to write OSM node: {0}")]
    WriteOutput(#[source] std::io::Error),
}
