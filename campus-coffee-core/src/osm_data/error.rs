use thiserror::Error;

/// Errors from [`crate::osm_data::OsmDataService::fetch_node`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OsmDataError {
    /// The node could not be retrieved.
    ///
    /// Covers a missing node as well as network failures, HTTP errors and
    /// unreadable documents. Callers cannot tell these apart.
    #[error("OSM node {node_id} not found")]
    NodeNotFound {
        /// The id that was requested.
        node_id: u64,
    },
}

impl OsmDataError {
    /// The id of the node the failed lookup asked for.
    #[must_use]
    pub const fn node_id(&self) -> u64 {
        match self {
            Self::NodeNotFound { node_id } => *node_id,
        }
    }
}
