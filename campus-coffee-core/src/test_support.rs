//! Test doubles for [`OsmDataService`] used by unit and behaviour tests.

use crate::{OsmDataError, OsmDataService, OsmNode};

/// Deterministic `OsmDataService` that never touches the network.
///
/// A stub built with [`StubOsmDataService::with_node`] answers every id with
/// a copy of its template carrying the requested id. A stub built with
/// [`StubOsmDataService::missing`] reports every id as not found.
#[derive(Debug, Clone, Default)]
pub struct StubOsmDataService {
    template: Option<OsmNode>,
}

impl StubOsmDataService {
    /// Answer every lookup with `template`.
    #[must_use]
    pub const fn with_node(template: OsmNode) -> Self {
        Self {
            template: Some(template),
        }
    }

    /// Report every lookup as not found.
    #[must_use]
    pub const fn missing() -> Self {
        Self { template: None }
    }
}

impl OsmDataService for StubOsmDataService {
    fn fetch_node(&self, node_id: u64) -> Result<OsmNode, OsmDataError> {
        self.template
            .as_ref()
            .map(|template| OsmNode {
                node_id,
                ..template.clone()
            })
            .ok_or(OsmDataError::NodeNotFound { node_id })
    }
}
