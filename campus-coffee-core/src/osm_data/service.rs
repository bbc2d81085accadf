//! Node lookup trait.

use crate::OsmNode;

use super::error::OsmDataError;

/// Fetch a single OSM node and extract its point-of-sale fields.
///
/// Implementations are synchronous and keep no per-call state, so one
/// instance may serve several callers.
///
/// # Examples
///
/// ```rust
/// use campus_coffee_core::{OsmDataError, OsmDataService, OsmNode};
///
/// struct EmptyService;
///
/// impl OsmDataService for EmptyService {
///     fn fetch_node(&self, node_id: u64) -> Result<OsmNode, OsmDataError> {
///         if node_id == 0 {
///             return Err(OsmDataError::NodeNotFound { node_id });
///         }
///         Ok(OsmNode::new(node_id))
///     }
/// }
///
/// let node = EmptyService.fetch_node(3)?;
/// assert_eq!(node.node_id, 3);
/// # Ok::<(), OsmDataError>(())
/// ```
pub trait OsmDataService {
    /// Return the node with `node_id`.
    ///
    /// The returned record carries `node_id` as requested. Any failure is
    /// reported as [`OsmDataError::NodeNotFound`].
    fn fetch_node(&self, node_id: u64) -> Result<OsmNode, OsmDataError>;
}
