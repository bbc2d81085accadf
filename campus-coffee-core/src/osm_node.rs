use crate::{CampusType, PosType};

/// An OpenStreetMap node reduced to the fields a point of sale needs.
///
/// Every field except the id is optional because OSM tagging is
/// inconsistent. The house number stays the raw `addr:housenumber` value.
///
/// # Examples
/// ```
/// use campus_coffee_core::{OsmNode, PosType};
///
/// let node = OsmNode {
///     name: Some("Café X".into()),
///     pos_type: Some(PosType::Cafe),
///     ..OsmNode::new(5_589_879_349)
/// };
///
/// assert_eq!(node.node_id, 5_589_879_349);
/// assert!(node.street.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OsmNode {
    /// OSM node id the record was requested for.
    pub node_id: u64,
    /// `name` tag.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    /// `addr:street` tag.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub street: Option<String>,
    /// `addr:housenumber` tag, unparsed.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub house_number: Option<String>,
    /// Digits of the `addr:postcode` tag.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub postal_code: Option<u32>,
    /// `addr:city` tag.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub city: Option<String>,
    /// Kind of point of sale, from `amenity` or `shop`.
    #[cfg_attr(
        feature = "serde",
        serde(default, rename = "type", skip_serializing_if = "Option::is_none")
    )]
    pub pos_type: Option<PosType>,
    /// Campus, from `campus` or `seuhd:campus`.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub campus: Option<CampusType>,
}

impl OsmNode {
    /// Construct a record carrying only the node id.
    #[must_use]
    pub const fn new(node_id: u64) -> Self {
        Self {
            node_id,
            name: None,
            street: None,
            house_number: None,
            postal_code: None,
            city: None,
            pos_type: None,
            campus: None,
        }
    }
}
