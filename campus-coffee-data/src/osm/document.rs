//! Extraction of point-of-sale fields from an OSM node document.
//!
//! The OSM API answers `GET /node/{id}` with a document of the form
//! `<osm><node id=".."><tag k=".." v=".."/>..</node></osm>`. Only the first
//! `node` element and its `tag` children are read.
//!
//! See: <https://wiki.openstreetmap.org/wiki/API_v0.6#Read:_GET_/api/0.6/[node|way|relation]/#id>

use campus_coffee_core::{CampusType, OsmNode, PosType};
use roxmltree::Document;
use thiserror::Error;

/// Reasons a response body could not be turned into an [`OsmNode`].
#[derive(Debug, Error)]
pub enum NodeDocumentError {
    /// The body is not well-formed XML.
    #[error("malformed OSM XML: {0}")]
    Malformed(#[from] roxmltree::Error),
    /// The document has no `node` element.
    #[error("OSM document contains no node element")]
    MissingNode,
}

/// Parse an OSM node document into an [`OsmNode`] carrying `node_id`.
///
/// Tags are applied in document order and later tags overwrite earlier
/// ones. A tag whose value cannot be interpreted (a postcode without digits,
/// an unknown `amenity`) leaves the field as it was.
///
/// # Examples
/// ```
/// use campus_coffee_data::osm::parse_node_document;
///
/// let xml = r#"<osm><node id="1"><tag k="addr:postcode" v="DE-69120"/></node></osm>"#;
/// let node = parse_node_document(1, xml)?;
/// assert_eq!(node.postal_code, Some(69120));
/// # Ok::<(), campus_coffee_data::osm::NodeDocumentError>(())
/// ```
pub fn parse_node_document(node_id: u64, xml: &str) -> Result<OsmNode, NodeDocumentError> {
    let document = Document::parse(xml)?;
    let element = document
        .descendants()
        .find(|candidate| candidate.has_tag_name("node"))
        .ok_or(NodeDocumentError::MissingNode)?;

    let mut node = OsmNode::new(node_id);
    for tag in element
        .descendants()
        .filter(|candidate| candidate.has_tag_name("tag"))
    {
        // Absent attributes read as empty, like a DOM `getAttribute`.
        let key = tag.attribute("k").unwrap_or_default();
        let value = tag.attribute("v").unwrap_or_default();
        apply_tag(&mut node, key, value);
    }
    Ok(node)
}

fn apply_tag(node: &mut OsmNode, key: &str, value: &str) {
    match key {
        "name" => node.name = Some(value.to_owned()),
        "addr:street" => node.street = Some(value.to_owned()),
        "addr:housenumber" => node.house_number = Some(value.to_owned()),
        "addr:postcode" => {
            if let Some(code) = parse_postal_code(value) {
                node.postal_code = Some(code);
            }
        }
        "addr:city" => node.city = Some(value.to_owned()),
        "amenity" | "shop" => {
            if let Ok(pos_type) = value.parse::<PosType>() {
                node.pos_type = Some(pos_type);
            }
        }
        "campus" | "seuhd:campus" => {
            if let Ok(campus) = value.parse::<CampusType>() {
                node.campus = Some(campus);
            }
        }
        _ => {}
    }
}

/// Keep the ASCII digits of `value` and read them as a number no larger
/// than `i32::MAX`.
fn parse_postal_code(value: &str) -> Option<u32> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    digits
        .parse::<i32>()
        .ok()
        .and_then(|code| u32::try_from(code).ok())
}
