//! Raw Overpass payload structures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level Overpass API response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverpassResponse {
    /// Matched elements, in server order
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// A single geospatial entity returned by the query.
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    /// Element kind; id values are only unique within a kind
    #[serde(rename = "type")]
    pub kind: ElementKind,

    /// OSM identifier
    pub id: i64,

    /// Tag attributes; every tag is optional
    #[serde(default)]
    pub tags: ElementTags,

    /// Own latitude (nodes)
    pub lat: Option<f64>,

    /// Own longitude (nodes)
    pub lon: Option<f64>,

    /// Computed center (ways queried with `out center`)
    pub center: Option<Center>,
}

impl Element {
    /// Identity pair used for deduplication.
    pub fn identity(&self) -> (ElementKind, i64) {
        (self.kind, self.id)
    }

    /// Resolve the element's coordinates.
    ///
    /// Nodes carry their own position, ways a computed center;
    /// anything else has none.
    pub fn coordinates(&self) -> (Option<f64>, Option<f64>) {
        match self.kind {
            ElementKind::Node => (self.lat, self.lon),
            ElementKind::Way => match &self.center {
                Some(center) => (center.lat, center.lon),
                None => (None, None),
            },
            ElementKind::Relation => (None, None),
        }
    }
}

/// OSM element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
    Relation,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Node => "node",
            ElementKind::Way => "way",
            ElementKind::Relation => "relation",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computed center point of a way.
#[derive(Debug, Clone, Deserialize)]
pub struct Center {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Tag attributes of an element.
///
/// Tags are free-form in the source data; only the ones this tool
/// reads are modeled, each as an optional field. Absent tags
/// deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElementTags {
    pub name: Option<String>,
    pub shop: Option<String>,
    pub craft: Option<String>,

    #[serde(rename = "addr:street")]
    pub street: Option<String>,

    #[serde(rename = "addr:housenumber")]
    pub housenumber: Option<String>,

    #[serde(rename = "addr:city")]
    pub city: Option<String>,

    #[serde(rename = "addr:postcode")]
    pub postcode: Option<String>,

    pub description: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}
