//! Arc-encoded polygon topology input.
//!
//! The map data arrives as a single topology document: a shared pool of
//! boundary arcs plus named geometry objects whose polygons reference arcs
//! by index. A negative reference `~i` means arc `i` traversed in reverse;
//! both directions identify the same physical arc, which is what makes
//! shared-border detection a matter of index bookkeeping rather than
//! geometric intersection (see `neighbors`).
//!
//! Country boundaries live in a geometry collection named `countries`; a
//! coarser `land` object may accompany it for background rendering, but the
//! core never requires it.

use std::collections::BTreeMap;

use serde::Deserialize;

pub mod neighbors;

pub use neighbors::derive_neighbors;

/// Name of the geometry collection holding country boundaries.
pub const COUNTRY_COLLECTION: &str = "countries";

/// Errors that make a topology unusable for adjacency building.
///
/// All of these are fatal: the build fails fast rather than yielding a
/// partial map, since an empty map is indistinguishable from "every country
/// is an island".
#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    #[error("invalid topology JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected type \"Topology\", got \"{0}\"")]
    NotATopology(String),

    #[error("missing geometry collection '{0}'")]
    MissingCollection(String),

    #[error("object '{0}' is not a geometry collection")]
    NotACollection(String),

    #[error("arc reference {index} out of range ({arc_count} arcs)")]
    ArcOutOfRange { index: i32, arc_count: usize },
}

/// A parsed topology document.
#[derive(Debug, Clone, Deserialize)]
pub struct Topology {
    #[serde(rename = "type")]
    kind: String,
    objects: BTreeMap<String, TopoObject>,
    arcs: Vec<Vec<Vec<f64>>>,
}

/// A named top-level object in the topology.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum TopoObject {
    GeometryCollection { geometries: Vec<TopoGeometry> },
    Polygon { arcs: Vec<Vec<i32>> },
    MultiPolygon { arcs: Vec<Vec<Vec<i32>>> },
}

/// One labelled geometry inside a collection.
#[derive(Debug, Clone, Deserialize)]
pub struct TopoGeometry {
    #[serde(flatten)]
    pub shape: Shape,
    #[serde(default)]
    pub properties: Properties,
}

/// Polygon rings as arc references.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Polygon { arcs: Vec<Vec<i32>> },
    MultiPolygon { arcs: Vec<Vec<Vec<i32>>> },
}

/// Feature properties; only the raw label matters to the core.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub name: String,
}

impl Topology {
    /// Parses and validates a topology document.
    pub fn from_json(input: &str) -> Result<Topology, TopologyError> {
        let topology: Topology = serde_json::from_str(input)?;
        if topology.kind != "Topology" {
            return Err(TopologyError::NotATopology(topology.kind));
        }
        Ok(topology)
    }

    /// Returns the geometries of the named collection.
    pub fn collection(&self, name: &str) -> Result<&[TopoGeometry], TopologyError> {
        match self.objects.get(name) {
            Some(TopoObject::GeometryCollection { geometries }) => Ok(geometries),
            Some(_) => Err(TopologyError::NotACollection(name.to_string())),
            None => Err(TopologyError::MissingCollection(name.to_string())),
        }
    }

    /// Number of arcs in the shared pool.
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }
}

impl Shape {
    /// Collects every raw arc reference in the shape, negatives included.
    pub fn arc_refs(&self) -> Vec<i32> {
        match self {
            Shape::Polygon { arcs } => arcs.iter().flatten().copied().collect(),
            Shape::MultiPolygon { arcs } => {
                arcs.iter().flatten().flatten().copied().collect()
            }
        }
    }
}
