//! The country adjacency map.
//!
//! Built exactly once per loaded topology: shared-arc neighbor indices are
//! derived for the `countries` collection, raw labels are rewritten to
//! display names, self-matches are dropped (a country split into several
//! polygons borders itself through its own label), and territories that end
//! up with no neighbors at all are omitted — their absence is what marks
//! them unplayable in Neighbors mode.
//!
//! BTree-backed so iteration order is deterministic run to run.

use std::collections::{BTreeMap, BTreeSet};

use crate::country::{self, CountryId};
use crate::name::dataset::remap_label;
use crate::topology::{derive_neighbors, Topology, TopologyError, COUNTRY_COLLECTION};

/// Display-name -> bordering display names. Symmetric and irreflexive by
/// construction; immutable once built.
#[derive(Debug, Clone)]
pub struct AdjacencyMap {
    borders: BTreeMap<String, BTreeSet<String>>,
}

impl AdjacencyMap {
    /// Derives the adjacency relation from a parsed topology.
    ///
    /// Fails fast on a malformed topology; callers never see a partial map.
    pub fn build(topology: &Topology) -> Result<AdjacencyMap, TopologyError> {
        let geometries = topology.collection(COUNTRY_COLLECTION)?;
        let index_neighbors = derive_neighbors(geometries, topology.arc_count())?;
        let labels: Vec<&str> = geometries
            .iter()
            .map(|g| remap_label(&g.properties.name))
            .collect();

        let mut borders: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (i, adjacent) in index_neighbors.iter().enumerate() {
            let name = labels[i];
            if name.is_empty() {
                log::warn!("skipping unnamed geometry #{i}");
                continue;
            }
            let entry = borders.entry(name.to_string()).or_default();
            for &j in adjacent {
                let other = labels[j];
                if other.is_empty() || other == name {
                    continue;
                }
                entry.insert(other.to_string());
            }
        }

        let total = borders.len();
        borders.retain(|_, neighbors| !neighbors.is_empty());
        log::debug!("{} isolated territories omitted", total - borders.len());
        log::info!(
            "adjacency map built: {} bordered territories from {} geometries",
            borders.len(),
            geometries.len()
        );
        Ok(AdjacencyMap { borders })
    }

    /// Returns the neighbor set for a display name. `None` means the
    /// territory is unknown or has no land neighbors.
    pub fn neighbors(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.borders.get(name)
    }

    /// True if the display name has at least one neighbor.
    pub fn contains(&self, name: &str) -> bool {
        self.borders.contains_key(name)
    }

    /// Number of territories with at least one neighbor.
    pub fn len(&self) -> usize {
        self.borders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.borders.is_empty()
    }

    /// Iterates entries in display-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.borders.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Canonical countries eligible as Neighbors-mode targets: at least two
    /// neighbors in the map. Zero- and one-neighbor countries make trivial
    /// rounds and are excluded.
    pub fn playable_targets(&self) -> Vec<CountryId> {
        country::all()
            .filter(|id| {
                self.neighbors(id.name())
                    .is_some_and(|neighbors| neighbors.len() >= 2)
            })
            .collect()
    }
}
