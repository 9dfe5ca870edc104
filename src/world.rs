//! The immutable post-load snapshot.
//!
//! A `World` only exists once the topology has been fetched, parsed, and
//! turned into an adjacency map; "game not ready yet" is simply the absence
//! of a `World` value. Construction either succeeds completely or fails
//! with a `TopologyError` — there is no half-built state to observe.

use crate::adjacency::AdjacencyMap;
use crate::country::CountryId;
use crate::name::{remap_label, AliasTable};
use crate::topology::{Topology, TopologyError};

/// Alias table plus adjacency map, built once and read-only thereafter.
#[derive(Debug, Clone)]
pub struct World {
    aliases: AliasTable,
    adjacency: AdjacencyMap,
}

impl World {
    /// Builds the session snapshot from a parsed topology.
    pub fn from_topology(topology: &Topology) -> Result<World, TopologyError> {
        let adjacency = AdjacencyMap::build(topology)?;
        Ok(World {
            aliases: AliasTable::new(),
            adjacency,
        })
    }

    /// Parses raw topology JSON and builds the snapshot in one step.
    pub fn from_json(input: &str) -> Result<World, TopologyError> {
        World::from_topology(&Topology::from_json(input)?)
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn adjacency(&self) -> &AdjacencyMap {
        &self.adjacency
    }

    /// Resolves raw player input to a canonical country.
    pub fn resolve(&self, raw: &str) -> Option<CountryId> {
        self.aliases.resolve(raw)
    }

    /// Resolves a raw dataset label — as the renderer reports for a clicked
    /// or hovered region — to a canonical country. `None` for territories.
    pub fn resolve_label(&self, raw: &str) -> Option<CountryId> {
        CountryId::from_name(remap_label(raw))
    }
}
