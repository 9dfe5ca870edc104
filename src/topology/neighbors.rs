//! Shared-arc neighbor derivation.
//!
//! Two geometries border each other iff at least one arc appears in both,
//! in either direction. The computation inverts the geometry->arcs relation
//! into an arc->geometries index and pairs the co-users of every arc.
//! Output order is deterministic for identical input: neighbor lists are
//! kept sorted as they are built.

use super::{TopoGeometry, TopologyError};

/// Resolves a raw arc reference to its pool index (`~i` encodes reversal).
#[inline]
fn arc_index(raw: i32) -> usize {
    if raw < 0 {
        !raw as usize
    } else {
        raw as usize
    }
}

/// Computes, for each geometry, the sorted indices of the geometries it
/// shares at least one arc with. Self-pairs cannot occur; an out-of-range
/// arc reference fails the whole derivation.
pub fn derive_neighbors(
    geometries: &[TopoGeometry],
    arc_count: usize,
) -> Result<Vec<Vec<usize>>, TopologyError> {
    let mut arc_users: Vec<Vec<usize>> = vec![Vec::new(); arc_count];
    for (geometry_index, geometry) in geometries.iter().enumerate() {
        for raw in geometry.shape.arc_refs() {
            let arc = arc_index(raw);
            if arc >= arc_count {
                return Err(TopologyError::ArcOutOfRange {
                    index: raw,
                    arc_count,
                });
            }
            let users = &mut arc_users[arc];
            // A ring can reference the same arc twice (forward and reverse).
            if !users.contains(&geometry_index) {
                users.push(geometry_index);
            }
        }
    }

    let mut neighbors = vec![Vec::new(); geometries.len()];
    for users in &arc_users {
        for (i, &a) in users.iter().enumerate() {
            for &b in &users[i + 1..] {
                insert_sorted(&mut neighbors[a], b);
                insert_sorted(&mut neighbors[b], a);
            }
        }
    }
    Ok(neighbors)
}

fn insert_sorted(list: &mut Vec<usize>, value: usize) {
    if let Err(position) = list.binary_search(&value) {
        list.insert(position, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Topology;

    fn geometries(json: &str) -> (Topology, usize) {
        let topology = Topology::from_json(json).unwrap();
        let count = topology.arc_count();
        (topology, count)
    }

    fn topo(arcs: usize, polygons: &[(&str, &str)]) -> String {
        let geoms: Vec<String> = polygons
            .iter()
            .map(|(name, rings)| {
                format!(
                    r#"{{"type": "Polygon", "arcs": {rings}, "properties": {{"name": "{name}"}}}}"#
                )
            })
            .collect();
        let arc_pool: Vec<&str> = (0..arcs).map(|_| "[[0.0, 0.0], [1.0, 1.0]]").collect();
        format!(
            r#"{{"type": "Topology", "objects": {{"countries": {{"type": "GeometryCollection", "geometries": [{}]}}}}, "arcs": [{}]}}"#,
            geoms.join(", "),
            arc_pool.join(", ")
        )
    }

    #[test]
    fn shared_arc_makes_neighbors() {
        let json = topo(3, &[("a", "[[0, 1]]"), ("b", "[[-1, 2]]")]);
        let (topology, arcs) = geometries(&json);
        let countries = topology.collection("countries").unwrap();
        let neighbors = derive_neighbors(countries, arcs).unwrap();
        assert_eq!(neighbors, vec![vec![1], vec![0]]);
    }

    #[test]
    fn reversed_reference_is_the_same_arc() {
        // b references arc 0 as ~0 (-1): still a shared border with a.
        let json = topo(2, &[("a", "[[0]]"), ("b", "[[-1, 1]]")]);
        let (topology, arcs) = geometries(&json);
        let countries = topology.collection("countries").unwrap();
        let neighbors = derive_neighbors(countries, arcs).unwrap();
        assert_eq!(neighbors[0], vec![1]);
        assert_eq!(neighbors[1], vec![0]);
    }

    #[test]
    fn disjoint_geometries_have_no_neighbors() {
        let json = topo(2, &[("a", "[[0]]"), ("b", "[[1]]")]);
        let (topology, arcs) = geometries(&json);
        let countries = topology.collection("countries").unwrap();
        let neighbors = derive_neighbors(countries, arcs).unwrap();
        assert!(neighbors[0].is_empty());
        assert!(neighbors[1].is_empty());
    }

    #[test]
    fn three_way_border_pairs_everyone() {
        let json = topo(
            2,
            &[("a", "[[0]]"), ("b", "[[-1]]"), ("c", "[[0, 1]]")],
        );
        let (topology, arcs) = geometries(&json);
        let countries = topology.collection("countries").unwrap();
        let neighbors = derive_neighbors(countries, arcs).unwrap();
        assert_eq!(neighbors[0], vec![1, 2]);
        assert_eq!(neighbors[1], vec![0, 2]);
        assert_eq!(neighbors[2], vec![0, 1]);
    }

    #[test]
    fn repeated_arc_use_is_not_a_self_neighbor() {
        // One geometry referencing an arc both ways pairs with nobody.
        let json = topo(1, &[("a", "[[0, -1]]")]);
        let (topology, arcs) = geometries(&json);
        let countries = topology.collection("countries").unwrap();
        let neighbors = derive_neighbors(countries, arcs).unwrap();
        assert!(neighbors[0].is_empty());
    }

    #[test]
    fn out_of_range_reference_fails_fast() {
        let json = topo(1, &[("a", "[[0, 5]]")]);
        let (topology, arcs) = geometries(&json);
        let countries = topology.collection("countries").unwrap();
        match derive_neighbors(countries, arcs) {
            Err(TopologyError::ArcOutOfRange { index, arc_count }) => {
                assert_eq!(index, 5);
                assert_eq!(arc_count, 1);
            }
            other => panic!("expected ArcOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn symmetry_holds_for_every_pair() {
        let json = topo(
            6,
            &[
                ("a", "[[0, 1, 2]]"),
                ("b", "[[-1, 3]]"),
                ("c", "[[-2, -4, 4]]"),
                ("d", "[[5]]"),
            ],
        );
        let (topology, arcs) = geometries(&json);
        let countries = topology.collection("countries").unwrap();
        let neighbors = derive_neighbors(countries, arcs).unwrap();
        for (i, list) in neighbors.iter().enumerate() {
            for &j in list {
                assert!(
                    neighbors[j].contains(&i),
                    "{} lists {} but not vice versa",
                    i,
                    j
                );
                assert_ne!(i, j, "self-neighbor at {}", i);
            }
        }
    }
}
