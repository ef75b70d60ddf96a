/*!
# Graph Validation Utilities

This module provides common validation functions for the engine's input
graphs: emptiness, connectivity, weight sanity, and the structural
invariants the pipeline relies on (in-range endpoints, no self-loops, a
symmetric directed edge array, no duplicate active vertices). These
utilities centralize precondition checks across tests and loaders.
*/

use crate::core::error::{ArboraError, Result};
use crate::core::types::Graph;
use std::collections::HashSet;

/// Returns true if the graph contains no vertices.
pub fn is_empty(graph: &Graph) -> bool {
    graph.vertex_count() == 0
}

/// Returns true if the graph is connected.
///
/// Runs a sequential union over the edge array and checks that a single
/// component remains among the active vertices.
pub fn is_connected(graph: &Graph) -> bool {
    if graph.vertex_count() == 0 {
        return false; // Conventionally, empty graphs are not considered connected
    }
    let mut parent: Vec<u32> = (0..graph.original_vertex_count()).collect();
    fn find(parent: &mut [u32], mut i: u32) -> u32 {
        while parent[i as usize] != i {
            parent[i as usize] = parent[parent[i as usize] as usize];
            i = parent[i as usize];
        }
        i
    }
    for edge in graph.edges() {
        let a = find(&mut parent, edge.from);
        let b = find(&mut parent, edge.to);
        if a != b {
            parent[a.max(b) as usize] = a.min(b);
        }
    }
    let mut roots = graph
        .vertices()
        .iter()
        .map(|&v| find(&mut parent, v));
    let first = roots.next();
    roots.all(|r| Some(r) == first)
}

/// Returns true if the graph has any negative edge weights.
pub fn has_negative_weights(graph: &Graph) -> bool {
    graph.edges().iter().any(|e| e.weight < 0.0)
}

/// Checks the structural invariants the pipeline assumes.
///
/// Every endpoint must lie in `0..original_vertex_count`, no edge may be a
/// self-loop, each directed record must have its reverse with the same
/// weight, and the active vertex array must be duplicate-free.
pub fn validate_structure(graph: &Graph) -> Result<()> {
    let bound = graph.original_vertex_count();
    let mut directed = HashSet::with_capacity(graph.edge_count());
    for edge in graph.edges() {
        if edge.from >= bound || edge.to >= bound {
            return Err(ArboraError::out_of_range(edge.from.max(edge.to), bound));
        }
        if edge.from == edge.to {
            return Err(ArboraError::invalid_graph(format!(
                "self-loop on vertex {}",
                edge.from
            )));
        }
        directed.insert((edge.from, edge.to, edge.weight.to_bits()));
    }
    for &(from, to, weight) in &directed {
        if !directed.contains(&(to, from, weight)) {
            return Err(ArboraError::invalid_graph(format!(
                "edge {} -> {} has no reverse record",
                from, to
            )));
        }
    }

    let mut seen = HashSet::with_capacity(graph.vertex_count());
    for &vertex in graph.vertices() {
        if vertex >= bound {
            return Err(ArboraError::out_of_range(vertex, bound));
        }
        if !seen.insert(vertex) {
            return Err(ArboraError::invalid_graph(format!(
                "duplicate active vertex {}",
                vertex
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(is_empty(&Graph::from_undirected(0, &[]).unwrap()));
        assert!(!is_empty(&Graph::from_undirected(1, &[]).unwrap()));
    }

    #[test]
    fn test_is_connected() {
        let connected = Graph::from_undirected(3, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
        assert!(is_connected(&connected));

        let split = Graph::from_undirected(4, &[(0, 1, 1.0), (2, 3, 1.0)]).unwrap();
        assert!(!is_connected(&split));

        assert!(!is_connected(&Graph::from_undirected(0, &[]).unwrap()));
        assert!(is_connected(&Graph::from_undirected(1, &[]).unwrap()));
    }

    #[test]
    fn test_has_negative_weights() {
        let ok = Graph::from_undirected(2, &[(0, 1, 1.0)]).unwrap();
        assert!(!has_negative_weights(&ok));
        let neg = Graph::from_undirected(2, &[(0, 1, -1.0)]).unwrap();
        assert!(has_negative_weights(&neg));
    }

    #[test]
    fn test_validate_structure_accepts_constructed_graphs() {
        let graph = Graph::from_undirected(5, &[(0, 1, 1.0), (2, 4, 2.0), (1, 3, 0.5)]).unwrap();
        assert!(validate_structure(&graph).is_ok());
    }
}
