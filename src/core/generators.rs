/*!
# Graph Generators

This module provides the synthetic input used by benchmarks and tests: a
uniform random simple graph with a caller-chosen vertex count, exact edge
count, and weights drawn uniformly from `[1.0, 10.0)`.

The generator is keyed by a seed for reproducibility. Invalid parameters
(zero vertices, more edges than a simple graph admits) return a
[`crate::core::error::ArboraError`].

# Examples

```rust
use arbora::core::generators::random_graph;

let graph = random_graph(100, 250, 42).expect("Failed to generate graph");
assert_eq!(graph.vertex_count(), 100);
assert_eq!(graph.edge_count(), 500); // directed records
```
*/

use crate::core::error::{ArboraError, Result};
use crate::core::types::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Generates a random simple undirected graph.
///
/// # Arguments
///
/// * `vertex_count` - The number of vertices (must be > 0).
/// * `edge_count` - The exact number of undirected edges to produce.
/// * `seed` - The seed for the random number generator.
///
/// Endpoints are drawn uniformly from `0..vertex_count`; self-loops and
/// duplicate pairs are rejection-sampled away, so the result always has
/// exactly `edge_count` distinct undirected edges. Weights are uniform in
/// `[1.0, 10.0)`.
pub fn random_graph(vertex_count: u32, edge_count: usize, seed: u64) -> Result<Graph> {
    if vertex_count == 0 {
        return Err(ArboraError::invalid_input(
            "Number of vertices must be greater than zero.",
        ));
    }
    let max_edges = u64::from(vertex_count) * u64::from(vertex_count - 1) / 2;
    if edge_count as u64 > max_edges {
        return Err(ArboraError::invalid_input(format!(
            "{} edges requested but a simple graph on {} vertices has at most {}",
            edge_count, vertex_count, max_edges
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::with_capacity(edge_count);
    let mut edges = Vec::with_capacity(edge_count);
    while edges.len() < edge_count {
        let a = rng.random_range(0..vertex_count);
        let b = rng.random_range(0..vertex_count);
        if a == b {
            continue;
        }
        if !seen.insert((a.min(b), a.max(b))) {
            continue;
        }
        let weight: f32 = rng.random_range(1.0..10.0);
        edges.push((a, b, weight));
    }

    Graph::from_undirected(vertex_count, &edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_graph_counts() {
        let graph = random_graph(50, 120, 7).unwrap();
        assert_eq!(graph.vertex_count(), 50);
        assert_eq!(graph.edge_count(), 240);
        assert_eq!(graph.original_vertex_count(), 50);
    }

    #[test]
    fn test_random_graph_is_simple_with_bounded_weights() {
        let graph = random_graph(30, 100, 99).unwrap();
        for edge in graph.edges() {
            assert_ne!(edge.from, edge.to);
            assert!(edge.from < 30 && edge.to < 30);
            assert!((1.0..10.0).contains(&edge.weight));
        }
    }

    #[test]
    fn test_random_graph_is_deterministic() {
        let a = random_graph(40, 80, 1234).unwrap();
        let b = random_graph(40, 80, 1234).unwrap();
        assert_eq!(a.edges(), b.edges());
        for (x, y) in a.edges().iter().zip(b.edges()) {
            assert_eq!(x.weight.to_bits(), y.weight.to_bits());
        }
        let c = random_graph(40, 80, 4321).unwrap();
        assert_ne!(a.edges(), c.edges());
    }

    #[test]
    fn test_random_graph_rejects_zero_vertices() {
        assert!(random_graph(0, 5, 1).is_err());
    }

    #[test]
    fn test_random_graph_rejects_too_many_edges() {
        // K4 has 6 edges.
        assert!(random_graph(4, 7, 1).is_err());
        assert!(random_graph(4, 6, 1).is_ok());
    }
}
