/*!
# MinEdge Phase

First phase of a Borůvka round. Every worker scans its chunk of the
directed edge array and records, in a private array sized to the original
vertex count, the cheapest edge leaving each vertex it encounters.

Updates use strict `<`, so on equal weights the edge seen first wins.
Combined with the chunk-ordered reduction this makes the global minimum
array independent of the worker count.
*/

use crate::core::error::{ArboraError, Result};
use crate::core::types::{Edge, NULL_EDGE};
use crate::engine::pool::WorkerPool;

/// Computes the per-worker local minimum arrays.
///
/// Returns one array per worker; entry `v` is the cheapest edge with
/// `from == v` in that worker's chunk, or [`NULL_EDGE`]. An endpoint at or
/// beyond `original_vertex_count` is a fatal error: the graph is corrupt.
pub fn min_edge_phase(
    pool: &WorkerPool,
    edges: &[Edge],
    original_vertex_count: u32,
) -> Result<Vec<Vec<Edge>>> {
    let bound = original_vertex_count;
    pool.parallel_for(edges.len(), |start, stop, _worker| {
        let mut local = vec![NULL_EDGE; bound as usize];
        for edge in &edges[start..stop] {
            if edge.from >= bound || edge.to >= bound {
                return Err(ArboraError::out_of_range(edge.from.max(edge.to), bound));
            }
            let slot = &mut local[edge.from as usize];
            if edge.weight < slot.weight {
                *slot = *edge;
            }
        }
        Ok(local)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: u32, to: u32, weight: f32) -> Edge {
        Edge::new(from, to, weight)
    }

    #[test]
    fn test_picks_cheapest_per_vertex() {
        let pool = WorkerPool::new(1).unwrap();
        let edges = vec![edge(0, 1, 3.0), edge(0, 2, 1.0), edge(1, 0, 3.0), edge(2, 0, 1.0)];
        let locals = min_edge_phase(&pool, &edges, 3).unwrap();
        assert_eq!(locals.len(), 1);
        assert_eq!(locals[0][0], edge(0, 2, 1.0));
        assert_eq!(locals[0][1], edge(1, 0, 3.0));
        assert!(locals[0][2] == edge(2, 0, 1.0));
    }

    #[test]
    fn test_ties_keep_first_seen() {
        let pool = WorkerPool::new(1).unwrap();
        let edges = vec![edge(0, 1, 2.0), edge(0, 2, 2.0)];
        let locals = min_edge_phase(&pool, &edges, 3).unwrap();
        assert_eq!(locals[0][0].to, 1);
    }

    #[test]
    fn test_untouched_vertices_stay_null() {
        let pool = WorkerPool::new(2).unwrap();
        let edges = vec![edge(0, 1, 1.0), edge(1, 0, 1.0)];
        let locals = min_edge_phase(&pool, &edges, 4).unwrap();
        for local in &locals {
            assert!(local[2].is_null());
            assert!(local[3].is_null());
        }
    }

    #[test]
    fn test_chunks_are_worker_private() {
        let pool = WorkerPool::new(2).unwrap();
        let edges = vec![edge(0, 1, 5.0), edge(0, 2, 1.0)];
        // One edge per chunk; each worker sees only its own candidate.
        let locals = min_edge_phase(&pool, &edges, 3).unwrap();
        assert_eq!(locals[0][0], edge(0, 1, 5.0));
        assert_eq!(locals[1][0], edge(0, 2, 1.0));
    }

    #[test]
    fn test_out_of_range_endpoint_is_fatal() {
        let pool = WorkerPool::new(1).unwrap();
        let edges = vec![edge(0, 9, 1.0)];
        let result = min_edge_phase(&pool, &edges, 3);
        assert!(matches!(
            result,
            Err(ArboraError::OutOfRangeVertex { vertex: 9, bound: 3 })
        ));
    }
}
