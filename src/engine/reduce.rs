/*!
# Reduce Phase

Second phase of a Borůvka round. Folds the per-worker local minimum arrays
of the MinEdge phase into a single global minimum array.

The vertex index space is chunked; each worker owns a disjoint slice of the
output and scans the same indices across every local array. Disjoint output
slices mean no synchronization is needed. Strict `<` keeps the candidate of
the earliest worker on ties, which is also the earliest edge in the round's
edge order.
*/

use crate::core::error::Result;
use crate::core::types::{Edge, NULL_EDGE};
use crate::engine::pool::WorkerPool;

/// Reduces the local minimum arrays to `global_min[0..original_vertex_count]`.
pub fn reduce_phase(
    pool: &WorkerPool,
    local_minima: &[Vec<Edge>],
    original_vertex_count: u32,
) -> Result<Vec<Edge>> {
    let slices = pool.parallel_for(original_vertex_count as usize, |start, stop, _worker| {
        let mut out = Vec::with_capacity(stop - start);
        for i in start..stop {
            let mut best = NULL_EDGE;
            for local in local_minima {
                if local[i].weight < best.weight {
                    best = local[i];
                }
            }
            out.push(best);
        }
        Ok(out)
    })?;
    Ok(slices.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::min_edge::min_edge_phase;

    fn edge(from: u32, to: u32, weight: f32) -> Edge {
        Edge::new(from, to, weight)
    }

    #[test]
    fn test_reduce_keeps_global_minimum() {
        let pool = WorkerPool::new(2).unwrap();
        let locals = vec![
            vec![edge(0, 1, 4.0), NULL_EDGE, edge(2, 0, 9.0)],
            vec![edge(0, 2, 2.0), edge(1, 2, 1.0), NULL_EDGE],
        ];
        let global = reduce_phase(&pool, &locals, 3).unwrap();
        assert_eq!(global.len(), 3);
        assert_eq!(global[0], edge(0, 2, 2.0));
        assert_eq!(global[1], edge(1, 2, 1.0));
        assert_eq!(global[2], edge(2, 0, 9.0));
    }

    #[test]
    fn test_reduce_ties_prefer_earlier_worker() {
        let pool = WorkerPool::new(1).unwrap();
        let locals = vec![vec![edge(0, 1, 2.0)], vec![edge(0, 2, 2.0)]];
        let global = reduce_phase(&pool, &locals, 1).unwrap();
        assert_eq!(global[0].to, 1);
    }

    #[test]
    fn test_reduce_all_null_stays_null() {
        let pool = WorkerPool::new(3).unwrap();
        let locals = vec![vec![NULL_EDGE; 5], vec![NULL_EDGE; 5]];
        let global = reduce_phase(&pool, &locals, 5).unwrap();
        assert!(global.iter().all(Edge::is_null));
    }

    #[test]
    fn test_minedge_then_reduce_matches_single_worker() {
        // global_min must not depend on how the edge scan was chunked.
        let edges = vec![
            edge(0, 1, 3.0),
            edge(1, 0, 3.0),
            edge(1, 2, 1.0),
            edge(2, 1, 1.0),
            edge(0, 2, 2.0),
            edge(2, 0, 2.0),
        ];
        let sequential = {
            let pool = WorkerPool::new(1).unwrap();
            let locals = min_edge_phase(&pool, &edges, 3).unwrap();
            reduce_phase(&pool, &locals, 3).unwrap()
        };
        for workers in [2usize, 3, 4] {
            let pool = WorkerPool::new(workers).unwrap();
            let locals = min_edge_phase(&pool, &edges, 3).unwrap();
            let global = reduce_phase(&pool, &locals, 3).unwrap();
            assert_eq!(global, sequential);
            for (a, b) in global.iter().zip(&sequential) {
                assert_eq!(a.weight.to_bits(), b.weight.to_bits());
            }
        }
    }
}
