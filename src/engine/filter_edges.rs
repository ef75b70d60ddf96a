/*!
# FilterEdges Phase

Fourth phase of a Borůvka round. Scans the edge array and keeps only edges
whose endpoints still lie in different components; edges internal to a
component can never join the tree again and are dropped.

Each survivor is relabeled to the current component roots, so from the next
round on the `from` endpoint identifies a component and the MinEdge scan
computes per-component minima. This is the contraction step: surviving
edges connect super-nodes.

Output order is the concatenation of the worker chunks, original order
preserved within each chunk, fixing a deterministic edge order between
rounds.
*/

use crate::core::dsu::DisjointSets;
use crate::core::error::Result;
use crate::core::types::Edge;
use crate::engine::pool::WorkerPool;

/// Returns the edges surviving into the next round, relabeled to component
/// roots.
pub fn filter_edges_phase(
    pool: &WorkerPool,
    edges: &[Edge],
    forest: &DisjointSets,
) -> Result<Vec<Edge>> {
    let kept = pool.parallel_for(edges.len(), |start, stop, _worker| {
        let mut kept = Vec::new();
        for edge in &edges[start..stop] {
            if !forest.same(edge.from, edge.to) {
                kept.push(Edge::new(
                    forest.find(edge.from),
                    forest.find(edge.to),
                    edge.weight,
                ));
            }
        }
        Ok(kept)
    })?;
    Ok(kept.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: u32, to: u32, weight: f32) -> Edge {
        Edge::new(from, to, weight)
    }

    #[test]
    fn test_drops_intra_component_edges() {
        let pool = WorkerPool::new(2).unwrap();
        let forest = DisjointSets::new(4);
        forest.unite(0, 1);
        let edges = vec![edge(0, 1, 1.0), edge(1, 0, 1.0), edge(1, 2, 2.0), edge(2, 1, 2.0)];
        let kept = filter_edges_phase(&pool, &edges, &forest).unwrap();
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|e| !forest.same(e.from, e.to)));
    }

    #[test]
    fn test_survivors_are_relabeled_to_roots() {
        let pool = WorkerPool::new(1).unwrap();
        let forest = DisjointSets::new(4);
        forest.unite(0, 1);
        forest.unite(2, 3);
        let root_a = forest.find(1);
        let root_b = forest.find(3);
        let edges = vec![edge(1, 3, 5.0), edge(3, 1, 5.0)];
        let kept = filter_edges_phase(&pool, &edges, &forest).unwrap();
        assert_eq!(kept[0], edge(root_a, root_b, 5.0));
        assert_eq!(kept[1], edge(root_b, root_a, 5.0));
        assert_eq!(kept[0].weight, 5.0);
    }

    #[test]
    fn test_keeps_chunk_order() {
        let pool = WorkerPool::new(2).unwrap();
        let forest = DisjointSets::new(6);
        let edges = vec![
            edge(0, 1, 1.0),
            edge(2, 3, 2.0),
            edge(4, 5, 3.0),
            edge(1, 0, 1.0),
        ];
        let kept = filter_edges_phase(&pool, &edges, &forest).unwrap();
        // No unions yet: everything survives, order intact.
        assert_eq!(kept, edges);
    }

    #[test]
    fn test_fully_contracted_graph_keeps_nothing() {
        let pool = WorkerPool::new(2).unwrap();
        let forest = DisjointSets::new(3);
        forest.unite(0, 1);
        forest.unite(1, 2);
        let edges = vec![edge(0, 1, 1.0), edge(1, 2, 2.0), edge(0, 2, 3.0)];
        let kept = filter_edges_phase(&pool, &edges, &forest).unwrap();
        assert!(kept.is_empty());
    }
}
