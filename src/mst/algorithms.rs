/*!
# Sequential Kruskal Reference

A straightforward Kruskal implementation over the engine's directed edge
array, used as the verification oracle for the parallel pipeline. Edges are
sorted by `(weight, from, to)`, with weights wrapped in
[`ordered_float::OrderedFloat`] for a total order, and joined through a
sequential union–find with path compression and union by rank.

The directed array stores every undirected edge twice; the reference
considers only the `from < to` direction, so each undirected edge is
examined once.
*/

use crate::core::error::{ArboraError, Result};
use crate::core::types::Edge;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// A simple union–find (disjoint-set) data structure.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    /// Creates a new union–find structure for `n` elements.
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Finds the representative of the set that contains `i`, using path compression.
    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            self.parent[i] = self.find(self.parent[i]);
        }
        self.parent[i]
    }

    /// Unions the sets containing `i` and `j` using union by rank.
    fn union(&mut self, i: usize, j: usize) {
        let i = self.find(i);
        let j = self.find(j);
        if i == j {
            return;
        }
        match self.rank[i].cmp(&self.rank[j]) {
            Ordering::Less => self.parent[i] = j,
            Ordering::Greater => self.parent[j] = i,
            Ordering::Equal => {
                self.parent[j] = i;
                self.rank[i] += 1;
            }
        }
    }
}

/// Summary of a sequential MST computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MstSummary {
    /// Total weight of the spanning forest.
    pub total_weight: f64,
    /// Number of tree edges selected.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
}

/// Computes the minimum spanning forest of the given directed edge array
/// with Kruskal's algorithm.
///
/// # Example
///
/// ```rust
/// use arbora::core::types::Graph;
/// use arbora::mst::kruskal_mst;
///
/// let graph = Graph::from_undirected(3, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)]).unwrap();
/// let summary = kruskal_mst(graph.original_vertex_count(), graph.edges()).unwrap();
/// assert_eq!(summary.total_weight, 3.0);
/// assert_eq!(summary.component_count, 1);
/// ```
pub fn kruskal_mst(vertex_count: u32, edges: &[Edge]) -> Result<MstSummary> {
    if vertex_count == 0 {
        return Err(ArboraError::invalid_graph(
            "Graph is empty, cannot compute MST.",
        ));
    }

    let mut undirected: Vec<&Edge> = edges.iter().filter(|e| e.from < e.to).collect();
    undirected.sort_by_key(|e| (OrderedFloat(e.weight), e.from, e.to));

    let mut uf = UnionFind::new(vertex_count as usize);
    let mut total_weight = 0.0f64;
    let mut edge_count = 0;

    for edge in undirected {
        let ru = uf.find(edge.from as usize);
        let rv = uf.find(edge.to as usize);
        if ru != rv {
            uf.union(ru, rv);
            total_weight += f64::from(edge.weight);
            edge_count += 1;
        }
    }

    let component_count = vertex_count as usize - edge_count;
    Ok(MstSummary {
        total_weight,
        edge_count,
        component_count,
    })
}
