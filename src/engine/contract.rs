/*!
# Contract Phase

Third phase of a Borůvka round. Walks the global minimum array and unites
the endpoints of every candidate edge in the shared lock-free forest,
merging each component with its cheapest neighbour.

Workers race on the forest; that is safe because `unite` is lock-free and
linearizable per cell. The phase returns the summed weight of the edges
that were actually linked this round. Only the call whose compare-and-swap
performed a link counts its edge, so the sum stays exact when two workers
chase the same pair from both directions. Weights are accumulated in `f64`,
where sums of `f32` inputs are exact at any realistic scale, making the
total independent of commit order.
*/

use crate::core::dsu::DisjointSets;
use crate::core::error::Result;
use crate::core::types::Edge;
use crate::engine::pool::WorkerPool;

/// Unites the endpoints of every non-null entry of `global_minima` and
/// returns the total weight of edges united this round.
pub fn contract_phase(
    pool: &WorkerPool,
    global_minima: &[Edge],
    forest: &DisjointSets,
) -> Result<f64> {
    let sums = pool.parallel_for(global_minima.len(), |start, stop, _worker| {
        let mut united = 0.0f64;
        for edge in &global_minima[start..stop] {
            if edge.is_null() {
                continue;
            }
            if !forest.same(edge.from, edge.to) {
                let (_root, linked) = forest.unite_tracked(edge.from, edge.to);
                if linked {
                    united += f64::from(edge.weight);
                }
            }
        }
        Ok(united)
    })?;
    Ok(sums.into_iter().sum())
}
