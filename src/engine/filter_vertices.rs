/*!
# FilterVertices Phase

Fifth phase of a Borůvka round. Scans the *current* vertex array (not the
full original id space, so the work shrinks round over round) and keeps
only component roots; a vertex linked under another parent is represented
by its root from now on.

Output order is the concatenation of the worker chunks, as in the edge
filter.
*/

use crate::core::dsu::DisjointSets;
use crate::core::error::Result;
use crate::engine::pool::WorkerPool;

/// Returns the vertices surviving into the next round: the roots of the
/// forest among the currently active vertices.
pub fn filter_vertices_phase(
    pool: &WorkerPool,
    vertices: &[u32],
    forest: &DisjointSets,
) -> Result<Vec<u32>> {
    let kept = pool.parallel_for(vertices.len(), |start, stop, _worker| {
        let mut kept = Vec::new();
        for &vertex in &vertices[start..stop] {
            if forest.parent(vertex) == vertex {
                kept.push(vertex);
            }
        }
        Ok(kept)
    })?;
    Ok(kept.into_iter().flatten().collect())
}
