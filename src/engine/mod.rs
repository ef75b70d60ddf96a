/*!
# Parallel Borůvka Engine

This module contains the per-round parallel pipeline and its scheduling
fabric. A round runs five bulk-synchronous phases over chunked index
ranges:

**MinEdge → Reduce → Contract → FilterEdges → FilterVertices**

MinEdge scans the edge array and records, per worker, the cheapest edge
leaving every vertex. Reduce folds the per-worker arrays into one global
minimum array. Contract unites the endpoints of each minimum edge in the
shared lock-free forest. FilterEdges drops edges that became internal to a
component and relabels survivors to component roots; FilterVertices keeps
only component roots. The driver swaps the filtered arrays in and repeats
until one active vertex remains (or a round stops making progress, for
disconnected inputs).

All phases distribute work with [`pool::WorkerPool::parallel_for`], which
maps a body over the deterministic chunks of [`pool::split_ranges`] and
barriers before returning.
*/

pub mod contract;
pub mod driver;
pub mod filter_edges;
pub mod filter_vertices;
pub mod min_edge;
pub mod pool;
pub mod reduce;

// Re-export the main entry points for convenience
pub use driver::{BoruvkaEngine, RoundStats, SpanningForest};
pub use pool::{WorkerPool, split_ranges};
