/*!
# Round Driver

Runs Borůvka rounds until the graph is reduced to a single active vertex,
or until a round stops making progress (the input was disconnected and the
result is a spanning forest rather than a tree).

The driver owns the graph between rounds: workers only ever borrow the
current arrays read-only, and the filtered arrays are swapped in while no
worker is running.

The raw forest shape (which endpoint ends up root, the rank values) depends
on how concurrent unites interleave, so it is not a deterministic
observable. After the loop a parallel post-pass derives the canonical
component map (every vertex points at the minimum vertex id of its
component), which, together with the total weight, is identical across
runs and across worker counts.
*/

use crate::core::dsu::DisjointSets;
use crate::core::error::{ArboraError, Result};
use crate::core::types::Graph;
use crate::engine::contract::contract_phase;
use crate::engine::filter_edges::filter_edges_phase;
use crate::engine::filter_vertices::filter_vertices_phase;
use crate::engine::min_edge::min_edge_phase;
use crate::engine::pool::WorkerPool;
use crate::engine::reduce::reduce_phase;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;
use tracing::debug;

/// Timing and size telemetry for one Borůvka round.
#[derive(Debug, Clone)]
pub struct RoundStats {
    pub round: usize,
    pub vertices_before: usize,
    pub vertices_after: usize,
    pub edges_before: usize,
    pub edges_after: usize,
    pub united_weight: f64,
    pub min_edge_us: u128,
    pub reduce_us: u128,
    pub contract_us: u128,
    pub filter_edges_us: u128,
    pub filter_vertices_us: u128,
}

impl RoundStats {
    /// Total time spent in the five phases of this round.
    pub fn total_us(&self) -> u128 {
        self.min_edge_us
            + self.reduce_us
            + self.contract_us
            + self.filter_edges_us
            + self.filter_vertices_us
    }
}

/// The result of a finished run: the canonical component map plus summary
/// figures.
#[derive(Debug, Clone)]
pub struct SpanningForest {
    parents: Vec<u32>,
    total_weight: f64,
    rounds: usize,
    component_count: usize,
}

impl SpanningForest {
    /// The canonical representative of `vertex`'s component: the minimum
    /// vertex id in that component.
    pub fn parent(&self, vertex: u32) -> u32 {
        self.parents[vertex as usize]
    }

    /// The full canonical component map, indexed by vertex id.
    pub fn parents(&self) -> &[u32] {
        &self.parents
    }

    /// True if `a` and `b` ended up in the same component.
    pub fn same_component(&self, a: u32, b: u32) -> bool {
        self.parents[a as usize] == self.parents[b as usize]
    }

    /// Total weight of the edges united across all rounds.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Number of Borůvka rounds executed.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Number of connected components in the final forest.
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// True if the input was connected and the forest is a single tree.
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// The parallel Borůvka engine: a worker pool plus the round loop.
pub struct BoruvkaEngine {
    pool: WorkerPool,
}

impl BoruvkaEngine {
    /// Creates an engine backed by a pool of `workers` threads.
    pub fn new(workers: usize) -> Result<Self> {
        Ok(Self {
            pool: WorkerPool::new(workers)?,
        })
    }

    /// Creates an engine on an existing pool.
    pub fn with_pool(pool: WorkerPool) -> Self {
        Self { pool }
    }

    /// The underlying worker pool.
    pub fn pool(&self) -> &WorkerPool {
        &self.pool
    }

    /// Reduces `graph` to a spanning forest.
    pub fn run(&self, graph: Graph) -> Result<SpanningForest> {
        self.run_with_stats(graph).map(|(forest, _stats)| forest)
    }

    /// Like [`run`](Self::run), but also returns per-round telemetry.
    pub fn run_with_stats(&self, mut graph: Graph) -> Result<(SpanningForest, Vec<RoundStats>)> {
        if graph.vertex_count() == 0 {
            return Err(ArboraError::invalid_graph(
                "Graph is empty, cannot compute a spanning forest.",
            ));
        }

        let forest = DisjointSets::new(graph.original_vertex_count());
        let mut total_weight = 0.0f64;
        let mut stats = Vec::new();

        while graph.vertex_count() > 1 {
            let vertices_before = graph.vertex_count();
            let edges_before = graph.edge_count();
            let v0 = graph.original_vertex_count();

            let started = Instant::now();
            let local_minima = min_edge_phase(&self.pool, graph.edges(), v0)?;
            let min_edge_us = started.elapsed().as_micros();

            let started = Instant::now();
            let global_minima = reduce_phase(&self.pool, &local_minima, v0)?;
            drop(local_minima);
            let reduce_us = started.elapsed().as_micros();

            let started = Instant::now();
            let united_weight = contract_phase(&self.pool, &global_minima, &forest)?;
            drop(global_minima);
            let contract_us = started.elapsed().as_micros();

            let started = Instant::now();
            let new_edges = filter_edges_phase(&self.pool, graph.edges(), &forest)?;
            let filter_edges_us = started.elapsed().as_micros();

            let started = Instant::now();
            let new_vertices = filter_vertices_phase(&self.pool, graph.vertices(), &forest)?;
            let filter_vertices_us = started.elapsed().as_micros();

            total_weight += united_weight;
            let stalled = new_vertices.len() == vertices_before;
            let round = RoundStats {
                round: stats.len() + 1,
                vertices_before,
                vertices_after: new_vertices.len(),
                edges_before,
                edges_after: new_edges.len(),
                united_weight,
                min_edge_us,
                reduce_us,
                contract_us,
                filter_edges_us,
                filter_vertices_us,
            };
            debug!(
                round = round.round,
                vertices = round.vertices_after,
                edges = round.edges_after,
                weight = united_weight,
                total_us = round.total_us(),
                "finished round"
            );
            stats.push(round);
            graph.replace(new_vertices, new_edges);

            if stalled {
                // No component merged: the graph is disconnected and fully
                // reduced. Carrying on would loop forever.
                break;
            }
        }

        let parents = canonical_components(&self.pool, &forest)?;
        let component_count = parents
            .iter()
            .enumerate()
            .filter(|&(i, &p)| p == i as u32)
            .count();

        Ok((
            SpanningForest {
                parents,
                total_weight,
                rounds: stats.len(),
                component_count,
            },
            stats,
        ))
    }
}

/// Derives the canonical component map from the forest: `parents[v]` is the
/// minimum vertex id in `v`'s component.
///
/// Two chunked passes over the full id space: the first folds every vertex
/// into an atomic minimum at its root, the second reads the minimum back
/// through `find`. Both are order-insensitive, so the map does not depend
/// on worker count or on how the forest's unites interleaved.
fn canonical_components(pool: &WorkerPool, forest: &DisjointSets) -> Result<Vec<u32>> {
    let size = forest.size();
    let minima: Vec<AtomicU32> = (0..size).map(|_| AtomicU32::new(u32::MAX)).collect();

    pool.parallel_for(size as usize, |start, stop, _worker| {
        for vertex in start..stop {
            let vertex = vertex as u32;
            let root = forest.find(vertex);
            minima[root as usize].fetch_min(vertex, Ordering::SeqCst);
        }
        Ok(())
    })?;

    let slices = pool.parallel_for(size as usize, |start, stop, _worker| {
        let mut out = Vec::with_capacity(stop - start);
        for vertex in start..stop {
            let root = forest.find(vertex as u32);
            out.push(minima[root as usize].load(Ordering::SeqCst));
        }
        Ok(out)
    })?;
    Ok(slices.into_iter().flatten().collect())
}
