/*!
# Worker Pool and Range Splitting

The scheduling fabric of the engine. [`split_ranges`] deterministically
partitions an index space into near-equal contiguous chunks, and
[`WorkerPool`] runs a phase body over those chunks on a dedicated thread
pool with barrier semantics.

The pool is built once per worker-count configuration and reused by every
phase of every round; no OS threads are started or stopped per phase.
*/

use crate::core::error::{ArboraError, Result};
use rayon::prelude::*;
use std::ops::Range;

/// Splits `0..n` into `workers` half-open contiguous ranges.
///
/// The ranges cover `0..n` exactly, in order, and their lengths differ by
/// at most one: the first `n % workers` chunks take the extra element.
/// Ranges may be empty when `n < workers`.
pub fn split_ranges(n: usize, workers: usize) -> Vec<Range<usize>> {
    let base = n / workers.max(1);
    let extra = n % workers.max(1);
    let mut ranges = Vec::with_capacity(workers);
    let mut begin = 0;
    for i in 0..workers {
        let len = base + usize::from(i < extra);
        ranges.push(begin..begin + len);
        begin += len;
    }
    ranges
}

/// A fixed-size worker pool running phase bodies over chunked index ranges.
pub struct WorkerPool {
    pool: rayon::ThreadPool,
    workers: usize,
}

impl WorkerPool {
    /// Creates a pool with exactly `workers` threads.
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(ArboraError::invalid_input(
                "Worker count must be at least one.",
            ));
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("arbora-worker-{}", i))
            .build()?;
        Ok(Self { pool, workers })
    }

    /// The configured worker count.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Runs `body(start, stop, worker_id)` once per chunk of `0..n` and
    /// returns the per-chunk results in chunk order.
    ///
    /// `worker_id` is the chunk index, unique in `0..workers`. The call
    /// returns only after every body has completed; a body error is
    /// propagated once the parallel region has joined.
    pub fn parallel_for<T, F>(&self, n: usize, body: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(usize, usize, usize) -> Result<T> + Sync,
    {
        let chunks = split_ranges(n, self.workers);
        self.pool.install(|| {
            chunks
                .into_par_iter()
                .enumerate()
                .map(|(worker_id, range)| body(range.start, range.end, worker_id))
                .collect()
        })
    }
}
