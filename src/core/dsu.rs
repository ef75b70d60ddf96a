/*!
# Lock-Free Disjoint Sets

A wait-free parallel disjoint-set forest (union-find) with path compression
and union by rank, after

> "Wait-free Parallel Algorithms for the Union-Find Problem"
> by Richard J. Anderson and Heather Woll.

Each element is a single 64-bit atomic cell packing the rank into the upper
32 bits (31 usable) and the parent id into the lower 32. Packing both fields
into one cell is what makes the `(rank, parent)` transition of `unite`
atomic; a pair of 32-bit atomics cannot express it.

`find` and `same` may be called concurrently with `unite` from any number of
threads. The structure itself cannot fail: `find` is wait-free and `unite`
is lock-free.
*/

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

const PARENT_MASK: u64 = 0xFFFF_FFFF;
const RANK_SHIFT: u32 = 32;
const RANK_MASK: u32 = 0x7FFF_FFFF;

fn pack(rank: u32, parent: u32) -> u64 {
    (u64::from(rank) << RANK_SHIFT) | u64::from(parent)
}

/// Lock-free parallel disjoint-set forest.
pub struct DisjointSets {
    data: Vec<AtomicU64>,
}

impl DisjointSets {
    /// Creates a forest of `size` singleton sets, each element its own
    /// parent with rank zero.
    pub fn new(size: u32) -> Self {
        let data = (0..size).map(|i| AtomicU64::new(pack(0, i))).collect();
        Self { data }
    }

    /// Returns the root of the set containing `id`.
    ///
    /// On each hop the cell is pointed at its grandparent via a
    /// compare-and-swap that preserves the rank bits. A failed swap is
    /// ignored: another thread already compressed the path.
    pub fn find(&self, mut id: u32) -> u32 {
        loop {
            let cell = self.data[id as usize].load(Ordering::SeqCst);
            let parent = cell as u32;
            if parent == id {
                return id;
            }
            let grandparent = self.parent(parent);
            let compressed = (cell & !PARENT_MASK) | u64::from(grandparent);
            if cell != compressed {
                let _ = self.data[id as usize].compare_exchange_weak(
                    cell,
                    compressed,
                    Ordering::SeqCst,
                    Ordering::SeqCst,
                );
            }
            id = grandparent;
        }
    }

    /// Returns true if `id1` and `id2` belong to the same set.
    ///
    /// Roots can change under our feet, so a negative answer is only trusted
    /// after observing that `id1`'s root is still a true root.
    pub fn same(&self, mut id1: u32, mut id2: u32) -> bool {
        loop {
            id1 = self.find(id1);
            id2 = self.find(id2);
            if id1 == id2 {
                return true;
            }
            if self.parent(id1) == id1 {
                return false;
            }
        }
    }

    /// Unites the sets containing `id1` and `id2` and returns the surviving
    /// root.
    ///
    /// Union by rank with a deterministic tie-break: on equal ranks the
    /// higher id links under the lower one.
    pub fn unite(&self, id1: u32, id2: u32) -> u32 {
        self.unite_tracked(id1, id2).0
    }

    /// Like [`unite`](Self::unite), but also reports whether *this* call
    /// performed the link.
    ///
    /// For any merge, exactly one of the concurrent callers observes `true`;
    /// callers that arrive once the two sets are already joined observe
    /// `false`. This is what makes per-edge accounting exact under
    /// contention.
    pub fn unite_tracked(&self, id1: u32, id2: u32) -> (u32, bool) {
        loop {
            let mut lo = self.find(id1);
            let mut hi = self.find(id2);

            if lo == hi {
                return (lo, false);
            }

            let mut r1 = self.rank(lo);
            let mut r2 = self.rank(hi);

            if r1 > r2 || (r1 == r2 && lo < hi) {
                std::mem::swap(&mut r1, &mut r2);
                std::mem::swap(&mut lo, &mut hi);
            }

            let old_entry = pack(r1, lo);
            let new_entry = pack(r1, hi);

            if self.data[lo as usize]
                .compare_exchange(old_entry, new_entry, Ordering::SeqCst, Ordering::SeqCst)
                .is_err()
            {
                continue;
            }

            if r1 == r2 {
                let old_root = pack(r2, hi);
                let new_root = pack(r2 + 1, hi);
                /* Try to bump the rank (may fail, that's ok) */
                let _ = self.data[hi as usize].compare_exchange_weak(
                    old_root,
                    new_root,
                    Ordering::SeqCst,
                    Ordering::SeqCst,
                );
            }

            return (hi, true);
        }
    }

    /// The parent of `id` (the low half of the packed cell).
    pub fn parent(&self, id: u32) -> u32 {
        self.data[id as usize].load(Ordering::SeqCst) as u32
    }

    /// The rank of `id` (the usable high bits of the packed cell).
    pub fn rank(&self, id: u32) -> u32 {
        (self.data[id as usize].load(Ordering::SeqCst) >> RANK_SHIFT) as u32 & RANK_MASK
    }

    /// Number of elements in the forest.
    pub fn size(&self) -> u32 {
        self.data.len() as u32
    }
}

impl fmt::Debug for DisjointSets {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..self.size() {
            writeln!(f, "{}: parent={}, rank={}", i, self.parent(i), self.rank(i))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_new_is_all_singletons() {
        let sets = DisjointSets::new(5);
        assert_eq!(sets.size(), 5);
        for i in 0..5 {
            assert_eq!(sets.parent(i), i);
            assert_eq!(sets.rank(i), 0);
            assert_eq!(sets.find(i), i);
        }
    }

    #[test]
    fn test_unite_and_find() {
        let sets = DisjointSets::new(4);
        sets.unite(0, 1);
        assert!(sets.same(0, 1));
        assert!(!sets.same(0, 2));

        sets.unite(2, 3);
        sets.unite(1, 3);
        for i in 1..4 {
            assert_eq!(sets.find(i), sets.find(0));
        }
    }

    #[test]
    fn test_rank_tie_breaks_toward_lower_id() {
        let sets = DisjointSets::new(2);
        let root = sets.unite(0, 1);
        assert_eq!(root, 0);
        assert_eq!(sets.parent(1), 0);
        assert_eq!(sets.rank(0), 1);
    }

    #[test]
    fn test_unite_same_set_is_noop() {
        let sets = DisjointSets::new(3);
        sets.unite(0, 1);
        let (root, linked) = sets.unite_tracked(0, 1);
        assert_eq!(root, sets.find(0));
        assert!(!linked);
    }

    #[test]
    fn test_unite_tracked_reports_single_winner() {
        let sets = Arc::new(DisjointSets::new(2));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let sets = Arc::clone(&sets);
            handles.push(thread::spawn(move || sets.unite_tracked(0, 1).1));
        }
        let winners: usize = handles
            .into_iter()
            .map(|h| usize::from(h.join().unwrap()))
            .sum();
        assert_eq!(winners, 1);
    }

    #[test]
    fn test_concurrent_unions_match_sequential_classes() {
        let n: u32 = 4096;
        // Four threads each link a strided family of pairs; the resulting
        // partition must match the single-threaded outcome of the same calls.
        let pairs: Vec<(u32, u32)> = (0..n - 1).map(|i| (i, i + 1)).collect();

        let concurrent = Arc::new(DisjointSets::new(n));
        let mut handles = Vec::new();
        for t in 0..4u32 {
            let sets = Arc::clone(&concurrent);
            let pairs = pairs.clone();
            handles.push(thread::spawn(move || {
                for (a, b) in pairs.into_iter().skip(t as usize).step_by(4) {
                    sets.unite(a, b);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let sequential = DisjointSets::new(n);
        for &(a, b) in &pairs {
            sequential.unite(a, b);
        }

        for i in 0..n {
            assert_eq!(
                concurrent.same(0, i),
                sequential.same(0, i),
                "vertex {} disagrees",
                i
            );
        }
    }

    #[test]
    fn test_find_compresses_paths() {
        let sets = DisjointSets::new(8);
        for i in 0..7 {
            sets.unite(i, i + 1);
        }
        let root = sets.find(7);
        // After a full walk the chain is flattened toward the root.
        assert_eq!(sets.find(sets.parent(7)), root);
        for i in 0..8 {
            assert_eq!(sets.find(i), root);
        }
    }
}
