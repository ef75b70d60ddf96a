//! Sequential minimum spanning tree reference.
//!
//! The parallel engine is verified against a classic sequential Kruskal
//! implementation; tests and benchmarks compare total weights and component
//! counts between the two.

pub mod algorithms;

// Re-export all public items
pub use algorithms::{MstSummary, kruskal_mst};
