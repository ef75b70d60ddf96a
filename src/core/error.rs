/*!
# Unified Error Type

This module provides a unified error enum that consolidates all Arbora error
kinds for consistent error handling across the loader, the generator, and the
parallel pipeline.
*/

use std::error::Error;
use std::fmt;

/// Unified error type for all Arbora operations.
#[derive(Debug)]
pub enum ArboraError {
    /// Malformed input to the loader, the generator, or the worker pool
    InvalidInput(String),

    /// Graph is empty or otherwise unusable for the operation
    InvalidGraph(String),

    /// An edge endpoint is outside `0..original_vertex_count`
    OutOfRangeVertex { vertex: u32, bound: u32 },

    /// A pipeline worker failed; surfaced after the phase barrier
    WorkerFailure(String),

    /// I/O error
    Io(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ArboraError>;

impl ArboraError {
    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ArboraError::InvalidInput(message.into())
    }

    /// Creates an invalid graph error.
    pub fn invalid_graph(message: impl Into<String>) -> Self {
        ArboraError::InvalidGraph(message.into())
    }

    /// Creates an out-of-range vertex error.
    pub fn out_of_range(vertex: u32, bound: u32) -> Self {
        ArboraError::OutOfRangeVertex { vertex, bound }
    }

    /// Creates a worker failure error.
    pub fn worker_failure(message: impl Into<String>) -> Self {
        ArboraError::WorkerFailure(message.into())
    }
}

impl fmt::Display for ArboraError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArboraError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ArboraError::InvalidGraph(msg) => write!(f, "Invalid graph: {}", msg),
            ArboraError::OutOfRangeVertex { vertex, bound } => {
                write!(
                    f,
                    "Vertex {} is out of range (original vertex count is {})",
                    vertex, bound
                )
            }
            ArboraError::WorkerFailure(msg) => write!(f, "Worker failure: {}", msg),
            ArboraError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl Error for ArboraError {}

impl From<std::io::Error> for ArboraError {
    fn from(e: std::io::Error) -> Self {
        ArboraError::Io(e.to_string())
    }
}

impl From<rayon::ThreadPoolBuildError> for ArboraError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        ArboraError::WorkerFailure(e.to_string())
    }
}
