//! Error module for the Rusty Axon library.
use std::error::Error;
use std::fmt;

/// Error types for the library.
#[derive(Debug, PartialEq)]
pub enum SpikeError {
    /// Error for an edge whose source or target is not a node of the graph.
    InvalidEdgeIndex { source: usize, target: usize },
    /// Error for an edge whose length is not strictly positive.
    ZeroOrNegativeLength { source: usize, target: usize, length: f64 },
    /// Error for a spike index outside the active range.
    OutOfRangeSpikeIndex { index: usize, num_spikes: usize },
    /// Error for a negative (or non-finite) time step.
    InvalidTimeStep(f64),
    /// Error for invalid parameters, e.g., a distance matrix of the wrong shape.
    InvalidParameter(String),
    /// Error for I/O operations.
    IOError(String),
}

impl fmt::Display for SpikeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SpikeError::InvalidEdgeIndex { source, target } => write!(
                f,
                "Invalid edge index: ({}, {}) does not connect two nodes of the graph",
                source, target
            ),
            SpikeError::ZeroOrNegativeLength {
                source,
                target,
                length,
            } => write!(
                f,
                "Invalid edge length: ({}, {}) has length {}, must be positive",
                source, target, length
            ),
            SpikeError::OutOfRangeSpikeIndex { index, num_spikes } => write!(
                f,
                "Spike index out of range: {} (only {} active spikes)",
                index, num_spikes
            ),
            SpikeError::InvalidTimeStep(dt) => {
                write!(f, "Invalid time step: {}, must be non-negative", dt)
            }
            SpikeError::InvalidParameter(e) => write!(f, "Invalid parameters: {}", e),
            SpikeError::IOError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl Error for SpikeError {}

impl From<std::io::Error> for SpikeError {
    fn from(e: std::io::Error) -> Self {
        SpikeError::IOError(e.to_string())
    }
}

impl From<serde_json::Error> for SpikeError {
    fn from(e: serde_json::Error) -> Self {
        SpikeError::IOError(e.to_string())
    }
}
