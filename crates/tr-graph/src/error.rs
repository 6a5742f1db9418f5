//! Graph-subsystem error type.

use thiserror::Error;

use tr_core::{EdgeId, VertexId};

/// Errors produced by `tr-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Shortest-path precondition violated; raised by `AllPairsRouter::build`.
    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight { edge: EdgeId, weight: f64 },

    #[error("vertex {vertex} out of range for a graph of {vertex_count} vertices")]
    VertexOutOfRange { vertex: VertexId, vertex_count: usize },

    #[error("edge weight must be finite, got {weight}")]
    InvalidWeight { weight: f64 },

    #[error("graph too large: {0} exceeds the 32-bit id space")]
    TooLarge(usize),
}

pub type GraphResult<T> = Result<T, GraphError>;
