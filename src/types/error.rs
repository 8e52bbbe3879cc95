//! Error types for the graphwalk library.

use thiserror::Error;

/// All errors that can occur in the graphwalk library.
#[derive(Error, Debug)]
pub enum WalkError {
    /// Configuration rejected at construction time.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Matrix rows and columns disagree.
    #[error("Matrix is not square: {rows} rows x {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    /// Matrix differs from its transpose.
    #[error("Matrix is asymmetric at ({i}, {j})")]
    AsymmetricMatrix { i: usize, j: usize },

    /// Positive weight where the adjacency matrix has no edge.
    #[error("Positive weight without an edge at ({i}, {j})")]
    WeightWithoutEdge { i: usize, j: usize },

    /// Vertex index outside the graph.
    #[error("Vertex {vertex} out of range for {count} vertices")]
    VertexOutOfRange { vertex: usize, count: usize },

    /// Two collaborating structures disagree on the vertex count.
    #[error("Size mismatch: expected {expected}, got {got}")]
    SizeMismatch { expected: usize, got: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graphwalk operations.
pub type WalkResult<T> = Result<T, WalkError>;
