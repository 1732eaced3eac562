use thiserror::Error;

use super::types::Vertex;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The matrix handed to a load is empty or not square.
    #[error("Invalid graph: {reason} (got {rows} rows).")]
    InvalidGraph { rows: usize, reason: &'static str },

    /// A binary operation was applied to graphs with different vertex counts.
    #[error("Graphs must be of the same size: {left} vs {right} vertices.")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Division by zero is not allowed.")]
    DivisionByZero,

    /// A checked cell operation produced a value outside the `Weight` range.
    #[error("Arithmetic overflow in graph operation.")]
    Overflow,

    /// Indicates an attempt to access a vertex index that exceeds the graph size (N).
    #[error("Vertex index {0} is out of bounds.")]
    VertexOutOfBounds(Vertex),
}

impl GraphError {
    pub fn not_square(rows: usize) -> Self {
        GraphError::InvalidGraph {
            rows,
            reason: "the graph is not a square matrix",
        }
    }

    pub fn empty() -> Self {
        GraphError::InvalidGraph {
            rows: 0,
            reason: "the graph has no vertices",
        }
    }
}
