//! Error types for network construction and evaluation.

use thiserror::Error;

/// Errors raised when weights disagree with the declared topology.
#[derive(Debug, Clone, Error)]
pub enum NetworkError {
    /// Too few or too many layers for the declared sizes.
    #[error("Layer count mismatch: {sizes} sizes declare {expected} layers, got {got}")]
    LayerCountMismatch {
        sizes: usize,
        expected: usize,
        got: usize,
    },

    /// A weight matrix or bias vector has the wrong dimensions.
    #[error("Shape mismatch at layer {layer}: expected {expected} rows/entries, got {got}")]
    ShapeMismatch {
        layer: usize,
        expected: usize,
        got: usize,
    },

    /// A weight row does not match the previous layer's width.
    #[error("Ragged weights at layer {layer}: row {row} has {got} columns, expected {expected}")]
    RaggedWeights {
        layer: usize,
        row: usize,
        expected: usize,
        got: usize,
    },

    /// The output layer must be a single unit for the scalar loss.
    #[error("Output layer must have exactly one unit, got {got}")]
    OutputNotScalar { got: usize },

    /// Input length disagrees with the input layer width.
    #[error("Input length mismatch: expected {expected}, got {got}")]
    InputLength { expected: usize, got: usize },
}
