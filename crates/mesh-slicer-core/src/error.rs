//! Error types for mesh-slicer.

use thiserror::Error;

/// The main error type for mesh-slicer operations.
///
/// Only malformed input is reported here. A missing mesh, a plane that misses the
/// mesh and degenerate triangles are ordinary outcomes and never produce an error.
#[derive(Error, Debug)]
pub enum SlicerError {
    /// A plane was built from a zero-length or non-finite normal.
    #[error("plane normal must be finite and non-zero")]
    DegeneratePlane,

    /// A surface uses a primitive type other than a triangle list.
    #[error("unsupported primitive type: {0}")]
    UnsupportedPrimitive(String),

    /// A per-vertex attribute array does not match the number of positions.
    #[error("{attribute} size mismatch: expected {expected}, got {actual}")]
    SizeMismatch {
        attribute: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An index buffer references a vertex that does not exist.
    #[error("index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds { index: u32, vertex_count: usize },

    /// The number of triangle indices (or vertices) is not a multiple of three.
    #[error("triangle list length {0} is not a multiple of 3")]
    InvalidIndexCount(usize),

    /// Slice options failed validation.
    #[error("invalid slice options: {0}")]
    InvalidOptions(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for mesh-slicer operations.
pub type Result<T> = std::result::Result<T, SlicerError>;
