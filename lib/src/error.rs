//! Error types for the painting pipeline

/// Errors produced by the palette, the intensity mapper and the pipeline
///
/// Every variant is a deterministic consequence of its input, so none of
/// them is worth retrying.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaintError {
    /// A snapped color key has no entry in the reverse palette table.
    /// Only a broken palette table can produce this.
    #[error("palette has no entry for snapped color #{key}")]
    PaletteLookup { key: String },

    /// The grid has zero rows or zero columns
    #[error("invalid grid dimensions: {rows} rows x {cols} columns")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Two grids (or a grid and its backing buffer) disagree on shape
    #[error("grid shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    #[error("non-finite intensity at row {row}, column {col}")]
    NonFiniteIntensity { row: usize, col: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PaintError>;
