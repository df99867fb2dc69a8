//! Error types for geometry operations.
//!
//! Numeric failures (a singular 3x3 system) are deliberately absent here:
//! they surface as non-finite values from the inverse, not as errors.

use thiserror::Error;

use crate::homography::TargetPoints;

/// Main error type for geometry operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Input tensor does not have the layout an operation reads.
    #[error("Shape mismatch in {operation}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        operation: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// The process-wide reference basis was built from another target.
    #[error("Reference basis already built from target {cached:?}, cannot switch to {requested:?}")]
    ReferenceTargetMismatch {
        cached: TargetPoints,
        requested: TargetPoints,
    },

    /// Image dimensions cannot be renormalised.
    #[error("Invalid image size: {0}")]
    InvalidImageSize(String),
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;

impl GeometryError {
    /// Create a shape mismatch error.
    pub fn shape_mismatch(
        operation: &'static str,
        expected: impl Into<Vec<usize>>,
        actual: impl Into<Vec<usize>>,
    ) -> Self {
        Self::ShapeMismatch {
            operation,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an invalid image size error.
    pub fn invalid_image_size(msg: impl Into<String>) -> Self {
        Self::InvalidImageSize(msg.into())
    }
}
