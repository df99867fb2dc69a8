//! Composable `burn` modules producing warp matrices for a tracking pipeline.

pub mod affine;

pub use affine::{ScaleRotateMatrixGenerator, StateTransform, StateTransformConfig};
