//! Batched homography estimation.
//!
//! A homography between two four-point sets is composed from their
//! projective bases: `H = basis(points) · basis(target)⁻¹`.

pub mod basis;
pub mod perspective;
pub mod reference;
pub mod solver;

pub use basis::{compute_basis, compute_basis_with};
pub use perspective::{compute_perspective, compute_perspective_with, project_points};
pub use reference::{reference_target, target_tensor, ReferenceBasis, TargetPoints, DEFAULT_TARGET};
pub use solver::{PerspectiveConfig, PerspectiveSolver};
