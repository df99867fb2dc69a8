//! Perspective solver with its own, eagerly computed reference basis.

use burn::config::Config;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use crate::linalg::{BatchedInverse, CofactorInverse};
use crate::shape::expect_matrices;

use super::basis::compute_basis_with;
use super::reference::{ReferenceBasis, TargetPoints, DEFAULT_TARGET};

/// Configuration for a [`PerspectiveSolver`].
#[derive(Config, Debug, PartialEq)]
pub struct PerspectiveConfig {
    /// Reference point set, rows `x`, `y`, `w`
    #[config(default = "DEFAULT_TARGET")]
    pub target: TargetPoints,
}

impl PerspectiveConfig {
    /// Build a solver with its reference basis placed on `device`.
    pub fn init<B: Backend>(&self, device: &B::Device) -> PerspectiveSolver<B> {
        PerspectiveSolver::new(&self.target, device)
    }
}

/// Homography solver bound to one reference target.
///
/// Unlike [`compute_perspective`](super::compute_perspective) it does not
/// share state with the rest of the process, so solvers for different
/// targets can coexist.
#[derive(Debug, Clone)]
pub struct PerspectiveSolver<B: Backend> {
    target: TargetPoints,
    reference_inverse: Tensor<B, 3>, // [1, 3, 3]
}

impl<B: Backend> PerspectiveSolver<B> {
    /// Create a solver for `target`.
    pub fn new(target: &TargetPoints, device: &B::Device) -> Self {
        let reference = ReferenceBasis::new(target);
        tracing::debug!("Perspective solver built for target {:?}", target);

        Self {
            target: *target,
            reference_inverse: reference.to_tensor(device),
        }
    }

    /// Target this solver maps from.
    pub fn target(&self) -> &TargetPoints {
        &self.target
    }

    /// Inverse reference basis, shape `[1, 3, 3]`.
    pub fn reference_inverse(&self) -> Tensor<B, 3> {
        self.reference_inverse.clone()
    }

    /// Homography mapping the target onto each `[3, 4]` point set of `points`.
    pub fn solve(&self, points: Tensor<B, 3>) -> crate::Result<Tensor<B, 3>> {
        self.solve_with(points, &CofactorInverse)
    }

    /// [`solve`](Self::solve) with an explicit inverse routine for the input basis.
    pub fn solve_with<I: BatchedInverse<B>>(&self, points: Tensor<B, 3>, inverse: &I) -> crate::Result<Tensor<B, 3>> {
        let n = expect_matrices("PerspectiveSolver::solve", &points, 3, 4)?;
        tracing::trace!("Solving perspective for batch of {}", n);
        if n == 0 {
            return Ok(Tensor::zeros([0, 3, 3], &points.device()));
        }

        let basis = compute_basis_with(points, inverse)?;
        Ok(basis.matmul(self.reference_inverse.clone().expand([n, 3, 3])))
    }
}
