//! Homography from the reference frame onto observed point sets.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use crate::error::Result;
use crate::linalg::{BatchedInverse, CofactorInverse};
use crate::shape::{expect_matrices, expect_same_batch};

use super::basis::compute_basis_with;
use super::reference::{shared_reference_basis, TargetPoints, DEFAULT_TARGET};

/// Per-sample homography mapping the reference target onto `points`.
///
/// The reference basis is computed once per process from `target`
/// (`None` means [`DEFAULT_TARGET`]) and reused by every later call.
/// Requesting a different target once the cache is filled returns
/// [`GeometryError::ReferenceTargetMismatch`](crate::GeometryError::ReferenceTargetMismatch);
/// use a [`PerspectiveSolver`](super::PerspectiveSolver) for per-instance targets.
///
/// # Arguments
/// * `points` - Tensor of shape `[N, 3, 4]`, homogeneous points as columns
/// * `target` - Reference point set
///
/// # Returns
/// Tensor of shape `[N, 3, 3]`, `basis(points) · basis(target)⁻¹`
pub fn compute_perspective<B: Backend>(
    points: Tensor<B, 3>,
    target: Option<&TargetPoints>,
) -> Result<Tensor<B, 3>> {
    compute_perspective_with(points, target, &CofactorInverse)
}

/// [`compute_perspective`] with an explicit inverse routine.
pub fn compute_perspective_with<B, I>(
    points: Tensor<B, 3>,
    target: Option<&TargetPoints>,
    inverse: &I,
) -> Result<Tensor<B, 3>>
where
    B: Backend,
    I: BatchedInverse<B>,
{
    let n = expect_matrices("compute_perspective", &points, 3, 4)?;
    let device = points.device();
    let target = target.unwrap_or(&DEFAULT_TARGET);

    let reference = shared_reference_basis(target)?;
    if n == 0 {
        return Ok(Tensor::zeros([0, 3, 3], &device));
    }
    let reference = reference.to_tensor::<B>(&device).expand([n, 3, 3]);

    let basis = compute_basis_with(points, inverse)?;
    Ok(basis.matmul(reference))
}

/// Apply a batch of homographies to homogeneous points and dehomogenise.
///
/// # Arguments
/// * `homography` - Tensor of shape `[N, 3, 3]`
/// * `points` - Tensor of shape `[N, 3, K]`, one homogeneous point per column
///
/// # Returns
/// Tensor of shape `[N, 2, K]` with rows `x / w` and `y / w`
pub fn project_points<B: Backend>(homography: Tensor<B, 3>, points: Tensor<B, 3>) -> Result<Tensor<B, 3>> {
    let n = expect_matrices("project_points", &homography, 3, 3)?;
    let [m, _, k] = points.dims();
    expect_same_batch("project_points", n, m)?;
    expect_matrices("project_points", &points, 3, k)?;

    if n == 0 || k == 0 {
        return Ok(Tensor::zeros([n, 2, k], &points.device()));
    }

    let mapped = homography.matmul(points);
    let xy = mapped.clone().narrow(1, 0, 2);
    let w = mapped.narrow(1, 2, 1);

    Ok(xy / w)
}
