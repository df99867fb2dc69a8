//! Projective basis of four homogeneous points.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use crate::error::Result;
use crate::linalg::{BatchedInverse, CofactorInverse};
use crate::shape::expect_matrices;

/// Build the basis matrix of a batch of homogeneous point sets.
///
/// Each sample is a `[3, 4]` matrix whose columns are homogeneous points.
/// With `A` the first three columns and `b` the fourth, the coefficients
/// `x = A⁻¹ b` are solved per sample and column `i` of the result is
/// column `i` of `A` scaled by `x[i]`. The basis therefore maps the
/// canonical frame `e1, e2, e3, (1, 1, 1)` onto the four input points.
///
/// # Arguments
/// * `points` - Tensor of shape `[N, 3, 4]`
///
/// # Returns
/// Tensor of shape `[N, 3, 3]`
pub fn compute_basis<B: Backend>(points: Tensor<B, 3>) -> Result<Tensor<B, 3>> {
    compute_basis_with(points, &CofactorInverse)
}

/// [`compute_basis`] with an explicit inverse routine.
///
/// A singular `A` is not detected; whatever `inverse` yields propagates.
pub fn compute_basis_with<B, I>(points: Tensor<B, 3>, inverse: &I) -> Result<Tensor<B, 3>>
where
    B: Backend,
    I: BatchedInverse<B>,
{
    if expect_matrices("compute_basis", &points, 3, 4)? == 0 {
        return Ok(Tensor::zeros([0, 3, 3], &points.device()));
    }

    let a = points.clone().narrow(2, 0, 3);
    let b = points.narrow(2, 3, 1);

    // x: [N, 3, 1] -> [N, 1, 3] so it broadcasts across the columns of A.
    let x = inverse.invert(a.clone()).matmul(b);
    let scale = x.swap_dims(1, 2);

    Ok(a * scale)
}
