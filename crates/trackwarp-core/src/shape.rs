//! Shape checks and channel slicing shared by the batched kernels.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use crate::error::{GeometryError, Result};

/// Check that a `[N, C]` tensor has at least `min_channels` channels.
///
/// Returns the batch size.
pub(crate) fn expect_channels<B: Backend>(
    operation: &'static str,
    tensor: &Tensor<B, 2>,
    min_channels: usize,
) -> Result<usize> {
    let [n, c] = tensor.dims();
    if c < min_channels {
        return Err(GeometryError::shape_mismatch(operation, [n, min_channels], [n, c]));
    }
    Ok(n)
}

/// Check that a `[N, T, C]` tensor has at least `min_channels` channels.
pub(crate) fn expect_channels_3d<B: Backend>(
    operation: &'static str,
    tensor: &Tensor<B, 3>,
    min_channels: usize,
) -> Result<[usize; 2]> {
    let [n, t, c] = tensor.dims();
    if c < min_channels {
        return Err(GeometryError::shape_mismatch(
            operation,
            [n, t, min_channels],
            [n, t, c],
        ));
    }
    Ok([n, t])
}

/// Check that a batch of matrices is exactly `[N, rows, cols]`.
pub(crate) fn expect_matrices<B: Backend>(
    operation: &'static str,
    tensor: &Tensor<B, 3>,
    rows: usize,
    cols: usize,
) -> Result<usize> {
    let [n, r, c] = tensor.dims();
    if r != rows || c != cols {
        return Err(GeometryError::shape_mismatch(operation, [n, rows, cols], [n, r, c]));
    }
    Ok(n)
}

/// Check that two batched inputs agree on their leading axis.
pub(crate) fn expect_same_batch(operation: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(GeometryError::shape_mismatch(operation, [expected], [actual]));
    }
    Ok(())
}

/// Channel `i` of a `[N, C]` tensor as a `[N, 1]` column.
pub(crate) fn channel<B: Backend>(tensor: &Tensor<B, 2>, i: usize) -> Tensor<B, 2> {
    tensor.clone().narrow(1, i, 1)
}

/// Channel `i` of a `[N, T, C]` tensor as a `[N, T, 1]` slab.
pub(crate) fn channel_3d<B: Backend>(tensor: &Tensor<B, 3>, i: usize) -> Tensor<B, 3> {
    tensor.clone().narrow(2, i, 1)
}
