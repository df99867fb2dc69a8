//! Pixel to normalised coordinate mapping.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use crate::error::{GeometryError, Result};

/// Matrix taking pixel coordinates to the `[-1, 1]` frame.
///
/// `[[2, 0, -1], [0, 2, -1], [0, 0, 1]] · diag(1/height, 1/width, 1)`,
/// so the first homogeneous coordinate is normalised by the height and the
/// second by the width.
pub fn compute_renorm_matrix<B: Backend>(height: usize, width: usize, device: &B::Device) -> Result<Tensor<B, 2>> {
    if height == 0 || width == 0 {
        return Err(GeometryError::invalid_image_size(format!(
            "cannot renormalise a {}x{} image",
            height, width
        )));
    }

    let inv_b = Tensor::<B, 2>::from_floats([[2.0, 0.0, -1.0], [0.0, 2.0, -1.0], [0.0, 0.0, 1.0]], device);
    let inv_c = Tensor::<B, 2>::from_floats(
        [
            [1.0 / height as f32, 0.0, 0.0],
            [0.0, 1.0 / width as f32, 0.0],
            [0.0, 0.0, 1.0],
        ],
        device,
    );

    Ok(inv_b.matmul(inv_c))
}

/// [`compute_renorm_matrix`] for an `[N, C, H, W]` image batch.
pub fn renorm_matrix_for_image<B: Backend>(image: &Tensor<B, 4>) -> Result<Tensor<B, 2>> {
    let [_, _, h, w] = image.dims();
    compute_renorm_matrix(h, w, &image.device())
}
