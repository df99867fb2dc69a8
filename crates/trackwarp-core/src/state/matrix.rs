//! Homogeneous similarity matrices from pose states.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use crate::error::Result;
use crate::shape::{channel, expect_channels};

/// `[[c, s, x], [-s, c, y], [0, 0, 1]]` from `[N, 1]` columns.
fn similarity<B: Backend>(x: Tensor<B, 2>, y: Tensor<B, 2>, cos: Tensor<B, 2>, sin: Tensor<B, 2>) -> Tensor<B, 3> {
    let [n, _] = x.dims();
    let zero = x.zeros_like();
    let one = x.ones_like();

    Tensor::cat(
        vec![
            cos.clone(),
            sin.clone(),
            x,
            sin.neg(),
            cos,
            y,
            zero.clone(),
            zero,
            one,
        ],
        1,
    )
    .reshape([n, 3, 3])
}

/// Similarity transform of a `[x, y, θ, scale]` state.
///
/// # Returns
/// Tensor of shape `[N, 3, 3]`:
/// `[[s·cos θ, s·sin θ, x], [-s·sin θ, s·cos θ, y], [0, 0, 1]]`
pub fn get_init_matrix<B: Backend>(input: Tensor<B, 2>) -> Result<Tensor<B, 3>> {
    if expect_channels("get_init_matrix", &input, 4)? == 0 {
        return Ok(Tensor::zeros([0, 3, 3], &input.device()));
    }

    let angle = channel(&input, 2);
    let scale = channel(&input, 3);
    let cos = angle.clone().cos() * scale.clone();
    let sin = angle.sin() * scale;

    Ok(similarity(channel(&input, 0), channel(&input, 1), cos, sin))
}

/// Rigid step transform of a `[x, y, θ]` input: [`get_init_matrix`] with unit scale.
pub fn get_step_matrix<B: Backend>(input: Tensor<B, 2>) -> Result<Tensor<B, 3>> {
    if expect_channels("get_step_matrix", &input, 3)? == 0 {
        return Ok(Tensor::zeros([0, 3, 3], &input.device()));
    }

    let angle = channel(&input, 2);
    Ok(similarity(
        channel(&input, 0),
        channel(&input, 1),
        angle.clone().cos(),
        angle.sin(),
    ))
}
