//! State propagation.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use crate::error::Result;
use crate::shape::{channel, expect_channels, expect_same_batch};

/// Advance a batch of tracker states by a predicted step.
///
/// Channels 2, 3 and 4 of `state` (angle, radius, last channel) accumulate
/// `delta` additively. Position then moves by the *new* radius along the
/// *new* angle: `x' = x + r'·cos θ'`, `y' = y + r'·sin θ'`.
///
/// # Arguments
/// * `delta` - Tensor of shape `[N, 3]`
/// * `state` - Tensor of shape `[N, 5]`; further channels are dropped
///
/// # Returns
/// Tensor of shape `[N, 5]`: `[x', y', θ', r', c']`
pub fn compute_next_state<B: Backend>(delta: Tensor<B, 2>, state: Tensor<B, 2>) -> Result<Tensor<B, 2>> {
    let n = expect_channels("compute_next_state", &state, 5)?;
    let m = expect_channels("compute_next_state", &delta, 3)?;
    expect_same_batch("compute_next_state", n, m)?;
    if n == 0 {
        return Ok(Tensor::zeros([0, 5], &state.device()));
    }

    let theta = channel(&delta, 0) + channel(&state, 2);
    let radius = channel(&delta, 1) + channel(&state, 3);
    let last = channel(&delta, 2) + channel(&state, 4);

    let x = radius.clone() * theta.clone().cos() + channel(&state, 0);
    let y = radius.clone() * theta.clone().sin() + channel(&state, 1);

    Ok(Tensor::cat(vec![x, y, theta, radius, last], 1))
}
