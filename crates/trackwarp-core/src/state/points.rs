//! Conversions between pose states and point pairs.
//!
//! The converters keep the sign conventions of their callers: point 0 sits
//! on the `+(sin, cos)` side for [`compute_points`] and [`pt_ori_sca_2_pts`]
//! but on the `-(sin, cos)` side for [`pt_xyrs_2_xyxy`].

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use crate::error::Result;
use crate::shape::{channel, channel_3d, expect_channels, expect_channels_3d};
use crate::trig::atan2;

/// Antipodal point pair around the state position.
///
/// State channels are `[x, y, θ, φ, r]`; the points are
/// `(x, y) ± r·(sin φ, cos φ)`.
///
/// # Returns
/// Tensor of shape `[N, 2, 2]` indexed `[point, coord]`
pub fn compute_points<B: Backend>(state: Tensor<B, 2>) -> Result<Tensor<B, 3>> {
    let n = expect_channels("compute_points", &state, 5)?;
    if n == 0 {
        return Ok(Tensor::zeros([0, 2, 2], &state.device()));
    }

    let x = channel(&state, 0);
    let y = channel(&state, 1);
    let phi = channel(&state, 3);
    let r = channel(&state, 4);

    let dx = phi.clone().sin() * r.clone();
    let dy = phi.cos() * r;

    let flat = Tensor::cat(vec![x.clone() + dx.clone(), y.clone() + dy.clone(), x - dx, y - dy], 1);
    Ok(flat.reshape([n, 2, 2]))
}

fn ori_sca_offsets<B: Backend>(state: &Tensor<B, 2>) -> [Tensor<B, 2>; 4] {
    let theta = channel(state, 2);
    let scale = channel(state, 3);
    let dx = theta.clone().sin() * scale.clone();
    let dy = theta.cos() * scale;
    [channel(state, 0), channel(state, 1), dx, dy]
}

/// Endpoint pair of a position-orientation-scale state.
///
/// State channels are `[x, y, θ, s]`. Point 0 is `(x, y) + s·(sin θ, cos θ)`,
/// point 1 the reflection through `(x, y)`.
///
/// # Returns
/// Tensor of shape `[N, 2, 2]` indexed `[coord, point]`
pub fn pt_ori_sca_2_pts<B: Backend>(state: Tensor<B, 2>) -> Result<Tensor<B, 3>> {
    let n = expect_channels("pt_ori_sca_2_pts", &state, 4)?;
    if n == 0 {
        return Ok(Tensor::zeros([0, 2, 2], &state.device()));
    }
    let [x, y, dx, dy] = ori_sca_offsets(&state);

    let flat = Tensor::cat(vec![x.clone() + dx.clone(), x - dx, y.clone() + dy.clone(), y - dy], 1);
    Ok(flat.reshape([n, 2, 2]))
}

/// [`pt_ori_sca_2_pts`] with a third row of ones.
///
/// # Returns
/// Tensor of shape `[N, 3, 2]`, homogeneous points as columns
pub fn pt_ori_sca_2_homogeneous_pts<B: Backend>(state: Tensor<B, 2>) -> Result<Tensor<B, 3>> {
    let n = expect_channels("pt_ori_sca_2_homogeneous_pts", &state, 4)?;
    if n == 0 {
        return Ok(Tensor::zeros([0, 3, 2], &state.device()));
    }
    let [x, y, dx, dy] = ori_sca_offsets(&state);
    let one = x.ones_like();

    let flat = Tensor::cat(
        vec![
            x.clone() + dx.clone(),
            x - dx,
            y.clone() + dy.clone(),
            y - dy,
            one.clone(),
            one,
        ],
        1,
    );
    Ok(flat.reshape([n, 3, 2]))
}

/// Endpoint pair to midpoint, angle and half-length.
///
/// Input channels `[x0, y0, x1, y1, extra]`, output
/// `[mx, my, θ, d, extra]` with `d = ‖p0 - p1‖ / 2` and
/// `θ = -atan2(x0 - x1, -(y0 - y1))`.
pub fn pt_xyxy_2_xyrs<B: Backend>(state: Tensor<B, 2>) -> Result<Tensor<B, 2>> {
    if expect_channels("pt_xyxy_2_xyrs", &state, 5)? == 0 {
        return Ok(Tensor::zeros([0, 5], &state.device()));
    }

    let x0 = channel(&state, 0);
    let y0 = channel(&state, 1);
    let x1 = channel(&state, 2);
    let y1 = channel(&state, 3);

    let dx = x0.clone() - x1.clone();
    let dy = y0.clone() - y1.clone();

    let d = (dx.clone().powf_scalar(2.0) + dy.clone().powf_scalar(2.0)).sqrt() / 2.0;
    let mx = (x0 + x1) / 2.0;
    let my = (y0 + y1) / 2.0;
    let theta = atan2(dx, dy.neg()).neg();

    Ok(Tensor::cat(vec![mx, my, theta, d, channel(&state, 4)], 1))
}

/// Midpoint, angle and half-length back to an endpoint pair.
///
/// Input channels `[extra, x, y, θ, s]` over a `[N, T, 5]` batch of
/// sequences, output `[extra, x0, y0, x1, y1]` with
/// `p0 = (x, y) - s·(sin θ, cos θ)` and `p1 = (x, y) + s·(sin θ, cos θ)`.
pub fn pt_xyrs_2_xyxy<B: Backend>(state: Tensor<B, 3>) -> Result<Tensor<B, 3>> {
    let [n, t] = expect_channels_3d("pt_xyrs_2_xyxy", &state, 5)?;
    if n == 0 || t == 0 {
        return Ok(Tensor::zeros([n, t, 5], &state.device()));
    }

    let x = channel_3d(&state, 1);
    let y = channel_3d(&state, 2);
    let theta = channel_3d(&state, 3);
    let s = channel_3d(&state, 4);

    let dx = theta.clone().sin() * s.clone();
    let dy = theta.cos() * s;

    Ok(Tensor::cat(
        vec![
            channel_3d(&state, 0),
            x.clone() - dx.clone(),
            y.clone() - dy.clone(),
            x + dx,
            y + dy,
        ],
        2,
    ))
}
