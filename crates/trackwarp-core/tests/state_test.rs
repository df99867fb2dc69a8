use burn::tensor::Tensor;
use burn_ndarray::NdArray;
use proptest::prelude::*;
use std::f32::consts::PI;
use trackwarp_core::state::{
    compute_next_state, compute_points, get_init_matrix, get_step_matrix, pt_ori_sca_2_pts, pt_xyrs_2_xyxy,
    pt_xyxy_2_xyrs,
};

type B = NdArray<f32>;

fn to_vec<const D: usize>(tensor: Tensor<B, D>) -> Vec<f32> {
    tensor.into_data().to_vec::<f32>().unwrap()
}

#[test]
fn test_compute_points_concrete_state() {
    let device = Default::default();
    let state = Tensor::<B, 2>::from_floats([[0.0, 0.0, 0.0, 1.0, 1.0]], &device);

    let points = to_vec(compute_points(state).unwrap());

    let expected = [0.8415, 0.5403, -0.8415, -0.5403];
    for (a, e) in points.iter().zip(expected.iter()) {
        assert!((a - e).abs() < 1e-4, "got {}, expected {}", a, e);
    }
}

#[test]
fn test_ori_sca_and_xyrs_use_opposite_first_point() {
    let device = Default::default();
    let theta = 0.4f32;
    let s = 1.5f32;

    let ori = to_vec(pt_ori_sca_2_pts(Tensor::<B, 2>::from_floats([[0.0, 0.0, theta, s]], &device)).unwrap());
    let xyrs = to_vec(pt_xyrs_2_xyxy(Tensor::<B, 3>::from_floats([[[0.0, 0.0, 0.0, theta, s]]], &device)).unwrap());

    // ori layout: [x0, x1, y0, y1]; xyrs layout: [extra, x0, y0, x1, y1].
    assert!((ori[0] + xyrs[1]).abs() < 1e-6);
    assert!((ori[2] + xyrs[2]).abs() < 1e-6);
    assert!((ori[1] - xyrs[1]).abs() < 1e-6);
    assert!((ori[3] - xyrs[2]).abs() < 1e-6);
}

#[test]
fn test_next_state_then_points() {
    let device = Default::default();
    let state = Tensor::<B, 2>::from_floats([[0.0, 0.0, 0.0, 0.0, 1.0], [1.0, 1.0, PI, 1.0, 0.5]], &device);
    let delta = Tensor::<B, 2>::from_floats([[0.0, 2.0, 0.0], [-PI, 0.0, 0.5]], &device);

    let next = compute_next_state(delta, state).unwrap();
    let values = to_vec(next.clone());

    // Sample 0: theta' = 0, r' = 2 -> x' = 2. Sample 1: theta' = 0, r' = 1 -> x' = 2.
    assert!((values[0] - 2.0).abs() < 1e-5);
    assert!((values[1] - 0.0).abs() < 1e-5);
    assert!((values[5] - 2.0).abs() < 1e-5);
    assert!((values[6] - 1.0).abs() < 1e-5);
    assert!((values[9] - 1.0).abs() < 1e-5);

    let points = compute_points(next).unwrap();
    assert_eq!(points.dims(), [2, 2, 2]);
}

fn xyxy_tensor(values: &[f32; 5]) -> Tensor<B, 2> {
    Tensor::<B, 2>::from_floats([*values], &Default::default())
}

proptest! {
    #[test]
    fn test_endpoint_round_trip(
        x0 in -50.0f32..50.0, y0 in -50.0f32..50.0,
        x1 in -50.0f32..50.0, y1 in -50.0f32..50.0,
        extra in -5.0f32..5.0
    ) {
        prop_assume!(((x0 - x1).powi(2) + (y0 - y1).powi(2)).sqrt() > 0.1);

        let xyrs = pt_xyxy_2_xyrs(xyxy_tensor(&[x0, y0, x1, y1, extra])).unwrap();
        let [n, _] = xyrs.dims();

        // [mx, my, theta, d, extra] -> [extra, mx, my, theta, d]
        let reordered = Tensor::cat(
            vec![xyrs.clone().slice([0..n, 4..5]), xyrs.slice([0..n, 0..4])],
            1,
        )
        .reshape([n, 1, 5]);

        let back = to_vec(pt_xyrs_2_xyxy(reordered).unwrap());
        let expected = [extra, x0, y0, x1, y1];
        for (a, e) in back.iter().zip(expected.iter()) {
            prop_assert!((a - e).abs() < 1e-3, "round trip mismatch: {} vs {}", a, e);
        }
    }

    #[test]
    fn test_step_matrix_is_unit_scale_init_matrix(
        x in -100.0f32..100.0, y in -100.0f32..100.0, theta in -6.3f32..6.3
    ) {
        let device = Default::default();
        let step = get_step_matrix(Tensor::<B, 2>::from_floats([[x, y, theta]], &device)).unwrap();
        let init = get_init_matrix(Tensor::<B, 2>::from_floats([[x, y, theta, 1.0]], &device)).unwrap();

        for (a, b) in to_vec(step).iter().zip(to_vec(init).iter()) {
            prop_assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_compute_points_symmetric_about_position(
        x in -100.0f32..100.0, y in -100.0f32..100.0,
        theta in -3.2f32..3.2, phi in -3.2f32..3.2, r in 0.0f32..20.0
    ) {
        let device = Default::default();
        let points = to_vec(compute_points(Tensor::<B, 2>::from_floats([[x, y, theta, phi, r]], &device)).unwrap());

        prop_assert!((points[0] + points[2] - 2.0 * x).abs() < 1e-3);
        prop_assert!((points[1] + points[3] - 2.0 * y).abs() < 1e-3);
    }

    #[test]
    fn test_init_matrix_scales_rotation_block(
        theta in -3.2f32..3.2, scale in 0.0f32..10.0
    ) {
        let device = Default::default();
        let m = to_vec(get_init_matrix(Tensor::<B, 2>::from_floats([[0.0, 0.0, theta, scale]], &device)).unwrap());

        // Rotation block has determinant scale^2.
        let det = m[0] * m[4] - m[1] * m[3];
        prop_assert!((det - scale * scale).abs() < 1e-3 * scale.max(1.0).powi(2));
        prop_assert_eq!(&m[6..9], &[0.0, 0.0, 1.0]);
    }
}
