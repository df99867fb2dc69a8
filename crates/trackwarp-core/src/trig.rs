//! Inverse trigonometry assembled from elementwise tensor ops.
//!
//! burn has no inverse trigonometric kernels, so the arctangent is a
//! range-reduced polynomial (the single-precision Cephes `atanf` scheme)
//! written with masks. Every step is an ordinary tensor op, which keeps
//! the result differentiable on autodiff backends.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

/// `tan(π/8)`: above it the argument is folded through `atan(1)`.
const TAN_PI_8: f32 = 0.414_213_57;

/// Odd polynomial for `atan(t)` on `|t| <= tan(π/8)`.
fn atan_poly<B: Backend, const D: usize>(t: Tensor<B, D>) -> Tensor<B, D> {
    let z = t.clone().powf_scalar(2.0);
    let p = z
        .clone()
        .mul_scalar(8.053_744_5e-2)
        .add_scalar(-1.387_768_6e-1)
        .mul(z.clone())
        .add_scalar(1.997_771_1e-1)
        .mul(z.clone())
        .add_scalar(-3.333_295e-1);
    p.mul(z).mul(t.clone()).add(t)
}

/// `atan(a)` for `a` in `[0, 1]`.
fn atan_unit<B: Backend, const D: usize>(a: Tensor<B, D>) -> Tensor<B, D> {
    let folded = a.clone().greater_elem(TAN_PI_8);
    let shifted = (a.clone() - 1.0) / (a.clone() + 1.0);

    let reduced = atan_poly(a.mask_where(folded.clone(), shifted));
    reduced.clone().mask_where(folded, reduced.add_scalar(FRAC_PI_4))
}

/// Elementwise four-quadrant arctangent of `y / x`, in `[-π, π]`.
///
/// Zero is treated as positive whatever its sign bit, so `atan2(0, x)`
/// is `π` for every negative `x` and `atan2(0, 0)` is `0`.
pub fn atan2<B: Backend, const D: usize>(y: Tensor<B, D>, x: Tensor<B, D>) -> Tensor<B, D> {
    let ax = x.clone().abs();
    let ay = y.clone().abs();

    let hi = ax.clone().max_pair(ay.clone());
    let lo = ax.clone().min_pair(ay.clone());
    let hi = hi.clone().mask_fill(hi.equal_elem(0.0), 1.0);

    // First octant, then unfold: swap axes, mirror in x, mirror in y.
    let angle = atan_unit(lo / hi);
    let angle = angle.clone().mask_where(ay.greater(ax), angle.neg().add_scalar(FRAC_PI_2));
    let angle = angle.clone().mask_where(x.lower_elem(0.0), angle.neg().add_scalar(PI));
    angle.clone().mask_where(y.lower_elem(0.0), angle.neg())
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::Autodiff;
    use burn::tensor::TensorData;
    use burn_ndarray::NdArray;

    type TestBackend = NdArray<f32>;

    const SAMPLES: [f32; 11] = [-7.5, -3.0, -1.0, -0.41, -0.05, 0.0, 0.02, 0.4142, 1.0, 2.5, 40.0];

    fn grid() -> (Vec<f32>, Vec<f32>) {
        SAMPLES
            .iter()
            .flat_map(|&y| SAMPLES.iter().map(move |&x| (y, x)))
            .unzip()
    }

    #[test]
    fn test_atan2_matches_std_in_every_quadrant() {
        let device = Default::default();
        let (ys, xs) = grid();

        let y = Tensor::<TestBackend, 1>::from_data(TensorData::new(ys.clone(), [ys.len()]), &device);
        let x = Tensor::<TestBackend, 1>::from_data(TensorData::new(xs.clone(), [xs.len()]), &device);
        let angles = atan2(y, x).into_data().to_vec::<f32>().unwrap();

        for ((a, y), x) in angles.iter().zip(&ys).zip(&xs) {
            let expected = y.atan2(*x);
            assert!((a - expected).abs() < 1e-5, "atan2({}, {}): got {}, expected {}", y, x, a, expected);
        }
    }

    #[test]
    fn test_atan2_zero_conventions() {
        let device = Default::default();
        let y = Tensor::<TestBackend, 1>::from_floats([0.0, 0.0, -0.0], &device);
        let x = Tensor::<TestBackend, 1>::from_floats([0.0, -2.0, -2.0], &device);

        let angles = atan2(y, x).into_data().to_vec::<f32>().unwrap();
        assert_eq!(angles[0], 0.0);
        assert!((angles[1] - PI).abs() < 1e-6);
        assert!((angles[2] - PI).abs() < 1e-6);
    }

    #[test]
    fn test_atan2_keeps_rank() {
        let device = Default::default();
        let y = Tensor::<TestBackend, 2>::ones([3, 1], &device);
        let x = Tensor::<TestBackend, 2>::ones([3, 1], &device);

        let angles = atan2(y, x);
        assert_eq!(angles.dims(), [3, 1]);
        for v in angles.into_data().to_vec::<f32>().unwrap() {
            assert!((v - FRAC_PI_4).abs() < 1e-6);
        }
    }

    #[test]
    fn test_atan2_gradient() {
        type AutodiffBackend = Autodiff<NdArray<f32>>;
        let device = Default::default();

        let ys = [0.3f32, -2.0, 1.5, -0.2];
        let xs = [1.0f32, 0.5, -3.0, -0.7];
        let y = Tensor::<AutodiffBackend, 1>::from_floats(ys, &device).require_grad();
        let x = Tensor::<AutodiffBackend, 1>::from_floats(xs, &device).require_grad();

        let grads = atan2(y.clone(), x.clone()).sum().backward();
        let grad_y = y.grad(&grads).unwrap().into_data().to_vec::<f32>().unwrap();
        let grad_x = x.grad(&grads).unwrap().into_data().to_vec::<f32>().unwrap();

        for i in 0..ys.len() {
            let r2 = xs[i] * xs[i] + ys[i] * ys[i];
            assert!((grad_y[i] - xs[i] / r2).abs() < 1e-4, "d/dy at {}: {}", i, grad_y[i]);
            assert!((grad_x[i] + ys[i] / r2).abs() < 1e-4, "d/dx at {}: {}", i, grad_x[i]);
        }
    }
}
