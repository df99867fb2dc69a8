//! Batched 3x3 inverse.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

/// Inverse of a batch of square matrices.
///
/// Implementations must be built from differentiable tensor ops so that
/// gradients propagate through the inverse. Behaviour on singular input is
/// backend-defined (typically non-finite values).
pub trait BatchedInverse<B: Backend> {
    /// Invert every matrix of a `[N, 3, 3]` batch.
    fn invert(&self, matrices: Tensor<B, 3>) -> Tensor<B, 3>;
}

/// Closed-form 3x3 inverse: adjugate divided by determinant.
#[derive(Debug, Clone, Copy, Default)]
pub struct CofactorInverse;

/// The nine entries of each matrix as `[N, 1]` columns, row-major.
fn entries<B: Backend>(matrices: Tensor<B, 3>) -> [Tensor<B, 2>; 9] {
    let [n, _, _] = matrices.dims();
    let flat = matrices.reshape([n, 9]);
    core::array::from_fn(|i| flat.clone().narrow(1, i, 1))
}

/// Cofactor matrix entries, row-major, for a matrix given by its entries.
fn cofactors<B: Backend>(m: &[Tensor<B, 2>; 9]) -> [Tensor<B, 2>; 9] {
    let [a, b, c, d, e, f, g, h, i] = m.clone();
    [
        e.clone() * i.clone() - f.clone() * h.clone(),
        f.clone() * g.clone() - d.clone() * i.clone(),
        d.clone() * h.clone() - e.clone() * g.clone(),
        c.clone() * h.clone() - b.clone() * i.clone(),
        a.clone() * i - c.clone() * g.clone(),
        b.clone() * g - a.clone() * h,
        b.clone() * f.clone() - c.clone() * e.clone(),
        c * d.clone() - a.clone() * f,
        a * e - b * d,
    ]
}

/// Determinant from the first row and its cofactors.
fn expand_first_row<B: Backend>(m: &[Tensor<B, 2>; 9], cof: &[Tensor<B, 2>; 9]) -> Tensor<B, 2> {
    m[0].clone() * cof[0].clone() + m[1].clone() * cof[1].clone() + m[2].clone() * cof[2].clone()
}

/// Determinant of every matrix of a `[N, 3, 3]` batch, shape `[N]`.
pub fn determinant_3x3<B: Backend>(matrices: Tensor<B, 3>) -> Tensor<B, 1> {
    let [n, _, _] = matrices.dims();
    if n == 0 {
        return Tensor::zeros([0], &matrices.device());
    }
    let m = entries(matrices);
    let cof = cofactors(&m);
    expand_first_row(&m, &cof).reshape([n])
}

/// Host-side counterpart of [`CofactorInverse`] for a single `f64` matrix.
///
/// A singular matrix yields non-finite entries, as on tensors.
pub fn invert_3x3(m: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let [[a, b, c], [d, e, f], [g, h, i]] = *m;
    let cof = [
        [e * i - f * h, f * g - d * i, d * h - e * g],
        [c * h - b * i, a * i - c * g, b * g - a * h],
        [b * f - c * e, c * d - a * f, a * e - b * d],
    ];
    let det = a * cof[0][0] + b * cof[0][1] + c * cof[0][2];

    core::array::from_fn(|r| core::array::from_fn(|col| cof[col][r] / det))
}

impl<B: Backend> BatchedInverse<B> for CofactorInverse {
    fn invert(&self, matrices: Tensor<B, 3>) -> Tensor<B, 3> {
        let [n, _, _] = matrices.dims();
        if n == 0 {
            return matrices;
        }
        let m = entries(matrices);
        let cof = cofactors(&m);
        let det = expand_first_row(&m, &cof);

        // Adjugate is the transposed cofactor matrix.
        let [c00, c01, c02, c10, c11, c12, c20, c21, c22] = cof;
        let adjugate = Tensor::cat(vec![c00, c10, c20, c01, c11, c21, c02, c12, c22], 1);

        (adjugate / det).reshape([n, 3, 3])
    }
}
