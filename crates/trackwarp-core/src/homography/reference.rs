//! Reference basis of the target frame, and its process-wide cache.

use std::sync::OnceLock;

use burn::tensor::backend::Backend;
use burn::tensor::{Tensor, TensorData};

use crate::error::{GeometryError, Result};
use crate::linalg::invert_3x3;

/// Four homogeneous points as rows `x`, `y`, `w`; one column per point.
pub type TargetPoints = [[f64; 4]; 3];

/// Canonical target: the corners of the `[-1, 1]` square.
pub const DEFAULT_TARGET: TargetPoints = [
    [-1.0, -1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0, 1.0],
];

/// Inverse basis of a target, held as host values so it can be shared
/// across threads and backends.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceBasis {
    target: TargetPoints,
    inverse: [f64; 9],
}

/// Projective basis of a single point set, in `f64`.
///
/// Same construction as [`compute_basis`](super::compute_basis): columns of
/// `A` scaled by `A⁻¹ b`.
fn host_basis(target: &TargetPoints) -> [[f64; 3]; 3] {
    let a: [[f64; 3]; 3] = core::array::from_fn(|r| [target[r][0], target[r][1], target[r][2]]);
    let a_inv = invert_3x3(&a);
    let x: [f64; 3] = core::array::from_fn(|r| (0..3).map(|c| a_inv[r][c] * target[c][3]).sum());

    core::array::from_fn(|r| core::array::from_fn(|c| a[r][c] * x[c]))
}

impl ReferenceBasis {
    /// Compute the inverse basis of `target` in `f64`, independently of
    /// any backend precision.
    pub fn new(target: &TargetPoints) -> Self {
        let inverse = invert_3x3(&host_basis(target));

        Self {
            target: *target,
            inverse: core::array::from_fn(|i| inverse[i / 3][i % 3]),
        }
    }

    /// Target the basis was computed from.
    pub fn target(&self) -> &TargetPoints {
        &self.target
    }

    /// Inverse basis as a `[1, 3, 3]` tensor.
    pub fn to_tensor<B: Backend>(&self, device: &B::Device) -> Tensor<B, 3> {
        Tensor::from_data(TensorData::new(self.inverse.to_vec(), [1, 3, 3]), device)
    }
}

/// Target points as a `[1, 3, 4]` tensor.
pub fn target_tensor<B: Backend>(target: &TargetPoints, device: &B::Device) -> Tensor<B, 3> {
    let values: Vec<f64> = target.iter().flatten().copied().collect();
    Tensor::from_data(TensorData::new(values, [1, 3, 4]), device)
}

static REFERENCE_BASIS: OnceLock<ReferenceBasis> = OnceLock::new();

/// Target the process-wide reference basis was built from, if built yet.
pub fn reference_target() -> Option<TargetPoints> {
    REFERENCE_BASIS.get().map(|basis| basis.target)
}

/// Fetch the process-wide reference basis, building it from `target` on
/// first use.
///
/// The cache is filled at most once. Asking for a different target
/// afterwards is an error rather than a silent reuse of the stale basis.
pub(crate) fn shared_reference_basis(target: &TargetPoints) -> Result<&'static ReferenceBasis> {
    let cached = REFERENCE_BASIS.get_or_init(|| {
        tracing::debug!("Reference basis computed for target {:?}", target);
        ReferenceBasis::new(target)
    });

    if cached.target != *target {
        tracing::warn!(
            "Reference basis requested for {:?} but cache holds {:?}",
            target,
            cached.target
        );
        return Err(GeometryError::ReferenceTargetMismatch {
            cached: cached.target,
            requested: *target,
        });
    }

    Ok(cached)
}
