//! Differentiable batched 2D geometry for learned visual tracking.
//!
//! Every operation is composed of `burn` tensor ops over a leading batch
//! axis, so running it on an `Autodiff` backend makes gradients flow from
//! the outputs back to the inputs.

pub mod error;
pub mod homography;
pub mod linalg;
pub mod state;
pub mod trig;

mod shape;

pub use error::{GeometryError, Result};
pub use homography::{
    compute_basis, compute_perspective, project_points, PerspectiveConfig, PerspectiveSolver, TargetPoints,
    DEFAULT_TARGET,
};
pub use linalg::{BatchedInverse, CofactorInverse};
pub use state::{
    compute_next_state, compute_points, compute_renorm_matrix, get_init_matrix, get_step_matrix, pt_ori_sca_2_pts,
    pt_xyrs_2_xyxy, pt_xyxy_2_xyrs,
};
