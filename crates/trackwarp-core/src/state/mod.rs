//! Tracker state conversions.
//!
//! Pure batched functions between pose states, point pairs and transform
//! matrices. Every converter validates the channels it reads and ignores
//! any trailing ones.

pub mod matrix;
pub mod motion;
pub mod points;
pub mod renorm;

pub use matrix::{get_init_matrix, get_step_matrix};
pub use motion::compute_next_state;
pub use points::{compute_points, pt_ori_sca_2_homogeneous_pts, pt_ori_sca_2_pts, pt_xyrs_2_xyxy, pt_xyxy_2_xyrs};
pub use renorm::{compute_renorm_matrix, renorm_matrix_for_image};
