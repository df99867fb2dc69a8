//! Batched small-matrix linear algebra.
//!
//! The inverse is a pluggable collaborator: the homography solver only
//! needs something implementing [`BatchedInverse`].

pub mod inverse;

pub use inverse::{determinant_3x3, invert_3x3, BatchedInverse, CofactorInverse};
