pub mod generator;
pub mod state_transform;

pub use generator::ScaleRotateMatrixGenerator;
pub use state_transform::{StateTransform, StateTransformConfig};
