use burn::{
    config::Config,
    module::{Ignored, Module},
    tensor::{backend::Backend, Tensor},
};
use std::marker::PhantomData;
use trackwarp_core::state::{get_init_matrix, get_step_matrix};

/// Configuration for a [`StateTransform`].
#[derive(Config, Debug, PartialEq)]
pub struct StateTransformConfig {
    /// Read a scale channel (init matrix) or fix the scale to one (step matrix)
    #[config(default = "true")]
    pub scaled: bool,
}

impl StateTransformConfig {
    pub fn init<B: Backend>(&self) -> StateTransform<B> {
        StateTransform {
            with_scale: Ignored(self.scaled),
            phantom: PhantomData,
        }
    }
}

/// Homogeneous similarity transform of a pose state.
///
/// `[x, y, θ, scale]` states go through the init matrix, `[x, y, θ]`
/// steps through the unit-scale step matrix.
#[derive(Module, Debug)]
pub struct StateTransform<B: Backend> {
    with_scale: Ignored<bool>,
    phantom: PhantomData<B>,
}

impl<B: Backend> StateTransform<B> {
    /// Whether the scale channel is read.
    pub fn with_scale(&self) -> bool {
        *self.with_scale
    }

    /// Forward pass: `[N, 4]` or `[N, 3]` states to `[N, 3, 3]` matrices.
    ///
    /// # Panics
    ///
    /// If the state has fewer channels than the transform reads.
    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 3> {
        self.try_forward(input).unwrap_or_else(|err| panic!("{}", err))
    }

    /// [`forward`](Self::forward) reporting malformed input as an error.
    pub fn try_forward(&self, input: Tensor<B, 2>) -> trackwarp_core::Result<Tensor<B, 3>> {
        if *self.with_scale {
            get_init_matrix(input)
        } else {
            get_step_matrix(input)
        }
    }
}
