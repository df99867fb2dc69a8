use burn::{
    module::Module,
    tensor::{backend::Backend, Tensor},
};
use std::marker::PhantomData;
use trackwarp_core::GeometryError;

/// Scale-rotation matrices for a spatial transformer.
///
/// Holds no parameters; it exists so the matrix construction can sit inside
/// a larger `Module` tree.
#[derive(Module, Debug)]
pub struct ScaleRotateMatrixGenerator<B: Backend> {
    phantom: PhantomData<B>,
}

impl<B: Backend> ScaleRotateMatrixGenerator<B> {
    pub fn new() -> Self {
        Self { phantom: PhantomData }
    }

    /// Forward pass
    ///
    /// # Arguments
    ///
    /// * `input` - `[angle, scale]` pairs [N, 2]
    ///
    /// # Returns
    ///
    /// * `[[s cos, s sin], [-s sin, s cos], [0, 0]]` per sample [N, 3, 2]
    ///
    /// # Panics
    ///
    /// If `input` has fewer than two channels.
    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 3> {
        self.try_forward(input).unwrap_or_else(|err| panic!("{}", err))
    }

    /// [`forward`](Self::forward) reporting malformed input as an error.
    pub fn try_forward(&self, input: Tensor<B, 2>) -> trackwarp_core::Result<Tensor<B, 3>> {
        let [n, c] = input.dims();
        if c < 2 {
            return Err(GeometryError::shape_mismatch(
                "ScaleRotateMatrixGenerator::forward",
                [n, 2],
                [n, c],
            ));
        }

        if n == 0 {
            return Ok(Tensor::zeros([0, 3, 2], &input.device()));
        }

        let angles = input.clone().narrow(1, 0, 1);
        let scaler = input.narrow(1, 1, 1);

        let cosines = angles.clone().cos() * scaler.clone();
        let sinuses = angles.sin() * scaler;
        let zero = cosines.zeros_like();

        let flat = Tensor::cat(
            vec![
                cosines.clone(),
                sinuses.clone(),
                sinuses.neg(),
                cosines,
                zero.clone(),
                zero,
            ],
            1,
        );
        Ok(flat.reshape([n, 3, 2]))
    }
}

impl<B: Backend> Default for ScaleRotateMatrixGenerator<B> {
    fn default() -> Self {
        Self::new()
    }
}
