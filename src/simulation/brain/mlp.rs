//! Single dense layer of the feed-forward network.

use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

/// Activation applied to a layer's pre-activations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    /// `max(0, z)`, used by every hidden layer.
    Relu,
    /// `tanh(z)`, used by the output layer.
    Tanh,
}

impl Activation {
    #[inline]
    fn apply(self, z: f32) -> f32 {
        match self {
            Activation::Relu => z.max(0.0),
            Activation::Tanh => z.tanh(),
        }
    }
}

/// A single bias-free layer of a multi-layer perceptron.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mlp {
    /// Weight matrix (`input_size` × `output_size`).
    pub weights: Array2<f32>,
    /// Activation applied after the matrix product.
    pub activation: Activation,
}

impl Mlp {
    /// Creates a new layer with weights drawn from a standard normal distribution.
    pub fn new_random<R: Rng + ?Sized>(
        input_size: usize,
        output_size: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        Self {
            weights: Array2::from_shape_simple_fn((input_size, output_size), || {
                rng.sample(StandardNormal)
            }),
            activation,
        }
    }

    /// Number of inputs this layer expects.
    pub fn input_size(&self) -> usize {
        self.weights.nrows()
    }

    /// Number of outputs this layer produces.
    pub fn output_size(&self) -> usize {
        self.weights.ncols()
    }

    /// Performs the forward pass `activation(inputs · weights)`.
    #[inline]
    pub fn forward(&self, inputs: &Array1<f32>) -> Array1<f32> {
        let mut output = inputs.dot(&self.weights);
        let activation = self.activation;
        output.mapv_inplace(|z| activation.apply(z));
        output
    }

    /// Adds zero-mean, unit-variance noise scaled by `rate` to every weight.
    pub fn mutate<R: Rng + ?Sized>(&mut self, rate: f32, rng: &mut R) {
        self.weights.mapv_inplace(|w| {
            let noise: f32 = rng.sample(StandardNormal);
            w + noise * rate
        });
    }
}
