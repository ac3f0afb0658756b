//! Neural network implementation for agent brains.
//!
//! A plain feed-forward perceptron: ReLU hidden layers, a `tanh` output layer
//! and in-place random mutation. There is no backward pass; the only way the
//! weights change is [`Brain::mutate`].

use ndarray::{Array1, Array2};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub mod mlp;

pub use mlp::{Activation, Mlp};

/// Index of the change-vision output.
pub const CHANGE_VISION_OUTPUT: usize = 4;

/// Attenuation applied to the change-vision output after `tanh`.
pub const CHANGE_VISION_ATTENUATION: f32 = 0.1;

/// Feed-forward network that maps a perception vector to a decision vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brain {
    /// Ordered layers from input to output.
    pub layers: Vec<Mlp>,
}

impl Brain {
    /// Creates a new brain with standard-normal weights.
    ///
    /// `layer_sizes` lists the width of every layer including input and output,
    /// so `[4, 10, 10, 5]` yields three weight matrices.
    pub fn new<R: Rng + ?Sized>(layer_sizes: &[usize], rng: &mut R) -> Self {
        let last = layer_sizes.len().saturating_sub(2);
        let layers = layer_sizes
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let activation = if i == last {
                    Activation::Tanh
                } else {
                    Activation::Relu
                };
                Mlp::new_random(pair[0], pair[1], activation, rng)
            })
            .collect();

        Self { layers }
    }

    /// Builds a brain from explicit weight matrices.
    ///
    /// The last matrix gets the `tanh` activation, every other one ReLU.
    pub fn from_weights(weights: Vec<Array2<f32>>) -> Self {
        let last = weights.len().saturating_sub(1);
        let layers = weights
            .into_iter()
            .enumerate()
            .map(|(i, weights)| Mlp {
                weights,
                activation: if i == last {
                    Activation::Tanh
                } else {
                    Activation::Relu
                },
            })
            .collect();

        Self { layers }
    }

    /// Runs a forward pass through the brain.
    ///
    /// The change-vision component is scaled by [`CHANGE_VISION_ATTENUATION`],
    /// so it stays within roughly `(-0.1, 0.1)` while the others span `(-1, 1)`.
    #[inline]
    pub fn think(&self, inputs: &Array1<f32>) -> Array1<f32> {
        let mut output = inputs.clone();
        for layer in &self.layers {
            output = layer.forward(&output);
        }
        if let Some(change_vision) = output.get_mut(CHANGE_VISION_OUTPUT) {
            *change_vision *= CHANGE_VISION_ATTENUATION;
        }
        output
    }

    /// Mutates all weights in place.
    pub fn mutate<R: Rng + ?Sized>(&mut self, rate: f32, rng: &mut R) {
        for layer in &mut self.layers {
            layer.mutate(rate, rng);
        }
    }

    /// Copies of all weight matrices, input side first.
    pub fn weights(&self) -> Vec<Array2<f32>> {
        self.layers.iter().map(|layer| layer.weights.clone()).collect()
    }

    /// Widths of every layer including input and output.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.layers.first().map(Mlp::input_size).into_iter().collect();
        sizes.extend(self.layers.iter().map(Mlp::output_size));
        sizes
    }
}
