use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::{PerceptronError, Result};
use crate::math::vector::{dot, sample_standard_normal};
use crate::neuron::stimulus::Stimulus;

/// Scale applied to every standard-normal draw made by `Neuron::random_init`.
pub const SCALING_FACTOR: f64 = 1e-13;

/// A single perceptron with a step activation.
///
/// `value` and `delta` are not read by any single-neuron operation; they are
/// populated by the initializer and otherwise carried untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    pub weights: Vec<f64>,
    pub bias: f64,
    pub learning_rate: f64,
    pub value: f64,
    pub delta: f64,
}

impl Neuron {
    /// An untrained neuron with no weights. The trainer sizes the weight
    /// vector on its first reset.
    pub fn new(learning_rate: f64) -> Neuron {
        Neuron::with_weights(Vec::new(), 0.0, learning_rate)
    }

    pub fn with_weights(weights: Vec<f64>, bias: f64, learning_rate: f64) -> Neuron {
        Neuron {
            weights,
            bias,
            learning_rate,
            value: 0.0,
            delta: 0.0,
        }
    }

    /// A neuron of dimension `dim` initialized from the thread-local RNG.
    pub fn random(dim: usize) -> Neuron {
        let mut neuron = Neuron::new(0.0);
        neuron.random_init(dim, &mut rand::thread_rng());
        neuron
    }

    /// Overwrites every field with an independent N(0, 1) draw scaled by
    /// `SCALING_FACTOR`. The weight vector ends up with exactly `dim` entries.
    ///
    /// The learning rate is drawn like everything else, so it is usually far
    /// too small (and may be negative); set it explicitly before training.
    pub fn random_init<R: Rng + ?Sized>(&mut self, dim: usize, rng: &mut R) {
        self.weights = (0..dim)
            .map(|_| sample_standard_normal(rng) * SCALING_FACTOR)
            .collect();
        self.bias = sample_standard_normal(rng) * SCALING_FACTOR;
        self.learning_rate = sample_standard_normal(rng) * SCALING_FACTOR;
        self.value = sample_standard_normal(rng) * SCALING_FACTOR;
        self.delta = sample_standard_normal(rng) * SCALING_FACTOR;
    }

    pub fn dim(&self) -> usize {
        self.weights.len()
    }

    /// Fails with `DimensionMismatch` unless the stimulus pairs one input with each weight.
    pub fn check_dim(&self, stimulus: &Stimulus) -> Result<()> {
        if self.weights.len() != stimulus.dimensions.len() {
            return Err(PerceptronError::DimensionMismatch {
                weights: self.weights.len(),
                dimensions: stimulus.dimensions.len(),
            });
        }
        Ok(())
    }

    /// Weighted sum of the inputs plus bias.
    pub fn activation(&self, stimulus: &Stimulus) -> Result<f64> {
        self.check_dim(stimulus)?;
        Ok(dot(&self.weights, &stimulus.dimensions) + self.bias)
    }

    /// Binary decision: `1.0` when the weighted sum is at or above zero, `0.0` otherwise.
    pub fn predict(&self, stimulus: &Stimulus) -> Result<f64> {
        let sum = self.activation(stimulus)?;
        Ok(if sum < 0.0 { 0.0 } else { 1.0 })
    }

    /// Predicts every stimulus in order.
    pub fn predict_all(&self, stimuli: &[Stimulus]) -> Result<Vec<f64>> {
        stimuli.iter().map(|s| self.predict(s)).collect()
    }
}
