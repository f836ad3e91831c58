use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::neuron::{Neuron, Stimulus};

/// Prediction error (`expected - predicted`) around a single weight update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpdateErrors {
    pub before: f64,
    pub after: f64,
}

/// Applies one step of the perceptron learning rule for `stimulus`.
///
/// With `e = expected - predict(x)`:
///   bias  += lr · e
///   w[i]  += lr · e · x[i]
///
/// Returns the error measured before and after the step. The neuron is left
/// untouched if the stimulus dimension does not match its weights.
pub fn update_weights(neuron: &mut Neuron, stimulus: &Stimulus) -> Result<UpdateErrors> {
    let before = stimulus.expected - neuron.predict(stimulus)?;

    let step = neuron.learning_rate * before;
    neuron.bias += step;
    for (w, x) in neuron.weights.iter_mut().zip(stimulus.dimensions.iter()) {
        *w += step * x;
    }

    let after = stimulus.expected - neuron.predict(stimulus)?;

    Ok(UpdateErrors { before, after })
}
