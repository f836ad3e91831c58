use serde::{Serialize, Deserialize};

use crate::train::epoch_stats::EpochStats;

/// Diagnostic events emitted by the trainer and the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// One perceptron-rule step was applied. Carries the neuron state after the step.
    WeightsUpdated {
        epoch: usize,
        weights: Vec<f64>,
        bias: f64,
        error_before: f64,
        error_after: f64,
    },
    EpochCompleted(EpochStats),
    /// The scorer was handed sequences of different length.
    AccuracyFailed {
        actual_len: usize,
        predicted_len: usize,
    },
}
