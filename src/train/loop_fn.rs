use std::time::Instant;

use crate::error::{PerceptronError, Result};
use crate::neuron::{Neuron, Stimulus};
use crate::observe::{Event, Observer};
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::update::update_weights;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `neuron` on `stimuli` for `config.epochs` epochs and returns the
/// statistics of the last epoch.
///
/// # Arguments
/// - `neuron`   — modified in place; its learning rate must already be set
/// - `stimuli`  — training examples, visited in the given order every epoch
/// - `config`   — epoch count and reset flag
/// - `observer` — receives one `WeightsUpdated` per stimulus and one
///                `EpochCompleted` per epoch
///
/// Learning is online: each update sees the weights left by the previous
/// stimulus of the same epoch. There is no early stopping.
///
/// # Errors
/// - `InvalidInput` if `stimuli` is empty or `config.epochs` is zero.
/// - `DimensionMismatch` if any stimulus does not match the training
///   dimension (the first stimulus' when resetting, the neuron's otherwise).
///   All stimuli are checked before the neuron is touched.
pub fn train_neuron<O: Observer + ?Sized>(
    neuron: &mut Neuron,
    stimuli: &[Stimulus],
    config: &TrainConfig,
    observer: &mut O,
) -> Result<EpochStats> {
    let first = stimuli.first().ok_or_else(|| {
        PerceptronError::InvalidInput("cannot train on an empty set of stimuli".into())
    })?;
    if config.epochs == 0 {
        return Err(PerceptronError::InvalidInput("epochs must be at least 1".into()));
    }

    let dim = if config.reset { first.dim() } else { neuron.dim() };
    if let Some(bad) = stimuli.iter().find(|s| s.dim() != dim) {
        return Err(PerceptronError::DimensionMismatch {
            weights: dim,
            dimensions: bad.dim(),
        });
    }

    if config.reset {
        neuron.weights = vec![0.0; dim];
        neuron.bias = 0.0;
    }

    let mut cumulative_before = 0.0;
    let mut cumulative_after = 0.0;
    let mut last = None;

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        let (before, after) = run_one_epoch(neuron, stimuli, epoch, observer)?;
        cumulative_before += before;
        cumulative_after += after;

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            squared_error_before: before,
            squared_error_after: after,
            cumulative_squared_error_before: cumulative_before,
            cumulative_squared_error_after: cumulative_after,
            elapsed_us: t_start.elapsed().as_micros() as u64,
        };
        observer.record(&Event::EpochCompleted(stats.clone()));
        last = Some(stats);
    }

    // epochs >= 1, so at least one epoch has run.
    last.ok_or_else(|| PerceptronError::InvalidInput("no epoch was run".into()))
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One in-order pass over the stimuli. Returns the summed squared error
/// before and after each update.
fn run_one_epoch<O: Observer + ?Sized>(
    neuron: &mut Neuron,
    stimuli: &[Stimulus],
    epoch: usize,
    observer: &mut O,
) -> Result<(f64, f64)> {
    let mut squared_before = 0.0;
    let mut squared_after = 0.0;

    for stimulus in stimuli {
        let errors = update_weights(neuron, stimulus)?;
        squared_before += errors.before * errors.before;
        squared_after += errors.after * errors.after;

        observer.record(&Event::WeightsUpdated {
            epoch,
            weights: neuron.weights.clone(),
            bias: neuron.bias,
            error_before: errors.before,
            error_after: errors.after,
        });
    }

    Ok((squared_before, squared_after))
}
