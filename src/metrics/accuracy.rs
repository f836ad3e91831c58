use serde::{Serialize, Deserialize};

use crate::error::{PerceptronError, Result};
use crate::neuron::{Neuron, Stimulus};
use crate::observe::{Event, Observer};

/// How many positions of two sequences agree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Accuracy {
    pub correct: usize,
    /// `100 · correct / len`, in [0, 100].
    pub percentage: f64,
}

/// Counts the positions where `actual` and `predicted` hold exactly the same value.
///
/// Values are expected to come from {0.0, 1.0}, so exact float comparison is
/// what we want. Two empty sequences score `0` and `0.0`.
///
/// # Errors
/// `LengthMismatch` when the sequences differ in length; the observer is
/// notified with `Event::AccuracyFailed` first.
pub fn accuracy<O: Observer + ?Sized>(
    actual: &[f64],
    predicted: &[f64],
    observer: &mut O,
) -> Result<Accuracy> {
    if actual.len() != predicted.len() {
        observer.record(&Event::AccuracyFailed {
            actual_len: actual.len(),
            predicted_len: predicted.len(),
        });
        return Err(PerceptronError::LengthMismatch {
            actual: actual.len(),
            predicted: predicted.len(),
        });
    }

    if actual.is_empty() {
        return Ok(Accuracy { correct: 0, percentage: 0.0 });
    }

    let correct = actual.iter().zip(predicted.iter())
        .filter(|(a, p)| a == p)
        .count();

    Ok(Accuracy {
        correct,
        percentage: correct as f64 / actual.len() as f64 * 100.0,
    })
}

/// Predicts every stimulus and scores the predictions against their `expected` values.
pub fn evaluate<O: Observer + ?Sized>(
    neuron: &Neuron,
    stimuli: &[Stimulus],
    observer: &mut O,
) -> Result<Accuracy> {
    let predicted = neuron.predict_all(stimuli)?;
    let actual: Vec<f64> = stimuli.iter().map(|s| s.expected).collect();
    accuracy(&actual, &predicted, observer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::NoopObserver;

    #[test]
    fn test_accuracy_counts_matches() {
        let acc = accuracy(&[1.0, 0.0, 1.0, 1.0], &[1.0, 0.0, 0.0, 1.0], &mut NoopObserver).unwrap();
        assert_eq!(acc, Accuracy { correct: 3, percentage: 75.0 });
    }

    #[test]
    fn test_accuracy_zero_match_is_not_an_error() {
        let acc = accuracy(&[1.0, 1.0], &[0.0, 0.0], &mut NoopObserver).unwrap();
        assert_eq!(acc, Accuracy { correct: 0, percentage: 0.0 });
    }

    #[test]
    fn test_accuracy_empty() {
        let acc = accuracy(&[], &[], &mut NoopObserver).unwrap();
        assert_eq!(acc.correct, 0);
        assert_eq!(acc.percentage, 0.0);
    }

    #[test]
    fn test_accuracy_length_mismatch() {
        let mut events: Vec<Event> = Vec::new();
        let err = accuracy(&[1.0, 0.0], &[1.0], &mut events).unwrap_err();

        assert!(matches!(
            err,
            PerceptronError::LengthMismatch { actual: 2, predicted: 1 }
        ));
        assert_eq!(
            events,
            vec![Event::AccuracyFailed { actual_len: 2, predicted_len: 1 }]
        );
    }

    #[test]
    fn test_evaluate() {
        // Fires only when x > 0.5.
        let neuron = Neuron::with_weights(vec![1.0], -0.5, 0.1);
        let stimuli = vec![
            Stimulus::new(vec![0.0], 0.0),
            Stimulus::new(vec![1.0], 1.0),
            Stimulus::new(vec![0.25], 1.0),
            Stimulus::new(vec![0.75], 1.0),
        ];
        let acc = evaluate(&neuron, &stimuli, &mut NoopObserver).unwrap();
        assert_eq!(acc, Accuracy { correct: 3, percentage: 75.0 });
    }

    #[test]
    fn test_evaluate_dimension_mismatch() {
        let neuron = Neuron::with_weights(vec![1.0, 1.0], 0.0, 0.1);
        let err = evaluate(&neuron, &[Stimulus::new(vec![1.0], 1.0)], &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(err, PerceptronError::DimensionMismatch { .. }));
    }
}
