use std::sync::mpsc;

use tracing::{debug, error};

use crate::observe::event::Event;
use crate::train::epoch_stats::EpochStats;

/// Sink for diagnostic events. Nothing an observer does affects training results.
pub trait Observer {
    fn record(&mut self, event: &Event);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn record(&mut self, _event: &Event) {}
}

/// Forwards events to `tracing` as structured fields.
///
/// Weight updates and epochs go out at `DEBUG`, scoring failures at `ERROR`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn record(&mut self, event: &Event) {
        match event {
            Event::WeightsUpdated { epoch, weights, bias, error_before, error_after } => {
                debug!(
                    place = "neuron",
                    func = "update_weights",
                    epoch,
                    ?weights,
                    bias,
                    error_before,
                    error_after,
                    "updating weights of neuron"
                );
            }
            Event::EpochCompleted(stats) => {
                debug!(
                    place = "error evolution in epoch",
                    method = "train_neuron",
                    epoch_reached = stats.epoch,
                    total_epochs = stats.total_epochs,
                    squared_error_before = stats.squared_error_before,
                    squared_error_after = stats.squared_error_after,
                    cumulative_squared_error_before = stats.cumulative_squared_error_before,
                    cumulative_squared_error_after = stats.cumulative_squared_error_after,
                    elapsed_us = stats.elapsed_us,
                    "epoch and squared errors reached before and after updating weights"
                );
            }
            Event::AccuracyFailed { actual_len, predicted_len } => {
                error!(
                    place = "neuron",
                    method = "accuracy",
                    actual_len,
                    predicted_len,
                    "Failed to compute accuracy between actual values and predictions: different length."
                );
            }
        }
    }
}

/// Records every event in order; handy for asserting on a run's trace.
impl Observer for Vec<Event> {
    fn record(&mut self, event: &Event) {
        self.push(event.clone());
    }
}

/// Sends one `EpochStats` per completed epoch down the channel and ignores
/// everything else. A dropped receiver is not an error: training always runs
/// every requested epoch.
impl Observer for mpsc::Sender<EpochStats> {
    fn record(&mut self, event: &Event) {
        if let Event::EpochCompleted(stats) = event {
            let _ = self.send(stats.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(epoch: usize) -> EpochStats {
        EpochStats {
            epoch,
            total_epochs: 2,
            squared_error_before: 1.0,
            squared_error_after: 0.0,
            cumulative_squared_error_before: epoch as f64,
            cumulative_squared_error_after: 0.0,
            elapsed_us: 0,
        }
    }

    #[test]
    fn test_channel_forwards_epochs_only() {
        let (mut tx, rx) = mpsc::channel::<EpochStats>();
        tx.record(&Event::AccuracyFailed { actual_len: 1, predicted_len: 2 });
        tx.record(&Event::EpochCompleted(stats(1)));
        tx.record(&Event::EpochCompleted(stats(2)));
        drop(tx);

        let received: Vec<usize> = rx.iter().map(|s| s.epoch).collect();
        assert_eq!(received, vec![1, 2]);
    }

    #[test]
    fn test_channel_with_dropped_receiver() {
        let (mut tx, rx) = mpsc::channel::<EpochStats>();
        drop(rx);
        tx.record(&Event::EpochCompleted(stats(1)));
    }

    #[test]
    fn test_event_json_is_tagged() {
        let event = Event::AccuracyFailed { actual_len: 3, predicted_len: 4 };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "accuracy_failed");
        assert_eq!(json["actual_len"], 3);
    }
}
