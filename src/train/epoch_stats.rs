use serde::{Serialize, Deserialize};

/// Per-epoch training statistics emitted by `train_neuron`.
///
/// The squared errors are sums over every stimulus of the epoch of
/// `(expected - predicted)²`, measured once before and once after that
/// stimulus' weight update. The `cumulative_*` fields keep running totals
/// over all epochs completed so far in the current run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    pub squared_error_before: f64,
    pub squared_error_after: f64,
    pub cumulative_squared_error_before: f64,
    pub cumulative_squared_error_after: f64,
    /// Wall-clock duration of this single epoch in microseconds.
    pub elapsed_us: u64,
}
