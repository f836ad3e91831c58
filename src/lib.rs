pub mod error;
pub mod math;
pub mod neuron;
pub mod observe;
pub mod train;
pub mod metrics;

// Convenience re-exports
pub use error::{PerceptronError, Result};
pub use math::vector::dot;
pub use neuron::{Neuron, Stimulus, SCALING_FACTOR};
pub use observe::{Event, Observer, NoopObserver, TracingObserver};
pub use train::{train_neuron, update_weights, EpochStats, TrainConfig, UpdateErrors};
pub use metrics::{accuracy, evaluate, Accuracy};
