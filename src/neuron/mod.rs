pub mod neuron;
pub mod stimulus;

pub use neuron::{Neuron, SCALING_FACTOR};
pub use stimulus::Stimulus;
