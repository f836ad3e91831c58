use serde::{Serialize, Deserialize};

/// One labeled example: an input vector plus the value the neuron should output.
///
/// `expected` is canonically `0.0` or `1.0`; any other value still trains, it
/// just never matches a prediction exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stimulus {
    pub dimensions: Vec<f64>,
    pub expected: f64,
}

impl Stimulus {
    pub fn new(dimensions: Vec<f64>, expected: f64) -> Stimulus {
        Stimulus { dimensions, expected }
    }

    /// Input dimensionality.
    pub fn dim(&self) -> usize {
        self.dimensions.len()
    }
}
