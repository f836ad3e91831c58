use thiserror::Error;

/// Everything that can go wrong while initializing, training or scoring a neuron.
#[derive(Error, Debug)]
pub enum PerceptronError {
    /// The two sequences handed to the scorer differ in length.
    #[error("Cannot compare {actual} actual values with {predicted} predictions: different length.")]
    LengthMismatch { actual: usize, predicted: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Weight vector and stimulus dimensions do not pair up one-to-one.
    #[error("Neuron has {weights} weights but stimulus has {dimensions} dimensions.")]
    DimensionMismatch { weights: usize, dimensions: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PerceptronError>;
