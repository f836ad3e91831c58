use serde::{Serialize, Deserialize};

use crate::error::Result;

/// Configuration for a `train_neuron` run.
///
/// # Fields
/// - `epochs` — number of full passes over the stimuli; always run to completion
/// - `reset`  — zero the weights (sized from the first stimulus) and the bias
///              before training; when `false` training continues from the
///              neuron's current state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    #[serde(default = "default_epochs")]
    pub epochs: usize,
    #[serde(default = "default_reset")]
    pub reset: bool,
}

fn default_epochs() -> usize {
    10
}

fn default_reset() -> bool {
    true
}

impl TrainConfig {
    pub fn new(epochs: usize, reset: bool) -> Self {
        TrainConfig { epochs, reset }
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `TrainConfig` from a JSON file. Missing fields take their defaults.
    pub fn load_json(path: &str) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(default_epochs(), default_reset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PerceptronError;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: TrainConfig = serde_json::from_str(r#"{ "epochs": 25 }"#).unwrap();
        assert_eq!(config, TrainConfig::new(25, true));

        let config: TrainConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TrainConfig::default());
    }

    #[test]
    fn test_json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("train_config_{}.json", std::process::id()));
        let path = path.to_str().unwrap();

        let config = TrainConfig::new(40, false);
        config.save_json(path).unwrap();
        let loaded = TrainConfig::load_json(path).unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = TrainConfig::load_json("/nonexistent/train_config.json").unwrap_err();
        assert!(matches!(err, PerceptronError::Io(_)));
    }

    #[test]
    fn test_load_malformed_json() {
        let err = serde_json::from_str::<TrainConfig>(r#"{ "epochs": "many" }"#).unwrap_err();
        assert!(matches!(PerceptronError::from(err), PerceptronError::Json(_)));
    }
}
