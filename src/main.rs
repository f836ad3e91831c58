use ferrite_perceptron::{evaluate, train_neuron, Neuron, Stimulus, TracingObserver, TrainConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

// Trains a perceptron on the AND gate and reports its accuracy.
// Usage:
//   ferrite-perceptron [train_config.json]
// Set RUST_LOG=debug to see every weight update.
fn main() -> ferrite_perceptron::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => TrainConfig::load_json(&path)?,
        None => TrainConfig::new(20, true),
    };
    info!(epochs = config.epochs, reset = config.reset, "training configuration");

    let stimuli = vec![
        Stimulus::new(vec![0.0, 0.0], 0.0),
        Stimulus::new(vec![0.0, 1.0], 0.0),
        Stimulus::new(vec![1.0, 0.0], 0.0),
        Stimulus::new(vec![1.0, 1.0], 1.0),
    ];

    let mut neuron = Neuron::random(2);
    neuron.learning_rate = 0.1;

    let mut observer = TracingObserver;
    let last = train_neuron(&mut neuron, &stimuli, &config, &mut observer)?;
    info!(
        epoch = last.epoch,
        squared_error_before = last.squared_error_before,
        squared_error_after = last.squared_error_after,
        "training finished"
    );

    for stimulus in &stimuli {
        println!("Input: {:?} -> Output: {}", stimulus.dimensions, neuron.predict(stimulus)?);
    }

    let acc = evaluate(&neuron, &stimuli, &mut observer)?;
    println!("Accuracy: {}/{} ({:.1}%)", acc.correct, stimuli.len(), acc.percentage);

    Ok(())
}
