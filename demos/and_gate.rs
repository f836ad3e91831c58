use ferrite_perceptron::{evaluate, train_neuron, Neuron, Stimulus, TracingObserver, TrainConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> ferrite_perceptron::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let stimuli = vec![
        Stimulus::new(vec![0.0, 0.0], 0.0),
        Stimulus::new(vec![0.0, 1.0], 0.0),
        Stimulus::new(vec![1.0, 0.0], 0.0),
        Stimulus::new(vec![1.0, 1.0], 1.0),
    ];

    let mut neuron = Neuron::new(0.0);
    neuron.random_init(2, &mut StdRng::seed_from_u64(2024));
    neuron.learning_rate = 0.1;

    let mut observer = TracingObserver;
    let (epochs_per_round, rounds) = (5, 6);

    // Train in short rounds, continuing from the previous weights each time.
    for round in 0..rounds {
        let config = TrainConfig::new(epochs_per_round, false);
        let stats = train_neuron(&mut neuron, &stimuli, &config, &mut observer)?;
        let acc = evaluate(&neuron, &stimuli, &mut observer)?;
        println!(
            "Epoch {}: squared error = {:.1}, accuracy = {:.1}%",
            (round + 1) * epochs_per_round,
            stats.squared_error_before,
            acc.percentage
        );
    }

    println!("weights = {:?}, bias = {:.2}", neuron.weights, neuron.bias);
    for stimulus in &stimuli {
        println!("Input: {:?} -> Output: {}", stimulus.dimensions, neuron.predict(stimulus)?);
    }

    Ok(())
}
