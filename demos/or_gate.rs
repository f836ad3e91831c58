use std::sync::mpsc;

use ferrite_perceptron::{
    evaluate, train_neuron, EpochStats, Neuron, NoopObserver, Stimulus, TrainConfig,
};

fn main() -> ferrite_perceptron::Result<()> {
    let stimuli = vec![
        Stimulus::new(vec![0.0, 0.0], 0.0),
        Stimulus::new(vec![0.0, 1.0], 1.0),
        Stimulus::new(vec![1.0, 0.0], 1.0),
        Stimulus::new(vec![1.0, 1.0], 1.0),
    ];

    let mut neuron = Neuron::new(0.2);

    // Epoch statistics arrive on a channel; everything else is dropped.
    let (mut tx, rx) = mpsc::channel::<EpochStats>();
    train_neuron(&mut neuron, &stimuli, &TrainConfig::new(10, true), &mut tx)?;
    drop(tx);

    for stats in rx {
        println!(
            "Epoch {}/{}: squared error before = {:.1}, after = {:.1}",
            stats.epoch, stats.total_epochs, stats.squared_error_before, stats.squared_error_after
        );
    }

    let acc = evaluate(&neuron, &stimuli, &mut NoopObserver)?;
    println!("Accuracy: {}/{} ({:.1}%)", acc.correct, stimuli.len(), acc.percentage);

    Ok(())
}
