use step_perceptron::{Perceptron, PerceptronConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let labels: Vec<u8> = vec![0, 0, 0, 1];

    let mut perceptron = Perceptron::with_features(PerceptronConfig::new(0.1, 20), 2);
    let history = perceptron.try_train(&inputs, &labels)?;

    for stats in &history {
        println!(
            "Epoch {:>2}/{}: misclassified = {}, accuracy = {:.2}",
            stats.epoch, stats.total_epochs, stats.misclassified, stats.accuracy
        );
    }

    println!("Weights: {:?}  Bias: {:.4}", perceptron.weights(), perceptron.bias());
    for input in &inputs {
        println!("Input: {:?} -> {}", input, perceptron.try_predict(input)?);
    }
    Ok(())
}
