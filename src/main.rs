use step_perceptron::{Perceptron, PerceptronConfig};

// Trains the logical AND gate and prints the learned parameters.
// More demos:
//   cargo run --example and_gate
//   cargo run --example xor
fn main() -> Result<(), serde_json::Error> {
    env_logger::init();

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let labels: Vec<u8> = vec![0, 0, 0, 1];

    let mut perceptron = Perceptron::new(PerceptronConfig::new(0.1, 100));
    perceptron.train(&inputs, &labels);

    println!("Weights: {:?}", perceptron.weights());
    println!("Bias: {}", perceptron.bias());

    for input in &inputs {
        println!("Input: {:?}, Prediction: {}", input, perceptron.predict(input));
    }

    println!("{}", serde_json::to_string_pretty(&perceptron)?);
    Ok(())
}
