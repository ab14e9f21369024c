use step_perceptron::{Perceptron, PerceptronConfig};

// XOR is not linearly separable: training runs every epoch and never reaches
// zero error.
fn main() {
    env_logger::init();

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let labels: Vec<u8> = vec![0, 1, 1, 0];

    let mut perceptron = Perceptron::new(PerceptronConfig::new(0.1, 100));
    let history = perceptron.train_with_history(&inputs, &labels);

    for stats in history.iter().filter(|s| s.epoch % 10 == 0) {
        println!("Epoch {}: misclassified = {}", stats.epoch, stats.misclassified);
    }

    println!("Final accuracy: {:.2}", perceptron.accuracy(&inputs, &labels));
    for input in &inputs {
        println!("Input: {:?} -> {}", input, perceptron.predict(input));
    }
}
