use step_perceptron::{EpochStats, Perceptron, PerceptronConfig, PerceptronError};

fn truth_table() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ]
}

#[test]
fn and_gate_converges() {
    let inputs = truth_table();
    let mut perceptron = Perceptron::new(PerceptronConfig::new(0.1, 100));

    perceptron.train(&inputs, &[0, 0, 0, 1]);

    let predictions: Vec<u8> = inputs.iter().map(|input| perceptron.predict(input)).collect();
    assert_eq!(predictions, vec![0, 0, 0, 1]);
}

#[test]
fn default_hyperparameters_also_learn_and() {
    let inputs = truth_table();
    let mut perceptron = Perceptron::default();
    assert_eq!(perceptron.learning_rate(), 0.01);
    assert_eq!(perceptron.epochs(), 100);

    perceptron.train(&inputs, &[0, 0, 0, 1]);

    assert_eq!(perceptron.predict_batch(&inputs), vec![0, 0, 0, 1]);
}

#[test]
fn xor_history_never_reaches_zero_error() {
    let inputs = truth_table();
    let mut perceptron = Perceptron::new(PerceptronConfig::new(0.1, 37));

    let history: Vec<EpochStats> = perceptron.train_with_history(&inputs, &[0, 1, 1, 0]);

    assert_eq!(history.len(), 37);
    assert!(history.iter().all(|stats| stats.misclassified > 0 && stats.accuracy < 1.0));
}

#[test]
fn hardened_path_reports_errors() {
    let mut perceptron = Perceptron::with_features(PerceptronConfig::new(0.1, 10), 2);

    let err = perceptron.try_train(&truth_table(), &[0, 0, 0, 5]).unwrap_err();
    assert_eq!(err, PerceptronError::LabelOutOfRange { index: 3, label: 5 });
    assert_eq!(err.to_string(), "label 5 at index 3 is not 0 or 1");

    let err = perceptron.try_predict(&[1.0, 1.0, 1.0]).unwrap_err();
    assert_eq!(err.to_string(), "invalid dimension: expected 2 features, got 3");
}
