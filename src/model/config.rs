use serde::{Deserialize, Serialize};

/// Hyperparameters for a [`Perceptron`](crate::model::Perceptron).
///
/// # Fields
/// - `learning_rate` — step size applied to every weight update
/// - `epochs`        — number of full passes over the training data
///
/// Both are fixed once the model is built. Fields missing from a serialized
/// config fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerceptronConfig {
    pub learning_rate: f64,
    pub epochs: usize,
}

impl PerceptronConfig {
    pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
    pub const DEFAULT_EPOCHS: usize = 100;

    pub fn new(learning_rate: f64, epochs: usize) -> Self {
        PerceptronConfig { learning_rate, epochs }
    }
}

impl Default for PerceptronConfig {
    fn default() -> Self {
        PerceptronConfig::new(Self::DEFAULT_LEARNING_RATE, Self::DEFAULT_EPOCHS)
    }
}
