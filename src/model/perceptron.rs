use serde::{Deserialize, Serialize};

use crate::activation::step;
use crate::error::{PerceptronError, Result};
use crate::model::config::PerceptronConfig;
use crate::train::epoch_stats::EpochStats;
use crate::train::loop_fn::train_loop;

/// Single-layer binary classifier: a weight per feature, one bias, and a hard
/// step activation.
///
/// Weights and bias start at zero and are reset to zero at the start of every
/// training run, so a model can be retrained any number of times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPerceptron")]
pub struct Perceptron {
    config: PerceptronConfig,
    weights: Vec<f64>,
    bias: f64,
    /// Feature count fixed at construction; `None` means it is inferred from
    /// the first training sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    n_features: Option<usize>,
}

impl Perceptron {
    /// Builds an untrained model with no weights and a zero bias.
    pub fn new(config: PerceptronConfig) -> Perceptron {
        Perceptron {
            config,
            weights: Vec::new(),
            bias: 0.0,
            n_features: None,
        }
    }

    /// Builds an untrained model whose feature count is fixed up front.
    ///
    /// The weights start as `n_features` zeros and `try_train`/`try_predict`
    /// validate every row against that count.
    pub fn with_features(config: PerceptronConfig, n_features: usize) -> Perceptron {
        Perceptron {
            config,
            weights: vec![0.0; n_features],
            bias: 0.0,
            n_features: Some(n_features),
        }
    }

    pub fn config(&self) -> &PerceptronConfig {
        &self.config
    }

    pub fn learning_rate(&self) -> f64 {
        self.config.learning_rate
    }

    pub fn epochs(&self) -> usize {
        self.config.epochs
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Weighted sum `bias + Σ wᵢ·xᵢ` passed through the step activation.
    ///
    /// Only the indices shared by the weights and `input` contribute, so a
    /// length mismatch silently truncates to the shorter of the two.
    pub fn predict(&self, input: &[f64]) -> u8 {
        step(self.weighted_sum(input))
    }

    pub fn predict_batch(&self, inputs: &[Vec<f64>]) -> Vec<u8> {
        inputs.iter().map(|input| self.predict(input)).collect()
    }

    /// Fraction of rows whose prediction equals the label; `0.0` when empty.
    pub fn accuracy(&self, inputs: &[Vec<f64>], labels: &[u8]) -> f64 {
        let n = inputs.len().min(labels.len());
        if n == 0 {
            return 0.0;
        }
        let correct = inputs
            .iter()
            .zip(labels.iter())
            .filter(|(input, label)| self.predict(input) == **label)
            .count();
        correct as f64 / n as f64
    }

    /// Resets the model and runs the perceptron learning rule for exactly
    /// `epochs` online passes over `inputs`/`labels`, in order.
    ///
    /// The feature count is the one fixed by `with_features`, otherwise the
    /// first row's length. No validation is done:
    /// pairs beyond the shorter slice are ignored and an empty `inputs`
    /// leaves the model with no weights.
    pub fn train(&mut self, inputs: &[Vec<f64>], labels: &[u8]) {
        train_loop(self, inputs, labels, |_| {});
    }

    /// Same as [`train`](Self::train), returning one [`EpochStats`] per epoch.
    pub fn train_with_history(
        &mut self,
        inputs: &[Vec<f64>],
        labels: &[u8],
    ) -> Vec<EpochStats> {
        let mut history = Vec::with_capacity(self.config.epochs);
        train_loop(self, inputs, labels, |stats| history.push(stats));
        history
    }

    /// Validating variant of [`train_with_history`](Self::train_with_history).
    ///
    /// The whole dataset is checked before any state changes, so on error the
    /// model is left exactly as it was.
    pub fn try_train(&mut self, inputs: &[Vec<f64>], labels: &[u8]) -> Result<Vec<EpochStats>> {
        self.validate_dataset(inputs, labels)?;
        Ok(self.train_with_history(inputs, labels))
    }

    /// Validating variant of [`predict`](Self::predict).
    pub fn try_predict(&self, input: &[f64]) -> Result<u8> {
        let expected = self.weights.len();
        if input.len() != expected {
            return Err(PerceptronError::InvalidDimension {
                expected,
                got: input.len(),
            });
        }
        Ok(self.predict(input))
    }

    // -----------------------------------------------------------------------
    // Crate-internal hooks for the training loop
    // -----------------------------------------------------------------------

    /// Width of the weight vector for a run over `inputs`: the count fixed by
    /// `with_features` if any, otherwise the first row's length.
    pub(crate) fn feature_count(&self, inputs: &[Vec<f64>]) -> usize {
        self.n_features.unwrap_or_else(|| inputs.first().map_or(0, Vec::len))
    }

    /// Zeroes the bias and resizes the weights to `n_features` zeros.
    pub(crate) fn reset(&mut self, n_features: usize) {
        self.weights.clear();
        self.weights.resize(n_features, 0.0);
        self.bias = 0.0;
    }

    /// One online update for a single sample.
    ///
    /// Returns `true` if the sample was misclassified before the update.
    pub(crate) fn learn_sample(&mut self, input: &[f64], label: u8) -> bool {
        let prediction = self.predict(input);
        let error = f64::from(label) - f64::from(prediction);
        let lr = self.config.learning_rate;

        for (w, x) in self.weights.iter_mut().zip(input.iter()) {
            *w += lr * error * x;
        }
        self.bias += lr * error;

        label != prediction
    }

    fn weighted_sum(&self, input: &[f64]) -> f64 {
        self.weights
            .iter()
            .zip(input.iter())
            .fold(self.bias, |sum, (w, x)| sum + w * x)
    }

    fn validate_dataset(&self, inputs: &[Vec<f64>], labels: &[u8]) -> Result<()> {
        let first = inputs.first().ok_or(PerceptronError::EmptyDataset)?;
        if inputs.len() != labels.len() {
            return Err(PerceptronError::LengthMismatch {
                inputs: inputs.len(),
                labels: labels.len(),
            });
        }

        let expected = self.n_features.unwrap_or(first.len());
        if let Some(row) = inputs.iter().find(|row| row.len() != expected) {
            return Err(PerceptronError::InvalidDimension {
                expected,
                got: row.len(),
            });
        }

        match labels.iter().position(|&label| label > 1) {
            Some(index) => Err(PerceptronError::LabelOutOfRange {
                index,
                label: labels[index],
            }),
            None => Ok(()),
        }
    }
}

/// Unchecked wire form; converted through `TryFrom` so a snapshot whose
/// weights disagree with its fixed feature count is rejected.
#[derive(Deserialize)]
struct RawPerceptron {
    config: PerceptronConfig,
    weights: Vec<f64>,
    bias: f64,
    #[serde(default)]
    n_features: Option<usize>,
}

impl TryFrom<RawPerceptron> for Perceptron {
    type Error = PerceptronError;

    fn try_from(raw: RawPerceptron) -> Result<Perceptron> {
        if let Some(expected) = raw.n_features {
            if raw.weights.len() != expected {
                return Err(PerceptronError::InvalidDimension {
                    expected,
                    got: raw.weights.len(),
                });
            }
        }
        Ok(Perceptron {
            config: raw.config,
            weights: raw.weights,
            bias: raw.bias,
            n_features: raw.n_features,
        })
    }
}

impl Default for Perceptron {
    fn default() -> Self {
        Perceptron::new(PerceptronConfig::default())
    }
}
