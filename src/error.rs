use thiserror::Error;

/// Failures reported by the validating `try_*` entry points of
/// [`Perceptron`](crate::model::Perceptron).
///
/// The unchecked `train`/`predict` pair never produces these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PerceptronError {
    /// A feature vector's length does not match the model's feature count.
    #[error("invalid dimension: expected {expected} features, got {got}")]
    InvalidDimension { expected: usize, got: usize },

    #[error("training set is empty")]
    EmptyDataset,

    /// Labels must be 0 or 1.
    #[error("label {label} at index {index} is not 0 or 1")]
    LabelOutOfRange { index: usize, label: u8 },

    #[error("got {inputs} feature vectors but {labels} labels")]
    LengthMismatch { inputs: usize, labels: usize },
}

pub type Result<T> = std::result::Result<T, PerceptronError>;
