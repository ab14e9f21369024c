use serde::{Serialize, Deserialize};

/// Per-epoch statistics emitted by `train_loop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Samples whose prediction disagreed with the label before their update.
    pub misclassified: usize,
    /// `1 - misclassified / samples` for this pass; `0.0` when there are no samples.
    pub accuracy: f64,
}
