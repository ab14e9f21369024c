use log::{debug, trace};

use crate::model::perceptron::Perceptron;
use crate::train::epoch_stats::EpochStats;

/// Resets `model` and trains it for exactly `model.epochs()` online passes.
///
/// # Arguments
/// - `model`    — modified in place; weights are resized to the model's
///                feature count (or the first row's length) and zeroed, bias
///                is zeroed
/// - `inputs`   — feature vectors, visited in order every epoch
/// - `labels`   — binary targets paired positionally with `inputs`
/// - `on_epoch` — called once with the stats of every completed epoch
///
/// There is no early stopping: the loop runs every epoch even once all
/// samples are classified correctly.
pub fn train_loop<F>(
    model: &mut Perceptron,
    inputs: &[Vec<f64>],
    labels: &[u8],
    mut on_epoch: F,
) where
    F: FnMut(EpochStats),
{
    let n_features = model.feature_count(inputs);
    model.reset(n_features);

    let total_epochs = model.epochs();
    let samples = inputs.len().min(labels.len());
    let mut last_misclassified = 0;

    for epoch in 1..=total_epochs {
        let misclassified = run_one_epoch(model, inputs, labels);
        last_misclassified = misclassified;

        let accuracy = if samples == 0 {
            0.0
        } else {
            1.0 - misclassified as f64 / samples as f64
        };
        trace!(
            "epoch {epoch}/{total_epochs}: {misclassified} misclassified, bias = {:.4}",
            model.bias()
        );

        on_epoch(EpochStats {
            epoch,
            total_epochs,
            misclassified,
            accuracy,
        });
    }

    debug!(
        "trained {samples} samples x {n_features} features for {total_epochs} epochs; \
         {last_misclassified} misclassified in the last epoch"
    );
}

/// One in-order pass of the perceptron learning rule over every
/// `(input, label)` pair. Updates from earlier samples are visible to later
/// ones within the same pass.
///
/// Returns the number of misclassified samples.
pub fn run_one_epoch(model: &mut Perceptron, inputs: &[Vec<f64>], labels: &[u8]) -> usize {
    inputs
        .iter()
        .zip(labels.iter())
        .filter(|(input, label)| model.learn_sample(input, **label))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::PerceptronConfig;

    #[test]
    fn one_epoch_counts_misclassified() {
        let mut model = Perceptron::new(PerceptronConfig::new(0.1, 1));
        model.reset(2);

        // [1,1] -> 1 is missed by the zero model; the bias update then fires on [0,0]
        let missed = run_one_epoch(&mut model, &[vec![1.0, 1.0], vec![0.0, 0.0]], &[1, 1]);

        assert_eq!(missed, 1);
    }

    #[test]
    fn reports_every_epoch() {
        let inputs = vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]];
        let mut model = Perceptron::new(PerceptronConfig::new(0.1, 100));
        let mut seen = Vec::new();

        train_loop(&mut model, &inputs, &[0, 0, 0, 1], |stats| seen.push(stats));

        assert_eq!(seen.len(), 100);
        assert_eq!(seen[0].epoch, 1);
        assert_eq!(seen[99].epoch, 100);
        assert!(seen.iter().all(|stats| stats.total_epochs == 100));
        // AND is separable, so the run settles with nothing misclassified
        assert_eq!(seen[99].misclassified, 0);
        assert_eq!(seen[99].accuracy, 1.0);
    }

    #[test]
    fn zero_epochs_never_reports() {
        let mut model = Perceptron::new(PerceptronConfig::new(0.1, 0));
        let mut calls = 0;

        train_loop(&mut model, &[vec![1.0]], &[1], |_| calls += 1);

        assert_eq!(calls, 0);
        assert_eq!(model.weights(), &[0.0]);
    }
}
