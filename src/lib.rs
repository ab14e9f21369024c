pub mod activation;
pub mod error;
pub mod model;
pub mod train;

// Convenience re-exports
pub use activation::step;
pub use error::{PerceptronError, Result};
pub use model::config::PerceptronConfig;
pub use model::perceptron::Perceptron;
pub use train::epoch_stats::EpochStats;
pub use train::loop_fn::train_loop;
