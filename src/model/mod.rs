pub mod config;
pub mod perceptron;

pub use config::PerceptronConfig;
pub use perceptron::Perceptron;
