pub mod epoch_stats;
pub mod loop_fn;

pub use epoch_stats::EpochStats;
pub use loop_fn::{run_one_epoch, train_loop};
