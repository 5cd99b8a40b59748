//! Error types used across the crate.

mod train_error;

pub use train_error::TrainError;
