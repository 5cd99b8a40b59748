//! Error type for training-support operations.

use burn::record::RecorderError;
use thiserror::Error;

/// Errors raised while turning configuration into training objects.
#[derive(Debug, Error)]
pub enum TrainError {
    /// Dataset name has no registered channel statistics.
    #[error("unknown dataset '{name}', expected one of: activitynet, kinetics")]
    UnknownDataset { name: String },

    /// Crop mode name does not match a supported strategy.
    #[error("unknown crop mode '{mode}', expected one of: random, corner, center")]
    UnknownCropMode { mode: String },

    /// Optimizer name does not match a supported algorithm.
    #[error("unknown optimizer '{kind}', expected one of: SGD, Adam")]
    UnknownOptimizer { kind: String },

    /// A metrics row was logged without one of the header columns.
    #[error("log row is missing column '{column}'")]
    MissingColumn { column: String },

    /// Requested top-k rank is outside the valid range for the output width.
    #[error("top-k accuracy requires 1 <= k <= {n_classes}, got k = {k}")]
    InvalidTopK { k: usize, n_classes: usize },

    /// Model initialization was asked to run on an empty device list.
    #[error("no compute device available for model initialization")]
    NoDevice,

    /// Underlying filesystem failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Checkpoint record could not be written or read back.
    #[error("record error: {0}")]
    Record(#[from] RecorderError),

    /// Configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}
