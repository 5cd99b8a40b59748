//! # vidtrain
//!
//! Training-loop support for video-classification models built on the Burn
//! framework.
//!
//! The crate turns a [`TrainConfig`] into the objects a training loop
//! consumes: the loss criterion, the optimizer, normalization and crop
//! parameters for the input pipeline, running-average meters, top-k
//! accuracy, a tab-delimited metrics log, a step-decay learning-rate
//! schedule, and checkpoint persistence. Model architectures, dataset
//! loading, and the pixel-level transforms live outside; this crate produces
//! their parameterization.
//!
//! ## Features
//!
//! - **Burn Backend**: Uses the Burn framework with WGPU backend for GPU
//!   acceleration, with NdArray available for CPU-only runs and tests.
//! - **Config Driven**: Every training object is built from an explicit,
//!   serializable [`TrainConfig`] instead of mutable global state.
//! - **Checkpoint Persistence**: Training records are stored through Burn's
//!   named MessagePack recorder, with a rolling file and a best-model copy.
//!
//! ## Example
//!
//! ```
//! use vidtrain::prelude::*;
//!
//! let config = TrainConfig::default();
//!
//! // Learning rate decays tenfold at each configured boundary
//! let schedule = MultiStepLr::from_settings(&config.optimizer, &config.schedule);
//! assert_eq!(schedule.learning_rate(0), 0.1);
//!
//! // Corner cropping samples all five positions
//! let scales = [1.0, 0.84089642, 0.70710678, 0.59460355, 0.5];
//! let strategy = crop_method(&config.crop, &scales);
//! assert!(matches!(strategy, CropStrategy::Corner(_)));
//!
//! let mut batch_time = AverageMeter::new();
//! batch_time.update(0.75, 1);
//! assert_eq!(batch_time.avg(), 0.75);
//! ```

pub mod config;
pub mod errors;
pub mod metrics;
pub mod stats;
pub mod training;
pub mod transforms;

// Re-exports for convenience
pub use config::TrainConfig;
pub use errors::TrainError;
pub use metrics::{topk_accuracy, AverageMeter, MetricsLogger, Value};
pub use training::{
    build_optimizer, criterion, init_model, load_checkpoint, save_checkpoint, ModelFactory,
    MultiStepLr, OptimizerKind, VideoOptimizer,
};
pub use transforms::{crop_method, norm_method, CropMode, CropStrategy, Normalize};

/// Backend type alias for WGPU with autodiff support.
pub type Backend = burn::backend::Autodiff<burn::backend::Wgpu>;

/// Backend type for inference (no autodiff).
pub type InferenceBackend = burn::backend::Wgpu;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{
        CropSettings, ModelSettings, NormalizationSettings, OptimizerSettings, OutputSettings,
        ScheduleSettings, TrainConfig,
    };
    pub use crate::errors::TrainError;
    pub use crate::metrics::{topk_accuracy, AverageMeter, MetricsLogger, Value};
    pub use crate::stats::{channel_mean, channel_std, VideoDataset, DEFAULT_NORM_VALUE};
    pub use crate::training::{
        best_path, build_optimizer, checkpoint_path, criterion, init_model, load_checkpoint,
        save_checkpoint, ModelFactory, MultiStepLr, OptimizerKind, VideoOptimizer,
    };
    pub use crate::transforms::{
        crop_method, norm_method, CropMode, CropPosition, CropStrategy, MultiScaleCornerCrop,
        MultiScaleRandomCrop, Normalize,
    };
    pub use crate::{Backend, InferenceBackend};
}
