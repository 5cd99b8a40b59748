//! Immutable configuration for the training pipeline.
//!
//! Settings are grouped by the component that consumes them and can be
//! loaded from a JSON file or built in code from [`TrainConfig::default`].
//! Unknown enum values (dataset, crop mode, optimizer) fail parsing instead
//! of silently falling back.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::TrainError;
use crate::stats::VideoDataset;
use crate::training::OptimizerKind;
use crate::transforms::CropMode;

/// Top-level training configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Input normalization switches and statistics source.
    #[serde(default)]
    pub normalization: NormalizationSettings,
    /// Spatial crop strategy for training clips.
    #[serde(default)]
    pub crop: CropSettings,
    /// Optimizer algorithm and hyperparameters.
    #[serde(default)]
    pub optimizer: OptimizerSettings,
    /// Model construction parameters.
    #[serde(default)]
    pub model: ModelSettings,
    /// Learning-rate decay boundaries.
    #[serde(default)]
    pub schedule: ScheduleSettings,
    /// Checkpoint and log destinations.
    #[serde(default)]
    pub output: OutputSettings,
}

impl TrainConfig {
    /// Loads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TrainError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Controls which normalization parameters the input pipeline receives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizationSettings {
    /// Request mean subtraction.
    #[serde(default = "default_true")]
    pub mean_norm: bool,
    /// Request division by the per-channel standard deviation.
    #[serde(default)]
    pub std_norm: bool,
    /// Divisor applied to the raw 8-bit channel statistics.
    #[serde(default = "default_norm_value")]
    pub norm_value: f64,
    /// Dataset whose measured statistics are used.
    #[serde(default)]
    pub dataset: VideoDataset,
}

impl Default for NormalizationSettings {
    fn default() -> Self {
        Self {
            mean_norm: true,
            std_norm: false,
            norm_value: default_norm_value(),
            dataset: VideoDataset::default(),
        }
    }
}

/// Controls the spatial crop applied to training clips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropSettings {
    /// Crop strategy used during training.
    #[serde(default)]
    pub train_crop: CropMode,
    /// Output height and width of cropped frames, in pixels.
    #[serde(default = "default_sample_size")]
    pub sample_size: u32,
}

impl Default for CropSettings {
    fn default() -> Self {
        Self {
            train_crop: CropMode::default(),
            sample_size: default_sample_size(),
        }
    }
}

/// Optimizer selection and hyperparameters.
///
/// SGD reads `momentum`, `dampening` and `nesterov`; Adam reads `betas`,
/// `eps` and `amsgrad`. `learning_rate` and `weight_decay` apply to both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizerSettings {
    /// Gradient-descent algorithm.
    #[serde(default)]
    pub optimizer: OptimizerKind,
    /// Base learning rate before schedule decay.
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    /// SGD momentum factor.
    #[serde(default = "default_momentum")]
    pub momentum: f64,
    /// SGD dampening for momentum; forced to 0 when `nesterov` is set.
    #[serde(default = "default_dampening")]
    pub dampening: f64,
    /// L2 penalty applied by both algorithms.
    #[serde(default = "default_weight_decay")]
    pub weight_decay: f64,
    /// Enables Nesterov momentum for SGD.
    #[serde(default)]
    pub nesterov: bool,
    /// Adam exponential decay rates for the first and second moments.
    #[serde(default = "default_betas")]
    pub betas: (f32, f32),
    /// Adam numerical-stability term.
    #[serde(default = "default_eps")]
    pub eps: f32,
    /// Requests the AMSGrad variant of Adam; currently ignored with a warning.
    #[serde(default)]
    pub amsgrad: bool,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            optimizer: OptimizerKind::default(),
            learning_rate: default_learning_rate(),
            momentum: default_momentum(),
            dampening: default_dampening(),
            weight_decay: default_weight_decay(),
            nesterov: false,
            betas: default_betas(),
            eps: default_eps(),
            amsgrad: false,
        }
    }
}

/// Model construction parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Number of output classes.
    #[serde(default = "default_n_classes")]
    pub n_classes: usize,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            n_classes: default_n_classes(),
        }
    }
}

/// Learning-rate schedule parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSettings {
    /// Epochs at which the learning rate decays by one factor of gamma.
    #[serde(default = "default_lr_steps")]
    pub lr_steps: Vec<usize>,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            lr_steps: default_lr_steps(),
        }
    }
}

/// Filesystem destinations for checkpoints and metric logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Directory receiving checkpoints and logs.
    #[serde(default = "default_result_path")]
    pub result_path: PathBuf,
    /// Base name for checkpoint files.
    #[serde(default = "default_store_name")]
    pub store_name: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            result_path: default_result_path(),
            store_name: default_store_name(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_norm_value() -> f64 {
    crate::stats::DEFAULT_NORM_VALUE
}

fn default_sample_size() -> u32 {
    112
}

fn default_learning_rate() -> f64 {
    0.1
}

fn default_momentum() -> f64 {
    0.9
}

fn default_dampening() -> f64 {
    0.9
}

fn default_weight_decay() -> f64 {
    1e-3
}

fn default_betas() -> (f32, f32) {
    (0.9, 0.999)
}

fn default_eps() -> f32 {
    1e-8
}

fn default_n_classes() -> usize {
    400
}

fn default_lr_steps() -> Vec<usize> {
    vec![40, 55, 65, 70, 200]
}

fn default_result_path() -> PathBuf {
    PathBuf::from("results")
}

fn default_store_name() -> String {
    "model".to_string()
}
