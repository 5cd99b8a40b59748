//! Stepwise learning-rate decay.

use burn::LearningRate;

use crate::config::{OptimizerSettings, ScheduleSettings};

/// Multiplies the base learning rate by one factor of `gamma` per crossed
/// decay boundary.
///
/// Boundary order does not matter; every boundary at or below the current
/// epoch contributes a factor. The result is fed to
/// [`VideoOptimizer::step`](crate::training::VideoOptimizer::step) each
/// iteration, so a decay takes effect immediately at its boundary epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiStepLr {
    base_lr: LearningRate,
    gamma: f64,
    steps: Vec<usize>,
}

impl MultiStepLr {
    /// Decay factor used when none is given.
    pub const DEFAULT_GAMMA: f64 = 0.1;

    /// Creates a schedule with the default decay factor.
    pub fn new(base_lr: LearningRate, steps: Vec<usize>) -> Self {
        Self {
            base_lr,
            gamma: Self::DEFAULT_GAMMA,
            steps,
        }
    }

    /// Overrides the decay factor.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Builds the schedule from optimizer and schedule settings.
    pub fn from_settings(optimizer: &OptimizerSettings, schedule: &ScheduleSettings) -> Self {
        Self::new(optimizer.learning_rate, schedule.lr_steps.clone())
    }

    /// Effective learning rate at `epoch`.
    pub fn learning_rate(&self, epoch: usize) -> LearningRate {
        let crossed = self.steps.iter().filter(|&&step| epoch >= step).count();
        self.base_lr * self.gamma.powi(crossed as i32)
    }
}
