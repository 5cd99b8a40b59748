//! Optimizer construction from pipeline settings.

use std::fmt;
use std::str::FromStr;

use burn::module::AutodiffModule;
use burn::optim::adaptor::OptimizerAdaptor;
use burn::optim::decay::WeightDecayConfig;
use burn::optim::momentum::MomentumConfig;
use burn::optim::{Adam, AdamConfig, GradientsParams, Optimizer, Sgd, SgdConfig};
use burn::tensor::backend::AutodiffBackend;
use burn::LearningRate;
use serde::{Deserialize, Serialize};

use crate::config::OptimizerSettings;
use crate::errors::TrainError;

/// Supported gradient-descent algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OptimizerKind {
    #[default]
    #[serde(rename = "SGD")]
    Sgd,
    Adam,
}

impl FromStr for OptimizerKind {
    type Err = TrainError;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "SGD" => Ok(OptimizerKind::Sgd),
            "Adam" => Ok(OptimizerKind::Adam),
            _ => Err(TrainError::UnknownOptimizer {
                kind: kind.to_string(),
            }),
        }
    }
}

impl fmt::Display for OptimizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptimizerKind::Sgd => "SGD",
            OptimizerKind::Adam => "Adam",
        };
        write!(f, "{}", name)
    }
}

/// A ready-to-step optimizer for either supported algorithm.
///
/// The learning rate is supplied per [`VideoOptimizer::step`], so the
/// schedule decides the effective rate of every update without mutating
/// optimizer state.
pub enum VideoOptimizer<M, B>
where
    M: AutodiffModule<B>,
    B: AutodiffBackend,
{
    Sgd(OptimizerAdaptor<Sgd<B::InnerBackend>, M, B>),
    Adam(OptimizerAdaptor<Adam<B::InnerBackend>, M, B>),
}

impl<M, B> VideoOptimizer<M, B>
where
    M: AutodiffModule<B>,
    B: AutodiffBackend,
{
    /// Applies one optimization step at the given learning rate.
    pub fn step(&mut self, lr: LearningRate, module: M, grads: GradientsParams) -> M {
        match self {
            VideoOptimizer::Sgd(optimizer) => optimizer.step(lr, module, grads),
            VideoOptimizer::Adam(optimizer) => optimizer.step(lr, module, grads),
        }
    }

    /// The algorithm this optimizer runs.
    pub fn kind(&self) -> OptimizerKind {
        match self {
            VideoOptimizer::Sgd(_) => OptimizerKind::Sgd,
            VideoOptimizer::Adam(_) => OptimizerKind::Adam,
        }
    }
}

fn sgd_config(settings: &OptimizerSettings) -> SgdConfig {
    let dampening = if settings.nesterov {
        if settings.dampening != 0.0 {
            log::warn!(
                "nesterov momentum requires zero dampening, overriding configured value {}",
                settings.dampening
            );
        }
        0.0
    } else {
        settings.dampening
    };
    SgdConfig::new()
        .with_momentum(Some(MomentumConfig {
            momentum: settings.momentum,
            dampening,
            nesterov: settings.nesterov,
        }))
        .with_weight_decay(Some(WeightDecayConfig::new(settings.weight_decay)))
}

fn adam_config(settings: &OptimizerSettings) -> AdamConfig {
    if settings.amsgrad {
        log::warn!("amsgrad has no equivalent here and is ignored, running plain Adam");
    }
    AdamConfig::new()
        .with_beta_1(settings.betas.0)
        .with_beta_2(settings.betas.1)
        .with_epsilon(settings.eps)
        .with_weight_decay(Some(WeightDecayConfig::new(settings.weight_decay)))
}

/// Builds the optimizer selected by `settings`.
pub fn build_optimizer<B, M>(settings: &OptimizerSettings) -> VideoOptimizer<M, B>
where
    B: AutodiffBackend,
    M: AutodiffModule<B>,
{
    match settings.optimizer {
        OptimizerKind::Sgd => VideoOptimizer::Sgd(sgd_config(settings).init()),
        OptimizerKind::Adam => VideoOptimizer::Adam(adam_config(settings).init()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::{Autodiff, NdArray};
    use burn::nn::{Linear, LinearConfig};
    use burn::tensor::Tensor;

    type TestBackend = Autodiff<NdArray>;

    const TOLERANCE: f64 = 1e-6;

    fn assert_close(value: &serde_json::Value, expected: f64) {
        let actual = value.as_f64().unwrap();
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_sgd_config_carries_momentum_and_weight_decay() {
        let settings = OptimizerSettings::default();
        let value = serde_json::to_value(sgd_config(&settings)).unwrap();
        assert_close(&value["momentum"]["momentum"], 0.9);
        assert_close(&value["momentum"]["dampening"], 0.9);
        assert_eq!(value["momentum"]["nesterov"], false);
        assert_close(&value["weight_decay"]["penalty"], 1e-3);
    }

    #[test]
    fn test_nesterov_forces_zero_dampening() {
        let settings = OptimizerSettings {
            nesterov: true,
            ..OptimizerSettings::default()
        };
        let value = serde_json::to_value(sgd_config(&settings)).unwrap();
        assert_eq!(value["momentum"]["nesterov"], true);
        assert_close(&value["momentum"]["dampening"], 0.0);
    }

    #[test]
    fn test_adam_config_carries_betas_and_epsilon() {
        let settings = OptimizerSettings {
            optimizer: OptimizerKind::Adam,
            ..OptimizerSettings::default()
        };
        let value = serde_json::to_value(adam_config(&settings)).unwrap();
        assert_close(&value["beta_1"], 0.9);
        assert_close(&value["beta_2"], 0.999);
        assert_close(&value["epsilon"], 1e-8);
        assert_close(&value["weight_decay"]["penalty"], 1e-3);
    }

    #[test]
    fn test_weight_decay_penalty_keeps_configured_precision() {
        // 5e-4 has no exact f32 representation, so any narrowing on the
        // way into the penalty would break the exact comparison.
        let settings = OptimizerSettings {
            weight_decay: 5e-4,
            ..OptimizerSettings::default()
        };
        let sgd = serde_json::to_value(sgd_config(&settings)).unwrap();
        let adam = serde_json::to_value(adam_config(&settings)).unwrap();
        assert_eq!(sgd["weight_decay"]["penalty"].as_f64(), Some(5e-4));
        assert_eq!(adam["weight_decay"]["penalty"].as_f64(), Some(5e-4));
    }

    #[test]
    fn test_amsgrad_request_runs_plain_adam() {
        let base = OptimizerSettings {
            optimizer: OptimizerKind::Adam,
            ..OptimizerSettings::default()
        };
        let flagged = OptimizerSettings {
            amsgrad: true,
            ..base.clone()
        };
        let with_flag = serde_json::to_value(adam_config(&flagged)).unwrap();
        let without_flag = serde_json::to_value(adam_config(&base)).unwrap();
        assert_eq!(with_flag, without_flag);
    }

    #[test]
    fn test_build_optimizer_selects_configured_algorithm() {
        let sgd: VideoOptimizer<Linear<TestBackend>, TestBackend> =
            build_optimizer(&OptimizerSettings::default());
        assert_eq!(sgd.kind(), OptimizerKind::Sgd);

        let settings = OptimizerSettings {
            optimizer: OptimizerKind::Adam,
            ..OptimizerSettings::default()
        };
        let adam: VideoOptimizer<Linear<TestBackend>, TestBackend> = build_optimizer(&settings);
        assert_eq!(adam.kind(), OptimizerKind::Adam);
    }

    #[test]
    fn test_sgd_step_updates_module_parameters() {
        let device = Default::default();
        let module = LinearConfig::new(2, 2).init::<TestBackend>(&device);
        let mut optimizer: VideoOptimizer<Linear<TestBackend>, TestBackend> =
            build_optimizer(&OptimizerSettings::default());

        let before: Vec<f32> = module.weight.val().to_data().to_vec().unwrap();
        let input = Tensor::<TestBackend, 2>::from_floats([[1.0, -1.0]], &device);
        let loss = module.forward(input).sum();
        let grads = GradientsParams::from_grads(loss.backward(), &module);
        let updated = optimizer.step(0.1, module, grads);
        let after: Vec<f32> = updated.weight.val().to_data().to_vec().unwrap();

        assert_ne!(before, after);
    }

    #[test]
    fn test_optimizer_kind_parses_exact_names() {
        assert_eq!("SGD".parse::<OptimizerKind>().unwrap(), OptimizerKind::Sgd);
        assert_eq!(
            "Adam".parse::<OptimizerKind>().unwrap(),
            OptimizerKind::Adam
        );
    }

    #[test]
    fn test_optimizer_kind_rejects_lowercase_name() {
        let result = "sgd".parse::<OptimizerKind>();
        assert!(matches!(
            result,
            Err(TrainError::UnknownOptimizer { kind }) if kind == "sgd"
        ));
    }

    #[test]
    fn test_optimizer_kind_display_round_trips() {
        assert_eq!(OptimizerKind::Sgd.to_string(), "SGD");
        assert_eq!(OptimizerKind::Adam.to_string(), "Adam");
    }
}
