//! Training-loop support: loss criterion, optimizer, model setup,
//! learning-rate schedule, and checkpoint persistence.

mod checkpoint;
mod criterion;
mod lr_schedule;
mod model;
mod optimizer;

pub use checkpoint::{
    best_path, checkpoint_path, default_recorder, load_checkpoint, save_checkpoint,
    DefaultRecorder,
};
pub use criterion::criterion;
pub use lr_schedule::MultiStepLr;
pub use model::{init_model, ModelFactory};
pub use optimizer::{build_optimizer, OptimizerKind, VideoOptimizer};
