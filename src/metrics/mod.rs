//! Training metrics: running averages, top-k accuracy, and tab-delimited
//! metric logs.

mod accuracy;
mod average;
mod logger;

pub use accuracy::topk_accuracy;
pub use average::AverageMeter;
pub use logger::{MetricsLogger, Value};
