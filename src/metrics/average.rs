//! Running average over a scalar training statistic.

/// Tracks the latest value of a scalar series together with its running
/// average.
///
/// Updates carry a sample count so batch means can be weighted by batch
/// size. Reading [`AverageMeter::avg`] before any samples arrive yields NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct AverageMeter {
    val: f64,
    avg: f64,
    sum: f64,
    count: usize,
}

impl AverageMeter {
    /// Creates an empty meter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all accumulated state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Records `val` as the mean over `n` samples.
    pub fn update(&mut self, val: f64, n: usize) {
        self.val = val;
        self.sum += val * n as f64;
        self.count += n;
        self.avg = self.sum / self.count as f64;
    }

    /// Most recently recorded value.
    pub fn val(&self) -> f64 {
        self.val
    }

    /// Running average over all recorded samples.
    pub fn avg(&self) -> f64 {
        self.avg
    }

    /// Weighted sum of recorded values.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Total number of recorded samples.
    pub fn count(&self) -> usize {
        self.count
    }
}
