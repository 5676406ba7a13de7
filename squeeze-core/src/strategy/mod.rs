use std::path::Path;

use crate::config::ProgressFn;
use crate::error::Result;

/// Transforms a source asset into a target asset approximating
/// `target_mb`. `Ok(true)` means a usable artifact exists at `target`;
/// `Ok(false)` and `Err` are both failure to the caller. The caller
/// guarantees a unique `target` per invocation, so implementations need
/// not handle overwrite races.
pub trait CompressionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn run(
        &self,
        source: &Path,
        target: &Path,
        target_mb: f64,
        progress: &mut ProgressReporter,
    ) -> Result<bool>;
}

/// Enforces the progress contract on behalf of every strategy: values are
/// clamped to [0,1] and the callback only fires for strict increases.
pub struct ProgressReporter {
    callback: Option<ProgressFn>,
    last: f32,
}

impl ProgressReporter {
    pub fn new(callback: Option<ProgressFn>) -> Self {
        Self {
            callback,
            last: -1.0,
        }
    }

    pub fn report(&mut self, value: f32) {
        let value = value.clamp(0.0, 1.0);
        if value <= self.last {
            return;
        }
        self.last = value;
        if let Some(cb) = &self.callback {
            cb(value);
        }
    }
}

pub mod simulated;
pub mod zstdc;
