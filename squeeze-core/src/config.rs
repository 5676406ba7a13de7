use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{Result, SqueezeError};

/// Progress callback, invoked with values in [0,1].
pub type ProgressFn = Arc<dyn Fn(f32) + Send + Sync>;

#[derive(Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    /// Upper bound for any computed target size, in MB.
    pub max_target_mb: f64,
    /// Sources smaller than this are left alone. May sit above
    /// `max_target_mb`; the policy handles both orderings.
    pub min_size_to_act_mb: f64,
    /// Fraction of the source size to aim for; must be in (0,1).
    pub target_ratio: f64,
    #[serde(skip)]
    pub on_progress: Option<ProgressFn>,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            max_target_mb: 15.0,
            min_size_to_act_mb: 1.0,
            target_ratio: 0.6,
            on_progress: None,
        }
    }
}

impl CompressionConfig {
    /// Downstream target arithmetic assumes these bounds; reject bad
    /// values here rather than producing nonsense target sizes later.
    pub fn validate(&self) -> Result<()> {
        if !(self.max_target_mb > 0.0) {
            return Err(SqueezeError::Config(format!(
                "max_target_mb must be positive, got {}",
                self.max_target_mb
            )));
        }
        if !(self.target_ratio > 0.0 && self.target_ratio < 1.0) {
            return Err(SqueezeError::Config(format!(
                "target_ratio must be in (0, 1), got {}",
                self.target_ratio
            )));
        }
        Ok(())
    }
}
