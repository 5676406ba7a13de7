use crate::config::CompressionConfig;
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Decision {
    /// Use the original asset as-is.
    Skip,
    /// Produce a copy aiming at `target_mb`.
    Compress { target_mb: f64 },
}

/// Pure sizing decision; no I/O, no side effects. Thresholds are validated
/// at construction so `decide` can assume a ratio in (0,1).
#[derive(Clone, Debug)]
pub struct SizePolicy {
    max_target_mb: f64,
    min_size_to_act_mb: f64,
    target_ratio: f64,
}

impl SizePolicy {
    pub fn new(config: &CompressionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            max_target_mb: config.max_target_mb,
            min_size_to_act_mb: config.min_size_to_act_mb,
            target_ratio: config.target_ratio,
        })
    }

    pub fn decide(&self, source_mb: f64) -> Decision {
        if source_mb < self.min_size_to_act_mb {
            return Decision::Skip;
        }
        if source_mb <= self.max_target_mb {
            return Decision::Skip;
        }
        Decision::Compress {
            target_mb: (source_mb * self.target_ratio).min(self.max_target_mb),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_policy() -> SizePolicy {
        SizePolicy::new(&CompressionConfig::default()).unwrap()
    }

    #[test]
    fn sources_below_min_are_skipped() {
        assert_eq!(default_policy().decide(0.5), Decision::Skip);
        assert_eq!(default_policy().decide(0.99), Decision::Skip);
    }

    #[test]
    fn sources_within_bound_are_skipped() {
        assert_eq!(default_policy().decide(1.0), Decision::Skip);
        assert_eq!(default_policy().decide(14.99), Decision::Skip);
        assert_eq!(default_policy().decide(15.0), Decision::Skip);
    }

    #[test]
    fn oversized_sources_get_ratio_target() {
        assert_eq!(
            default_policy().decide(20.0),
            Decision::Compress { target_mb: 12.0 }
        );
    }

    #[test]
    fn ratio_target_is_capped_at_max() {
        // 50 * 0.6 = 30, capped to 15
        assert_eq!(
            default_policy().decide(50.0),
            Decision::Compress { target_mb: 15.0 }
        );
        assert_eq!(
            default_policy().decide(1000.0),
            Decision::Compress { target_mb: 15.0 }
        );
    }

    #[test]
    fn min_above_max_still_behaves() {
        let policy = SizePolicy::new(&CompressionConfig {
            max_target_mb: 15.0,
            min_size_to_act_mb: 20.0,
            ..Default::default()
        })
        .unwrap();
        // Below min wins even though above max
        assert_eq!(policy.decide(18.0), Decision::Skip);
        assert_eq!(policy.decide(25.0), Decision::Compress { target_mb: 15.0 });
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let bad_ratio = CompressionConfig {
            target_ratio: 1.0,
            ..Default::default()
        };
        assert!(SizePolicy::new(&bad_ratio).is_err());

        let bad_max = CompressionConfig {
            max_target_mb: 0.0,
            ..Default::default()
        };
        assert!(SizePolicy::new(&bad_max).is_err());
    }
}
