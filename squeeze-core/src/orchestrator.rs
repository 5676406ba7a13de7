use std::path::{Path, PathBuf};
use std::sync::Arc;

use time::OffsetDateTime;

use crate::config::CompressionConfig;
use crate::error::Result;
use crate::policy::{Decision, SizePolicy};
use crate::probe::{AssetInfo, AssetProbe};
use crate::retention::{DEFAULT_RETENTION, GENERATED_EXT, GENERATED_PREFIX, RetentionManager};
use crate::store::FileStore;
use crate::strategy::{CompressionStrategy, ProgressReporter};

/// End-to-end "produce a usable, size-bounded copy" pipeline. A plain
/// constructible value: callers hold one per configuration instead of a
/// process-wide singleton.
pub struct CompressionOrchestrator {
    probe: AssetProbe,
    policy: SizePolicy,
    retention: RetentionManager,
    strategy: Arc<dyn CompressionStrategy>,
    config: CompressionConfig,
}

impl CompressionOrchestrator {
    pub fn new(
        store: Arc<dyn FileStore>,
        strategy: Arc<dyn CompressionStrategy>,
        storage_root: &Path,
        config: CompressionConfig,
    ) -> Result<Self> {
        let policy = SizePolicy::new(&config)?;
        Ok(Self {
            probe: AssetProbe::new(Arc::clone(&store)),
            policy,
            retention: RetentionManager::new(store, storage_root),
            strategy,
            config,
        })
    }

    pub fn probe_asset(&self, path: &Path) -> AssetInfo {
        self.probe.probe(path)
    }

    pub fn retention(&self) -> &RetentionManager {
        &self.retention
    }

    /// Never fails: every error in the pipeline degrades to the original
    /// source path, so callers always receive a usable path. The reason a
    /// copy was not produced is only visible in the logs.
    pub fn produce_compressed_copy(&self, source: &Path) -> PathBuf {
        match self.try_produce(source) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(
                    source = %source.display(),
                    error = %e,
                    "compression failed, falling back to original"
                );
                source.to_path_buf()
            }
        }
    }

    pub fn purge_old_artifacts(&self) {
        self.retention.purge_stale(DEFAULT_RETENTION);
    }

    fn try_produce(&self, source: &Path) -> Result<PathBuf> {
        let info = self.probe.probe(source);
        if !info.is_present() {
            tracing::info!(source = %source.display(), "source missing or unreadable, using original path");
            return Ok(source.to_path_buf());
        }
        let source_mb = info.size_mb();

        let target_mb = match self.policy.decide(source_mb) {
            Decision::Skip => {
                tracing::debug!(source = %source.display(), source_mb, "within bounds, skipping compression");
                return Ok(source.to_path_buf());
            }
            Decision::Compress { target_mb } => target_mb,
        };

        let target = self.retention.ensure_working_dir()?.join(generated_name());

        tracing::info!(
            source = %source.display(),
            target = %target.display(),
            source_mb,
            target_mb,
            strategy = self.strategy.name(),
            "compressing"
        );
        let mut progress = ProgressReporter::new(self.config.on_progress.clone());
        let produced = self.strategy.run(source, &target, target_mb, &mut progress)?;
        if !produced {
            tracing::warn!(source = %source.display(), "strategy reported failure, using original path");
            return Ok(source.to_path_buf());
        }

        // Re-probe rather than trusting the strategy's word.
        if !self.probe.probe(&target).is_present() {
            tracing::warn!(target = %target.display(), "output failed verification, using original path");
            return Ok(source.to_path_buf());
        }
        Ok(target)
    }
}

/// Prefix + millisecond timestamp + fixed extension; the prefix marks the
/// file for purge and the timestamp makes each call's path unique.
fn generated_name() -> String {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    format!("{GENERATED_PREFIX}{millis}.{GENERATED_EXT}")
}
