use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use crate::error::Result;
use crate::store::FileStore;

/// Generated files carry this prefix; it marks them as orchestrator-owned
/// during purge.
pub const GENERATED_PREFIX: &str = "compressed_";
pub const GENERATED_EXT: &str = "mp4";
pub const WORKING_DIR_NAME: &str = "compressed_media";

/// Retention windows are assumed to exceed any single run's duration; a
/// near-zero window could purge an output right after it is written.
pub const DEFAULT_RETENTION: Duration = Duration::from_secs(24 * 60 * 60);

/// Owns the working directory and the lifecycle of generated files: they
/// are created during a compression run and live here until purged by age
/// or deleted externally.
pub struct RetentionManager {
    store: Arc<dyn FileStore>,
    working_dir: PathBuf,
}

impl RetentionManager {
    /// `storage_root` is the application-private storage root; generated
    /// files live in a well-known subdirectory beneath it.
    pub fn new(store: Arc<dyn FileStore>, storage_root: &Path) -> Self {
        Self {
            store,
            working_dir: storage_root.join(WORKING_DIR_NAME),
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Idempotent create-with-parents.
    pub fn ensure_working_dir(&self) -> Result<&Path> {
        self.store.create_dir_all(&self.working_dir)?;
        Ok(&self.working_dir)
    }

    /// Deletes generated files whose mtime is older than `now - older_than`.
    /// Best-effort: per-entry failures are logged and skipped, and an
    /// unlistable directory is a logged no-op.
    pub fn purge_stale(&self, older_than: Duration) {
        let entries = match self.store.list_dir(&self.working_dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    dir = %self.working_dir.display(),
                    error = %e,
                    "working directory unreadable, skipping purge"
                );
                return;
            }
        };
        let Some(cutoff) = SystemTime::now().checked_sub(older_than) else {
            return;
        };

        let mut deleted = 0usize;
        for entry in entries {
            let Some(name) = entry.path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.starts_with(GENERATED_PREFIX) {
                continue;
            }
            let Some(modified) = entry.modified else {
                tracing::warn!(path = %entry.path.display(), "metadata unreadable, skipping entry");
                continue;
            };
            if modified >= cutoff {
                continue;
            }
            match self.store.remove_file(&entry.path) {
                Ok(()) => deleted += 1,
                Err(e) => {
                    tracing::warn!(
                        path = %entry.path.display(),
                        error = %e,
                        "failed to delete stale artifact"
                    );
                }
            }
        }
        if deleted > 0 {
            tracing::info!(deleted, dir = %self.working_dir.display(), "purged stale artifacts");
        }
    }
}
