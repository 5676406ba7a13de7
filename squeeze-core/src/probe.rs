use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::store::FileStore;

pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Result of a probe: either a usable file with a known size, or nothing
/// usable at that path. Computed fresh per query, never cached.
#[derive(Clone, Debug, PartialEq)]
pub enum AssetInfo {
    Present { path: PathBuf, size_bytes: u64 },
    Absent { path: PathBuf },
}

impl AssetInfo {
    pub fn path(&self) -> &Path {
        match self {
            AssetInfo::Present { path, .. } | AssetInfo::Absent { path } => path,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, AssetInfo::Present { .. })
    }

    /// Derived MB view, rounded to 2 decimal places. Absent assets read 0.
    pub fn size_mb(&self) -> f64 {
        match self {
            AssetInfo::Present { size_bytes, .. } => {
                let mb = *size_bytes as f64 / BYTES_PER_MB as f64;
                (mb * 100.0).round() / 100.0
            }
            AssetInfo::Absent { .. } => 0.0,
        }
    }
}

pub struct AssetProbe {
    store: Arc<dyn FileStore>,
}

impl AssetProbe {
    pub fn new(store: Arc<dyn FileStore>) -> Self {
        Self { store }
    }

    /// Any I/O fault collapses to `Absent`: a file we cannot read is a file
    /// we cannot use, and callers fall back the same way for both. Zero-byte
    /// files classify as `Absent` too.
    pub fn probe(&self, path: &Path) -> AssetInfo {
        match self.store.file_size(path) {
            Ok(size_bytes) if size_bytes > 0 => AssetInfo::Present {
                path: path.to_path_buf(),
                size_bytes,
            },
            Ok(_) => {
                tracing::debug!(path = %path.display(), "zero-byte file treated as absent");
                AssetInfo::Absent {
                    path: path.to_path_buf(),
                }
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "probe failed");
                AssetInfo::Absent {
                    path: path.to_path_buf(),
                }
            }
        }
    }
}
