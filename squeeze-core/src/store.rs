use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::Result;

/// One entry of a working-directory listing.
#[derive(Clone, Debug)]
pub struct DirEntryInfo {
    pub path: PathBuf,
    /// None when the entry's metadata could not be read.
    pub modified: Option<SystemTime>,
}

/// File-system collaborator seam. Probing, retention and orchestration go
/// through this trait so faults can be injected in tests; compression
/// strategies own their byte-level I/O directly.
pub trait FileStore: Send + Sync {
    /// Size in bytes; Err when the path is missing, unreadable, or not a
    /// regular file.
    fn file_size(&self, path: &Path) -> Result<u64>;

    fn copy(&self, from: &Path, to: &Path) -> Result<u64>;

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<()>;

    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Idempotent: deleting a missing file is not an error.
    fn remove_file(&self, path: &Path) -> Result<()>;

    /// Non-recursive listing of regular files in `path`.
    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntryInfo>>;
}
