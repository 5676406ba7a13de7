use std::fs;
use std::io;
use std::path::Path;

use crate::error::Result;
use crate::store::{DirEntryInfo, FileStore};

/// `FileStore` over the local file system.
pub struct FsStore;

impl FileStore for FsStore {
    fn file_size(&self, path: &Path) -> Result<u64> {
        let md = fs::metadata(path)?;
        if !md.is_file() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "not a regular file").into());
        }
        Ok(md.len())
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<u64> {
        Ok(fs::copy(from, to)?)
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        Ok(fs::write(path, bytes)?)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        Ok(fs::create_dir_all(path)?)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntryInfo>> {
        let mut out = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            let modified = entry.metadata().and_then(|md| md.modified()).ok();
            out.push(DirEntryInfo {
                path: entry.path(),
                modified,
            });
        }
        Ok(out)
    }
}
