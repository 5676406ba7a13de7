use std::fs::{self, File};
use std::path::Path;

use super::{CompressionStrategy, ProgressReporter};
use crate::error::Result;
use crate::probe::BYTES_PER_MB;

/// Content-agnostic strategy backed by a zstd stream encoder. It cannot hit
/// an exact byte target, so the requested ratio only steers the level: the
/// more aggressive the requested shrink, the higher the level.
pub struct ZstdStrategy;

impl ZstdStrategy {
    fn level_for(ratio: f64) -> i32 {
        if ratio <= 0.3 {
            19
        } else if ratio <= 0.6 {
            11
        } else {
            3
        }
    }
}

impl CompressionStrategy for ZstdStrategy {
    fn name(&self) -> &'static str {
        "zstd"
    }

    fn run(
        &self,
        source: &Path,
        target: &Path,
        target_mb: f64,
        progress: &mut ProgressReporter,
    ) -> Result<bool> {
        let source_bytes = fs::metadata(source)?.len();
        if source_bytes == 0 {
            return Ok(false);
        }
        let target_bytes = (target_mb * BYTES_PER_MB as f64) as u64;
        let ratio = (target_bytes as f64 / source_bytes as f64).min(1.0);

        progress.report(0.1);
        let mut src = File::open(source)?;
        let dst = File::create(target)?;
        let enc = zstd::stream::Encoder::new(dst, Self::level_for(ratio))?;
        {
            let mut w = enc.auto_finish();
            std::io::copy(&mut src, &mut w)?;
        }
        progress.report(0.8);

        progress.report(1.0);
        Ok(fs::metadata(target)?.len() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compressible_source_shrinks() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in.bin");
        let target = dir.path().join("out.bin");
        fs::write(&source, vec![0u8; 64 * 1024]).unwrap();

        let mut progress = ProgressReporter::new(None);
        let ok = ZstdStrategy
            .run(&source, &target, 0.01, &mut progress)
            .unwrap();

        assert!(ok);
        let out_len = fs::metadata(&target).unwrap().len();
        assert!(out_len > 0);
        assert!(out_len < 64 * 1024);
    }

    #[test]
    fn level_scales_with_requested_shrink() {
        assert_eq!(ZstdStrategy::level_for(0.2), 19);
        assert_eq!(ZstdStrategy::level_for(0.5), 11);
        assert_eq!(ZstdStrategy::level_for(0.9), 3);
    }
}
