use std::fs;
use std::path::Path;

use super::{CompressionStrategy, ProgressReporter};
use crate::error::Result;
use crate::probe::BYTES_PER_MB;

const FILL: &[u8] = b"squeeze simulated payload\n";

/// Reference strategy for environments without a real codec. It copies the
/// source and, when shrinking is requested, replaces the copy with a
/// synthetic payload sized `min(target, 1 MB)`. NOT production-faithful:
/// the output is not a playable transcode, only a size-shaped stand-in. A
/// real strategy swaps in codec logic behind the same trait.
pub struct SimulatedStrategy;

impl CompressionStrategy for SimulatedStrategy {
    fn name(&self) -> &'static str {
        "simulated"
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
        fs::copy(source, target)?;
        progress.report(0.8);

        if ratio < 1.0 {
            let len = target_bytes.min(BYTES_PER_MB) as usize;
            let mut payload = Vec::with_capacity(len);
            while payload.len() < len {
                let take = FILL.len().min(len - payload.len());
                payload.extend_from_slice(&FILL[..take]);
            }
            fs::write(target, &payload)?;
        }

        progress.report(1.0);
        Ok(fs::metadata(target)?.len() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProgressFn;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (ProgressFn, Arc<Mutex<Vec<f32>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let cb: ProgressFn = Arc::new(move |p| sink.lock().unwrap().push(p));
        (cb, seen)
    }

    #[test]
    fn shrinking_run_reports_milestones() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in.mp4");
        let target = dir.path().join("out.mp4");
        fs::write(&source, vec![7u8; 2048]).unwrap();

        let (cb, seen) = recorder();
        let mut progress = ProgressReporter::new(Some(cb));
        // ~524 target bytes against 2048 source bytes
        let ok = SimulatedStrategy
            .run(&source, &target, 0.0005, &mut progress)
            .unwrap();

        assert!(ok);
        assert_eq!(*seen.lock().unwrap(), vec![0.1, 0.8, 1.0]);

        let out_len = fs::metadata(&target).unwrap().len();
        assert!(out_len > 0);
        assert!(out_len <= 2048);
        assert!(out_len <= BYTES_PER_MB);
    }

    #[test]
    fn non_shrinking_run_copies_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in.mp4");
        let target = dir.path().join("out.mp4");
        fs::write(&source, b"tiny clip").unwrap();

        let mut progress = ProgressReporter::new(None);
        let ok = SimulatedStrategy
            .run(&source, &target, 1.0, &mut progress)
            .unwrap();

        assert!(ok);
        assert_eq!(fs::read(&target).unwrap(), b"tiny clip");
    }

    #[test]
    fn zero_byte_source_is_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in.mp4");
        let target = dir.path().join("out.mp4");
        fs::write(&source, b"").unwrap();

        let mut progress = ProgressReporter::new(None);
        let ok = SimulatedStrategy
            .run(&source, &target, 1.0, &mut progress)
            .unwrap();
        assert!(!ok);
    }
}
