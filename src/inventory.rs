//! Builds report rows from scanned files.

use crate::metadata::{NormalizedMetadata, Normalizer};
use crate::probe::ProbeGateway;
use crate::report::Row;
use crate::scanner::FileCandidate;
use crate::Result;
use avls_common::OutputMode;
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// Normalize every candidate into a row, in input order.
///
/// `jobs == 1` runs on the calling thread; any other value runs on a
/// dedicated rayon pool of that many threads (0 = one per CPU). A file whose
/// probe fails still gets a row carrying only its name, size and MIME type.
///
/// # Errors
///
/// Only fails when the worker pool cannot be started.
pub fn build_report(
    candidates: &[FileCandidate],
    gateway: &dyn ProbeGateway,
    mode: OutputMode,
    jobs: usize,
) -> Result<Vec<Row>> {
    let normalizer = Normalizer::new(gateway, mode);
    debug!(gateway = gateway.name(), %mode, files = candidates.len(), "building report");

    if jobs == 1 || candidates.len() <= 1 {
        return Ok(candidates.iter().map(|c| row_for(&normalizer, c)).collect());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .thread_name(|i| format!("avls-probe-{i}"))
        .build()?;
    info!("Probing {} files on {} threads", candidates.len(), pool.current_num_threads());

    Ok(pool.install(|| {
        candidates
            .par_iter()
            .map(|c| row_for(&normalizer, c))
            .collect()
    }))
}

fn row_for(normalizer: &Normalizer<'_>, candidate: &FileCandidate) -> Row {
    match normalizer.normalize(candidate) {
        Ok(meta) => Row::from(meta),
        Err(e) => {
            warn!("Failed to probe {}: {}", candidate.path.display(), e);
            Row::from(NormalizedMetadata::identity(candidate, normalizer.mode()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{FormatAttributes, ImageAttributes, ProbeResult};
    use std::path::{Path, PathBuf};

    /// Fails for any path containing "bad"; otherwise reports the file stem
    /// as the container format so row order can be checked.
    struct StemGateway;

    impl ProbeGateway for StemGateway {
        fn name(&self) -> &'static str {
            "stem"
        }

        fn probe_container(&self, path: &Path) -> avls_av::Result<ProbeResult> {
            let stem = path.file_stem().unwrap().to_string_lossy().into_owned();
            if stem.contains("bad") {
                return Err(avls_av::Error::tool_failed("ffprobe", "Invalid data found when processing input"));
            }
            Ok(ProbeResult {
                format: FormatAttributes {
                    format_name: Some(stem),
                    duration: Some(1.0),
                    ..Default::default()
                },
                streams: Vec::new(),
            })
        }

        fn probe_image(&self, path: &Path) -> avls_av::Result<ImageAttributes> {
            Err(avls_av::Error::decode(path, "not an image"))
        }
    }

    fn candidates(names: &[&str]) -> Vec<FileCandidate> {
        names
            .iter()
            .map(|n| FileCandidate {
                path: PathBuf::from(format!("/v/{n}.mkv")),
                mime_type: "video/x-matroska".into(),
                size: 100,
            })
            .collect()
    }

    #[test]
    fn failed_probe_keeps_identity_row() {
        let files = candidates(&["one", "bad", "three"]);
        let rows = build_report(&files, &StemGateway, OutputMode::Human, 1).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].contfmt.as_deref(), Some("one"));
        assert_eq!(rows[1].filename, "bad.mkv");
        assert_eq!(rows[1].mimetype, "video/x-matroska");
        assert!(rows[1].contfmt.is_none());
        assert!(rows[1].time.is_none());
        assert!(rows[1].subs.is_none());
        assert_eq!(rows[2].contfmt.as_deref(), Some("three"));
    }

    #[test]
    fn parallel_run_preserves_order() {
        let names: Vec<String> = (0..64).map(|i| format!("f{i:02}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let files = candidates(&refs);

        let rows = build_report(&files, &StemGateway, OutputMode::Machine, 4).unwrap();
        let formats: Vec<_> = rows.iter().map(|r| r.contfmt.clone().unwrap()).collect();
        assert_eq!(formats, names);
    }

    #[test]
    fn zero_jobs_uses_all_cpus() {
        let files = candidates(&["a", "b", "bad"]);
        let rows = build_report(&files, &StemGateway, OutputMode::Human, 0).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[2].contfmt.is_none());
    }

    #[test]
    fn no_candidates_no_rows() {
        assert!(build_report(&[], &StemGateway, OutputMode::Human, 8).unwrap().is_empty());
    }
}
