//! Error type for the avls library crate.

use std::path::PathBuf;

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that stop a report from being produced.
///
/// Per-file probe failures never surface here; they are absorbed into the
/// affected row.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested report format has no renderer.
    #[error(
        "unsupported output format: {0} (expected one of: {names})",
        names = crate::report::OutputFormat::NAMES.join(", ")
    )]
    UnsupportedOutputFormat(String),

    /// The scan target is missing or is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Probe tool discovery or version gating failed.
    #[error(transparent)]
    Probe(#[from] avls_av::Error),

    /// Directory traversal failed at the root.
    #[error("failed to read directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// The worker pool could not be started.
    #[error("failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_format_lists_alternatives() {
        let err = Error::UnsupportedOutputFormat("fancy".into());
        assert_eq!(
            err.to_string(),
            "unsupported output format: fancy (expected one of: json, plain, simple, grid, pipe, tsv)"
        );
    }

    #[test]
    fn probe_errors_pass_through() {
        let err = Error::from(avls_av::Error::tool_not_found("ffprobe"));
        assert_eq!(
            err.to_string(),
            "tool not found: ffprobe (is it installed and in PATH?)"
        );
    }

    #[test]
    fn not_a_directory_display() {
        let err = Error::NotADirectory(PathBuf::from("/tmp/file.txt"));
        assert_eq!(err.to_string(), "not a directory: /tmp/file.txt");
    }
}
