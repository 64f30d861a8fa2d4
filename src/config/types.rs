use crate::report::OutputFormat;
use avls_common::OutputMode;
use semver::Version;
use std::path::PathBuf;

/// Oldest ffprobe whose JSON output carries every field the report reads.
pub const DEFAULT_MIN_FFPROBE_VERSION: Version = Version::new(4, 1, 4);

/// Runtime configuration, assembled from command-line flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory to inventory.
    pub target: PathBuf,
    pub output: OutputFormat,
    pub verbosity: Verbosity,
    /// Explicit ffprobe executable; `None` searches `PATH`.
    pub ffprobe: Option<PathBuf>,
    pub min_ffprobe_version: Version,
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Worker threads for probing. 1 is sequential, 0 is one per CPU.
    pub jobs: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: PathBuf::from("."),
            output: OutputFormat::default(),
            verbosity: Verbosity::default(),
            ffprobe: None,
            min_ffprobe_version: DEFAULT_MIN_FFPROBE_VERSION,
            recursive: false,
            jobs: 1,
        }
    }
}

impl Config {
    /// Output mode implied by the report format.
    pub fn mode(&self) -> OutputMode {
        self.output.mode()
    }
}

/// Diagnostic verbosity, carried in [`Config`] and turned into a log filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings, including per-file probe failures.
    #[default]
    Normal,
    /// Debug output from avls crates.
    Verbose,
    /// Everything, including raw probe output.
    Trace,
}

impl Verbosity {
    /// Map `-q` and the number of `-v` flags to a level. `-q` wins.
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    /// `tracing_subscriber::EnvFilter` directive for this level.
    pub fn log_filter(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "warn,avls=debug,avls_av=debug,avls_common=debug",
            Self::Trace => "info,avls=trace,avls_av=trace,avls_common=trace",
        }
    }
}
