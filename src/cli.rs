use avls::config::{Config, Verbosity, DEFAULT_MIN_FFPROBE_VERSION};
use avls::report::OutputFormat;
use clap::Parser;
use semver::Version;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "avls")]
#[command(author, version, about = "List the audio, video and image files in a directory with their metadata")]
pub struct Cli {
    /// Directory to inventory (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub target: Option<PathBuf>,

    /// Report format: json, plain, simple, grid, pipe or tsv
    #[arg(short, long, env = "AVLS_FORMAT", default_value = "plain")]
    pub format: String,

    /// Increase log detail (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to the ffprobe executable
    #[arg(long, env = "AVLS_FFPROBE", value_name = "PATH")]
    pub ffprobe: Option<PathBuf>,

    /// Oldest ffprobe version to accept
    #[arg(long, value_name = "VERSION", default_value_t = DEFAULT_MIN_FFPROBE_VERSION, value_parser = parse_version)]
    pub min_ffprobe_version: Version,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Files to probe in parallel (0 = one per CPU)
    #[arg(short, long, env = "AVLS_JOBS", default_value_t = 1)]
    pub jobs: usize,

    /// Check that required external tools are available and exit
    #[arg(long)]
    pub check_tools: bool,
}

impl Cli {
    /// Build the runtime configuration.
    ///
    /// Fails on an unknown report format so nothing is probed for a report
    /// that cannot be rendered.
    pub fn into_config(self) -> avls::Result<Config> {
        let output: OutputFormat = self.format.parse()?;
        // machine-mode filenames are full paths
        let target = match self.target {
            Some(dir) => std::path::absolute(dir)?,
            None => std::env::current_dir()?,
        };

        Ok(Config {
            target,
            output,
            verbosity: Verbosity::from_flags(self.verbose, self.quiet),
            ffprobe: self.ffprobe,
            min_ffprobe_version: self.min_ffprobe_version,
            recursive: self.recursive,
            jobs: self.jobs,
        })
    }
}

fn parse_version(s: &str) -> Result<Version, String> {
    avls_av::tools::parse_loose_version(s).ok_or_else(|| format!("not a version number: {s}"))
}
