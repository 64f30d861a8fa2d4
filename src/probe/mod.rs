// Re-export the probe gateway from avls-av
pub use avls_av::probe::*;
pub use avls_av::{ToolInfo, ToolVersion};

use crate::config::Config;
use crate::Result;
use avls_av::tools::{check_min_version, check_tool_with_arg, get_tool_path, verify_tool_version};
use tracing::{info, warn};

/// Program name of the container prober.
pub const FFPROBE: &str = "ffprobe";

const VERSION_ARG: &str = "-version";

/// Locate ffprobe, gate on its version and build the production gateway.
///
/// Runs once, before any file is probed. An unparsable version string is
/// logged as a warning and accepted.
///
/// # Errors
///
/// Fails when ffprobe cannot be found or run, or is older than
/// `config.min_ffprobe_version`.
pub fn prepare_prober(config: &Config) -> Result<MediaProber> {
    let path = get_tool_path(FFPROBE, config.ffprobe.as_deref())?;

    match verify_tool_version(FFPROBE, &path, VERSION_ARG, &config.min_ffprobe_version)? {
        ToolVersion::Supported(version) => {
            info!("Using {} {} at {}", FFPROBE, version, path.display());
        }
        ToolVersion::Unparsable(raw) => {
            warn!(
                "Could not parse {} version from {:?}; assuming it is at least {}",
                FFPROBE, raw, config.min_ffprobe_version
            );
        }
    }

    Ok(MediaProber::new(FfprobeProber::new(path)))
}

/// Availability and version gate outcome for one external tool.
#[derive(Debug)]
pub struct ToolStatus {
    pub info: ToolInfo,
    pub gate: avls_av::Result<ToolVersion>,
}

impl ToolStatus {
    /// Whether the tool is present and new enough.
    pub fn usable(&self) -> bool {
        self.info.available && self.gate.is_ok()
    }
}

/// Check the external tools avls depends on, without failing.
pub fn check_tools(config: &Config) -> Vec<ToolStatus> {
    let program = config
        .ffprobe
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| FFPROBE.to_string());

    let info = check_tool_with_arg(&program, VERSION_ARG);
    let gate = match (&info.version, info.available) {
        (Some(line), true) => check_min_version(FFPROBE, line, &config.min_ffprobe_version),
        _ => Err(avls_av::Error::tool_not_found(program.as_str())),
    };

    vec![ToolStatus { info, gate }]
}
