//! External tool detection and version gating.

use crate::{Error, Result};
use semver::Version;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Information about an external tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Whether the tool is available.
    pub available: bool,
    /// First line of the version output, if available.
    pub version: Option<String>,
    /// Path to the tool executable.
    pub path: Option<PathBuf>,
}

/// Outcome of a successful version gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolVersion {
    /// The reported version meets the minimum.
    Supported(Version),
    /// The version output could not be understood; the caller should warn
    /// and carry on.
    Unparsable(String),
}

/// Check if a tool is available using a custom version argument.
///
/// # Example
///
/// ```no_run
/// use avls_av::tools::check_tool_with_arg;
///
/// let info = check_tool_with_arg("ffprobe", "-version");
/// if info.available {
///     println!("ffprobe version: {:?}", info.version);
/// }
/// ```
pub fn check_tool_with_arg(name: &str, version_arg: &str) -> ToolInfo {
    let result = Command::new(name).arg(version_arg).output();

    match result {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout)
                .lines()
                .next()
                .map(|s| s.to_string());

            let path = which::which(name).ok();

            ToolInfo {
                name: name.to_string(),
                available: true,
                version,
                path,
            }
        }
        _ => ToolInfo {
            name: name.to_string(),
            available: false,
            version: None,
            path: None,
        },
    }
}

/// Require that a tool is available, returning its path.
///
/// # Errors
///
/// Returns [`Error::ToolNotFound`] if the tool is not on `PATH`.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Get the path to a tool, preferring a configured path over PATH lookup.
///
/// A configured value may be a bare program name or a path; either way it
/// must resolve to an executable.
pub fn get_tool_path(name: &str, config_path: Option<&Path>) -> Result<PathBuf> {
    match config_path {
        Some(path) => {
            which::which(path).map_err(|_| Error::tool_not_found(path.display().to_string()))
        }
        None => require_tool(name),
    }
}

/// Pull the version token out of `<tool> -version` output.
///
/// ffmpeg-family tools print `ffprobe version 6.1.1-3ubuntu5 Copyright ...`;
/// the token is the third whitespace-separated field.
pub fn version_token(output: &str) -> Option<&str> {
    output.split_whitespace().nth(2)
}

/// Parse a version token leniently into a semantic version.
///
/// Leading `n`/`v` prefixes (git tag style) are dropped, then the leading
/// run of dotted numeric components is read; missing components are zero.
/// Distribution suffixes such as `-1build2` are ignored.
///
/// # Examples
///
/// ```
/// use avls_av::tools::parse_loose_version;
/// use semver::Version;
///
/// assert_eq!(parse_loose_version("4.1.4-1build2"), Some(Version::new(4, 1, 4)));
/// assert_eq!(parse_loose_version("n6.1"), Some(Version::new(6, 1, 0)));
/// assert_eq!(parse_loose_version("N-113548-g1b2c3d"), None);
/// ```
pub fn parse_loose_version(token: &str) -> Option<Version> {
    let token = token
        .strip_prefix(['n', 'v'])
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
        .unwrap_or(token);

    let numeric: String = token
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut parts = numeric
        .split('.')
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<u64>());

    let major = parts.next()?.ok()?;
    let minor = parts.next().transpose().ok()?.unwrap_or(0);
    let patch = parts.next().transpose().ok()?.unwrap_or(0);

    Some(Version::new(major, minor, patch))
}

/// Compare raw version output against a minimum version.
///
/// # Errors
///
/// Returns [`Error::ToolVersionTooOld`] when the parsed version is below
/// `minimum`. Output that cannot be parsed is not an error.
pub fn check_min_version(tool: &str, output: &str, minimum: &Version) -> Result<ToolVersion> {
    let Some(token) = version_token(output) else {
        return Ok(ToolVersion::Unparsable(output.trim().to_string()));
    };

    match parse_loose_version(token) {
        Some(found) if found < *minimum => Err(Error::ToolVersionTooOld {
            tool: tool.to_string(),
            found,
            required: minimum.clone(),
        }),
        Some(found) => Ok(ToolVersion::Supported(found)),
        None => Ok(ToolVersion::Unparsable(token.to_string())),
    }
}

/// Run the tool's version query and gate on a minimum version.
///
/// # Errors
///
/// - [`Error::ToolNotFound`] if the executable cannot be spawned because it
///   does not exist.
/// - [`Error::ToolFailed`] if the version query exits unsuccessfully.
/// - [`Error::ToolVersionTooOld`] if the version is below `minimum`.
pub fn verify_tool_version(
    tool: &str,
    path: &Path,
    version_arg: &str,
    minimum: &Version,
) -> Result<ToolVersion> {
    let output = Command::new(path).arg(version_arg).output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::tool_not_found(tool)
        } else {
            Error::Io(e)
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::tool_failed(tool, stderr.trim().to_string()));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    debug!(tool, path = %path.display(), "version query: {}", stdout.lines().next().unwrap_or(""));

    check_min_version(tool, &stdout, minimum)
}
