//! Error types for avls-av.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while probing media.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required external tool is not available.
    #[error("tool not found: {tool} (is it installed and in PATH?)")]
    ToolNotFound { tool: String },

    /// The external tool is older than the minimum supported version.
    #[error("{tool} {found} found, but version {required} or newer is required")]
    ToolVersionTooOld {
        tool: String,
        found: semver::Version,
        required: semver::Version,
    },

    /// An external tool failed to execute.
    #[error("tool execution failed: {tool}: {message}")]
    ToolFailed { tool: String, message: String },

    /// Failed to parse tool output.
    #[error("failed to parse {tool} output: {message}")]
    ParseError { tool: String, message: String },

    /// The image decoder could not read the file.
    #[error("failed to decode image {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    /// The decoder reported a pixel mode with no known bit depth.
    #[error("unsupported pixel mode: {0}")]
    UnsupportedPixelMode(String),

    /// The specified file was not found.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a tool not found error.
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a tool execution failed error.
    pub fn tool_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse_error(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create an image decode error.
    pub fn decode(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Whether this error must stop the whole run.
    ///
    /// A missing or outdated probe tool makes every container file
    /// unreadable; everything else only affects the file being probed.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ToolNotFound { .. } | Self::ToolVersionTooOld { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::tool_not_found("ffprobe");
        assert_eq!(
            err.to_string(),
            "tool not found: ffprobe (is it installed and in PATH?)"
        );

        let err = Error::tool_failed("ffprobe", "exit status 1");
        assert_eq!(err.to_string(), "tool execution failed: ffprobe: exit status 1");

        let err = Error::decode("/tmp/x.png", "truncated");
        assert_eq!(err.to_string(), "failed to decode image /tmp/x.png: truncated");

        let err = Error::UnsupportedPixelMode("L4".into());
        assert_eq!(err.to_string(), "unsupported pixel mode: L4");
    }

    #[test]
    fn test_version_too_old_display() {
        let err = Error::ToolVersionTooOld {
            tool: "ffprobe".into(),
            found: semver::Version::new(3, 4, 8),
            required: semver::Version::new(4, 1, 4),
        };
        assert_eq!(
            err.to_string(),
            "ffprobe 3.4.8 found, but version 4.1.4 or newer is required"
        );
    }

    #[test]
    fn test_fatal_classification() {
        assert!(Error::tool_not_found("ffprobe").is_fatal());
        assert!(Error::ToolVersionTooOld {
            tool: "ffprobe".into(),
            found: semver::Version::new(1, 0, 0),
            required: semver::Version::new(2, 0, 0),
        }
        .is_fatal());

        assert!(!Error::tool_failed("ffprobe", "boom").is_fatal());
        assert!(!Error::parse_error("ffprobe", "bad json").is_fatal());
        assert!(!Error::decode("a.jpg", "bad").is_fatal());
        assert!(!Error::UnsupportedPixelMode("X".into()).is_fatal());
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(!Error::from(io).is_fatal());
    }
}
