//! Core type definitions shared by the probe gateway and the report builder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level media category, taken from the first half of a MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    /// Still images, handled by the image decoder.
    Image,
    /// Audio-only containers, handled by ffprobe.
    Audio,
    /// Video containers, handled by ffprobe.
    Video,
}

impl MediaCategory {
    /// Classify a MIME type string. Returns `None` for anything that is not
    /// `image/*`, `audio/*` or `video/*`.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let (top, _) = mime.split_once('/')?;
        match top {
            "image" => Some(Self::Image),
            "audio" => Some(Self::Audio),
            "video" => Some(Self::Video),
            _ => None,
        }
    }

    /// Whether files of this category go through the container prober.
    pub fn is_container(self) -> bool {
        !matches!(self, Self::Image)
    }
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Audio => write!(f, "audio"),
            Self::Video => write!(f, "video"),
        }
    }
}

/// How values in a report are encoded.
///
/// Machine mode keeps raw numbers and full paths; human mode uses base names,
/// scaled byte sizes and `H:MM:SS` durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Machine,
    #[default]
    Human,
}

impl OutputMode {
    pub fn is_human(self) -> bool {
        matches!(self, Self::Human)
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Machine => write!(f, "machine"),
            Self::Human => write!(f, "human"),
        }
    }
}
