//! Typed probe results.
//!
//! Every attribute the prober may omit is an `Option`; absence is carried
//! through to the report rather than replaced with a guess.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Decoded output of one container probe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Container-level attributes.
    pub format: FormatAttributes,
    /// Streams in the order the prober reported them.
    pub streams: Vec<StreamDescriptor>,
}

/// Container-level attributes (ffprobe's `format` block).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatAttributes {
    /// Comma-separated demuxer names, e.g. `mov,mp4,m4a,3gp,3g2,mj2`.
    pub format_name: Option<String>,
    /// Duration in seconds.
    pub duration: Option<f64>,
    /// Overall bit rate in bits per second.
    pub bit_rate: Option<u64>,
    /// Size in bytes as seen by the prober.
    pub size: Option<u64>,
}

/// One stream's attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    pub index: Option<u32>,
    /// `video`, `audio`, `subtitle`, `data`, `attachment`.
    pub codec_type: Option<String>,
    pub codec_name: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Sample rate in Hz.
    pub sample_rate: Option<u32>,
    pub channels: Option<u32>,
    /// Container-declared display aspect ratio, e.g. `16:9`.
    pub display_aspect_ratio: Option<String>,
    /// Real base frame rate as a rational string, e.g. `30000/1001`.
    pub r_frame_rate: Option<String>,
    pub bits_per_raw_sample: Option<u8>,
    /// `None` when the stream carries no tag mapping at all.
    pub tags: Option<StreamTags>,
}

/// Per-stream metadata tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamTags {
    /// Track handler, e.g. `VideoHandler`, `SoundHandler`, `SubtitleHandler`.
    pub handler_name: Option<String>,
}

impl StreamDescriptor {
    /// The stream's handler tag, if it has one.
    pub fn handler_name(&self) -> Option<&str> {
        self.tags.as_ref()?.handler_name.as_deref()
    }

    /// Whether this stream's `codec_type` equals the given kind.
    pub fn is_kind(&self, kind: StreamKind) -> bool {
        self.codec_type.as_deref() == Some(kind.as_str())
    }
}

/// Stream categories as named by ffprobe's `codec_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Video,
    Audio,
    Subtitle,
    Data,
    Attachment,
}

impl StreamKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Subtitle => "subtitle",
            Self::Data => "data",
            Self::Attachment => "attachment",
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes of a still image as reported by the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttributes {
    /// Lower-cased decoder format tag, e.g. `jpeg`, `png`.
    pub format: String,
    pub width: u32,
    pub height: u32,
    /// Pixel mode name, e.g. `RGB`, `L`, `I;16`.
    pub pixel_mode: String,
    /// Container identity that differs from the decoder format, e.g. `jfif`.
    pub container_hint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_name_requires_tags() {
        let untagged = StreamDescriptor::default();
        assert_eq!(untagged.handler_name(), None);

        let empty_tags = StreamDescriptor {
            tags: Some(StreamTags::default()),
            ..Default::default()
        };
        assert_eq!(empty_tags.handler_name(), None);

        let tagged = StreamDescriptor {
            tags: Some(StreamTags {
                handler_name: Some("VideoHandler".into()),
            }),
            ..Default::default()
        };
        assert_eq!(tagged.handler_name(), Some("VideoHandler"));
    }

    #[test]
    fn test_is_kind() {
        let audio = StreamDescriptor {
            codec_type: Some("audio".into()),
            ..Default::default()
        };
        assert!(audio.is_kind(StreamKind::Audio));
        assert!(!audio.is_kind(StreamKind::Video));
        assert!(!StreamDescriptor::default().is_kind(StreamKind::Audio));
    }

    #[test]
    fn test_stream_kind_display() {
        assert_eq!(StreamKind::Video.to_string(), "video");
        assert_eq!(StreamKind::Subtitle.to_string(), "subtitle");
        assert_eq!(StreamKind::Attachment.as_str(), "attachment");
    }
}
