//! FFprobe-based container probing.

use super::types::*;
use crate::{tools, Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::trace;

/// Arguments for a quiet, JSON, format+streams probe. The target path is
/// appended last.
const FFPROBE_ARGS: &[&str] = &[
    "-show_format",
    "-show_streams",
    "-loglevel",
    "quiet",
    "-print_format",
    "json",
];

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    format: FfprobeFormat,
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    format_name: Option<String>,
    duration: Option<String>,
    bit_rate: Option<String>,
    size: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    index: Option<u32>,
    codec_type: Option<String>,
    codec_name: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    sample_rate: Option<String>,
    channels: Option<u32>,
    display_aspect_ratio: Option<String>,
    r_frame_rate: Option<String>,
    bits_per_raw_sample: Option<String>,
    tags: Option<FfprobeTags>,
}

#[derive(Debug, Deserialize)]
struct FfprobeTags {
    handler_name: Option<String>,
}

/// A container prober backed by the `ffprobe` CLI.
#[derive(Debug, Clone)]
pub struct FfprobeProber {
    ffprobe_path: PathBuf,
}

impl FfprobeProber {
    /// Create a new prober using the given ffprobe path.
    pub fn new(ffprobe_path: impl Into<PathBuf>) -> Self {
        Self {
            ffprobe_path: ffprobe_path.into(),
        }
    }

    /// Create a prober that finds ffprobe on `PATH`.
    pub fn from_path() -> Result<Self> {
        tools::require_tool("ffprobe").map(Self::new)
    }

    /// Path of the ffprobe executable this prober runs.
    pub fn path(&self) -> &Path {
        &self.ffprobe_path
    }

    /// Probe a container file.
    ///
    /// # Errors
    ///
    /// - [`Error::ToolNotFound`] if the executable vanished.
    /// - [`Error::ToolFailed`] on a non-zero exit (corrupt or unreadable file).
    /// - [`Error::ParseError`] if stdout is not the expected JSON document.
    pub fn probe(&self, path: &Path) -> Result<ProbeResult> {
        let output = Command::new(&self.ffprobe_path)
            .args(FFPROBE_ARGS)
            .arg(path)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::tool_not_found("ffprobe")
                } else {
                    Error::Io(e)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => format!("exited with {} for {}", output.status, path.display()),
                detail => format!("exited with {}: {detail}", output.status),
            };
            return Err(Error::tool_failed("ffprobe", message));
        }

        let json_str = String::from_utf8(output.stdout)
            .map_err(|e| Error::parse_error("ffprobe", format!("Invalid UTF-8: {}", e)))?;

        trace!(path = %path.display(), "ffprobe output: {}", json_str);

        parse_ffprobe_json(&json_str)
    }
}

/// Decode an ffprobe JSON document into a [`ProbeResult`].
///
/// The `format` block is required; `streams` defaults to empty. Numeric
/// fields that ffprobe emits as strings are parsed here, and values that do
/// not parse are treated as absent.
pub fn parse_ffprobe_json(json_str: &str) -> Result<ProbeResult> {
    let output: FfprobeOutput = serde_json::from_str(json_str)
        .map_err(|e| Error::parse_error("ffprobe", e.to_string()))?;

    Ok(convert(output))
}

fn convert(output: FfprobeOutput) -> ProbeResult {
    let format = FormatAttributes {
        format_name: output.format.format_name,
        duration: parse_num(output.format.duration.as_deref()),
        bit_rate: parse_num(output.format.bit_rate.as_deref()),
        size: parse_num(output.format.size.as_deref()),
    };

    let streams = output
        .streams
        .into_iter()
        .map(|stream| StreamDescriptor {
            index: stream.index,
            codec_type: stream.codec_type,
            codec_name: stream.codec_name,
            width: stream.width,
            height: stream.height,
            sample_rate: parse_num(stream.sample_rate.as_deref()),
            channels: stream.channels,
            display_aspect_ratio: stream.display_aspect_ratio,
            r_frame_rate: stream.r_frame_rate,
            bits_per_raw_sample: parse_num(stream.bits_per_raw_sample.as_deref()),
            tags: stream.tags.map(|tags| StreamTags {
                handler_name: tags.handler_name,
            }),
        })
        .collect();

    ProbeResult { format, streams }
}

fn parse_num<T: std::str::FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MP4_SAMPLE: &str = r#"{
        "streams": [
            {
                "index": 0,
                "codec_name": "h264",
                "codec_type": "video",
                "width": 1920,
                "height": 1080,
                "display_aspect_ratio": "16:9",
                "r_frame_rate": "30000/1001",
                "bits_per_raw_sample": "8",
                "tags": {"language": "und", "handler_name": "VideoHandler"}
            },
            {
                "index": 1,
                "codec_name": "aac",
                "codec_type": "audio",
                "sample_rate": "48000",
                "channels": 2,
                "tags": {"language": "eng", "handler_name": "SoundHandler"}
            },
            {
                "index": 2,
                "codec_name": "mov_text",
                "codec_type": "subtitle"
            }
        ],
        "format": {
            "filename": "clip.mp4",
            "nb_streams": 3,
            "format_name": "mov,mp4,m4a,3gp,3g2,mj2",
            "duration": "125.400000",
            "size": "1048576",
            "bit_rate": "66893"
        }
    }"#;

    #[test]
    fn test_parse_full_document() {
        let result = parse_ffprobe_json(MP4_SAMPLE).unwrap();

        assert_eq!(result.format.format_name.as_deref(), Some("mov,mp4,m4a,3gp,3g2,mj2"));
        assert_eq!(result.format.duration, Some(125.4));
        assert_eq!(result.format.bit_rate, Some(66893));
        assert_eq!(result.format.size, Some(1_048_576));

        assert_eq!(result.streams.len(), 3);
        let video = &result.streams[0];
        assert_eq!(video.codec_name.as_deref(), Some("h264"));
        assert_eq!((video.width, video.height), (Some(1920), Some(1080)));
        assert_eq!(video.display_aspect_ratio.as_deref(), Some("16:9"));
        assert_eq!(video.bits_per_raw_sample, Some(8));
        assert_eq!(video.handler_name(), Some("VideoHandler"));

        let audio = &result.streams[1];
        assert_eq!(audio.sample_rate, Some(48000));
        assert_eq!(audio.channels, Some(2));
        assert_eq!(audio.handler_name(), Some("SoundHandler"));

        let subtitle = &result.streams[2];
        assert!(subtitle.tags.is_none());
        assert!(subtitle.is_kind(StreamKind::Subtitle));
    }

    #[test]
    fn test_stream_order_preserved() {
        let result = parse_ffprobe_json(MP4_SAMPLE).unwrap();
        let indices: Vec<_> = result.streams.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn test_missing_streams_defaults_empty() {
        let result = parse_ffprobe_json(r#"{"format": {"format_name": "mp3"}}"#).unwrap();
        assert!(result.streams.is_empty());
        assert_eq!(result.format.duration, None);
        assert_eq!(result.format.bit_rate, None);
    }

    #[test]
    fn test_unparsable_numbers_are_absent() {
        let json = r#"{
            "format": {"format_name": "wav", "duration": "N/A", "bit_rate": ""},
            "streams": [{"codec_type": "audio", "sample_rate": "fast"}]
        }"#;
        let result = parse_ffprobe_json(json).unwrap();
        assert_eq!(result.format.duration, None);
        assert_eq!(result.format.bit_rate, None);
        assert_eq!(result.streams[0].sample_rate, None);
    }

    #[test]
    fn test_missing_format_is_parse_error() {
        let err = parse_ffprobe_json(r#"{"streams": []}"#).unwrap_err();
        assert!(matches!(err, Error::ParseError { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            parse_ffprobe_json("{not json").unwrap_err(),
            Error::ParseError { .. }
        ));
        assert!(matches!(
            parse_ffprobe_json("").unwrap_err(),
            Error::ParseError { .. }
        ));
    }

    #[test]
    fn test_missing_executable_is_tool_not_found() {
        let prober = FfprobeProber::new("/nonexistent/bin/ffprobe_12345");
        let err = prober.probe(Path::new("/tmp/whatever.mp4")).unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { .. }));
    }
}
