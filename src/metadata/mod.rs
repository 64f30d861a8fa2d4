//! Metadata normalization.
//!
//! Reduces heterogeneous probe output (a still-image header or an ffprobe
//! container description) to one uniform [`NormalizedMetadata`] record per
//! file. Fields the probe did not report stay `None`; nothing is guessed.

pub mod aspect;
pub mod pixel;
pub mod streams;

use crate::probe::{ImageAttributes, ProbeGateway, ProbeResult, StreamKind};
use crate::scanner::FileCandidate;
use avls_common::{humanize, MediaCategory, OutputMode};
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::trace;

use streams::{count_by_handler, select_first, SOUND_HANDLER, SUBTITLE_HANDLER, VIDEO_HANDLER};

/// File size as encoded for the chosen output mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FileSize {
    /// Exact byte count (machine mode).
    Bytes(u64),
    /// 1024-based scaled size such as `1.5MB` (human mode).
    Human(String),
}

impl FileSize {
    pub fn encode(bytes: u64, mode: OutputMode) -> Self {
        if mode.is_human() {
            Self::Human(humanize::file_size(bytes))
        } else {
            Self::Bytes(bytes)
        }
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(bytes) => write!(f, "{bytes}"),
            Self::Human(text) => f.write_str(text),
        }
    }
}

/// Container duration as encoded for the chosen output mode.
#[derive(Debug, Clone, PartialEq)]
pub enum FileDuration {
    /// Raw seconds (machine mode).
    Seconds(f64),
    /// `H:MM:SS`, truncated to whole seconds (human mode).
    Clock(String),
    /// The container did not report a usable duration.
    Unknown,
}

impl FileDuration {
    pub fn encode(seconds: Option<f64>, mode: OutputMode) -> Self {
        match seconds {
            Some(s) if s.is_finite() && s >= 0.0 => {
                if mode.is_human() {
                    Self::Clock(humanize::clock(s))
                } else {
                    Self::Seconds(s)
                }
            }
            _ => Self::Unknown,
        }
    }
}

impl Serialize for FileDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Seconds(s) => serializer.serialize_f64(*s),
            Self::Clock(text) => serializer.serialize_str(text),
            Self::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

impl fmt::Display for FileDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(s) => write!(f, "{s}"),
            Self::Clock(text) => f.write_str(text),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// One file's normalized metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMetadata {
    /// Full path in machine mode, base name in human mode.
    pub file_name: String,
    pub file_size: FileSize,
    pub mime_type: String,
    pub container_format: Option<String>,
    /// Containers only.
    pub file_duration: Option<FileDuration>,
    /// Overall bit rate in bits per second; containers only.
    pub bit_rate: Option<u64>,
    pub v_codec: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub aspect_ratio: Option<String>,
    pub v_frame_rate: Option<String>,
    pub v_bit_depth: Option<u8>,
    pub v_streams: Option<usize>,
    pub a_codec: Option<String>,
    pub a_frequency: Option<u32>,
    pub a_channels: Option<u32>,
    pub a_streams: Option<usize>,
    pub subtitles: Option<usize>,
}

impl NormalizedMetadata {
    /// A record carrying only the fields known without probing.
    ///
    /// Used as the starting point for both branches, and on its own for
    /// files whose probe failed.
    pub fn identity(candidate: &FileCandidate, mode: OutputMode) -> Self {
        let file_name = if mode.is_human() {
            candidate
                .path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| candidate.path.display().to_string())
        } else {
            candidate.path.display().to_string()
        };

        Self {
            file_name,
            file_size: FileSize::encode(candidate.size, mode),
            mime_type: candidate.mime_type.clone(),
            container_format: None,
            file_duration: None,
            bit_rate: None,
            v_codec: None,
            width: None,
            height: None,
            aspect_ratio: None,
            v_frame_rate: None,
            v_bit_depth: None,
            v_streams: None,
            a_codec: None,
            a_frequency: None,
            a_channels: None,
            a_streams: None,
            subtitles: None,
        }
    }

    /// Fill in still-image fields from decoder output.
    ///
    /// # Errors
    ///
    /// Fails with `UnsupportedPixelMode` when the decoder's pixel mode has
    /// no entry in the bit depth table.
    pub fn apply_image(&mut self, image: &ImageAttributes) -> avls_av::Result<()> {
        let bit_depth = pixel::bit_depth(&image.pixel_mode)?;
        let format = image.format.to_lowercase();

        self.container_format = Some(image.container_hint.clone().unwrap_or_else(|| format.clone()));
        self.v_codec = Some(format);
        self.width = Some(image.width);
        self.height = Some(image.height);
        self.aspect_ratio = aspect::reduce(i64::from(image.width), i64::from(image.height));
        self.v_bit_depth = Some(bit_depth);
        Ok(())
    }

    /// Fill in container fields from a probe result.
    pub fn apply_container(&mut self, probe: &ProbeResult, mode: OutputMode) {
        let streams = &probe.streams;

        self.file_duration = Some(FileDuration::encode(probe.format.duration, mode));
        self.container_format = probe.format.format_name.clone();
        self.bit_rate = probe.format.bit_rate;

        if let Some(video) = select_first(streams, StreamKind::Video) {
            self.v_codec = video.codec_name.clone();
            self.width = video.width;
            self.height = video.height;
            self.aspect_ratio = video.display_aspect_ratio.clone();
            self.v_frame_rate = video.r_frame_rate.clone();
            self.v_bit_depth = video.bits_per_raw_sample;
            self.v_streams = Some(count_by_handler(streams, VIDEO_HANDLER));
        }

        if let Some(audio) = select_first(streams, StreamKind::Audio) {
            self.a_codec = audio.codec_name.clone();
            self.a_frequency = audio.sample_rate;
            self.a_channels = audio.channels;
            self.a_streams = Some(count_by_handler(streams, SOUND_HANDLER));
        }

        self.subtitles = Some(count_by_handler(streams, SUBTITLE_HANDLER));
    }
}

/// Builds [`NormalizedMetadata`] records through a probe gateway.
pub struct Normalizer<'a> {
    gateway: &'a dyn ProbeGateway,
    mode: OutputMode,
}

impl<'a> Normalizer<'a> {
    pub fn new(gateway: &'a dyn ProbeGateway, mode: OutputMode) -> Self {
        Self { gateway, mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Normalize one file, branching on its MIME category.
    ///
    /// # Errors
    ///
    /// Returns the probe or decoder error for this file. Callers decide
    /// whether to keep an identity-only row; nothing here aborts a batch.
    pub fn normalize(&self, candidate: &FileCandidate) -> avls_av::Result<NormalizedMetadata> {
        let mut record = NormalizedMetadata::identity(candidate, self.mode);

        match MediaCategory::from_mime(&candidate.mime_type) {
            Some(category) if !category.is_container() => {
                let image = self.gateway.probe_image(&candidate.path)?;
                trace!(path = %candidate.path.display(), ?image, "decoded image header");
                record.apply_image(&image)?;
            }
            _ => {
                let probe = self.gateway.probe_container(&candidate.path)?;
                trace!(
                    path = %candidate.path.display(),
                    streams = probe.streams.len(),
                    "probed container"
                );
                record.apply_container(&probe, self.mode);
            }
        }

        Ok(record)
    }
}
