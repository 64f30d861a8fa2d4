//! Report assembly: flat rows with short column keys.

mod render;

pub use render::{render, OutputFormat};

use crate::metadata::{FileDuration, FileSize, NormalizedMetadata};
use serde::Serialize;

/// Column keys in display order.
pub const COLUMNS: &[&str] = &[
    "filename", "size", "time", "contfmt", "bitrate", "vcodec", "width", "height", "vframerate",
    "vbitdepth", "vstreams", "vratio", "acodec", "afreq", "achans", "astreams", "subs", "mimetype",
];

/// One report row. Serializes with every key present; absent values are `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub filename: String,
    pub size: FileSize,
    pub time: Option<FileDuration>,
    pub contfmt: Option<String>,
    pub bitrate: Option<u64>,
    pub vcodec: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub vframerate: Option<String>,
    pub vbitdepth: Option<u8>,
    pub vstreams: Option<usize>,
    pub vratio: Option<String>,
    pub acodec: Option<String>,
    pub afreq: Option<u32>,
    pub achans: Option<u32>,
    pub astreams: Option<usize>,
    pub subs: Option<usize>,
    pub mimetype: String,
}

/// A rendered table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Cell {
    pub text: String,
    pub numeric: bool,
}

impl Cell {
    fn text(value: Option<impl ToString>) -> Self {
        Self {
            text: value.map(|v| v.to_string()).unwrap_or_default(),
            numeric: false,
        }
    }

    fn number(value: Option<impl ToString>) -> Self {
        Self {
            numeric: true,
            ..Self::text(value)
        }
    }
}

impl Row {
    /// Cells in [`COLUMNS`] order.
    pub(crate) fn cells(&self) -> Vec<Cell> {
        let size_numeric = matches!(self.size, FileSize::Bytes(_));
        let time_numeric = matches!(self.time, Some(FileDuration::Seconds(_)));
        vec![
            Cell::text(Some(&self.filename)),
            Cell {
                numeric: size_numeric,
                ..Cell::text(Some(&self.size))
            },
            Cell {
                numeric: time_numeric,
                ..Cell::text(self.time.as_ref())
            },
            Cell::text(self.contfmt.as_ref()),
            Cell::number(self.bitrate),
            Cell::text(self.vcodec.as_ref()),
            Cell::number(self.width),
            Cell::number(self.height),
            Cell::text(self.vframerate.as_ref()),
            Cell::number(self.vbitdepth),
            Cell::number(self.vstreams),
            Cell::text(self.vratio.as_ref()),
            Cell::text(self.acodec.as_ref()),
            Cell::number(self.afreq),
            Cell::number(self.achans),
            Cell::number(self.astreams),
            Cell::number(self.subs),
            Cell::text(Some(&self.mimetype)),
        ]
    }
}

impl From<NormalizedMetadata> for Row {
    fn from(m: NormalizedMetadata) -> Self {
        Self {
            filename: m.file_name,
            size: m.file_size,
            time: m.file_duration,
            contfmt: m.container_format,
            bitrate: m.bit_rate,
            vcodec: m.v_codec,
            width: m.width,
            height: m.height,
            vframerate: m.v_frame_rate,
            vbitdepth: m.v_bit_depth,
            vstreams: m.v_streams,
            vratio: m.aspect_ratio,
            acodec: m.a_codec,
            afreq: m.a_frequency,
            achans: m.a_channels,
            astreams: m.a_streams,
            subs: m.subtitles,
            mimetype: m.mime_type,
        }
    }
}
