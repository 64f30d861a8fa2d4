//! Stream selection and handler-tag counting.

use crate::probe::{StreamDescriptor, StreamKind};

/// Handler tag conventionally carried by video tracks.
pub const VIDEO_HANDLER: &str = "VideoHandler";
/// Handler tag conventionally carried by audio tracks.
pub const SOUND_HANDLER: &str = "SoundHandler";
/// Handler tag conventionally carried by subtitle tracks.
pub const SUBTITLE_HANDLER: &str = "SubtitleHandler";

/// Return the first stream whose `codec_type` matches `kind`, in prober order.
///
/// Selection is by category, not position: audio listed ahead of video does
/// not change which video stream is returned.
pub fn select_first(streams: &[StreamDescriptor], kind: StreamKind) -> Option<&StreamDescriptor> {
    streams.iter().find(|stream| stream.is_kind(kind))
}

/// Count streams whose `tags.handler_name` equals `handler` exactly.
///
/// Streams without a tag mapping, or without a handler entry in it, are not
/// counted even when their `codec_type` would match. Containers that do not
/// write handler tags (Matroska, most audio formats) therefore report zero.
pub fn count_by_handler(streams: &[StreamDescriptor], handler: &str) -> usize {
    streams
        .iter()
        .filter(|stream| stream.handler_name() == Some(handler))
        .count()
}
