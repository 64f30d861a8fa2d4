//! Path utilities for guessing media MIME types by extension.
//!
//! Magic-byte sniffing is the primary classifier; this table backs it up for
//! containers whose signatures the sniffer does not know (raw elementary
//! streams, transport streams, a few legacy formats).

use std::path::Path;

use crate::MediaCategory;

/// Known media extensions and the MIME type they map to.
const MEDIA_EXTENSIONS: &[(&str, &str)] = &[
    // video
    ("mkv", "video/x-matroska"),
    ("mp4", "video/mp4"),
    ("m4v", "video/x-m4v"),
    ("mov", "video/quicktime"),
    ("avi", "video/x-msvideo"),
    ("webm", "video/webm"),
    ("wmv", "video/x-ms-wmv"),
    ("flv", "video/x-flv"),
    ("ts", "video/mp2t"),
    ("m2ts", "video/mp2t"),
    ("mpg", "video/mpeg"),
    ("mpeg", "video/mpeg"),
    ("3gp", "video/3gpp"),
    ("ogv", "video/ogg"),
    // audio
    ("mp3", "audio/mpeg"),
    ("m4a", "audio/mp4"),
    ("aac", "audio/aac"),
    ("flac", "audio/flac"),
    ("wav", "audio/x-wav"),
    ("ogg", "audio/ogg"),
    ("opus", "audio/opus"),
    ("wma", "audio/x-ms-wma"),
    ("aiff", "audio/aiff"),
    ("ac3", "audio/ac3"),
    // image
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("ico", "image/x-icon"),
    ("tga", "image/x-tga"),
    ("qoi", "image/qoi"),
];

/// Look up the MIME type for a path by its (case-insensitive) extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use avls_common::paths::mime_from_extension;
///
/// assert_eq!(mime_from_extension(Path::new("movie.MKV")), Some("video/x-matroska"));
/// assert_eq!(mime_from_extension(Path::new("notes.txt")), None);
/// ```
pub fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    MEDIA_EXTENSIONS
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
}

/// Whether a MIME type names an image, audio or video payload.
pub fn is_media_mime(mime: &str) -> bool {
    MediaCategory::from_mime(mime).is_some()
}
