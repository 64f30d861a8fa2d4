//! MIME classification for scanned files.
//!
//! Magic bytes win; the extension table only answers for files the sniffer
//! does not recognise.

use avls_common::paths::{is_media_mime, mime_from_extension};
use std::path::Path;
use tracing::trace;

/// Classifies a path as an image, audio or video MIME type.
#[derive(Debug, Default, Clone, Copy)]
pub struct MimeClassifier;

impl MimeClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Return the file's media MIME type, or `None` when it is not media.
    pub fn classify(&self, path: &Path) -> Option<String> {
        let sniffed = match infer::get_from_path(path) {
            Ok(kind) => kind.map(|k| k.mime_type()),
            Err(e) => {
                trace!(path = %path.display(), error = %e, "could not sniff file");
                None
            }
        };

        if let Some(mime) = sniffed {
            // A recognised non-media signature (zip, pdf, ...) is final.
            return is_media_mime(mime).then(|| mime.to_string());
        }

        mime_from_extension(path).map(str::to_string)
    }
}
