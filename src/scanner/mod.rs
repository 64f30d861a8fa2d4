//! Directory scanner.
//!
//! Walks the target directory and keeps the regular files whose MIME type is
//! `image/*`, `audio/*` or `video/*`, in file-name order.

pub mod classifier;

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

pub use classifier::MimeClassifier;

/// A media file selected for probing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub path: PathBuf,
    /// Always `image/*`, `audio/*` or `video/*`.
    pub mime_type: String,
    /// Size in bytes when the directory was read.
    pub size: u64,
}

/// Finds media files under a directory.
#[derive(Debug, Default)]
pub struct Scanner {
    classifier: MimeClassifier,
    recursive: bool,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descend into subdirectories instead of reading only the top level.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Scan `root` for media files.
    ///
    /// Unreadable entries below the root are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotADirectory`] when `root` is missing or not a
    /// directory, and [`Error::Walk`] when the root itself cannot be read.
    pub fn scan(&self, root: &Path) -> Result<Vec<FileCandidate>> {
        if !root.is_dir() {
            return Err(Error::NotADirectory(root.to_path_buf()));
        }
        info!("Scanning directory: {}", root.display());

        let mut walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name();
        if !self.recursive {
            walker = walker.max_depth(1);
        }

        let mut candidates = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Some(mime_type) = self.classifier.classify(path) else {
                debug!(path = %path.display(), "not a media file");
                continue;
            };

            let size = match entry.metadata() {
                Ok(meta) => meta.len(),
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };

            debug!(path = %path.display(), mime = %mime_type, size, "media file");
            candidates.push(FileCandidate {
                path: path.to_path_buf(),
                mime_type,
                size,
            });
        }

        info!("Found {} media files", candidates.len());
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_png(path: &Path) {
        image::RgbImage::new(2, 2)
            .save_with_format(path, image::ImageFormat::Png)
            .unwrap();
    }

    #[test]
    fn keeps_media_files_in_name_order() {
        let dir = TempDir::new().unwrap();
        write_png(&dir.path().join("b.png"));
        write_png(&dir.path().join("a.png"));
        fs::write(dir.path().join("readme.txt"), "not media").unwrap();

        let found = Scanner::new().scan(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|c| c.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, ["a.png", "b.png"]);
        assert!(found.iter().all(|c| c.mime_type == "image/png"));
        assert!(found.iter().all(|c| c.size > 0));
    }

    #[test]
    fn top_level_only_by_default() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        write_png(&nested.join("deep.png"));
        write_png(&dir.path().join("top.png"));

        assert_eq!(Scanner::new().scan(dir.path()).unwrap().len(), 1);
        assert_eq!(Scanner::new().recursive(true).scan(dir.path()).unwrap().len(), 2);
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(Scanner::new().scan(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn file_target_is_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("x.png");
        write_png(&file);

        assert!(matches!(Scanner::new().scan(&file), Err(Error::NotADirectory(_))));
        assert!(matches!(
            Scanner::new().scan(&dir.path().join("missing")),
            Err(Error::NotADirectory(_))
        ));
    }
}
