//! avls-common: shared types and pure helpers.
//!
//! This crate holds the pieces of avls that never touch a subprocess or a
//! decoder:
//!
//! - **Core Types**: media categories and the two report output modes
//! - **Path Utilities**: extension-based MIME fallback used by the scanner
//! - **Humanize**: byte sizes and clock-style durations for human-readable reports
//!
//! # Examples
//!
//! ```
//! use avls_common::{humanize, MediaCategory, OutputMode};
//!
//! assert_eq!(MediaCategory::from_mime("video/mp4"), Some(MediaCategory::Video));
//! assert_eq!(humanize::file_size(1024), "1.0KB");
//! assert_eq!(humanize::clock(125.4), "0:02:05");
//! assert!(OutputMode::Human.is_human());
//! ```

pub mod humanize;
pub mod paths;
pub mod types;

pub use types::*;
