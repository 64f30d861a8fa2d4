//! # avls-av
//!
//! Probe gateway for avls.
//!
//! This crate provides functionality for:
//! - Probing audio/video containers with `ffprobe` and decoding its JSON into
//!   typed records ([`ProbeResult`], [`StreamDescriptor`])
//! - Reading still-image headers ([`ImageAttributes`]) with the `image` crate
//! - Locating external tools and gating on a minimum tool version
//!
//! ## Example
//!
//! ```no_run
//! use avls_av::{FfprobeProber, MediaProber, ProbeGateway};
//! use std::path::Path;
//!
//! let prober = MediaProber::new(FfprobeProber::from_path()?);
//! let result = prober.probe_container(Path::new("/path/to/video.mkv"))?;
//! println!("Container: {:?}", result.format.format_name);
//! # Ok::<(), avls_av::Error>(())
//! ```

mod error;
pub mod probe;
pub mod tools;

// Re-exports
pub use error::{Error, Result};
pub use probe::{
    FfprobeProber, FormatAttributes, ImageAttributes, MediaProber, ProbeGateway, ProbeResult,
    StreamDescriptor, StreamKind, StreamTags,
};
pub use tools::{check_tool_with_arg, get_tool_path, require_tool, ToolInfo, ToolVersion};
