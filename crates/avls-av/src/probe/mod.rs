//! Media file probing module.
//!
//! Two backends sit behind the [`ProbeGateway`] trait:
//!
//! - **Containers** (audio/video): the `ffprobe` CLI, decoded from JSON
//! - **Still images**: the `image` crate, header-only decode

mod ffprobe;
mod still;
mod types;

pub use ffprobe::{parse_ffprobe_json, FfprobeProber};
pub use still::{format_tag, has_jfif_marker, pixel_mode_name, probe_image};
pub use types::*;

use crate::Result;
use std::path::Path;

/// Access to the external probe tools.
///
/// Implementations must be safe to share across worker threads. Each call
/// owns whatever subprocess or decoder state it creates.
pub trait ProbeGateway: Send + Sync {
    /// Human-readable name identifying this gateway.
    fn name(&self) -> &'static str;

    /// Inspect an audio/video container.
    fn probe_container(&self, path: &Path) -> Result<ProbeResult>;

    /// Decode the header of a still image.
    fn probe_image(&self, path: &Path) -> Result<ImageAttributes>;
}

/// The production gateway: ffprobe for containers, `image` for stills.
#[derive(Debug, Clone)]
pub struct MediaProber {
    ffprobe: FfprobeProber,
}

impl MediaProber {
    pub fn new(ffprobe: FfprobeProber) -> Self {
        Self { ffprobe }
    }

    pub fn ffprobe(&self) -> &FfprobeProber {
        &self.ffprobe
    }
}

impl ProbeGateway for MediaProber {
    fn name(&self) -> &'static str {
        "ffprobe+image"
    }

    fn probe_container(&self, path: &Path) -> Result<ProbeResult> {
        self.ffprobe.probe(path)
    }

    fn probe_image(&self, path: &Path) -> Result<ImageAttributes> {
        probe_image(path)
    }
}
