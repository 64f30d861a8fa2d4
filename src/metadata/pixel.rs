//! Pixel mode to bit depth lookup.

use avls_av::Error;

/// Bits per pixel for every pixel mode the image decoder can report.
///
/// `I;16*` and `I;32*` variants (byte order suffixes) are matched by prefix.
pub const PIXEL_MODE_BITS: &[(&str, u8)] = &[
    ("1", 1),
    ("L", 8),
    ("P", 8),
    ("LA", 16),
    ("PA", 16),
    ("RGB", 24),
    ("BGR;24", 24),
    ("YCbCr", 24),
    ("LAB", 24),
    ("HSV", 24),
    ("RGBA", 32),
    ("RGBX", 32),
    ("BGRA", 32),
    ("CMYK", 32),
    ("I", 32),
    ("F", 32),
    ("LA;16", 32),
    ("RGB;16", 48),
    ("RGBA;16", 64),
    ("RGB;32F", 96),
    ("RGBA;32F", 128),
];

/// Look up the bit depth of a pixel mode.
///
/// # Errors
///
/// Returns [`Error::UnsupportedPixelMode`] for modes outside the table.
pub fn bit_depth(mode: &str) -> avls_av::Result<u8> {
    if let Some(&(_, bits)) = PIXEL_MODE_BITS.iter().find(|(name, _)| *name == mode) {
        return Ok(bits);
    }
    if mode.starts_with("I;16") {
        return Ok(16);
    }
    if mode.starts_with("I;32") {
        return Ok(32);
    }
    Err(Error::UnsupportedPixelMode(mode.to_string()))
}
