//! Still-image probing via the `image` crate.
//!
//! Only the header is decoded: format, dimensions and colour type are all
//! available before any pixel data is read.

use super::types::ImageAttributes;
use crate::{Error, Result};
use image::{ExtendedColorType, ImageDecoder, ImageFormat, ImageReader};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

// JPEG marker codes
const APP0: u8 = 0xE0;
const SOS: u8 = 0xDA;
const EOI: u8 = 0xD9;

/// APP0 identifier for JFIF, the first bytes of the segment payload.
const JFIF_IDENT: &[u8; 5] = b"JFIF\0";

/// Read format, dimensions, pixel mode and container hint of an image.
///
/// # Errors
///
/// - [`Error::FileNotFound`] if the path does not exist.
/// - [`Error::Decode`] if the format is unknown or the header is invalid.
pub fn probe_image(path: &Path) -> Result<ImageAttributes> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let reader = ImageReader::open(path)?
        .with_guessed_format()
        .map_err(|e| Error::decode(path, e.to_string()))?;

    let format = reader
        .format()
        .ok_or_else(|| Error::decode(path, "unrecognised image format"))?;

    let decoder = reader
        .into_decoder()
        .map_err(|e| Error::decode(path, e.to_string()))?;

    let (width, height) = decoder.dimensions();
    let pixel_mode = pixel_mode_name(decoder.original_color_type());

    let container_hint = if format == ImageFormat::Jpeg && has_jfif_marker(path)? {
        Some("jfif".to_string())
    } else {
        None
    };

    Ok(ImageAttributes {
        format: format_tag(format).to_string(),
        width,
        height,
        pixel_mode,
        container_hint,
    })
}

/// Lower-cased name of a decoder format.
pub fn format_tag(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Jpeg => "jpeg",
        ImageFormat::Png => "png",
        ImageFormat::Gif => "gif",
        ImageFormat::WebP => "webp",
        ImageFormat::Tiff => "tiff",
        ImageFormat::Bmp => "bmp",
        ImageFormat::Ico => "ico",
        ImageFormat::Tga => "tga",
        ImageFormat::Pnm => "pnm",
        ImageFormat::Hdr => "hdr",
        ImageFormat::OpenExr => "openexr",
        ImageFormat::Farbfeld => "farbfeld",
        ImageFormat::Avif => "avif",
        ImageFormat::Qoi => "qoi",
        other => other.extensions_str().first().copied().unwrap_or("unknown"),
    }
}

/// Map a decoder colour type to a pixel mode name.
///
/// Names follow the conventional single-letter scheme (`1`, `L`, `LA`, `RGB`,
/// `RGBA`, `CMYK`, `I;16`), with `;16` and `;32F` suffixes for wide samples.
/// Colour types without a conventional name fall back to their debug name,
/// which the bit-depth table will reject.
pub fn pixel_mode_name(color: ExtendedColorType) -> String {
    let name = match color {
        ExtendedColorType::L1 => "1",
        ExtendedColorType::L2 | ExtendedColorType::L4 | ExtendedColorType::L8 => "L",
        ExtendedColorType::La8 => "LA",
        ExtendedColorType::Rgb8 => "RGB",
        ExtendedColorType::Rgba8 => "RGBA",
        ExtendedColorType::Cmyk8 => "CMYK",
        ExtendedColorType::Bgr8 => "BGR;24",
        ExtendedColorType::Bgra8 => "BGRA",
        ExtendedColorType::L16 => "I;16",
        ExtendedColorType::La16 => "LA;16",
        ExtendedColorType::Rgb16 => "RGB;16",
        ExtendedColorType::Rgba16 => "RGBA;16",
        ExtendedColorType::Rgb32F => "RGB;32F",
        ExtendedColorType::Rgba32F => "RGBA;32F",
        // decoders report palette-indexed images as unknown with the index width
        ExtendedColorType::Unknown(bits) if bits <= 8 => "P",
        other => return format!("{other:?}"),
    };
    name.to_string()
}

/// Whether a JPEG file carries a JFIF APP0 segment before its scan data.
///
/// Every marker segment up to start-of-scan is inspected, so an APP0 that
/// follows an EXIF APP1 segment is still found. Truncated files report
/// `false`.
pub fn has_jfif_marker(path: &Path) -> Result<bool> {
    let reader = BufReader::new(File::open(path)?);
    match find_jfif_segment(reader) {
        Ok(found) => Ok(found),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e.into()),
    }
}

fn find_jfif_segment<R: Read>(mut reader: R) -> io::Result<bool> {
    let mut soi = [0u8; 2];
    reader.read_exact(&mut soi)?;
    if soi != JPEG_SOI {
        return Ok(false);
    }

    let mut byte = [0u8; 1];
    loop {
        reader.read_exact(&mut byte)?;
        if byte[0] != 0xFF {
            return Ok(false);
        }
        // skip fill bytes
        let marker = loop {
            reader.read_exact(&mut byte)?;
            if byte[0] != 0xFF {
                break byte[0];
            }
        };

        match marker {
            SOS | EOI => return Ok(false),
            // standalone markers have no length field
            0x01 | 0xD0..=0xD7 => continue,
            _ => {}
        }

        let mut len = [0u8; 2];
        reader.read_exact(&mut len)?;
        let mut remaining = u64::from(u16::from_be_bytes(len).saturating_sub(2));

        if marker == APP0 && remaining >= JFIF_IDENT.len() as u64 {
            let mut ident = [0u8; 5];
            reader.read_exact(&mut ident)?;
            if &ident == JFIF_IDENT {
                return Ok(true);
            }
            remaining -= ident.len() as u64;
        }
        io::copy(&mut (&mut reader).take(remaining), &mut io::sink())?;
    }
}
