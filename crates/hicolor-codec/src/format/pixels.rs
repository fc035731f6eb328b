//! The packed pixel stream that follows the header.

use std::io::{ErrorKind, Read, Write};

use super::{pack, unpack, ImageMetadata};
use crate::color::Rgb;
use crate::error::{CodecError, Result};

const BYTES_PER_PIXEL: usize = 2;

/// Upper bound on the up-front allocation; a forged header must not be
/// able to reserve gigabytes before any pixel data has been read.
const MAX_PREALLOC_PIXELS: usize = 1 << 20;

/// Read `width * height` packed values and expand them to 8-bit colors.
///
/// Data is read one row at a time. A stream that ends early fails with
/// [`CodecError::InsufficientData`]; a reserved-bit violation fails with
/// [`CodecError::InvalidValue`].
pub fn read_pixels(reader: &mut impl Read, meta: &ImageMetadata) -> Result<Vec<Rgb>> {
    let width = meta.width as usize;
    let mut pixels = Vec::with_capacity(meta.pixel_count().min(MAX_PREALLOC_PIXELS));
    let mut row = vec![0u8; width * BYTES_PER_PIXEL];

    for _ in 0..meta.height {
        reader.read_exact(&mut row).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => CodecError::InsufficientData,
            _ => CodecError::Io(e),
        })?;

        for bytes in row.chunks_exact(BYTES_PER_PIXEL) {
            let value = u16::from_le_bytes([bytes[0], bytes[1]]);
            pixels.push(unpack(meta.variant, value)?);
        }
    }

    Ok(pixels)
}

/// Pack every pixel and write it as a little-endian `u16`, row by row.
///
/// The buffer must hold exactly `width * height` pixels. A stream that
/// accepts fewer bytes than required fails with [`CodecError::Io`].
pub fn write_pixels(writer: &mut impl Write, meta: &ImageMetadata, pixels: &[Rgb]) -> Result<()> {
    meta.check_len(pixels.len())?;
    if pixels.is_empty() {
        return Ok(());
    }

    let width = meta.width as usize;
    let mut row = Vec::with_capacity(width * BYTES_PER_PIXEL);

    for line in pixels.chunks_exact(width) {
        row.clear();
        for &rgb in line {
            row.extend_from_slice(&pack(meta.variant, rgb).to_le_bytes());
        }
        writer.write_all(&row)?;
    }

    Ok(())
}
