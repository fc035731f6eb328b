//! The fixed 12-byte file header.

use std::io::{ErrorKind, Read, Write};

use super::{FormatVariant, ImageMetadata};
use crate::error::{CodecError, Result};

/// Signature at the start of every HiColor file.
pub const MAGIC: [u8; 7] = *b"HiColor";

/// Size of the header in bytes.
pub const HEADER_LEN: usize = 12;

/// Read and validate a header.
///
/// Checks are applied in file order: the magic bytes, then the variant
/// marker, then the presence of all 12 bytes. A stream that ends inside a
/// still-matching magic prefix is [`CodecError::InsufficientData`]; one that
/// diverges from the signature is [`CodecError::BadMagic`] regardless of
/// length.
pub fn read_header(reader: &mut impl Read) -> Result<ImageMetadata> {
    let mut bytes = [0u8; HEADER_LEN];
    let available = read_up_to(reader, &mut bytes)?;

    let magic_len = available.min(MAGIC.len());
    if bytes[..magic_len] != MAGIC[..magic_len] {
        return Err(CodecError::BadMagic);
    }
    if available <= MAGIC.len() {
        return Err(CodecError::InsufficientData);
    }

    let variant = FormatVariant::from_marker(bytes[7])?;

    if available < HEADER_LEN {
        return Err(CodecError::InsufficientData);
    }

    Ok(ImageMetadata {
        variant,
        width: u16::from_le_bytes([bytes[8], bytes[9]]),
        height: u16::from_le_bytes([bytes[10], bytes[11]]),
    })
}

/// Write a header.
///
/// A stream that accepts fewer than 12 bytes fails with [`CodecError::Io`].
pub fn write_header(writer: &mut impl Write, meta: &ImageMetadata) -> Result<()> {
    writer.write_all(&encode_header(meta))?;
    Ok(())
}

fn encode_header(meta: &ImageMetadata) -> [u8; HEADER_LEN] {
    let mut bytes = [0u8; HEADER_LEN];
    bytes[..7].copy_from_slice(&MAGIC);
    bytes[7] = meta.variant.marker();
    bytes[8..10].copy_from_slice(&meta.width.to_le_bytes());
    bytes[10..12].copy_from_slice(&meta.height.to_le_bytes());
    bytes
}

/// Fill `buf` until it is full or the stream ends, returning the byte count.
fn read_up_to(reader: &mut impl Read, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}
