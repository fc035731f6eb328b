//! hicolor-codec: the HiColor 15/16-bit image format
//!
//! HiColor stores one 16-bit word per pixel, packing reduced-precision red,
//! green and blue channels behind a fixed 12-byte header. This crate holds
//! the whole codec: header and pixel stream I/O, value packing for both
//! variants, and the quantization stage with its dithering policies. It
//! never touches file paths or image libraries; callers hand it `Read` and
//! `Write` streams and 8-bit RGB buffers.
//!
//! # Quick Start
//!
//! ```
//! use hicolor_codec::{quantize, read_image, write_image};
//! use hicolor_codec::{DitherPolicy, FormatVariant, ImageMetadata, Rgb};
//!
//! let meta = ImageMetadata::new(FormatVariant::Variant16, 2, 1);
//! let mut pixels = vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)];
//! quantize(&meta, DitherPolicy::Bayer, &mut pixels).unwrap();
//!
//! let mut file = Vec::new();
//! write_image(&mut file, &meta, &pixels).unwrap();
//! assert_eq!(file.len(), 12 + 2 * 2);
//!
//! let (decoded_meta, decoded) = read_image(&mut file.as_slice()).unwrap();
//! assert_eq!(decoded_meta, meta);
//! assert_eq!(decoded, pixels);
//! ```
//!
//! # Variants
//!
//! | Variant | Marker | Layout (LSB first) |
//! |---------|--------|--------------------|
//! | [`FormatVariant::Variant15`] | `'5'` | 5 red, 5 green, 5 blue, 1 reserved |
//! | [`FormatVariant::Variant16`] | `'6'` | 5 red, 6 green, 5 blue |
//!
//! Channel scaling goes through lookup tables generated by the build
//! script, so once a color has been packed and unpacked it survives every
//! later round trip unchanged.
//!
//! # Features
//!
//! - `rayon` (default): quantize rows in parallel for position-pure dither
//!   policies. Output is identical with and without it.

pub mod color;
pub mod dither;
pub mod error;
pub mod format;
pub mod quantize;


use std::io::{Read, Write};

pub use color::Rgb;
pub use dither::{diffuse, dither_pixel, DitherPolicy};
pub use error::{CodecError, Result};
pub use format::{
    pack, read_header, read_pixels, unpack, write_header, write_pixels, FormatVariant,
    ImageMetadata, HEADER_LEN, MAGIC,
};
pub use quantize::{quantize, quantize_row};

/// Version of the codec crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Read a complete image: header, then pixel data.
pub fn read_image(reader: &mut impl Read) -> Result<(ImageMetadata, Vec<Rgb>)> {
    let meta = read_header(reader)?;
    let pixels = read_pixels(reader, &meta)?;
    Ok((meta, pixels))
}

/// Write a complete image: header, then pixel data.
///
/// The pixels are packed as given; run [`quantize`] first to apply a
/// dither policy.
pub fn write_image(writer: &mut impl Write, meta: &ImageMetadata, pixels: &[Rgb]) -> Result<()> {
    meta.check_len(pixels.len())?;
    write_header(writer, meta)?;
    write_pixels(writer, meta, pixels)
}
