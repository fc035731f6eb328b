//! The HiColor file format
//!
//! A file is a fixed 12-byte header followed by one little-endian `u16` per
//! pixel in row-major order:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 7 | magic `HiColor` |
//! | 7 | 1 | variant character `'5'` or `'6'` |
//! | 8 | 2 | width |
//! | 10 | 2 | height |
//! | 12 | 2·w·h | packed pixels |
//!
//! There is no padding and no compression.

mod header;
mod pack;
mod pixels;

pub use header::{read_header, write_header, HEADER_LEN, MAGIC};
pub use pack::{pack, unpack};
pub use pixels::{read_pixels, write_pixels};

use std::fmt;
use std::str::FromStr;

use crate::color::lut::{LEVELS_5, LEVELS_6};
use crate::error::{CodecError, Result};

/// Bit layout of a packed pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatVariant {
    /// 5-5-5 bits for R-G-B; bit 15 is reserved and always zero.
    Variant15,
    /// 5-6-5 bits for R-G-B.
    #[default]
    Variant16,
}

impl FormatVariant {
    /// Parse the marker byte stored at offset 7 of the header.
    pub fn from_marker(marker: u8) -> Result<Self> {
        match marker {
            b'5' => Ok(Self::Variant15),
            b'6' => Ok(Self::Variant16),
            _ => Err(CodecError::UnknownVersion),
        }
    }

    /// The marker byte written to the header.
    #[inline]
    pub fn marker(self) -> u8 {
        match self {
            Self::Variant15 => b'5',
            Self::Variant16 => b'6',
        }
    }

    /// Number of levels in the green channel.
    ///
    /// Red and blue always have 32 levels.
    #[inline]
    pub fn green_levels(self) -> u8 {
        match self {
            Self::Variant15 => LEVELS_5,
            Self::Variant16 => LEVELS_6,
        }
    }

    /// Total bits of color information per pixel.
    #[inline]
    pub fn bits_per_pixel(self) -> u8 {
        match self {
            Self::Variant15 => 15,
            Self::Variant16 => 16,
        }
    }
}

impl fmt::Display for FormatVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits_per_pixel())
    }
}

impl FromStr for FormatVariant {
    type Err = CodecError;

    /// Accepts the marker (`5`, `6`), the bit count (`15`, `16`) or the
    /// bit count with a `-bit` suffix.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let s = s.strip_suffix("-bit").unwrap_or(s);
        match s {
            "5" | "15" => Ok(Self::Variant15),
            "6" | "16" => Ok(Self::Variant16),
            _ => Err(CodecError::UnknownVersion),
        }
    }
}

/// Variant and dimensions of one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageMetadata {
    pub variant: FormatVariant,
    pub width: u16,
    pub height: u16,
}

impl ImageMetadata {
    pub fn new(variant: FormatVariant, width: u16, height: u16) -> Self {
        Self {
            variant,
            width,
            height,
        }
    }

    /// Number of pixels, `width * height`.
    ///
    /// At most 65535², which fits `usize` on every 32- and 64-bit target.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check that a pixel buffer matches these dimensions.
    pub fn check_len(&self, len: usize) -> Result<()> {
        let expected = self.pixel_count();
        if len == expected {
            Ok(())
        } else {
            Err(CodecError::DimensionMismatch {
                expected,
                actual: len,
            })
        }
    }
}
