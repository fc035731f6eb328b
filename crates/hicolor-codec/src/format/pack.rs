//! Packing colors into 16-bit values and back.
//!
//! Bit layouts, least significant bit first:
//!
//! ```text
//! Variant15:  rrrrr ggggg bbbbb 0
//! Variant16:  rrrrr gggggg bbbbb
//! ```
//!
//! Channels are scaled through the lookup tables in both directions, so
//! `unpack(pack(c))` is always a fixed point of `pack`/`unpack`.

use super::FormatVariant;
use crate::color::lut::{from_bucket, to_bucket, LEVELS_5, LEVELS_6};
use crate::color::Rgb;
use crate::error::{CodecError, Result};

const RESERVED_BIT_15: u16 = 0x8000;

/// Pack a color into the variant's 16-bit layout.
///
/// Never sets the reserved bit of [`FormatVariant::Variant15`].
#[inline]
pub fn pack(variant: FormatVariant, rgb: Rgb) -> u16 {
    let r = to_bucket(rgb.r, LEVELS_5) as u16;
    let b = to_bucket(rgb.b, LEVELS_5) as u16;
    match variant {
        FormatVariant::Variant15 => {
            let g = to_bucket(rgb.g, LEVELS_5) as u16;
            r | (g << 5) | (b << 10)
        }
        FormatVariant::Variant16 => {
            let g = to_bucket(rgb.g, LEVELS_6) as u16;
            r | (g << 5) | (b << 11)
        }
    }
}

/// Expand a packed value back to an 8-bit color.
///
/// Fails with [`CodecError::InvalidValue`] for a [`FormatVariant::Variant15`]
/// value with bit 15 set. [`FormatVariant::Variant16`] values always decode.
#[inline]
pub fn unpack(variant: FormatVariant, value: u16) -> Result<Rgb> {
    match variant {
        FormatVariant::Variant15 => {
            if value & RESERVED_BIT_15 != 0 {
                return Err(CodecError::InvalidValue { value });
            }
            Ok(Rgb::new(
                from_bucket((value & 0x1f) as u8, LEVELS_5),
                from_bucket(((value >> 5) & 0x1f) as u8, LEVELS_5),
                from_bucket(((value >> 10) & 0x1f) as u8, LEVELS_5),
            ))
        }
        FormatVariant::Variant16 => Ok(Rgb::new(
            from_bucket((value & 0x1f) as u8, LEVELS_5),
            from_bucket(((value >> 5) & 0x3f) as u8, LEVELS_6),
            from_bucket(((value >> 11) & 0x1f) as u8, LEVELS_5),
        )),
    }
}
