//! Stochastic threshold dithering ("pattern 3" arithmetic dither).
//!
//! The threshold comes from a hash of the pixel coordinates:
//!
//! ```text
//! mask = ((x + y·237)·119 mod 256) / 255
//! out  = min(floor(L·c/255 + mask), L) / L
//! ```
//!
//! scaled back to 8 bits. Since `mask` is a multiple of `1/255`, both steps
//! are exact in integer arithmetic.

use crate::color::lut::LEVELS_5;
use crate::color::Rgb;
use crate::format::FormatVariant;

/// Threshold numerator in `0..=255` for a pixel position.
#[inline]
pub(crate) fn mask(x: u16, y: u16) -> u32 {
    // Fits u32: (65535 + 65535·237)·119 < 2^31.
    ((x as u32 + y as u32 * 237) * 119) & 0xff
}

/// Dither one pixel.
pub(super) fn dither(variant: FormatVariant, x: u16, y: u16, rgb: Rgb) -> Rgb {
    let m = mask(x, y);
    Rgb::new(
        channel(rgb.r, m, LEVELS_5),
        channel(rgb.g, m, variant.green_levels()),
        channel(rgb.b, m, LEVELS_5),
    )
}

#[inline]
fn channel(value: u8, mask: u32, levels: u8) -> u8 {
    let levels = levels as u32;
    let q = ((levels * value as u32 + mask) / 255).min(levels);
    // round(255·q / L)
    ((510 * q + levels) / (2 * levels)) as u8
}
