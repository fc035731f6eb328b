//! Ordered dithering against an 8×8 Bayer matrix.
//!
//! Each matrix entry `k` is a threshold of `k/64`. For a channel with `L`
//! levels the chosen bucket is
//!
//! ```text
//! bucket = min(floor(c·(L-1)/255 + k/64), L-1)
//! ```
//!
//! evaluated exactly in integers as `(c·(L-1)·64 + k·255) / (64·255)`.
//! A threshold of zero truncates; the average threshold of one half rounds
//! to nearest, so flat areas keep their mean intensity.

use crate::color::lut::{from_bucket, LEVELS_5};
use crate::color::Rgb;
use crate::format::FormatVariant;

/// Bayer threshold ranks, indexed `[y % 8][x % 8]`.
#[rustfmt::skip]
pub(crate) const BAYER_8X8: [[u8; 8]; 8] = [
    [ 0, 32,  8, 40,  2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44,  4, 36, 14, 46,  6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [ 3, 35, 11, 43,  1, 33,  9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47,  7, 39, 13, 45,  5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

const SCALE: u32 = 64 * 255;

/// Dither one pixel.
pub(super) fn dither(variant: FormatVariant, x: u16, y: u16, rgb: Rgb) -> Rgb {
    let rank = BAYER_8X8[(y % 8) as usize][(x % 8) as usize];
    Rgb::new(
        channel(rgb.r, rank, LEVELS_5),
        channel(rgb.g, rank, variant.green_levels()),
        channel(rgb.b, rank, LEVELS_5),
    )
}

#[inline]
fn channel(value: u8, rank: u8, levels: u8) -> u8 {
    let max = (levels - 1) as u32;
    let bucket = ((value as u32 * max * 64 + rank as u32 * 255) / SCALE).min(max);
    from_bucket(bucket as u8, levels)
}
