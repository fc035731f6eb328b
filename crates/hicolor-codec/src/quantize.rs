//! Whole-image quantization.
//!
//! After [`quantize`] returns, every pixel in the buffer holds the exact
//! color the packer will store for it, so a preview saved from the buffer
//! shows the real quantized result rather than the dithered input.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::color::Rgb;
use crate::dither::{diffuse, dither_pixel, DitherPolicy};
use crate::error::Result;
use crate::format::{pack, unpack, FormatVariant, ImageMetadata};

/// Quantize a pixel buffer in place.
///
/// The buffer must hold exactly `width * height` pixels in row-major order.
/// Position-pure policies are applied row by row (in parallel with the
/// `rayon` feature); [`DitherPolicy::FloydSteinberg`] always runs
/// sequentially. The result does not depend on how rows were scheduled.
///
/// # Example
///
/// ```
/// use hicolor_codec::{quantize, DitherPolicy, FormatVariant, ImageMetadata, Rgb};
///
/// let meta = ImageMetadata::new(FormatVariant::Variant16, 2, 1);
/// let mut pixels = vec![Rgb::new(255, 0, 0), Rgb::new(1, 2, 3)];
/// quantize(&meta, DitherPolicy::None, &mut pixels).unwrap();
/// assert_eq!(pixels, [Rgb::new(255, 0, 0), Rgb::BLACK]);
/// ```
pub fn quantize(meta: &ImageMetadata, policy: DitherPolicy, pixels: &mut [Rgb]) -> Result<()> {
    meta.check_len(pixels.len())?;
    if pixels.is_empty() {
        return Ok(());
    }

    if !policy.is_position_pure() {
        return diffuse(meta, pixels);
    }

    let width = meta.width as usize;
    let variant = meta.variant;

    #[cfg(feature = "rayon")]
    {
        pixels
            .par_chunks_mut(width)
            .enumerate()
            .try_for_each(|(y, row)| quantize_row(policy, variant, y as u16, row))
    }

    #[cfg(not(feature = "rayon"))]
    {
        pixels
            .chunks_mut(width)
            .enumerate()
            .try_for_each(|(y, row)| quantize_row(policy, variant, y as u16, row))
    }
}

/// Quantize one row with a position-pure policy.
///
/// `y` is the row index within the image; pixel `x` coordinates start at
/// zero. Rows are independent, so callers may process them in any order.
pub fn quantize_row(
    policy: DitherPolicy,
    variant: FormatVariant,
    y: u16,
    row: &mut [Rgb],
) -> Result<()> {
    for (x, pixel) in row.iter_mut().enumerate() {
        let dithered = dither_pixel(policy, variant, x as u16, y, *pixel);
        *pixel = unpack(variant, pack(variant, dithered))?;
    }
    Ok(())
}
