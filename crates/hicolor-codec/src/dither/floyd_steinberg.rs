//! Floyd-Steinberg error diffusion.
//!
//! Pixels are visited left-to-right, top-to-bottom. Each one is clamped,
//! quantized through the packer, and its error is pushed to unvisited
//! neighbors:
//!
//! ```text
//!        X   7
//!    3   5   1      (/16)
//! ```
//!
//! Unlike the ordered policies, the result at any pixel depends on every
//! pixel before it, so this pass cannot be split across threads.

use crate::color::Rgb;
use crate::error::Result;
use crate::format::{pack, unpack, ImageMetadata};

/// Quantize a whole image in place with Floyd-Steinberg error diffusion.
///
/// On return every pixel holds the exact color that packing will store.
pub fn diffuse(meta: &ImageMetadata, pixels: &mut [Rgb]) -> Result<()> {
    meta.check_len(pixels.len())?;

    let w = meta.width as usize;
    let h = meta.height as usize;

    // Working buffer with i32 to hold negative and overflowing error
    let mut buffer: Vec<[i32; 3]> = pixels
        .iter()
        .map(|p| [p.r as i32, p.g as i32, p.b as i32])
        .collect();

    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            let old = buffer[idx];

            let clamped = Rgb::new(clamp_u8(old[0]), clamp_u8(old[1]), clamp_u8(old[2]));
            let quantized = unpack(meta.variant, pack(meta.variant, clamped))?;
            pixels[idx] = quantized;

            let error = [
                old[0] - quantized.r as i32,
                old[1] - quantized.g as i32,
                old[2] - quantized.b as i32,
            ];

            if x + 1 < w {
                spread(&mut buffer[idx + 1], error, 7);
            }
            if y + 1 < h {
                if x > 0 {
                    spread(&mut buffer[idx + w - 1], error, 3);
                }
                spread(&mut buffer[idx + w], error, 5);
                if x + 1 < w {
                    spread(&mut buffer[idx + w + 1], error, 1);
                }
            }
        }
    }

    Ok(())
}

#[inline]
fn spread(target: &mut [i32; 3], error: [i32; 3], weight: i32) {
    for (channel, err) in target.iter_mut().zip(error) {
        *channel += err * weight / 16;
    }
}

#[inline]
fn clamp_u8(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
