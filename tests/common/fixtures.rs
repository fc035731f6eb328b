//! Test fixtures and constants.

use hicolor::models::RasterImage;
use hicolor_codec::Rgb;

/// Colors every variant stores exactly.
pub mod colors {
    use hicolor_codec::Rgb;

    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const BLACK: Rgb = Rgb::BLACK;
    pub const WHITE: Rgb = Rgb::WHITE;
}

/// The 2×1 red/green image used in the round-trip scenario.
pub fn red_green() -> RasterImage {
    RasterImage::new(2, 1, vec![colors::RED, colors::GREEN])
}

/// A smooth gradient with every channel varying.
pub fn gradient(width: u32, height: u32) -> RasterImage {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push(Rgb::new(
                (x * 255 / width.max(2).saturating_sub(1)).min(255) as u8,
                (y * 255 / height.max(2).saturating_sub(1)).min(255) as u8,
                ((x + y) * 7 % 256) as u8,
            ));
        }
    }
    RasterImage::new(width, height, pixels)
}

/// A gradient with a horizontal alpha ramp.
pub fn gradient_with_alpha(width: u32, height: u32) -> RasterImage {
    let mut image = gradient(width, height);
    let alpha = (0..height)
        .flat_map(|_| (0..width).map(move |x| (x * 255 / width.max(1)) as u8))
        .collect();
    image.alpha = Some(alpha);
    image
}

/// A complete 16-bit HiColor file: 2×2, one pixel per primary plus white.
pub fn hicolor_16_bytes() -> Vec<u8> {
    let mut bytes = b"HiColor6\x02\x00\x02\x00".to_vec();
    bytes.extend_from_slice(&[0x1f, 0x00, 0xe0, 0x07, 0x00, 0xf8, 0xff, 0xff]);
    bytes
}
