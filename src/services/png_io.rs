//! PNG loading and saving for [`RasterImage`].
//!
//! Any PNG color type and bit depth is accepted on load; the decoder
//! normalizes to 8 bits per channel and grayscale is widened to RGB.
//! Images are saved as 8-bit RGB, or RGBA when alpha is present.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use hicolor_codec::Rgb;

use crate::error::AppError;
use crate::models::RasterImage;

/// Load a PNG file.
pub fn load_png(path: &Path) -> Result<RasterImage, AppError> {
    let file = File::open(path).map_err(|source| AppError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let image = decode_png(BufReader::new(file))?;

    tracing::debug!(
        path = %path.display(),
        width = image.width,
        height = image.height,
        alpha = image.has_alpha(),
        "Loaded PNG image"
    );
    Ok(image)
}

/// Save an image as PNG, creating or truncating `path`.
///
/// The image is encoded in memory first, so an encoding failure leaves
/// `path` untouched.
pub fn save_png(path: &Path, image: &RasterImage) -> Result<(), AppError> {
    let mut bytes = Vec::new();
    encode_png(&mut bytes, image)?;
    std::fs::write(path, &bytes).map_err(|source| AppError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        width = image.width,
        height = image.height,
        bytes = bytes.len(),
        "Saved PNG image"
    );
    Ok(())
}

/// Decode a PNG stream into 8-bit RGB plus optional alpha.
pub fn decode_png(reader: impl Read) -> Result<RasterImage, AppError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| AppError::PngDecode(e.to_string()))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| AppError::PngDecode(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    let pixel_count = info.width as usize * info.height as usize;
    let mut pixels = Vec::with_capacity(pixel_count);
    let mut alpha = None;

    match info.color_type {
        png::ColorType::Rgb => {
            pixels.extend(data.chunks_exact(3).map(|c| Rgb::new(c[0], c[1], c[2])));
        }
        png::ColorType::Rgba => {
            let mut a = Vec::with_capacity(pixel_count);
            for c in data.chunks_exact(4) {
                pixels.push(Rgb::new(c[0], c[1], c[2]));
                a.push(c[3]);
            }
            alpha = Some(a);
        }
        png::ColorType::Grayscale => {
            pixels.extend(data.iter().map(|&v| Rgb::new(v, v, v)));
        }
        png::ColorType::GrayscaleAlpha => {
            let mut a = Vec::with_capacity(pixel_count);
            for c in data.chunks_exact(2) {
                pixels.push(Rgb::new(c[0], c[0], c[0]));
                a.push(c[1]);
            }
            alpha = Some(a);
        }
        other => {
            return Err(AppError::PngDecode(format!(
                "unsupported color type {other:?} after expansion"
            )))
        }
    }

    if pixels.len() != pixel_count {
        return Err(AppError::PngDecode(format!(
            "decoded {} pixels, expected {pixel_count}",
            pixels.len()
        )));
    }

    Ok(RasterImage {
        width: info.width,
        height: info.height,
        pixels,
        alpha,
    })
}

/// Encode an image as an 8-bit RGB or RGBA PNG.
pub fn encode_png(writer: impl Write, image: &RasterImage) -> Result<(), AppError> {
    let pixel_count = image.width as usize * image.height as usize;
    if image.pixels.len() != pixel_count {
        return Err(AppError::PngEncode(format!(
            "image has {} pixels, expected {pixel_count}",
            image.pixels.len()
        )));
    }

    let (color_type, data) = match &image.alpha {
        Some(alpha) if alpha.len() == pixel_count => {
            let mut data = Vec::with_capacity(pixel_count * 4);
            for (p, &a) in image.pixels.iter().zip(alpha) {
                data.extend_from_slice(&[p.r, p.g, p.b, a]);
            }
            (png::ColorType::Rgba, data)
        }
        Some(alpha) => {
            return Err(AppError::PngEncode(format!(
                "alpha has {} values, expected {pixel_count}",
                alpha.len()
            )))
        }
        None => {
            let mut data = Vec::with_capacity(pixel_count * 3);
            for p in &image.pixels {
                data.extend_from_slice(&p.to_bytes());
            }
            (png::ColorType::Rgb, data)
        }
    };

    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(color_type);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);
    let mut writer = encoder
        .write_header()
        .map_err(|e| AppError::PngEncode(e.to_string()))?;
    writer
        .write_image_data(&data)
        .map_err(|e| AppError::PngEncode(e.to_string()))?;
    writer
        .finish()
        .map_err(|e| AppError::PngEncode(e.to_string()))
}
