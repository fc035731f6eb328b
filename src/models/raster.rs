use hicolor_codec::{FormatVariant, ImageMetadata, Rgb};

use crate::error::AppError;

/// A decoded truecolor image.
///
/// Alpha is carried next to the color data, never inside it; the HiColor
/// format has no alpha channel, so only PNG-to-PNG paths keep it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    /// Row-major, `width * height` entries
    pub pixels: Vec<Rgb>,
    /// One alpha value per pixel, if the source had any
    pub alpha: Option<Vec<u8>>,
}

impl RasterImage {
    /// An opaque image.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Self {
        Self {
            width,
            height,
            pixels,
            alpha: None,
        }
    }

    /// Build an opaque image from codec output.
    pub fn from_codec(meta: &ImageMetadata, pixels: Vec<Rgb>) -> Self {
        Self::new(meta.width as u32, meta.height as u32, pixels)
    }

    /// Metadata for storing this image as `variant`.
    ///
    /// Fails if either dimension exceeds what the header can hold.
    pub fn metadata(&self, variant: FormatVariant) -> Result<ImageMetadata, AppError> {
        let unsupported = || AppError::UnsupportedDimensions {
            width: self.width,
            height: self.height,
        };
        let width = u16::try_from(self.width).map_err(|_| unsupported())?;
        let height = u16::try_from(self.height).map_err(|_| unsupported())?;
        Ok(ImageMetadata::new(variant, width, height))
    }

    pub fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }
}
