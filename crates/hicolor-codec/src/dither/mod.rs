//! Dithering policies applied before quantization.
//!
//! # Policies
//!
//! | Policy | Kind | Parallelizable |
//! |--------|------|----------------|
//! | [`DitherPolicy::None`] | identity | yes |
//! | [`DitherPolicy::Bayer`] | ordered, 8×8 threshold matrix | yes |
//! | [`DitherPolicy::Pattern`] | stochastic threshold from pixel coordinates | yes |
//! | [`DitherPolicy::FloydSteinberg`] | error diffusion | no |
//!
//! The first three are pure functions of `(variant, x, y, color)` and are
//! applied through [`dither_pixel`], in any order. Floyd-Steinberg carries
//! quantization error from each pixel to its right and lower neighbors, so
//! it only exists at image level ([`diffuse`]) and must run left-to-right,
//! top-to-bottom.
//!
//! # Channel depth
//!
//! Red and blue are always dithered against 32 levels. Green uses 64 levels
//! for [`FormatVariant::Variant16`] and 32 for [`FormatVariant::Variant15`],
//! matching the bit layout of the target format.

mod bayer;
mod floyd_steinberg;
mod pattern;

pub use floyd_steinberg::diffuse;

use std::fmt;
use std::str::FromStr;

use crate::color::Rgb;
use crate::error::CodecError;
use crate::format::FormatVariant;

/// Dither policy selection.
///
/// # Example
///
/// ```
/// use hicolor_codec::DitherPolicy;
///
/// let policy: DitherPolicy = "bayer".parse().unwrap();
/// assert_eq!(policy, DitherPolicy::Bayer);
/// assert!(policy.is_position_pure());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DitherPolicy {
    /// Quantize each pixel to the nearest representable color.
    #[default]
    None,

    /// Ordered dithering against an 8×8 Bayer matrix.
    Bayer,

    /// Stochastic threshold derived from the pixel coordinates
    /// (arithmetic dither, pattern 3).
    Pattern,

    /// Floyd-Steinberg error diffusion.
    ///
    /// Sequential only: each pixel depends on every pixel before it in
    /// row-major order.
    FloydSteinberg,
}

impl DitherPolicy {
    /// Every policy, in the order they are listed in help text.
    pub const ALL: [DitherPolicy; 4] = [
        DitherPolicy::None,
        DitherPolicy::Bayer,
        DitherPolicy::Pattern,
        DitherPolicy::FloydSteinberg,
    ];

    /// Whether the policy depends only on the position and color of the
    /// pixel being quantized.
    #[inline]
    pub fn is_position_pure(self) -> bool {
        !matches!(self, DitherPolicy::FloydSteinberg)
    }

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            DitherPolicy::None => "none",
            DitherPolicy::Bayer => "bayer",
            DitherPolicy::Pattern => "pattern",
            DitherPolicy::FloydSteinberg => "floyd-steinberg",
        }
    }
}

impl fmt::Display for DitherPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DitherPolicy {
    type Err = CodecError;

    /// Parse a policy name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(DitherPolicy::None),
            "bayer" | "ordered" => Ok(DitherPolicy::Bayer),
            "pattern" | "pattern3" | "stochastic" => Ok(DitherPolicy::Pattern),
            "floyd-steinberg" | "floyd_steinberg" | "fs" => Ok(DitherPolicy::FloydSteinberg),
            _ => Err(CodecError::UnknownDither(s.to_string())),
        }
    }
}

/// Perturb one pixel according to a position-pure policy.
///
/// The result is what gets packed in place of `rgb`. For
/// [`DitherPolicy::FloydSteinberg`] the color is returned unchanged; error
/// diffusion is applied to whole images by [`diffuse`].
#[inline]
pub fn dither_pixel(policy: DitherPolicy, variant: FormatVariant, x: u16, y: u16, rgb: Rgb) -> Rgb {
    match policy {
        DitherPolicy::None | DitherPolicy::FloydSteinberg => rgb,
        DitherPolicy::Bayer => bayer::dither(variant, x, y, rgb),
        DitherPolicy::Pattern => pattern::dither(variant, x, y, rgb),
    }
}
