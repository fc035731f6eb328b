//! Assertion helpers for tests.

use std::path::Path;

use hicolor::models::RasterImage;
use hicolor_codec::{pack, unpack, FormatVariant};
use pretty_assertions::assert_eq;

/// Assert a file starts with the HiColor signature and variant marker.
pub fn assert_hicolor(path: &Path, variant: FormatVariant) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected HiColor file at {}: {e}", path.display()));
    assert!(
        bytes.len() >= 12,
        "Expected at least 12 bytes, got {}",
        bytes.len()
    );
    assert_eq!(&bytes[..7], b"HiColor", "Bad signature");
    assert_eq!(bytes[7], variant.marker(), "Wrong variant marker");
}

/// Assert a file is a PNG image.
pub fn assert_png(path: &Path) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected PNG file at {}: {e}", path.display()));
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert `actual` holds exactly the colors `original` quantizes to
/// without dithering.
pub fn assert_quantized_from(original: &RasterImage, actual: &RasterImage, variant: FormatVariant) {
    assert_eq!(actual.width, original.width);
    assert_eq!(actual.height, original.height);
    let expected: Vec<_> = original
        .pixels
        .iter()
        .map(|&c| unpack(variant, pack(variant, c)).unwrap())
        .collect();
    assert_eq!(actual.pixels, expected);
}
