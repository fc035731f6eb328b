//! The four file operations behind the command line.
//!
//! Each operation checks that its source exists before a destination is
//! created, and does all decoding and quantization in memory before the
//! destination is opened. A write that fails partway removes the partial
//! file.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use hicolor_codec::{
    quantize as quantize_pixels, read_header, read_pixels, write_header, write_pixels,
    DitherPolicy, FormatVariant, ImageMetadata,
};

use crate::error::AppError;
use crate::models::RasterImage;
use crate::services::png_io::{load_png, save_png};

/// Extension appended to the source name when no destination is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Encode,
    Decode,
    Quantize,
}

impl Operation {
    fn suffix(self) -> &'static str {
        match self {
            Operation::Encode => ".hic",
            Operation::Decode => ".png",
            Operation::Quantize => ".quant.png",
        }
    }
}

/// Destination path for `src` when none was given: the full source name
/// with the operation's suffix appended (`photo.png` → `photo.png.hic`).
pub fn default_destination(op: Operation, src: &Path) -> PathBuf {
    let mut name = src.as_os_str().to_owned();
    name.push(op.suffix());
    PathBuf::from(name)
}

/// Convert a PNG file into a HiColor file.
pub fn encode(
    src: &Path,
    dest: &Path,
    variant: FormatVariant,
    dither: DitherPolicy,
) -> Result<ImageMetadata, AppError> {
    ensure_source(src)?;

    let mut image = load_png(src)?;
    let meta = image.metadata(variant)?;
    tracing::info!(
        width = meta.width,
        height = meta.height,
        %variant,
        %dither,
        "Encoding PNG image"
    );

    quantize_pixels(&meta, dither, &mut image.pixels)
        .map_err(AppError::codec("can't quantize image"))?;

    write_file(dest, |writer| {
        write_header(writer, &meta).map_err(AppError::codec("can't write header"))?;
        write_pixels(writer, &meta, &image.pixels)
            .map_err(AppError::codec("can't write image data"))
    })?;

    Ok(meta)
}

/// Convert a HiColor file into a PNG file.
pub fn decode(src: &Path, dest: &Path) -> Result<ImageMetadata, AppError> {
    ensure_source(src)?;

    let mut reader = open_source(src)?;
    let meta = read_header(&mut reader).map_err(AppError::codec("can't read header"))?;
    tracing::info!(
        width = meta.width,
        height = meta.height,
        variant = %meta.variant,
        "Decoding HiColor image"
    );

    let pixels =
        read_pixels(&mut reader, &meta).map_err(AppError::codec("can't read image data"))?;
    save_png(dest, &RasterImage::from_codec(&meta, pixels))?;

    Ok(meta)
}

/// Quantize a PNG file to a HiColor variant and save the result as PNG.
///
/// Alpha in the source is carried over unchanged.
pub fn quantize(
    src: &Path,
    dest: &Path,
    variant: FormatVariant,
    dither: DitherPolicy,
) -> Result<ImageMetadata, AppError> {
    ensure_source(src)?;

    let mut image = load_png(src)?;
    let meta = image.metadata(variant)?;
    tracing::info!(
        width = meta.width,
        height = meta.height,
        %variant,
        %dither,
        alpha = image.has_alpha(),
        "Quantizing PNG image"
    );

    quantize_pixels(&meta, dither, &mut image.pixels)
        .map_err(AppError::codec("can't quantize image"))?;
    save_png(dest, &image)?;

    Ok(meta)
}

/// Read the header of a HiColor file.
pub fn info(src: &Path) -> Result<ImageMetadata, AppError> {
    let mut reader = open_source(src)?;
    read_header(&mut reader).map_err(AppError::codec("can't read header"))
}

fn ensure_source(src: &Path) -> Result<(), AppError> {
    if src.exists() {
        Ok(())
    } else {
        Err(AppError::SourceMissing(src.to_path_buf()))
    }
}

fn open_source(src: &Path) -> Result<BufReader<File>, AppError> {
    File::open(src)
        .map(BufReader::new)
        .map_err(|source| AppError::Open {
            path: src.to_path_buf(),
            source,
        })
}

/// Create `dest`, run `body` against it and flush. The file is removed if
/// anything after creation fails.
fn write_file<F>(dest: &Path, body: F) -> Result<(), AppError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), AppError>,
{
    let file = File::create(dest).map_err(|source| AppError::Create {
        path: dest.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let result = body(&mut writer).and_then(|()| {
        writer
            .flush()
            .map_err(|e| AppError::codec("can't write image data")(e.into()))
    });

    if result.is_err() {
        drop(writer);
        if let Err(e) = std::fs::remove_file(dest) {
            tracing::warn!(path = %dest.display(), %e, "Failed to remove partial output");
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use hicolor_codec::{CodecError, Rgb};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_destination() {
        assert_eq!(
            default_destination(Operation::Encode, Path::new("photo.png")),
            PathBuf::from("photo.png.hic")
        );
        assert_eq!(
            default_destination(Operation::Decode, Path::new("dir/photo.hic")),
            PathBuf::from("dir/photo.hic.png")
        );
        assert_eq!(
            default_destination(Operation::Quantize, Path::new("a")),
            PathBuf::from("a.quant.png")
        );
    }

    #[test]
    fn test_missing_source_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("missing.png");
        let dest = dir.path().join("out.hic");

        let result = encode(&src, &dest, FormatVariant::Variant16, DitherPolicy::None);
        assert!(matches!(result, Err(AppError::SourceMissing(_))));
        assert!(!dest.exists());

        assert!(matches!(
            decode(&src, &dest),
            Err(AppError::SourceMissing(_))
        ));
        assert!(!dest.exists());
    }

    #[test]
    fn test_info_reads_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.hic");
        let meta = ImageMetadata::new(FormatVariant::Variant15, 3, 2);
        let mut bytes = Vec::new();
        hicolor_codec::write_image(&mut bytes, &meta, &[Rgb::BLACK; 6]).unwrap();
        std::fs::write(&path, bytes).unwrap();

        assert_eq!(info(&path).unwrap(), meta);
    }

    #[test]
    fn test_info_bad_magic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.hic");
        std::fs::write(&path, b"NotColor6\x01\x00\x01\x00").unwrap();

        match info(&path) {
            Err(AppError::Codec { step, source }) => {
                assert_eq!(step, "can't read header");
                assert!(matches!(source, CodecError::BadMagic));
            }
            other => panic!("expected codec error, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_write_removes_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("partial.hic");

        let result = write_file(&dest, |writer| {
            writer.write_all(b"HiColor").unwrap();
            Err(AppError::codec("can't write image data")(
                CodecError::InsufficientData,
            ))
        });
        assert!(result.is_err());
        assert!(!dest.exists());
    }

    #[test]
    fn test_uncreatable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("no-such-dir").join("out.hic");
        let result = write_file(&dest, |_| Ok(()));
        assert!(matches!(result, Err(AppError::Create { .. })));
    }
}
