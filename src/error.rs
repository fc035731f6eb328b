use std::path::PathBuf;

use hicolor_codec::CodecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("source image \"{}\" doesn't exist", .0.display())]
    SourceMissing(PathBuf),

    #[error("can't open source image \"{}\" for reading", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("can't open destination \"{}\" for writing", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported dimensions: {width}x{height} (max 65535x65535)")]
    UnsupportedDimensions { width: u32, height: u32 },

    /// A codec call failed; `step` names what was being attempted.
    #[error("{step}")]
    Codec {
        step: &'static str,
        #[source]
        source: CodecError,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl AppError {
    /// Wrap a codec error with the step that produced it.
    pub fn codec(step: &'static str) -> impl FnOnce(CodecError) -> Self {
        move |source| AppError::Codec { step, source }
    }
}
