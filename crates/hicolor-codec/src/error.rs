//! Error type for the HiColor codec.
//!
//! Every codec operation returns [`Result`]; failures are never recovered
//! internally and propagate to the caller unchanged.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Failure of a single codec operation.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The underlying stream failed, or accepted fewer bytes than written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The first seven bytes are not the `HiColor` signature.
    #[error("bad magic value")]
    BadMagic,

    /// The format variant marker is neither `'5'` nor `'6'`.
    #[error("unknown version")]
    UnknownVersion,

    /// A 15-bit packed value has its reserved high bit set.
    #[error("invalid value 0x{value:04x}")]
    InvalidValue {
        /// The offending packed value
        value: u16,
    },

    /// The stream ended before the header or pixel data was complete.
    #[error("insufficient data")]
    InsufficientData,

    /// The pixel buffer does not hold exactly `width * height` pixels.
    #[error("pixel buffer has {actual} pixels, expected {expected}")]
    DimensionMismatch {
        /// `width * height` from the metadata
        expected: usize,
        /// Length of the supplied buffer
        actual: usize,
    },

    /// A dither policy name could not be parsed.
    #[error("unknown dither policy: {0}")]
    UnknownDither(String),
}
