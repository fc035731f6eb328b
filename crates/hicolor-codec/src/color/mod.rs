//! Color types and channel scaling
//!
//! [`Rgb`] is the truecolor pixel used at every codec boundary. Alpha is
//! never part of it; callers keep alpha out of band.
//!
//! The scaling tables in [`lut`] map 8-bit intensities onto the 32 or 64
//! levels a HiColor channel can hold, and back.

pub mod lut;
mod rgb;

pub use rgb::Rgb;
