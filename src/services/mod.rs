pub mod converter;
pub mod png_io;

pub use converter::{decode, default_destination, encode, info, quantize, Operation};
pub use png_io::{load_png, save_png};
