//! HiColor - PNG to HiColor converter
//!
//! File-level operations around the `hicolor-codec` crate.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
