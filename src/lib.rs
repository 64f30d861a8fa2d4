//! avls - inventory audio, video and image files as a metadata table
//!
//! This library crate exposes the scanner, normalizer and report assembler
//! for integration testing.

pub mod config;
pub mod error;
pub mod inventory;
pub mod metadata;
pub mod probe;
pub mod report;
pub mod scanner;

pub use error::{Error, Result};
