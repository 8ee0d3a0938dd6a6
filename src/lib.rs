//! pathops - PATH Inspection Tool
//!
//! Inspect and manipulate the `PATH` environment variable without touching
//! any shell profile.
//!
//! # Features
//!
//! - List entries, marking symlinked and missing directories
//! - Validate entries (ok / not-a-directory / missing) and report duplicates
//! - Remove duplicate entries, keeping first occurrence
//! - Count executables per directory
//! - Append or prepend a directory, skipping entries already present
//!
//! The mutating commands never touch the live environment: they print a
//! joined string for the invoking shell to capture and reassign.

pub mod checker;
pub mod cli;
pub mod model;
pub mod utils;

pub use model::{EntryStatus, PathList, DELIMITER};
