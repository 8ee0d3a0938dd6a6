//! Data model for PATH lists and entry classification

mod entry;

pub use entry::{EntryStatus, PathList, DELIMITER};
