//! Read-only filesystem and consistency checks for PATH entries

mod duplicate;
mod exec;
mod status;

pub use duplicate::find_duplicates;
pub use exec::count_executables;
pub use status::{classify, classify_all};
