//! Count command: executables per entry

use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::checker::count_executables;

/// Print `entry: count` for every entry in order. A missing or unreadable
/// entry is marked `-` instead of aborting the rest of the run.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    for entry in ctx.entries().entries() {
        match count_executables(entry) {
            Ok(0) => println!("{}: {}", entry.yellow(), 0),
            Ok(n) => println!("{}: {}", entry.blue(), n),
            Err(_) => println!("{}: -", entry.red()),
        }
    }
    Ok(())
}
