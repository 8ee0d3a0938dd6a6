//! Validate command: classify every entry, then summarize duplicates

use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::checker::{classify_all, find_duplicates};
use crate::model::EntryStatus;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let entries = ctx.entries();

    // One line per original slot, duplicates not collapsed
    for (entry, status) in classify_all(entries.entries()) {
        let status_colored = match status {
            EntryStatus::Ok => status.to_string().green(),
            EntryStatus::NotADirectory => status.to_string().yellow(),
            EntryStatus::Missing => status.to_string().red(),
        };
        println!("{}  {}", entry, status_colored);
    }

    for (entry, occurrences) in find_duplicates(entries.entries()) {
        println!("{} appears {} times", entry.yellow(), occurrences);
    }

    Ok(())
}
