//! List command: one entry per line

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::CommandContext;

/// Print every entry in order. Entries that resolve elsewhere through a
/// symlink are annotated with their target; entries that cannot be resolved
/// are colored red.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    for entry in ctx.entries().entries() {
        let path = Path::new(entry);
        match path.canonicalize() {
            Ok(resolved) if resolved.as_os_str() == path.as_os_str() => {
                println!("{}", entry.blue());
            }
            Ok(resolved) => {
                println!(
                    "{} -> {}",
                    entry.yellow(),
                    resolved.display().to_string().blue()
                );
            }
            Err(_) => println!("{}", entry.red()),
        }
    }
    Ok(())
}
