//! Dedup command: joined output with duplicates removed

use anyhow::Result;

use super::CommandContext;

/// Print the delimiter-joined deduplicated list on stdout. The removal
/// count goes to stderr so the output can be captured by the shell.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let entries = ctx.entries();
    let deduped = entries.dedup();

    let removed = entries.len() - deduped.len();
    if removed > 0 {
        ctx.print_note(&format!("({} duplicate entries removed)", removed));
    }

    println!("{}", deduped.join());
    Ok(())
}
