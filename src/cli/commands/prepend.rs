//! Prepend command: add a directory at the front of the list

use anyhow::Result;

use super::CommandContext;
use crate::checker::classify;
use crate::model::EntryStatus;
use crate::utils::path::expand_tilde;

/// Print the joined list with `dir` prepended. Already-present directories
/// are a no-op: the unchanged list is printed and a note goes to stderr.
pub fn execute(ctx: &CommandContext, dir: &str) -> Result<()> {
    let candidate = expand_tilde(dir);
    let entries = ctx.entries();

    if entries.contains(&candidate) {
        ctx.print_note(&format!("('{}' is already present, nothing added)", candidate));
        println!("{}", entries.join());
        return Ok(());
    }

    if classify(&candidate) != EntryStatus::Ok {
        ctx.print_warning(&format!("'{}' is not an existing directory", candidate));
    }

    println!("{}", entries.prepend(&candidate).join());
    Ok(())
}
