//! pathops - PATH Inspection Tool

use anyhow::Result;
use clap::Parser;

use pathops::cli::{commands, Cli, CommandContext, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = CommandContext::from_cli(&cli)?;

    match &cli.command {
        Some(Commands::Validate) => commands::validate::execute(&ctx),
        Some(Commands::Dedup) => commands::dedup::execute(&ctx),
        Some(Commands::Count) => commands::count::execute(&ctx),
        Some(Commands::Append { dir }) => commands::append::execute(&ctx, dir),
        Some(Commands::Prepend { dir }) => commands::prepend::execute(&ctx, dir),
        Some(Commands::List) | None => commands::list::execute(&ctx),
    }
}
