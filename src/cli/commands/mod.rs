//! CLI command implementations

pub mod append;
pub mod count;
pub mod dedup;
pub mod list;
pub mod prepend;
pub mod validate;

use anyhow::{Context, Result};
use colored::Colorize;
use std::env;

use crate::cli::args::Cli;
use crate::model::PathList;

/// Common context for command execution
pub struct CommandContext {
    /// The raw PATH string being operated on, read once at startup
    pub raw: String,
}

impl CommandContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let raw = match &cli.path {
            Some(p) => p.clone(),
            None => env::var("PATH").context("unable to read the PATH environment variable")?,
        };
        Ok(Self { raw })
    }

    /// Parse the raw string into an ordered entry list
    pub fn entries(&self) -> PathList {
        PathList::parse(&self.raw)
    }

    /// Print a dimmed note to stderr, keeping stdout capture-safe
    pub fn print_note(&self, message: &str) {
        eprintln!("{}", message.dimmed());
    }

    /// Print a warning to stderr
    pub fn print_warning(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }
}
