//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pathops")]
#[command(about = "Inspect and manipulate the PATH environment variable")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on this string instead of the live PATH variable
    #[arg(short, long, global = true, value_name = "STRING")]
    pub path: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List entries, one per line (default)
    #[command(visible_alias = "ls")]
    List,

    /// Annotate each entry with ok / not-a-directory / missing
    #[command(visible_alias = "check")]
    Validate,

    /// Print the delimiter-joined list with duplicates removed
    Dedup,

    /// Annotate each entry with its executable-file count
    Count,

    /// Print the list with a directory appended (no-op if present)
    Append {
        /// Directory to add at the end
        dir: String,
    },

    /// Print the list with a directory prepended (no-op if present)
    Prepend {
        /// Directory to add at the front
        dir: String,
    },
}
