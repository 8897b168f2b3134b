//! Command line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use panels::table::TableName;

#[derive(Parser)]
#[command(
    name = "panels",
    version,
    about = "Inspect and replay comic library UI state"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file to read and write (default: platform config dir).
    #[arg(long, value_name = "PATH", global = true)]
    pub settings: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply a socket transcript to a queue snapshot.
    Replay(ReplayArgs),

    /// Show the column layout of a table.
    Columns {
        #[arg(value_parser = parse_table)]
        table: TableName,
    },

    /// Move a column of a table and save the layout.
    MoveColumn {
        #[arg(value_parser = parse_table)]
        table: TableName,
        from: usize,
        to: usize,
    },

    /// Show, and optionally reorder, the download service preference.
    Services {
        /// Move the service at FROM to TO.
        #[arg(long = "move", num_args = 2, value_names = ["FROM", "TO"])]
        move_service: Option<Vec<usize>>,
    },
}

#[derive(Parser)]
pub struct ReplayArgs {
    /// Queue snapshot as returned by the queue endpoint.
    #[arg(long, value_name = "SNAPSHOT")]
    pub queue: PathBuf,

    /// Socket transcript, one `{"event": ..., "data": ...}` object per line.
    #[arg(long, value_name = "EVENTS")]
    pub events: PathBuf,
}

fn parse_table(name: &str) -> Result<TableName, String> {
    TableName::parse(name).ok_or_else(|| {
        let known: Vec<&str> = TableName::ALL.iter().map(|t| t.as_str()).collect();
        format!("unknown table {:?}, expected one of {}", name, known.join(", "))
    })
}
