mod cli;
mod commands;
mod paths;

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use panels::settings::SettingsStore;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::cli::{Cli, Command};

fn init_logging(verbose: bool) -> Result<()> {
    let Some(cache) = paths::cache_dir() else {
        return Ok(());
    };
    fs::create_dir_all(&cache)
        .with_context(|| format!("failed to create {}", cache.display()))?;
    paths::rotate_logs(&cache);

    let path = paths::log_file(&cache);
    let log_file =
        File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, Config::default(), log_file).context("failed to initialize logger")
}

fn settings_store(path: Option<PathBuf>) -> Result<SettingsStore> {
    let path = match path {
        Some(path) => path,
        None => paths::settings_file().context("could not determine the settings directory")?,
    };
    Ok(SettingsStore::new(path))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let store = settings_store(cli.settings)?;
    log::debug!("Using settings at {}", store.path().display());

    match cli.command {
        Command::Replay(args) => commands::replay(&args).await,
        Command::Columns { table } => commands::columns(&store, table),
        Command::MoveColumn { table, from, to } => commands::move_column(&store, table, from, to),
        Command::Services { move_service } => commands::services(&store, move_service.as_deref()),
    }
}
