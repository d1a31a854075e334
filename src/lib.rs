//! rJournalView library root.
//! Exposes the CLI parser, the high-level run() function, and the viewer core.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod render;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Timeline { .. } => cli::commands::timeline::handle(cli, cfg),
        Commands::Calendar { .. } => cli::commands::calendar::handle(cli, cfg),
        Commands::Media { .. } => cli::commands::media::handle(cli, cfg),
        Commands::Map { .. } => cli::commands::map::handle(cli, cfg),
        Commands::Show { .. } => cli::commands::show::handle(cli, cfg),
        Commands::Stats => cli::commands::stats::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // configuration is loaded once and shared by every command
    let mut cfg = Config::load()?;

    if let Some(data) = &cli.data {
        cfg.data_path = data.clone();
    }
    if let Some(media) = &cli.media {
        cfg.media_path = media.clone();
    }

    dispatch(&cli, &cfg)
}
