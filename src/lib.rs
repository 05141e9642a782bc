//! rTimesheet library root.
//! Exposes the report engine, the event store, the CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

pub use crate::core::classify::classify;
pub use crate::core::range::ReportRange;
pub use crate::core::report::{generate_report, generate_report_str};
pub use crate::core::settings::ReportSettings;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Template { .. } => cli::commands::template::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    utils::init_tracing();

    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // command-line store override
    if let Some(custom_store) = &cli.store {
        cfg.store = Config::resolve_store(custom_store).to_string_lossy().to_string();
    }
    tracing::debug!(store = %cfg.store, "configuration loaded");

    dispatch(&cli, &cfg)
}
