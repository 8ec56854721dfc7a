//! Controlarva library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (state store, storage medium, navigation, views).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
        Commands::Login => commands::session::login(cfg),
        Commands::Logout => commands::session::logout(cfg),
        Commands::Status => commands::session::status(cfg),
        Commands::Customer { action } => commands::customer::handle(action, cfg),
        Commands::Sale { action } => commands::sale::handle(action, cfg),
        Commands::AfterSales { action } => commands::aftersales::handle(action, cfg),
        Commands::Visit { action } => commands::visit::handle(action, cfg),
        Commands::Goal { action } => commands::goal::handle(action, cfg),
        Commands::Dashboard => commands::dashboard::handle(cfg),
        Commands::Report => commands::dashboard::report(cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Settings { action } => commands::settings::handle(action, cfg),
        Commands::Shell => cli::shell::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line database override
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    // 4️⃣ dispatch
    dispatch(&cli, &cfg)
}
