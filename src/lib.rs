//! czfilter library root.
//! Exposes the date range resolver, the CLI parser, the high-level run()
//! function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use chrono::NaiveDate;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Range { .. } => cli::commands::range::handle(&cli.command, today),
        Commands::Apply { .. } => cli::commands::apply::handle(&cli.command, cfg, today),
        Commands::Save { .. } => cli::commands::save::handle(&cli.command, cfg, today),
        Commands::List => cli::commands::list::handle(cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Settings { .. } => cli::commands::settings::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, today),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    cfg.database = utils::path::expand_tilde(&cfg.database)
        .to_string_lossy()
        .to_string();

    let today = utils::date::resolve_today(cli.today.as_deref())?;
    log::debug!("today is {today}, database at {}", cfg.database);

    dispatch(&cli, &cfg, today)
}
