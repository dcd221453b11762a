use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// Creates the config directory, writes the configuration file (skipped in
/// test mode) and opens the store, which applies pending migrations.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = expand_tilde(&db_path).to_string_lossy().to_string();

    println!("⚙️  Initializing czfilter…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {db_path}");

    let pool = DbPool::new(&db_path)?;

    if let Err(e) = ttlog(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {db_path}"),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success(format!("Database initialized at {db_path}"));
    Ok(())
}
