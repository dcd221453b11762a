use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Log { print: true } => LogLogic::print_log(&DbPool::new(&cfg.database)?),
        Commands::Log { print: false } => {
            info("Nothing to do. Use `czfilter log --print` to show the audit log.");
            Ok(())
        }
        _ => Ok(()),
    }
}
