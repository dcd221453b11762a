use super::notifications_enabled;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::transfer::{TransferLogic, default_export_name};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::notify;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Export { file, force } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let file = file.clone().unwrap_or_else(|| default_export_name(today));
        let path = expand_tilde(&file);

        let count = TransferLogic::export(&pool, &path, *force)?;
        notify(
            notifications_enabled(&pool),
            format!("Exported {count} filter(s) to {}", path.display()),
        );
    }
    Ok(())
}
