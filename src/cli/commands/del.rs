use super::notifications_enabled;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filters::FilterLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, notify};
use crate::utils::fs::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { key, yes } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let filters = FilterLogic::load(&pool)?;
        let (_, target) =
            FilterLogic::find(&filters, key).ok_or_else(|| AppError::FilterNotFound(key.clone()))?;
        let name = target.display_name();

        if !*yes && !confirm(&format!("Delete filter \"{name}\"? This action is irreversible.")) {
            info("Operation cancelled.");
            return Ok(());
        }

        FilterLogic::delete(&pool, key)?;
        notify(notifications_enabled(&pool), format!("Filter \"{name}\" deleted."));
    }
    Ok(())
}
