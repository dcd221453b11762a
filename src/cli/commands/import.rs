use super::notifications_enabled;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::transfer::TransferLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, notify, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let report = TransferLogic::import(&pool, &expand_tilde(file))?;

        for name in &report.skipped {
            warning(format!("Skipped \"{name}\": a filter with that name already exists"));
        }
        if report.settings_replaced {
            info("Settings replaced from the imported file.");
        }
        notify(
            notifications_enabled(&pool),
            format!("Imported {} filter(s)", report.imported),
        );
    }
    Ok(())
}
