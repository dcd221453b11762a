use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filters::FilterLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::fs::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes
            && !confirm("Delete ALL saved filters and settings? This action is irreversible.")
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        FilterLogic::clear_all(&pool)?;
        success("All saved filters and settings have been removed.");
    }
    Ok(())
}
