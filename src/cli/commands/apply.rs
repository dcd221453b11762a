use super::{notifications_enabled, print_range, selection_title};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::apply::ApplyLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, notify};
use chrono::NaiveDate;

/// Patch a dashboard URL. The patched URL is the only line written without decoration,
/// so it can be captured by scripts.
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Apply {
        url,
        selection,
        filter,
        params,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let overrides = params.to_params()?;
        let target = ApplyLogic::choose_target(&pool, selection.selection()?, filter.as_deref())?;
        let applied = ApplyLogic::apply(cfg, url, &target, overrides, today)?;

        match &target.filter_name {
            Some(name) => info(format!("Using saved filter \"{name}\"")),
            None => info(selection_title(&target.selection)),
        }
        print_range(&applied.range);
        println!("{}", applied.url);

        notify(notifications_enabled(&pool), "Filter applied to the dashboard");
    }
    Ok(())
}
