use super::notifications_enabled;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filters::FilterLogic;
use crate::core::parse_range_expression;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult, RangeError};
use crate::models::{PresetName, SavedFilter, Selection};
use crate::ui::messages::notify;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Save {
        name,
        selection,
        params,
    } = cmd
    {
        let selection = selection.selection()?.ok_or(RangeError::EmptyInput)?;
        let params = params.to_params()?;
        let name = name.as_deref().map(str::trim).filter(|n| !n.is_empty());

        let filter = match &selection {
            Selection::Preset(preset) => SavedFilter::create(*preset, None, name, params),
            Selection::Custom(expr) => {
                // Refuse to store something that will never resolve.
                parse_range_expression(expr, today)?;
                let name = name.ok_or_else(|| {
                    AppError::InvalidParam("name", "a custom range needs --name".to_string())
                })?;
                SavedFilter::create(PresetName::Custom, Some(expr), Some(name), params)
            }
        };

        let pool = DbPool::new(&cfg.database)?;
        let label = filter.display_name();
        let filters = FilterLogic::save(&pool, filter)?;

        notify(
            notifications_enabled(&pool),
            format!("Filter \"{label}\" saved ({} total)", filters.len()),
        );
    }
    Ok(())
}
