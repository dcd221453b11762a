use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filters::FilterLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::UserSettings;
use crate::ui::messages::{notify, success};
use crate::utils::table::Table;

fn print_settings(s: &UserSettings) {
    let mut table = Table::new(vec!["Setting", "Value"]);
    let rows = [
        ("autoApplyFilters", s.auto_apply_filters.to_string()),
        ("defaultFilter", s.default_filter.clone()),
        ("theme", s.theme.clone()),
        ("compactMode", s.compact_mode.to_string()),
        ("showNotifications", s.show_notifications.to_string()),
        ("enableShortcuts", s.enable_shortcuts.to_string()),
    ];
    for (k, v) in rows {
        table.add_row(vec![k.to_string(), v]);
    }
    print!("{}", table.render());
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings { print, set, reset } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        if *reset {
            FilterLogic::reset_settings(&pool)?;
            success("Settings restored to defaults.");
        }

        if !set.is_empty() {
            let mut settings = FilterLogic::load_settings(&pool)?;
            for assignment in set {
                settings.apply_assignment(assignment)?;
            }
            FilterLogic::save_settings(&pool, &settings)?;
            notify(settings.show_notifications, "Settings saved.");
        }

        if *print || (!*reset && set.is_empty()) {
            print_settings(&FilterLogic::load_settings(&pool)?);
        }
    }
    Ok(())
}
