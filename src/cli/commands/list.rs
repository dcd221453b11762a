use crate::config::Config;
use crate::core::filters::FilterLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::SavedFilter;
use crate::ui::messages::info;
use crate::utils::table::Table;

fn row(idx: usize, f: &SavedFilter) -> Vec<String> {
    let p = &f.advanced_params;
    let or_dash = |s: Option<&str>| s.unwrap_or("-").to_string();
    vec![
        (idx + 1).to_string(),
        f.display_name(),
        f.range.clone(),
        if f.dates.is_empty() { "-".into() } else { f.dates.clone() },
        or_dash(p.cost_type.map(|c| c.label())),
        or_dash(p.granularity.map(|g| g.label())),
        or_dash(p.group_by.map(|g| g.label())),
    ]
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let filters = FilterLogic::load(&pool)?;

    if filters.is_empty() {
        info("No saved filters yet.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        "#",
        "Name",
        "Range",
        "Dates",
        "Cost type",
        "Granularity",
        "Group by",
    ]);
    for (i, f) in filters.iter().enumerate() {
        table.add_row(row(i, f));
    }
    print!("{}", table.render());

    let settings = FilterLogic::load_settings(&pool)?;
    if !settings.default_filter.is_empty() {
        println!("\nDefault filter: {}", settings.default_filter);
    }
    Ok(())
}
