pub mod apply;
pub mod clear;
pub mod config;
pub mod del;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod range;
pub mod save;
pub mod settings;

use crate::core::filters::FilterLogic;
use crate::db::pool::DbPool;
use crate::models::{DateRange, Selection};

/// Whether the user wants success notifications; a broken settings record counts as yes.
fn notifications_enabled(pool: &DbPool) -> bool {
    FilterLogic::load_settings(pool)
        .map(|s| s.show_notifications)
        .unwrap_or(true)
}

fn selection_title(selection: &Selection) -> String {
    match selection {
        Selection::Preset(p) => p.label().to_string(),
        Selection::Custom(expr) => format!("Custom: {}", expr.trim()),
    }
}

fn print_range(range: &DateRange) {
    println!(
        "Start : {}  ({})",
        range.start(),
        range.start().format("%a")
    );
    println!("End   : {}  ({})", range.end(), range.end().format("%a"));
    println!("Days  : {}", range.days());
}
