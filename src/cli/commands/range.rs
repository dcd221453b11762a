use super::{print_range, selection_title};
use crate::cli::parser::Commands;
use crate::core::resolve_selection;
use crate::dashboard::date_patch;
use crate::errors::{AppResult, RangeError};
use crate::ui::messages::header;
use chrono::NaiveDate;

/// Resolve a preset or expression and print it, including the two wire strings.
pub fn handle(cmd: &Commands, today: NaiveDate) -> AppResult<()> {
    if let Commands::Range { selection } = cmd {
        let selection = selection.selection()?.ok_or(RangeError::EmptyInput)?;
        let range = resolve_selection(&selection, today)?;
        let (start, end) = date_patch(&range);

        header(selection_title(&selection));
        print_range(&range);
        println!("startDate={start}");
        println!("endDate={end}");
    }
    Ok(())
}
