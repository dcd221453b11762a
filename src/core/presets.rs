use super::trailing_window;
use super::window::find_valid_28_day_window;
use crate::errors::RangeError;
use crate::models::{DateRange, PresetName};
use chrono::NaiveDate;

/// Concrete dates for a named preset. `Custom` carries no dates of its own
/// and must go through the range expression parser instead.
pub fn calculate_preset_range(preset: PresetName, today: NaiveDate) -> Result<DateRange, RangeError> {
    match preset {
        PresetName::Last7Days => trailing_window(today, 7),
        PresetName::Last14Days => trailing_window(today, 14),
        PresetName::Last30Days => trailing_window(today, 30),
        PresetName::Last90Days => trailing_window(today, 90),
        PresetName::Last28Days => find_valid_28_day_window(today),
        PresetName::Custom => Err(RangeError::UnknownPreset(preset.label().to_string())),
    }
}
