pub mod date_range;
pub mod filter;
pub mod params;
pub mod preset;
pub mod settings;

pub use date_range::DateRange;
pub use filter::SavedFilter;
pub use params::{AdvancedParams, CostType, Granularity, GroupBy};
pub use preset::{PresetName, Selection};
pub use settings::UserSettings;
