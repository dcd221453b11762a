use crate::errors::RangeError;
use crate::models::params::AdvancedParams;
use crate::models::preset::{PresetName, Selection};
use serde::{Deserialize, Serialize};

/// Marker stored in `dates` for preset filters.
pub const AUTO_GENERATED: &str = "Auto-generated";

/// A named, persisted selection. Field names match the exported JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedFilter {
    pub range: String,
    pub dates: String,
    #[serde(default)]
    pub custom_name: Option<String>,
    #[serde(default)]
    pub advanced_params: AdvancedParams,
}

impl SavedFilter {
    /// A custom expression always makes the record a `Custom` filter.
    pub fn create(
        preset: PresetName,
        dates: Option<&str>,
        custom_name: Option<&str>,
        advanced_params: AdvancedParams,
    ) -> Self {
        let dates = dates.map(str::trim).filter(|d| !d.is_empty());
        let custom_name = custom_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        match dates {
            Some(expr) => SavedFilter {
                range: PresetName::Custom.label().to_string(),
                dates: expr.to_string(),
                custom_name,
                advanced_params,
            },
            None => SavedFilter {
                range: preset.label().to_string(),
                dates: AUTO_GENERATED.to_string(),
                custom_name,
                advanced_params,
            },
        }
    }

    /// Turn the record back into parser input.
    pub fn to_selection(&self) -> Result<Selection, RangeError> {
        match self.range.parse::<PresetName>()? {
            PresetName::Custom => Ok(Selection::Custom(self.dates.clone())),
            preset => Ok(Selection::Preset(preset)),
        }
    }

    pub fn display_name(&self) -> String {
        match &self.custom_name {
            Some(name) => name.clone(),
            None => format!("{} ({})", self.range, self.dates),
        }
    }

    /// Case-insensitive comparison of custom names; unnamed filters never clash.
    pub fn same_name_as(&self, other: &SavedFilter) -> bool {
        match (&self.custom_name, &other.custom_name) {
            (Some(a), Some(b)) => a.to_lowercase() == b.to_lowercase(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expression_makes_a_custom_filter() {
        let f = SavedFilter::create(
            PresetName::Last7Days,
            Some(" last 45 days "),
            Some("Q1"),
            AdvancedParams::default(),
        );
        assert_eq!(f.range, "Custom");
        assert_eq!(f.dates, "last 45 days");
        assert_eq!(f.to_selection().unwrap(), Selection::Custom("last 45 days".into()));
    }

    #[test]
    fn preset_filter_rehydrates_to_preset() {
        let f = SavedFilter::create(PresetName::Last30Days, None, None, AdvancedParams::default());
        assert_eq!(f.dates, AUTO_GENERATED);
        assert_eq!(f.display_name(), "Last 30 Days (Auto-generated)");
        assert_eq!(f.to_selection().unwrap(), Selection::Preset(PresetName::Last30Days));
    }

    #[test]
    fn unknown_range_fails_to_rehydrate() {
        let f = SavedFilter {
            range: "Last 8 Days".into(),
            dates: AUTO_GENERATED.into(),
            custom_name: None,
            advanced_params: AdvancedParams::default(),
        };
        assert!(matches!(f.to_selection(), Err(RangeError::UnknownPreset(_))));
    }

    #[test]
    fn reads_extension_export_records() {
        let json = r#"{"range":"Custom","dates":"2025-01-15 to 2025-02-28","customName":"Jan-Feb",
            "advancedParams":{"costType":"real_cost","granularity":null,"groupBy":null,"filters":null}}"#;
        let f: SavedFilter = serde_json::from_str(json).unwrap();
        assert_eq!(f.custom_name.as_deref(), Some("Jan-Feb"));
        assert_eq!(f.advanced_params.cost_type, Some(crate::models::CostType::RealCost));
    }
}
