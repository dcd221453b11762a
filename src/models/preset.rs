use crate::errors::RangeError;
use std::fmt;
use std::str::FromStr;

/// Named date ranges offered next to free-form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetName {
    Last7Days,
    Last14Days,
    Last28Days,
    Last30Days,
    Last90Days,
    Custom,
}

impl PresetName {
    pub const ALL: [PresetName; 6] = [
        PresetName::Last7Days,
        PresetName::Last14Days,
        PresetName::Last28Days,
        PresetName::Last30Days,
        PresetName::Last90Days,
        PresetName::Custom,
    ];

    /// Display label, also the value stored in saved filters.
    pub fn label(&self) -> &'static str {
        match self {
            PresetName::Last7Days => "Last 7 Days",
            PresetName::Last14Days => "Last 14 Days",
            PresetName::Last28Days => "Last 28 Days",
            PresetName::Last30Days => "Last 30 Days",
            PresetName::Last90Days => "Last 90 Days",
            PresetName::Custom => "Custom",
        }
    }

    /// Kebab-case form accepted on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            PresetName::Last7Days => "last-7-days",
            PresetName::Last14Days => "last-14-days",
            PresetName::Last28Days => "last-28-days",
            PresetName::Last30Days => "last-30-days",
            PresetName::Last90Days => "last-90-days",
            PresetName::Custom => "custom",
        }
    }
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PresetName {
    type Err = RangeError;

    /// Accepts "Last 7 Days" as well as "last-7-days", case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PresetName::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(wanted) || p.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RangeError::UnknownPreset(wanted.to_string()))
    }
}

/// What the user picked: a preset, or a free-form expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Preset(PresetName),
    Custom(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_slugs() {
        assert_eq!("Last 7 Days".parse::<PresetName>().unwrap(), PresetName::Last7Days);
        assert_eq!("last 90 days".parse::<PresetName>().unwrap(), PresetName::Last90Days);
        assert_eq!("LAST-28-DAYS".parse::<PresetName>().unwrap(), PresetName::Last28Days);
        assert_eq!("custom".parse::<PresetName>().unwrap(), PresetName::Custom);
    }

    #[test]
    fn rejects_values_outside_the_enumeration() {
        let err = "Last 8 Days".parse::<PresetName>().unwrap_err();
        assert_eq!(err, RangeError::UnknownPreset("Last 8 Days".into()));
    }
}
