use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Preferences persisted next to the saved filters.
/// Missing fields fall back to their defaults when loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    pub auto_apply_filters: bool,
    pub default_filter: String,
    pub theme: String,
    pub compact_mode: bool,
    pub show_notifications: bool,
    pub enable_shortcuts: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            auto_apply_filters: false,
            default_filter: String::new(),
            theme: "auto".to_string(),
            compact_mode: false,
            show_notifications: true,
            enable_shortcuts: true,
        }
    }
}

fn parse_bool(key: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(AppError::InvalidSetting(format!(
            "{key} expects true/false, got \"{other}\""
        ))),
    }
}

impl UserSettings {
    /// Update one field from a `key=value` pair. Keys may be snake_case or camelCase.
    pub fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let normalized = key.trim().replace('_', "").to_lowercase();
        match normalized.as_str() {
            "autoapplyfilters" => self.auto_apply_filters = parse_bool(key, value)?,
            "defaultfilter" => self.default_filter = value.trim().to_string(),
            "theme" => {
                let theme = value.trim().to_lowercase();
                if !matches!(theme.as_str(), "auto" | "light" | "dark") {
                    return Err(AppError::InvalidSetting(format!(
                        "theme must be auto, light or dark, got \"{value}\""
                    )));
                }
                self.theme = theme;
            }
            "compactmode" => self.compact_mode = parse_bool(key, value)?,
            "shownotifications" => self.show_notifications = parse_bool(key, value)?,
            "enableshortcuts" => self.enable_shortcuts = parse_bool(key, value)?,
            _ => return Err(AppError::InvalidSetting(format!("unknown key \"{key}\""))),
        }
        Ok(())
    }

    /// Apply a `KEY=VALUE` assignment as typed on the command line.
    pub fn apply_assignment(&mut self, assignment: &str) -> AppResult<()> {
        let (key, value) = assignment.split_once('=').ok_or_else(|| {
            AppError::InvalidSetting(format!("expected KEY=VALUE, got \"{assignment}\""))
        })?;
        self.set(key, value)
    }
}
