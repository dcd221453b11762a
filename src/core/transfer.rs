//! Export / import of saved filters and settings as a JSON bundle.
//! The bundle layout is the one produced by the browser extension.

use super::filters::FilterLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{SavedFilter, UserSettings};
use crate::utils::fs::ensure_writable;
use chrono::{SecondsFormat, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    #[serde(default)]
    pub filters: Option<Vec<SavedFilter>>,
    #[serde(default)]
    pub settings: Option<UserSettings>,
    #[serde(default)]
    pub export_date: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: Vec<String>,
    pub settings_replaced: bool,
}

/// Suggested export file name for a given day, e.g. `cloudzero-filters-2025-03-15.json`.
pub fn default_export_name(today: chrono::NaiveDate) -> String {
    format!("cloudzero-filters-{}.json", today.format("%Y-%m-%d"))
}

pub struct TransferLogic;

impl TransferLogic {
    /// Write all filters and settings to `path`. Returns the number of filters written.
    pub fn export(pool: &DbPool, path: &Path, force: bool) -> AppResult<usize> {
        ensure_writable(path, force)?;

        let filters = FilterLogic::load(pool)?;
        let count = filters.len();
        let bundle = ExportBundle {
            filters: Some(filters),
            settings: Some(FilterLogic::load_settings(pool)?),
            export_date: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&bundle)?)?;
        ttlog(
            &pool.conn,
            "export",
            &path.display().to_string(),
            &format!("Exported {count} filters"),
        )?;

        Ok(count)
    }

    /// Merge filters from `path` (duplicates by name are skipped) and
    /// replace settings when the bundle carries them.
    pub fn import(pool: &DbPool, path: &Path) -> AppResult<ImportReport> {
        let text = fs::read_to_string(path)?;
        let bundle: ExportBundle = serde_json::from_str(&text)?;
        let mut report = ImportReport::default();

        // All or nothing: a storage failure halfway leaves the store untouched.
        let tx = pool.conn.unchecked_transaction()?;

        for filter in bundle.filters.unwrap_or_default() {
            let name = filter.display_name();
            match FilterLogic::save(pool, filter) {
                Ok(_) => report.imported += 1,
                Err(AppError::DuplicateFilter(_)) => {
                    warn!("skipped duplicate filter {name:?}");
                    report.skipped.push(name);
                }
                Err(e) => return Err(e),
            }
        }

        if let Some(settings) = bundle.settings {
            FilterLogic::save_settings(pool, &settings)?;
            report.settings_replaced = true;
        }

        ttlog(
            &pool.conn,
            "import",
            &path.display().to_string(),
            &format!(
                "Imported {} filters, skipped {}",
                report.imported,
                report.skipped.len()
            ),
        )?;
        tx.commit()?;

        Ok(report)
    }
}
