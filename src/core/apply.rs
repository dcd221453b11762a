//! Pick what to apply (explicit input, a saved filter, or the default filter)
//! and turn it into a patched dashboard URL.

use super::filters::FilterLogic;
use super::resolve_selection;
use crate::config::Config;
use crate::dashboard::{build_dashboard_url, is_dashboard_url};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult, RangeError};
use crate::models::{AdvancedParams, DateRange, Selection};
use chrono::NaiveDate;
use log::debug;

/// Everything needed to patch one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub selection: Selection,
    pub params: AdvancedParams,
    pub filter_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Applied {
    pub range: DateRange,
    pub params: AdvancedParams,
    pub url: String,
}

pub struct ApplyLogic;

impl ApplyLogic {
    /// Explicit input wins; then `--filter`; then the default filter from settings.
    pub fn choose_target(
        pool: &DbPool,
        selection: Option<Selection>,
        filter: Option<&str>,
    ) -> AppResult<Target> {
        if let Some(selection) = selection {
            return Ok(Target {
                selection,
                params: AdvancedParams::default(),
                filter_name: None,
            });
        }

        let key = match filter {
            Some(k) => k.to_string(),
            None => {
                let settings = FilterLogic::load_settings(pool)?;
                if settings.default_filter.trim().is_empty() {
                    return Err(RangeError::EmptyInput.into());
                }
                debug!("using default filter {:?}", settings.default_filter);
                settings.default_filter
            }
        };

        let saved = FilterLogic::get(pool, &key)?;
        Ok(Target {
            selection: saved.to_selection()?,
            params: saved.advanced_params.clone(),
            filter_name: Some(saved.display_name()),
        })
    }

    /// Resolve the target's dates and rewrite `url` with them.
    pub fn apply(
        cfg: &Config,
        url: &str,
        target: &Target,
        overrides: AdvancedParams,
        today: NaiveDate,
    ) -> AppResult<Applied> {
        if !is_dashboard_url(url, &cfg.dashboard_host) {
            return Err(AppError::NotDashboardUrl(
                url.to_string(),
                cfg.dashboard_host.clone(),
            ));
        }

        let range = resolve_selection(&target.selection, today)?;
        let params = overrides
            .or(&target.params)
            .or(&cfg.default_params());
        let url = build_dashboard_url(url, &range, &params)?;

        Ok(Applied { range, params, url })
    }
}
