//! Dashboard URL patching.
//!
//! Takes the URL of an open cost dashboard page and rewrites its query string
//! so the page reloads with a custom date range and the chosen cost settings.

use crate::core::format_for_wire;
use crate::errors::{AppError, AppResult};
use crate::models::{AdvancedParams, CostType, DateRange, Granularity};
use log::debug;
use url::Url;

pub const DEFAULT_DASHBOARD_HOST: &str = "app.cloudzero.com";

/// True when `raw` parses as a URL served by `host`.
pub fn is_dashboard_url(raw: &str, host: &str) -> bool {
    Url::parse(raw)
        .map(|u| u.host_str().is_some_and(|h| h.eq_ignore_ascii_case(host)))
        .unwrap_or(false)
}

/// The two wire strings for a range: (start of first day, end of last day).
pub fn date_patch(range: &DateRange) -> (String, String) {
    (
        format_for_wire(range.start(), false),
        format_for_wire(range.end(), true),
    )
}

fn upsert(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    match pairs.iter().position(|(k, _)| k == key) {
        Some(idx) => {
            pairs[idx].1 = value.to_string();
            let mut seen = 0;
            pairs.retain(|(k, _)| {
                if k != key {
                    return true;
                }
                seen += 1;
                seen == 1
            });
        }
        None => pairs.push((key.to_string(), value.to_string())),
    }
}

/// Rebuild `base` with the date range and cost parameters applied.
///
/// Existing query parameters keep their order. Values are encoded with `%20`
/// for spaces and `%3A` for colons, and are never double-encoded.
pub fn build_dashboard_url(
    base: &str,
    range: &DateRange,
    params: &AdvancedParams,
) -> AppResult<String> {
    let mut url = Url::parse(base).map_err(|_| AppError::InvalidUrl(base.to_string()))?;
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    let (start, end) = date_patch(range);
    let cost_type = params.cost_type.unwrap_or(CostType::RealCost);
    let granularity = params.granularity.unwrap_or(Granularity::Daily);

    upsert(&mut pairs, "activeCostType", cost_type.as_str());
    upsert(&mut pairs, "granularity", granularity.as_str());
    upsert(&mut pairs, "dateRange", "Custom");
    upsert(&mut pairs, "startDate", &start);
    upsert(&mut pairs, "endDate", &end);
    upsert(&mut pairs, "showRightFlyout", "filters");
    if let Some(group_by) = params.group_by {
        upsert(&mut pairs, "groupBy", group_by.as_str());
    }

    let query = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    url.set_query(Some(&query));

    debug!("patched dashboard url: {url}");
    Ok(url.to_string())
}
