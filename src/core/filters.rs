use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    SAVED_FILTERS_KEY, USER_SETTINGS_KEY, kv_clear, kv_delete, kv_get_json, kv_set_json,
};
use crate::errors::{AppError, AppResult};
use crate::models::{SavedFilter, UserSettings};
use log::{info, warn};

pub struct FilterLogic;

impl FilterLogic {
    pub fn load(pool: &DbPool) -> AppResult<Vec<SavedFilter>> {
        Ok(kv_get_json(pool, SAVED_FILTERS_KEY)?.unwrap_or_default())
    }

    /// Append a filter, refusing a custom name already in use (case-insensitive).
    pub fn save(pool: &DbPool, filter: SavedFilter) -> AppResult<Vec<SavedFilter>> {
        let mut filters = Self::load(pool)?;

        if filters.iter().any(|f| f.same_name_as(&filter)) {
            let name = filter.custom_name.unwrap_or_default();
            warn!("duplicate filter name rejected: {name}");
            return Err(AppError::DuplicateFilter(name));
        }

        let label = filter.display_name();
        filters.push(filter);
        kv_set_json(pool, SAVED_FILTERS_KEY, &filters)?;
        ttlog(&pool.conn, "save", &label, "Saved filter")?;
        info!("saved filter {label:?} ({} total)", filters.len());

        Ok(filters)
    }

    /// Locate a filter by custom name (case-insensitive) or by its 1-based position.
    pub fn find<'a>(filters: &'a [SavedFilter], key: &str) -> Option<(usize, &'a SavedFilter)> {
        let wanted = key.trim().to_lowercase();

        let by_name = filters.iter().enumerate().find(|(_, f)| {
            f.custom_name
                .as_deref()
                .is_some_and(|n| n.to_lowercase() == wanted)
        });
        if by_name.is_some() {
            return by_name;
        }

        wanted
            .parse::<usize>()
            .ok()
            .filter(|i| (1..=filters.len()).contains(i))
            .map(|i| (i - 1, &filters[i - 1]))
    }

    pub fn get(pool: &DbPool, key: &str) -> AppResult<SavedFilter> {
        let filters = Self::load(pool)?;
        Self::find(&filters, key)
            .map(|(_, f)| f.clone())
            .ok_or_else(|| AppError::FilterNotFound(key.to_string()))
    }

    /// Remove a filter and return it.
    pub fn delete(pool: &DbPool, key: &str) -> AppResult<SavedFilter> {
        let mut filters = Self::load(pool)?;
        let idx = Self::find(&filters, key)
            .map(|(i, _)| i)
            .ok_or_else(|| AppError::FilterNotFound(key.to_string()))?;

        let removed = filters.remove(idx);
        kv_set_json(pool, SAVED_FILTERS_KEY, &filters)?;
        ttlog(&pool.conn, "del", &removed.display_name(), "Deleted filter")?;

        Ok(removed)
    }

    pub fn load_settings(pool: &DbPool) -> AppResult<UserSettings> {
        Ok(kv_get_json(pool, USER_SETTINGS_KEY)?.unwrap_or_default())
    }

    pub fn save_settings(pool: &DbPool, settings: &UserSettings) -> AppResult<()> {
        kv_set_json(pool, USER_SETTINGS_KEY, settings)?;
        ttlog(&pool.conn, "settings", "", "Saved user settings")?;
        Ok(())
    }

    /// Drop stored settings so the next load yields the defaults.
    pub fn reset_settings(pool: &DbPool) -> AppResult<()> {
        if kv_delete(pool, USER_SETTINGS_KEY)? {
            ttlog(&pool.conn, "settings", "", "Reset user settings")?;
        }
        Ok(())
    }

    /// Wipe saved filters and settings.
    pub fn clear_all(pool: &DbPool) -> AppResult<usize> {
        let removed = kv_clear(pool)?;
        ttlog(
            &pool.conn,
            "clear",
            "",
            &format!("Cleared all stored data ({removed} keys)"),
        )?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdvancedParams, PresetName};

    fn named(name: &str) -> SavedFilter {
        SavedFilter::create(
            PresetName::Custom,
            Some("last 10 days"),
            Some(name),
            AdvancedParams::default(),
        )
    }

    #[test]
    fn save_rejects_duplicate_names_ignoring_case() {
        let pool = DbPool::in_memory().unwrap();
        FilterLogic::save(&pool, named("Monthly Review")).unwrap();
        let err = FilterLogic::save(&pool, named("monthly review")).unwrap_err();
        assert!(matches!(err, AppError::DuplicateFilter(n) if n == "monthly review"));
        assert_eq!(FilterLogic::load(&pool).unwrap().len(), 1);
    }

    #[test]
    fn unnamed_filters_never_clash() {
        let pool = DbPool::in_memory().unwrap();
        let f = SavedFilter::create(PresetName::Last7Days, None, None, AdvancedParams::default());
        FilterLogic::save(&pool, f.clone()).unwrap();
        FilterLogic::save(&pool, f).unwrap();
        assert_eq!(FilterLogic::load(&pool).unwrap().len(), 2);
    }

    #[test]
    fn find_by_name_then_index() {
        let filters = vec![named("alpha"), named("2")];
        assert_eq!(FilterLogic::find(&filters, "ALPHA").unwrap().0, 0);
        // A name that looks like an index wins over the index.
        assert_eq!(FilterLogic::find(&filters, "2").unwrap().0, 1);
        assert_eq!(FilterLogic::find(&filters, "1").unwrap().0, 0);
        assert!(FilterLogic::find(&filters, "3").is_none());
        assert!(FilterLogic::find(&filters, "0").is_none());
    }

    #[test]
    fn delete_removes_and_logs() {
        let pool = DbPool::in_memory().unwrap();
        FilterLogic::save(&pool, named("a")).unwrap();
        FilterLogic::save(&pool, named("b")).unwrap();
        let removed = FilterLogic::delete(&pool, "1").unwrap();
        assert_eq!(removed.custom_name.as_deref(), Some("a"));
        let left = FilterLogic::load(&pool).unwrap();
        assert_eq!(left.len(), 1);
        assert!(matches!(
            FilterLogic::delete(&pool, "zzz"),
            Err(AppError::FilterNotFound(_))
        ));
    }

    #[test]
    fn settings_round_trip_and_clear() {
        let pool = DbPool::in_memory().unwrap();
        assert_eq!(FilterLogic::load_settings(&pool).unwrap(), UserSettings::default());
        let s = UserSettings {
            compact_mode: true,
            ..Default::default()
        };
        FilterLogic::save_settings(&pool, &s).unwrap();
        FilterLogic::save(&pool, named("x")).unwrap();
        assert!(FilterLogic::load_settings(&pool).unwrap().compact_mode);

        assert_eq!(FilterLogic::clear_all(&pool).unwrap(), 2);
        assert!(FilterLogic::load(&pool).unwrap().is_empty());
        assert_eq!(FilterLogic::load_settings(&pool).unwrap(), UserSettings::default());
    }

    #[test]
    fn reset_removes_stored_settings() {
        let pool = DbPool::in_memory().unwrap();
        let s = UserSettings {
            theme: "dark".into(),
            ..Default::default()
        };
        FilterLogic::save_settings(&pool, &s).unwrap();
        FilterLogic::reset_settings(&pool).unwrap();
        assert_eq!(crate::db::queries::kv_get(&pool, USER_SETTINGS_KEY).unwrap(), None);
        assert_eq!(FilterLogic::load_settings(&pool).unwrap(), UserSettings::default());
        // Resetting twice is harmless.
        FilterLogic::reset_settings(&pool).unwrap();
    }
}
