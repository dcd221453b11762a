//! Key/value access. Values are stored as JSON text.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::{OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const SAVED_FILTERS_KEY: &str = "savedFilters";
pub const USER_SETTINGS_KEY: &str = "userSettings";

pub fn kv_get(pool: &DbPool, key: &str) -> AppResult<Option<String>> {
    let value = pool
        .conn
        .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;
    Ok(value)
}

pub fn kv_set(pool: &DbPool, key: &str, value: &str) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value],
    )?;
    Ok(())
}

pub fn kv_delete(pool: &DbPool, key: &str) -> AppResult<bool> {
    let n = pool.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
    Ok(n > 0)
}

/// Remove every stored value. The audit log is kept.
pub fn kv_clear(pool: &DbPool) -> AppResult<usize> {
    Ok(pool.conn.execute("DELETE FROM kv", [])?)
}

pub fn kv_get_json<T: DeserializeOwned>(pool: &DbPool, key: &str) -> AppResult<Option<T>> {
    match kv_get(pool, key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn kv_set_json<T: Serialize + ?Sized>(pool: &DbPool, key: &str, value: &T) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    kv_set(pool, key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_overwrite_delete() {
        let pool = DbPool::in_memory().unwrap();
        assert_eq!(kv_get(&pool, "a").unwrap(), None);
        kv_set(&pool, "a", "1").unwrap();
        kv_set(&pool, "a", "2").unwrap();
        assert_eq!(kv_get(&pool, "a").unwrap().as_deref(), Some("2"));
        assert!(kv_delete(&pool, "a").unwrap());
        assert!(!kv_delete(&pool, "a").unwrap());
    }

    #[test]
    fn json_values_and_clear() {
        let pool = DbPool::in_memory().unwrap();
        kv_set_json(&pool, "list", &vec![1, 2, 3]).unwrap();
        kv_set_json(&pool, "flag", &true).unwrap();
        let list: Vec<i32> = kv_get_json(&pool, "list").unwrap().unwrap();
        assert_eq!(list, vec![1, 2, 3]);
        assert_eq!(kv_clear(&pool).unwrap(), 2);
        assert_eq!(kv_get_json::<bool>(&pool, "flag").unwrap(), None);
    }
}
