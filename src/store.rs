use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::db::kv;
use crate::errors::AppError;

pub const WORKERS_KEY: &str = "hlb_workers_v1";
pub const BOOKINGS_KEY: &str = "hlb_bookings_v1";

/// Typed view over the key-value store. Each record is a whole collection
/// serialized as one JSON array, replaced atomically by a single-key write.
pub struct StoreAdapter<'a> {
    conn: &'a Connection,
}

impl<'a> StoreAdapter<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn contains(&self, key: &str) -> Result<bool, AppError> {
        Ok(kv::get(self.conn, key)?.is_some())
    }

    /// Loads the collection stored under `key`. A missing record yields the
    /// fallback without writing it; a record that fails to parse is replaced
    /// by the fallback (self-healing) and never surfaced as an error.
    pub fn load_or_else<T, F>(&self, key: &str, fallback: F) -> Result<Vec<T>, AppError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        let raw = match kv::get(self.conn, key)? {
            Some(raw) => raw,
            None => return Ok(fallback()),
        };

        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!("corrupted record under {key} ({e}), restoring fallback");
                let items = fallback();
                self.save(key, &items)?;
                Ok(items)
            }
        }
    }

    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), AppError> {
        let raw = serde_json::to_string(items)?;
        kv::set(self.conn, key, &raw)
    }

    pub fn clear(&self, key: &str) -> Result<(), AppError> {
        kv::clear(self.conn, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::models::{default_workers, Worker};

    #[test]
    fn test_round_trip() {
        let conn = db::init_db(":memory:").unwrap();
        let store = StoreAdapter::new(&conn);
        let workers = default_workers();

        store.save(WORKERS_KEY, &workers).unwrap();
        let loaded: Vec<Worker> = store.load_or_else(WORKERS_KEY, Vec::new).unwrap();

        assert_eq!(loaded.len(), workers.len());
        assert_eq!(loaded[0].id, workers[0].id);
        assert_eq!(loaded[5].rate, workers[5].rate);
    }

    #[test]
    fn test_missing_record_yields_fallback_without_write() {
        let conn = db::init_db(":memory:").unwrap();
        let store = StoreAdapter::new(&conn);

        let loaded: Vec<Worker> = store.load_or_else(WORKERS_KEY, default_workers).unwrap();
        assert_eq!(loaded.len(), 6);
        assert!(!store.contains(WORKERS_KEY).unwrap());
    }

    #[test]
    fn test_corrupt_record_is_healed() {
        let conn = db::init_db(":memory:").unwrap();
        let store = StoreAdapter::new(&conn);

        kv::set(&conn, WORKERS_KEY, "{not json").unwrap();

        let loaded: Vec<Worker> = store.load_or_else(WORKERS_KEY, default_workers).unwrap();
        assert_eq!(loaded.len(), 6);

        // The fallback must now be what is persisted.
        let again: Vec<Worker> = store.load_or_else(WORKERS_KEY, Vec::new).unwrap();
        assert_eq!(again.len(), 6);
    }

    #[test]
    fn test_clear() {
        let conn = db::init_db(":memory:").unwrap();
        let store = StoreAdapter::new(&conn);

        store.save(WORKERS_KEY, &default_workers()).unwrap();
        store.clear(WORKERS_KEY).unwrap();
        assert!(!store.contains(WORKERS_KEY).unwrap());
    }
}
