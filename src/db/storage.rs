//! Key-value storage medium behind the state store.
//!
//! The medium mirrors browser `localStorage`: string keys, string values,
//! whole documents overwritten on every write. [`SqliteStorage`] keeps the
//! items in the `local_storage` table; [`MemoryStorage`] keeps them in a map.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use std::collections::BTreeMap;

/// The six persisted keys, one per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Customers,
    Sales,
    Visits,
    Goals,
    Settings,
    Auth,
}

impl StorageKey {
    pub const ALL: [StorageKey; 6] = [
        StorageKey::Customers,
        StorageKey::Sales,
        StorageKey::Visits,
        StorageKey::Goals,
        StorageKey::Settings,
        StorageKey::Auth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Customers => "controlarva_customers",
            StorageKey::Sales => "controlarva_sales",
            StorageKey::Visits => "controlarva_visits",
            StorageKey::Goals => "controlarva_goals",
            StorageKey::Settings => "controlarva_settings",
            StorageKey::Auth => "controlarva_auth",
        }
    }

    /// Accepts the full key or its short name ("sales", "auth", ...).
    pub fn parse(s: &str) -> AppResult<Self> {
        let needle = s.trim().to_lowercase();
        StorageKey::ALL
            .into_iter()
            .find(|k| k.as_str() == needle || k.as_str().trim_start_matches("controlarva_") == needle)
            .ok_or(AppError::UnknownKey(needle))
    }
}

pub trait Storage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove_item(&mut self, key: &str) -> AppResult<()>;
    fn keys(&self) -> AppResult<Vec<String>>;
}

// ---------------------------
// SQLite medium
// ---------------------------

pub struct SqliteStorage {
    pool: DbPool,
}

impl SqliteStorage {
    /// Open the database file and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }

    pub fn conn(&self) -> &rusqlite::Connection {
        &self.pool.conn
    }
}

impl Storage for SqliteStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM local_storage WHERE key = ?1")?;
        let value = stmt
            .query_row([key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        let mut stmt = self.pool.conn.prepare_cached(
            "INSERT INTO local_storage (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )?;
        stmt.execute(params![key, value, now])?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM local_storage WHERE key = ?1", [key])?;
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare("SELECT key FROM local_storage ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

// ---------------------------
// In-memory medium
// ---------------------------

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
    full: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// While full, every write fails with [`AppError::StorageFull`].
    pub fn set_full(&mut self, full: bool) {
        self.full = full;
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.full {
            return Err(AppError::StorageFull(key.to_string()));
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        self.items.remove(key);
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.items.keys().cloned().collect())
    }
}
