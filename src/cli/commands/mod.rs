pub mod aftersales;
pub mod backup;
pub mod config;
pub mod customer;
pub mod dashboard;
pub mod db;
pub mod export;
pub mod goal;
pub mod init;
pub mod log;
pub mod sale;
pub mod session;
pub mod settings;
pub mod visit;

use crate::config::Config;
use crate::core::session::SessionGate;
use crate::core::store::Store;
use crate::db::log::ttlog;
use crate::db::storage::SqliteStorage;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub type AppStore = Store<SqliteStorage>;

/// Open the configured database and rehydrate the store.
pub fn open_store(cfg: &Config) -> AppResult<AppStore> {
    let storage = SqliteStorage::open(&cfg.database)?;
    Store::load(storage)
}

/// Same as [`open_store`], but only behind an open session.
pub fn open_session(cfg: &Config) -> AppResult<AppStore> {
    let store = open_store(cfg)?;
    SessionGate::require(&store)?;
    Ok(store)
}

/// Write to the internal log. Failures only warn.
pub fn log_op(store: &AppStore, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(store.storage().conn(), operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
