//! Application state store.
//!
//! The store is the single source of truth for customers, sales, visits,
//! goals, settings and the session flag. Every mutation updates memory and
//! rewrites the affected key as one unit; there is no change observation and
//! no transaction spanning two keys.
//!
//! The store does not validate, transform or generate ids. That is left to
//! the callers (CLI forms and the interactive shell).

use crate::db::storage::{Storage, StorageKey};
use crate::errors::{AppError, AppResult};
use crate::models::{AppTheme, Customer, Goal, Sale, Settings, Visit};
use crate::ui::messages;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Light/dark presentation flag, driven by `settings.theme`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Presentation {
    dark: bool,
}

impl Presentation {
    pub fn is_dark(&self) -> bool {
        self.dark
    }
}

/// In-memory state slices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub customers: Vec<Customer>,
    pub sales: Vec<Sale>,
    pub visits: Vec<Visit>,
    pub goals: Vec<Goal>,
    pub settings: Settings,
    pub authenticated: bool,
}

pub struct Store<S: Storage> {
    storage: S,
    state: AppState,
    presentation: Presentation,
}

/// Read and parse one key. Absent keys yield `None`; malformed values fail.
fn read_key<S: Storage, T: DeserializeOwned>(storage: &S, key: StorageKey) -> AppResult<Option<T>> {
    match storage.get_item(key.as_str())? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| AppError::CorruptValue {
                key: key.as_str().to_string(),
                source,
            }),
        None => Ok(None),
    }
}

/// Serialize the whole value and overwrite its key.
///
/// A document that would not load back (non-finite floats serialize as
/// `null`) is refused and the stored value is left as it was.
fn write_key<S: Storage, T: Serialize + DeserializeOwned>(
    storage: &mut S,
    key: StorageKey,
    value: &T,
) -> AppResult<()> {
    let to_err = |source: serde_json::Error| AppError::Serialize {
        key: key.as_str().to_string(),
        source,
    };
    let raw = serde_json::to_string(value).map_err(to_err)?;
    serde_json::from_str::<T>(&raw).map_err(to_err)?;
    storage.set_item(key.as_str(), &raw)
}

/// Truthiness of a stored auth value: `false`, `0`, `""` and `null` are
/// logged out, anything else is logged in.
fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl<S: Storage> Store<S> {
    /// Rehydrate every collection from `storage`.
    ///
    /// Keys that are absent keep their defaults. A malformed value aborts the
    /// load with [`AppError::CorruptValue`]. Collections are not cross-checked.
    pub fn load(storage: S) -> AppResult<Self> {
        let mut state = AppState::default();

        if let Some(v) = read_key(&storage, StorageKey::Customers)? {
            state.customers = v;
        }
        if let Some(v) = read_key(&storage, StorageKey::Sales)? {
            state.sales = v;
        }
        if let Some(v) = read_key(&storage, StorageKey::Visits)? {
            state.visits = v;
        }
        if let Some(v) = read_key(&storage, StorageKey::Goals)? {
            state.goals = v;
        }
        if let Some(v) = read_key::<S, serde_json::Value>(&storage, StorageKey::Auth)? {
            state.authenticated = is_truthy(&v);
        }
        if let Some(v) = read_key(&storage, StorageKey::Settings)? {
            state.settings = v;
        }

        let mut store = Self {
            storage,
            state,
            presentation: Presentation::default(),
        };
        store.apply_theme();
        Ok(store)
    }

    fn apply_theme(&mut self) {
        self.presentation.dark = self.state.settings.theme == AppTheme::Dark;
        messages::set_dark_palette(self.presentation.dark);
    }

    // ---------------------------
    // Read access
    // ---------------------------

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn customers(&self) -> &[Customer] {
        &self.state.customers
    }

    pub fn sales(&self) -> &[Sale] {
        &self.state.sales
    }

    pub fn visits(&self) -> &[Visit] {
        &self.state.visits
    }

    pub fn goals(&self) -> &[Goal] {
        &self.state.goals
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.authenticated
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.state.customers.iter().find(|c| c.id == id)
    }

    pub fn sale(&self, id: &str) -> Option<&Sale> {
        self.state.sales.iter().find(|s| s.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    // ---------------------------
    // Mutations (update + persist)
    // ---------------------------

    pub fn set_customers(&mut self, customers: Vec<Customer>) -> AppResult<()> {
        self.update_customers(|c| *c = customers)
    }

    pub fn update_customers<F>(&mut self, f: F) -> AppResult<()>
    where
        F: FnOnce(&mut Vec<Customer>),
    {
        f(&mut self.state.customers);
        write_key(&mut self.storage, StorageKey::Customers, &self.state.customers)
    }

    pub fn set_sales(&mut self, sales: Vec<Sale>) -> AppResult<()> {
        self.update_sales(|s| *s = sales)
    }

    pub fn update_sales<F>(&mut self, f: F) -> AppResult<()>
    where
        F: FnOnce(&mut Vec<Sale>),
    {
        f(&mut self.state.sales);
        write_key(&mut self.storage, StorageKey::Sales, &self.state.sales)
    }

    pub fn set_visits(&mut self, visits: Vec<Visit>) -> AppResult<()> {
        self.update_visits(|v| *v = visits)
    }

    pub fn update_visits<F>(&mut self, f: F) -> AppResult<()>
    where
        F: FnOnce(&mut Vec<Visit>),
    {
        f(&mut self.state.visits);
        write_key(&mut self.storage, StorageKey::Visits, &self.state.visits)
    }

    pub fn set_goals(&mut self, goals: Vec<Goal>) -> AppResult<()> {
        self.update_goals(|g| *g = goals)
    }

    pub fn update_goals<F>(&mut self, f: F) -> AppResult<()>
    where
        F: FnOnce(&mut Vec<Goal>),
    {
        f(&mut self.state.goals);
        write_key(&mut self.storage, StorageKey::Goals, &self.state.goals)
    }

    /// Replace settings; the presentation flag follows the new theme.
    pub fn set_settings(&mut self, settings: Settings) -> AppResult<()> {
        self.update_settings(|s| *s = settings)
    }

    pub fn update_settings<F>(&mut self, f: F) -> AppResult<()>
    where
        F: FnOnce(&mut Settings),
    {
        f(&mut self.state.settings);
        self.apply_theme();
        write_key(&mut self.storage, StorageKey::Settings, &self.state.settings)
    }

    pub fn toggle_theme(&mut self) -> AppResult<AppTheme> {
        self.update_settings(|s| s.theme = s.theme.toggled())?;
        Ok(self.state.settings.theme)
    }

    pub fn set_authenticated(&mut self, authenticated: bool) -> AppResult<()> {
        self.state.authenticated = authenticated;
        write_key(&mut self.storage, StorageKey::Auth, &self.state.authenticated)
    }

    /// Rewrite all six keys from memory.
    pub fn save_all(&mut self) -> AppResult<()> {
        write_key(&mut self.storage, StorageKey::Customers, &self.state.customers)?;
        write_key(&mut self.storage, StorageKey::Sales, &self.state.sales)?;
        write_key(&mut self.storage, StorageKey::Visits, &self.state.visits)?;
        write_key(&mut self.storage, StorageKey::Goals, &self.state.goals)?;
        write_key(&mut self.storage, StorageKey::Settings, &self.state.settings)?;
        write_key(&mut self.storage, StorageKey::Auth, &self.state.authenticated)
    }
}
