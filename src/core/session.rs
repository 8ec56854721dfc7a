//! Session gate: a persisted boolean that guards every content command.

use crate::core::store::Store;
use crate::db::storage::Storage;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Unauthenticated => "logged out",
            SessionState::Authenticated => "logged in",
        }
    }
}

pub struct SessionGate;

impl SessionGate {
    pub fn state<S: Storage>(store: &Store<S>) -> SessionState {
        if store.is_authenticated() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }

    /// Open the gate. Credentials, if any, are checked by the caller.
    pub fn login<S: Storage>(store: &mut Store<S>) -> AppResult<()> {
        store.set_authenticated(true)
    }

    pub fn logout<S: Storage>(store: &mut Store<S>) -> AppResult<()> {
        store.set_authenticated(false)
    }

    pub fn require<S: Storage>(store: &Store<S>) -> AppResult<()> {
        match Self::state(store) {
            SessionState::Authenticated => Ok(()),
            SessionState::Unauthenticated => Err(AppError::NotAuthenticated),
        }
    }
}
