//! In-memory [`StateStore`] implementation.
//!
//! Holds the state behind a `std::sync::RwLock`. Used for tests and whenever
//! no state file is configured; contents are lost when the process exits.

use std::sync::RwLock;

use anyhow::{anyhow, Result};

use super::{AppState, StateStore};

/// In-memory state store.
pub struct InMemoryStateStore {
    state: RwLock<AppState>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Start from a pre-existing state, e.g. a query from a previous session.
    pub fn with_state(state: AppState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    fn update(&self, f: impl FnOnce(AppState) -> AppState) -> Result<()> {
        let mut guard = self
            .state
            .write()
            .map_err(|_| anyhow!("state lock poisoned"))?;
        let current = std::mem::take(&mut *guard);
        *guard = f(current);
        Ok(())
    }
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for InMemoryStateStore {
    fn snapshot(&self) -> Result<AppState> {
        let guard = self
            .state
            .read()
            .map_err(|_| anyhow!("state lock poisoned"))?;
        Ok(guard.clone())
    }

    fn push_new_query(&self, query: &str) -> Result<()> {
        self.update(|s| s.with_query(query))
    }

    fn push_new_page(&self, title: &str, url: &str) -> Result<()> {
        self.update(|s| s.with_page(title, url))
    }

    fn reset(&self) -> Result<()> {
        self.update(|_| AppState::default())
    }
}
