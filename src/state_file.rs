//! JSON-file [`StateStore`].
//!
//! The whole [`AppState`] is rewritten on every push so the last query and
//! last page survive restarts of the `snip` process. A missing file reads as
//! the default state; parent directories are created on first write.

use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use snippet_search_core::state::memory::InMemoryStateStore;
use snippet_search_core::state::{AppState, StateStore};

use crate::config::Config;

pub struct FileStateStore {
    path: PathBuf,
    // Serializes read-modify-write cycles.
    lock: Mutex<()>,
}

impl FileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read(&self) -> Result<AppState> {
        if !self.path.exists() {
            return Ok(AppState::default());
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read state file: {}", self.path.display()))?;
        if raw.trim().is_empty() {
            return Ok(AppState::default());
        }
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse state file: {}", self.path.display()))
    }

    fn write(&self, state: &AppState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create state directory: {}", parent.display())
                })?;
            }
        }
        let body = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, body)
            .with_context(|| format!("Failed to write state file: {}", self.path.display()))
    }

    fn update(&self, f: impl FnOnce(AppState) -> AppState) -> Result<()> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| anyhow!("state lock poisoned"))?;
        let next = f(self.read()?);
        self.write(&next)
    }
}

impl StateStore for FileStateStore {
    fn snapshot(&self) -> Result<AppState> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| anyhow!("state lock poisoned"))?;
        self.read()
    }

    fn push_new_query(&self, query: &str) -> Result<()> {
        self.update(|s| s.with_query(query))
    }

    fn push_new_page(&self, title: &str, url: &str) -> Result<()> {
        self.update(|s| s.with_page(title, url))
    }

    fn reset(&self) -> Result<()> {
        // No read: a corrupt file must still be resettable.
        let _guard = self
            .lock
            .lock()
            .map_err(|_| anyhow!("state lock poisoned"))?;
        self.write(&AppState::default())
    }
}

/// Build the store selected by `[state]`: file-backed when a path is set,
/// otherwise in-memory.
pub fn open_store(config: &Config) -> Arc<dyn StateStore> {
    match &config.state.path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using file state store");
            Arc::new(FileStateStore::new(path.clone()))
        }
        None => Arc::new(InMemoryStateStore::new()),
    }
}

/// CLI entry point for `snip state`.
pub fn run_state(config: &Config, clear: bool) -> Result<()> {
    let store = open_store(config);
    if clear {
        store.reset()?;
        println!("State cleared.");
        return Ok(());
    }

    let state = store.snapshot()?;
    let show = |v: &str| if v.is_empty() { "(none)".to_string() } else { v.to_string() };
    println!("search_query:    {}", show(&state.search_query));
    println!("last_page_title: {}", show(&state.last_page_title));
    println!("last_page_url:   {}", show(&state.last_page_url));
    println!("dark_mode:       {}", state.is_dark_mode);
    if let Some(ts) = state.updated_at {
        println!("updated_at:      {}", ts.format("%Y-%m-%dT%H:%M:%SZ"));
    }
    Ok(())
}
