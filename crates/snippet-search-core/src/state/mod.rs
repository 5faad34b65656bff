//! Application state shared across page views.
//!
//! The search page remembers the last query and the last visited page so they
//! survive navigation. Instead of a process-wide container, callers receive a
//! [`StateStore`] and hand it to whatever needs it (a [`SearchSession`], the
//! HTTP server).
//!
//! Implementations must be `Send + Sync` so a single store can back
//! concurrent HTTP handlers.
//!
//! | Method | Purpose |
//! |--------|---------|
//! | [`snapshot`](StateStore::snapshot) | Read the current state |
//! | [`push_new_query`](StateStore::push_new_query) | Record the latest search query |
//! | [`push_new_page`](StateStore::push_new_page) | Record a navigation event |
//! | [`reset`](StateStore::reset) | Restore the default state |
//!
//! [`SearchSession`]: crate::session::SearchSession

pub mod memory;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted UI state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub last_page_title: String,
    #[serde(default)]
    pub last_page_url: String,
    #[serde(default)]
    pub is_dark_mode: bool,
    /// Time of the last write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl AppState {
    pub fn with_query(mut self, query: &str) -> Self {
        self.search_query = query.to_string();
        self.updated_at = Some(Utc::now());
        self
    }

    pub fn with_page(mut self, title: &str, url: &str) -> Self {
        self.last_page_title = title.to_string();
        self.last_page_url = url.to_string();
        self.updated_at = Some(Utc::now());
        self
    }
}

/// Abstract backend for [`AppState`].
pub trait StateStore: Send + Sync {
    /// Return a copy of the current state.
    fn snapshot(&self) -> Result<AppState>;

    /// Record the latest search query.
    fn push_new_query(&self, query: &str) -> Result<()>;

    /// Record a navigation to the page `title` at `url`.
    fn push_new_page(&self, title: &str, url: &str) -> Result<()>;

    /// Restore the default state.
    fn reset(&self) -> Result<()>;
}
