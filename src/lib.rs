//! # Snippet Search
//!
//! Search front-end for a snippet documentation site. Pre-built content
//! (snippet data plus pre-rendered markdown) is loaded once; a free-text
//! query is matched case-insensitively against each snippet's title and
//! tags, and the matching snippets are rendered in their original order.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐   ┌──────────────┐   ┌───────────────┐
//! │ snippet_data.json│──▶│   content    │──▶│ SearchSession │
//! │ markdown.json    │   │  (assemble)  │   │   (filter)    │
//! └──────────────────┘   └──────────────┘   └──────┬────────┘
//!                                                  │ query / page
//!                            ┌─────────────────────┤
//!                            ▼                     ▼
//!                      ┌──────────┐          ┌────────────┐
//!                      │ CLI/HTTP │          │ StateStore │
//!                      └──────────┘          └────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! snip search grid                # run a query and remember it
//! snip search                     # rerun the remembered query
//! snip browse < queries.txt       # one query per line
//! snip get flexbox-centering      # full snippet
//! snip serve                      # JSON HTTP server
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`content`] | Loading content files |
//! | [`state_file`] | File-backed application state |
//! | [`search`] | `search` / `browse` commands and result rendering |
//! | [`get`] | Snippet lookup by id |
//! | [`server`] | HTTP server |
//!
//! The filter, models, and session live in [`snippet_search_core`].

pub mod config;
pub mod content;
pub mod get;
pub mod search;
pub mod server;
pub mod state_file;
