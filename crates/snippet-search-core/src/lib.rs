//! # Snippet Search Core
//!
//! Shared, I/O-free logic for Snippet Search: data models, content assembly,
//! the query filter, the application-state abstraction, and the interactive
//! search session.
//!
//! This crate contains no tokio, filesystem, or network dependencies. The
//! `snippet-search` crate supplies file-backed content loading and state
//! persistence on top of it.

pub mod content;
pub mod models;
pub mod search;
pub mod session;
pub mod state;
