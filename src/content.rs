//! File-backed content loading.
//!
//! Reads the snippet data file and the markdown node file named in
//! `[content]`, then hands both to
//! [`assemble`](snippet_search_core::content::assemble). The resulting list is
//! loaded once per process and never modified.

use anyhow::{Context, Result};
use std::path::Path;

use snippet_search_core::content::{assemble, MarkdownNode, SnippetDataFile};
use snippet_search_core::models::Snippet;

use crate::config::Config;

/// Load and join all snippets named by the config.
pub fn load_snippets(config: &Config) -> Result<Vec<Snippet>> {
    let data: SnippetDataFile = read_json(&config.content.snippets)?;
    let nodes: Vec<MarkdownNode> = read_json(&config.content.markdown)?;

    let snippets = assemble(data, &nodes).with_context(|| {
        format!(
            "Failed to assemble snippets from {}",
            config.content.snippets.display()
        )
    })?;

    tracing::info!(
        snippets = snippets.len(),
        markdown_nodes = nodes.len(),
        "content loaded"
    );
    Ok(snippets)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse content file: {}", path.display()))
}
