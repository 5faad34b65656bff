//! Snippet retrieval by ID.
//!
//! Used by both the `snip get` CLI command and `GET /snippets/{id}`.

use anyhow::{bail, Result};

use snippet_search_core::models::Snippet;

use crate::config::Config;
use crate::content;

/// Find a snippet by its id.
pub fn find_snippet<'a>(snippets: &'a [Snippet], id: &str) -> Result<&'a Snippet> {
    match snippets.iter().find(|s| s.id == id) {
        Some(s) => Ok(s),
        None => bail!("snippet not found: {}", id),
    }
}

/// CLI entry point: load content, find the snippet and print it.
pub fn run_get(config: &Config, id: &str, json: bool) -> Result<()> {
    let snippets = content::load_snippets(config)?;
    let snippet = match find_snippet(&snippets, id) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(snippet)?);
        return Ok(());
    }

    println!("--- Snippet ---");
    println!("id:       {}", snippet.id);
    println!("title:    {}", snippet.title);
    println!("tags:     {}", snippet.tags.join(", "));
    if let Some(pct) = snippet.support_percentage {
        println!("support:  {:.1}%", pct);
    }
    println!();

    if !snippet.text.is_empty() {
        println!("--- Text ---");
        println!("{}", snippet.text);
        println!();
    }

    let blocks = snippet.code.blocks();
    println!("--- Code ({}) ---", blocks.len());
    for (lang, src) in blocks {
        println!("[{}]", lang);
        println!("{}", src);
        println!();
    }

    if !snippet.html.is_empty() {
        println!("--- Html ---");
        println!("{}", snippet.html);
    }

    Ok(())
}
