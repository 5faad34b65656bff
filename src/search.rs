//! Search page: the `snip search` and `snip browse` commands.
//!
//! Both commands drive a [`SearchSession`]: `search` runs a single query,
//! `browse` treats each stdin line as the next keystroke-level update of the
//! query. The same [`SearchResponse`] shape is returned by `GET /search`.
//!
//! Plain-text output opens with the site splash (`[site].title` and
//! `[site].description`); JSON output carries it under `site`.

use anyhow::Result;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::sync::Arc;

use snippet_search_core::models::Snippet;
use snippet_search_core::session::{SearchSession, SearchView};

use crate::config::{Config, SiteConfig};
use crate::content;
use crate::state_file;

/// Short card shown for each result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetCard {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_percentage: Option<f64>,
}

impl From<&Snippet> for SnippetCard {
    fn from(s: &Snippet) -> Self {
        Self {
            id: s.id.clone(),
            title: s.title.clone(),
            tags: s.tags.clone(),
            text: s.text.clone(),
            support_percentage: s.support_percentage,
        }
    }
}

/// Splash header of the search page.
#[derive(Debug, Clone, Serialize)]
pub struct SiteHeader {
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl From<&SiteConfig> for SiteHeader {
    fn from(site: &SiteConfig) -> Self {
        Self {
            title: site.title.clone(),
            description: site.description.clone(),
        }
    }
}

/// Serializable rendering of a session's current view.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub site: SiteHeader,
    pub query: String,
    /// `prompt`, `no_results`, or `results`.
    pub view: &'static str,
    pub message: String,
    pub count: usize,
    pub results: Vec<SnippetCard>,
}

impl SearchResponse {
    pub fn from_session(session: &SearchSession, site: &SiteConfig) -> Self {
        let view = session.view();
        let results: Vec<SnippetCard> = match &view {
            SearchView::Results(items) => items.iter().map(|s| SnippetCard::from(*s)).collect(),
            _ => Vec::new(),
        };
        Self {
            site: SiteHeader::from(site),
            query: session.query().to_string(),
            view: view.kind(),
            message: view.message(),
            count: results.len(),
            results,
        }
    }
}

/// Open a session over the configured content and state store.
pub fn open_session(config: &Config) -> Result<SearchSession> {
    let snippets: Arc<[Snippet]> = content::load_snippets(config)?.into();
    let store = state_file::open_store(config);
    let session = SearchSession::new(snippets, store);
    session.mount();
    Ok(session)
}

/// CLI entry point for `snip search`.
///
/// Without a query, the last persisted query is reused.
pub fn run_search(config: &Config, query: Option<String>, json: bool) -> Result<()> {
    let mut session = open_session(config)?;
    if let Some(q) = query {
        session.set_query(&q);
    }

    let mut out = std::io::stdout().lock();
    if json {
        let response = SearchResponse::from_session(&session, &config.site);
        writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
    } else {
        print_splash(&mut out, &config.site)?;
        print_view(&mut out, &session.view())?;
    }
    Ok(())
}

/// CLI entry point for `snip browse`.
///
/// Reads queries line by line from `input` until EOF, printing the view after
/// each one.
pub fn run_browse(config: &Config, input: impl BufRead) -> Result<()> {
    let mut session = open_session(config)?;
    let mut out = std::io::stdout().lock();

    print_splash(&mut out, &config.site)?;
    if !session.query().is_empty() {
        writeln!(out, "(restored query: {})", session.query())?;
    }
    print_view(&mut out, &session.view())?;

    for line in input.lines() {
        let line = line?;
        session.set_query(&line);
        writeln!(out, "---")?;
        print_view(&mut out, &session.view())?;
    }
    Ok(())
}

/// Print the page title and, when set, the site description.
pub fn print_splash(out: &mut impl Write, site: &SiteConfig) -> Result<()> {
    writeln!(out, "{}", site.title)?;
    if !site.description.is_empty() {
        writeln!(out, "{}", site.description)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Render a view as plain text cards.
pub fn print_view(out: &mut impl Write, view: &SearchView<'_>) -> Result<()> {
    writeln!(out, "{}", view.message())?;

    if let SearchView::Results(items) = view {
        writeln!(out)?;
        writeln!(out, "Search results")?;
        writeln!(out)?;
        for (i, snippet) in items.iter().enumerate() {
            print_card(out, i + 1, snippet)?;
        }
    }
    Ok(())
}

fn print_card(out: &mut impl Write, position: usize, snippet: &Snippet) -> Result<()> {
    match snippet.support_percentage {
        Some(pct) => writeln!(out, "{}. {} [{:.1}% support]", position, snippet.title, pct)?,
        None => writeln!(out, "{}. {}", position, snippet.title)?,
    }
    if !snippet.tags.is_empty() {
        writeln!(out, "    tags: {}", snippet.tags.join(", "))?;
    }
    if !snippet.text.is_empty() {
        writeln!(out, "    {}", snippet.text.replace('\n', " ").trim())?;
    }
    writeln!(out, "    id: {}", snippet.id)?;
    writeln!(out)?;
    Ok(())
}
