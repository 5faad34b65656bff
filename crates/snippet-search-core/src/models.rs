//! Core data models used throughout Snippet Search.
//!
//! A [`Snippet`] is assembled once by the content loader and is read-only from
//! then on. Only `title` and `tags` are inspected by the search filter; the
//! remaining fields are display payloads handed through to renderers.

use serde::{Deserialize, Serialize};

/// A single documentation entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    /// Unique identifier, stable across queries.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub title: String,
    /// Lowercase descriptive tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Short description shown on the card.
    #[serde(default)]
    pub text: String,
    /// Source code blocks of the snippet.
    #[serde(default)]
    pub code: CodeBlocks,
    /// Browser support, in percent.
    #[serde(default)]
    pub support_percentage: Option<f64>,
    /// Pre-rendered markdown body.
    #[serde(default)]
    pub html: String,
}

/// The code payload of a snippet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBlocks {
    /// Demo markup.
    #[serde(default)]
    pub html: Option<String>,
    /// Stylesheet as shown to the reader.
    #[serde(default)]
    pub css: Option<String>,
    /// Optional script driving the demo.
    #[serde(default)]
    pub js: Option<String>,
    /// `css` rewritten with selectors scoped to the demo container. Only the
    /// site's live preview uses it.
    #[serde(default)]
    pub scoped_css: Option<String>,
}

impl CodeBlocks {
    /// Non-empty blocks as `(language, source)` pairs, in display order.
    ///
    /// `scoped_css` is never listed: it duplicates `css` for the live preview
    /// and is not meant to be read.
    pub fn blocks(&self) -> Vec<(&'static str, &str)> {
        [
            ("html", self.html.as_deref()),
            ("css", self.css.as_deref()),
            ("js", self.js.as_deref()),
        ]
        .into_iter()
        .filter_map(|(lang, src)| match src {
            Some(s) if !s.trim().is_empty() => Some((lang, s)),
            _ => None,
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let s: Snippet = serde_json::from_str(r#"{"id": "a"}"#).unwrap();
        assert_eq!(s.id, "a");
        assert!(s.title.is_empty());
        assert!(s.tags.is_empty());
        assert!(s.support_percentage.is_none());
    }

    #[test]
    fn test_code_blocks_skip_empty() {
        let code = CodeBlocks {
            html: Some("<div class=\"box\"></div>".to_string()),
            css: Some("  ".to_string()),
            js: None,
            scoped_css: Some(".x{}".to_string()),
        };
        let blocks = code.blocks();
        // blank css, missing js, and scoped_css are all left out
        assert_eq!(blocks, vec![("html", "<div class=\"box\"></div>")]);
    }
}
