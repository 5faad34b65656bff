//! Content assembly.
//!
//! The site build produces two independent collections: the snippet data file
//! (titles, tags, code, browser support) and the pre-rendered markdown nodes.
//! [`assemble`] joins them by title into [`Snippet`] records. Every snippet
//! must have a markdown node; a missing one fails the load instead of reaching
//! the search filter.

use anyhow::{bail, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

use crate::models::{CodeBlocks, Snippet};

/// The `meta.type` value expected on a snippet data file.
pub const SNIPPET_ARRAY_TYPE: &str = "snippetArray";

/// Top-level shape of the snippet data file.
#[derive(Debug, Clone, Deserialize)]
pub struct SnippetDataFile {
    #[serde(default)]
    pub meta: Option<DataMeta>,
    #[serde(default)]
    pub data: Vec<SnippetEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataMeta {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnippetEntry {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub attributes: SnippetAttributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetAttributes {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub code_blocks: CodeBlocks,
    #[serde(default)]
    pub browser_support: BrowserSupport,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserSupport {
    #[serde(default)]
    pub support_percentage: Option<f64>,
}

/// A pre-rendered markdown document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownNode {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub raw_markdown_body: Option<String>,
    #[serde(default)]
    pub fields: Option<NodeFields>,
    pub frontmatter: Frontmatter,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeFields {
    pub slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Frontmatter {
    pub title: String,
    #[serde(default)]
    pub tags: Option<String>,
}

/// Join snippet entries with their markdown nodes.
///
/// Output order is data-file order. Fails on a wrong `meta.type`, a duplicate
/// snippet id, or a snippet without a markdown node of the same title.
pub fn assemble(data: SnippetDataFile, nodes: &[MarkdownNode]) -> Result<Vec<Snippet>> {
    if let Some(meta) = &data.meta {
        if meta.kind != SNIPPET_ARRAY_TYPE {
            bail!(
                "unexpected snippet data type '{}', expected '{}'",
                meta.kind,
                SNIPPET_ARRAY_TYPE
            );
        }
    }

    // First node wins when titles repeat.
    let mut by_title: HashMap<&str, &MarkdownNode> = HashMap::new();
    for node in nodes {
        by_title.entry(node.frontmatter.title.as_str()).or_insert(node);
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut snippets = Vec::with_capacity(data.data.len());

    for entry in data.data {
        if !seen.insert(entry.id.clone()) {
            bail!("duplicate snippet id: {}", entry.id);
        }

        let node = match by_title.get(entry.title.as_str()) {
            Some(n) => n,
            None => bail!("no markdown node found for snippet '{}'", entry.title),
        };

        snippets.push(Snippet {
            id: entry.id,
            title: entry.title,
            tags: entry.attributes.tags,
            text: entry.attributes.text,
            code: entry.attributes.code_blocks,
            support_percentage: entry.attributes.browser_support.support_percentage,
            html: node.html.clone(),
        });
    }

    Ok(snippets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_json() -> &'static str {
        r#"{
            "meta": { "type": "snippetArray" },
            "data": [
                {
                    "id": "flexbox-centering",
                    "title": "Flexbox centering",
                    "attributes": {
                        "tags": ["layout", "flexbox"],
                        "text": "Horizontally and vertically centers a child element.",
                        "codeBlocks": { "html": "<div class=\"flexbox-centering\"></div>", "css": ".flexbox-centering { display: flex; }", "js": "", "scopedCss": "" },
                        "browserSupport": { "supportPercentage": 97.5 }
                    }
                },
                {
                    "id": "grid-centering",
                    "title": "Grid centering",
                    "attributes": { "tags": ["layout", "grid"] }
                }
            ]
        }"#
    }

    fn nodes_json() -> &'static str {
        r#"[
            { "html": "<p>grid</p>", "frontmatter": { "title": "Grid centering", "tags": "layout,grid" } },
            { "html": "<p>flex</p>", "fields": { "slug": "/snippet/flexbox-centering" }, "frontmatter": { "title": "Flexbox centering" } }
        ]"#
    }

    #[test]
    fn test_assemble_joins_by_title() {
        let data: SnippetDataFile = serde_json::from_str(data_json()).unwrap();
        let nodes: Vec<MarkdownNode> = serde_json::from_str(nodes_json()).unwrap();
        let snippets = assemble(data, &nodes).unwrap();

        assert_eq!(snippets.len(), 2);
        assert_eq!(snippets[0].id, "flexbox-centering");
        assert_eq!(snippets[0].html, "<p>flex</p>");
        assert_eq!(snippets[0].support_percentage, Some(97.5));
        assert_eq!(snippets[0].tags, vec!["layout", "flexbox"]);
        assert_eq!(snippets[1].html, "<p>grid</p>");
        assert!(snippets[1].text.is_empty());
    }

    #[test]
    fn test_assemble_missing_node_fails() {
        let data: SnippetDataFile = serde_json::from_str(data_json()).unwrap();
        let nodes: Vec<MarkdownNode> = serde_json::from_str(
            r#"[{ "html": "", "frontmatter": { "title": "Grid centering" } }]"#,
        )
        .unwrap();
        let err = assemble(data, &nodes).unwrap_err();
        assert!(err.to_string().contains("Flexbox centering"));
    }

    #[test]
    fn test_assemble_duplicate_id_fails() {
        let data: SnippetDataFile = serde_json::from_str(
            r#"{ "data": [
                { "id": "a", "title": "Grid centering" },
                { "id": "a", "title": "Grid centering" }
            ] }"#,
        )
        .unwrap();
        let nodes: Vec<MarkdownNode> = serde_json::from_str(nodes_json()).unwrap();
        let err = assemble(data, &nodes).unwrap_err();
        assert!(err.to_string().contains("duplicate snippet id"));
    }

    #[test]
    fn test_assemble_wrong_meta_type_fails() {
        let data: SnippetDataFile =
            serde_json::from_str(r#"{ "meta": { "type": "snippet" }, "data": [] }"#).unwrap();
        assert!(assemble(data, &[]).is_err());
    }

    #[test]
    fn test_assemble_empty() {
        let data: SnippetDataFile = serde_json::from_str(r#"{ "data": [] }"#).unwrap();
        assert!(assemble(data, &[]).unwrap().is_empty());
    }
}
