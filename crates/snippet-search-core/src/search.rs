//! Snippet filter: case-insensitive substring match over title and tags.
//!
//! The filter is a pure function of a snippet slice and a query string. It
//! never reorders, scores, or mutates its input; the result is the stable
//! subsequence of snippets satisfying [`matches`].
//!
//! # Matching Rules
//!
//! 1. Trim the query. An empty trimmed query matches everything (identity).
//! 2. Lowercase the trimmed query to form the needle.
//! 3. A snippet matches if any tag contains the needle, or its lowercased
//!    title contains the needle.

use crate::models::Snippet;

/// Trim and lowercase a raw query.
///
/// Returns `None` when the trimmed query is empty, meaning "no filtering".
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Match predicate against an already-normalized needle.
pub fn matches(snippet: &Snippet, needle: &str) -> bool {
    snippet
        .tags
        .iter()
        .any(|t| t.to_lowercase().contains(needle))
        || snippet.title.to_lowercase().contains(needle)
}

/// Positions of the snippets matching `query`, ascending.
pub fn filter_indices(snippets: &[Snippet], query: &str) -> Vec<usize> {
    match normalize_query(query) {
        None => (0..snippets.len()).collect(),
        Some(needle) => snippets
            .iter()
            .enumerate()
            .filter(|(_, s)| matches(s, &needle))
            .map(|(i, _)| i)
            .collect(),
    }
}

/// Return the snippets matching `query`, in input order.
pub fn filter<'a>(snippets: &'a [Snippet], query: &str) -> Vec<&'a Snippet> {
    filter_indices(snippets, query)
        .into_iter()
        .map(|i| &snippets[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_snippet(id: &str, title: &str, tags: &[&str]) -> Snippet {
        Snippet {
            id: id.to_string(),
            title: title.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn fixture() -> Vec<Snippet> {
        vec![
            make_snippet("flex-center", "Flex Center", &["flexbox", "layout"]),
            make_snippet("grid-areas", "Grid Areas", &["grid", "layout"]),
            make_snippet("custom-scrollbar", "Custom scrollbar", &["visual", "webkit"]),
            make_snippet("css-variables", "CSS variables", &["css", "visual"]),
            make_snippet("grid-centering", "Grid centering", &["layout"]),
        ]
    }

    fn ids(results: &[&Snippet]) -> Vec<String> {
        results.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn test_example_layout_keeps_order() {
        let list = fixture();
        let list = &list[..2];
        let results = filter(list, "layout");
        assert_eq!(ids(&results), vec!["flex-center", "grid-areas"]);
    }

    #[test]
    fn test_example_grid() {
        let list = fixture();
        let results = filter(&list[..2], "grid");
        assert_eq!(ids(&results), vec!["grid-areas"]);
    }

    #[test]
    fn test_example_no_match() {
        let list = fixture();
        assert!(filter(&list[..2], "zzz").is_empty());
    }

    #[test]
    fn test_empty_query_is_identity() {
        let list = fixture();
        let results = filter(&list, "");
        assert_eq!(results.len(), list.len());
        for (got, want) in results.iter().zip(list.iter()) {
            assert!(std::ptr::eq(*got, want));
        }
    }

    #[test]
    fn test_whitespace_query_is_identity() {
        let list = fixture();
        assert_eq!(filter(&list, " \t ").len(), list.len());
    }

    #[test]
    fn test_empty_list() {
        assert!(filter(&[], "grid").is_empty());
        assert!(filter(&[], "").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let list = fixture();
        assert_eq!(ids(&filter(&list, "CSS")), ids(&filter(&list, "css")));
        assert_eq!(ids(&filter(&list, "CSS")), vec!["css-variables"]);
    }

    #[test]
    fn test_whitespace_insensitive() {
        let list = fixture();
        assert_eq!(ids(&filter(&list, "  grid  ")), ids(&filter(&list, "grid")));
    }

    #[test]
    fn test_title_substring() {
        let list = fixture();
        // "scroll" appears in a title only
        assert_eq!(ids(&filter(&list, "scroll")), vec!["custom-scrollbar"]);
    }

    #[test]
    fn test_tag_substring() {
        let list = fixture();
        // "kit" matches inside the "webkit" tag
        assert_eq!(ids(&filter(&list, "kit")), vec!["custom-scrollbar"]);
    }

    #[test]
    fn test_order_preserved() {
        let list = fixture();
        let results = ids(&filter(&list, "grid"));
        assert_eq!(results, vec!["grid-areas", "grid-centering"]);
    }

    #[test]
    fn test_idempotent() {
        let list = fixture();
        assert_eq!(ids(&filter(&list, "visual")), ids(&filter(&list, "visual")));
    }

    #[test]
    fn test_sound_and_complete() {
        let list = fixture();
        for q in ["layout", "grid", "Visual", " css ", "e", "zzz"] {
            let needle = normalize_query(q).unwrap();
            let kept = filter(&list, q);
            for s in &kept {
                assert!(matches(s, &needle), "{} kept for {:?}", s.id, q);
            }
            for s in &list {
                if !kept.iter().any(|k| std::ptr::eq(*k, s)) {
                    assert!(!matches(s, &needle), "{} dropped for {:?}", s.id, q);
                }
            }
        }
    }

    #[test]
    fn test_missing_fields_never_match() {
        let list = vec![Snippet {
            id: "bare".to_string(),
            ..Default::default()
        }];
        assert!(filter(&list, "a").is_empty());
        assert_eq!(filter(&list, "").len(), 1);
    }

    #[test]
    fn test_filter_indices_agree_with_filter() {
        let list = fixture();
        assert_eq!(filter_indices(&list, "grid"), vec![1, 4]);
        assert_eq!(filter_indices(&list, "  "), vec![0, 1, 2, 3, 4]);
        for q in ["layout", "VISUAL", "zzz", ""] {
            let via_indices: Vec<&str> = filter_indices(&list, q)
                .into_iter()
                .map(|i| list[i].id.as_str())
                .collect();
            let via_filter: Vec<&str> = filter(&list, q).iter().map(|s| s.id.as_str()).collect();
            assert_eq!(via_indices, via_filter, "query {:?}", q);
        }
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query(" Grid "), Some("grid".to_string()));
    }
}
