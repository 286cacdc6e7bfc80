//! Keyword search over extracted provisions.
//!
//! Plain case-insensitive substring matching with a two-tier relevance tag:
//! a hit in the title outranks a hit found only in the identifier or body.
//! Results keep store encounter order within a tier (stable sort) and are
//! capped at [`MAX_RESULTS`].

use crate::error::{RegulatoryError, Result};
use crate::extract::Provision;
use crate::framework::Framework;
use crate::store::DocumentStore;
use serde::Serialize;

/// Hard cap on returned results.
pub const MAX_RESULTS: usize = 20;

/// Snippet length carried on each result for display and prompt context.
pub const SNIPPET_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relevance {
    High,
    Medium,
}

impl Relevance {
    /// Numeric score used for ordering and the wire format.
    pub fn score(&self) -> u32 {
        match self {
            Relevance::High => 2,
            Relevance::Medium => 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub framework: Framework,
    pub id: String,
    pub title: String,
    pub snippet: String,
    pub relevance: Relevance,
    pub filename: String,
}

impl SearchResult {
    pub fn score(&self) -> u32 {
        self.relevance.score()
    }
}

/// Search one framework or all three for a query substring.
///
/// An empty (or whitespace-only) query is a caller error, rejected before
/// any scanning happens.
pub fn search(
    store: &DocumentStore,
    query: &str,
    framework: Option<Framework>,
) -> Result<Vec<SearchResult>> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(RegulatoryError::InvalidParams {
            message: "search query must not be empty".to_string(),
        });
    }
    let needle = trimmed.to_lowercase();

    let frameworks: &[Framework] = match &framework {
        Some(fw) => std::slice::from_ref(fw),
        None => &Framework::ALL,
    };

    let mut results = Vec::new();
    for &fw in frameworks {
        for doc in store.documents(fw) {
            for provision in &doc.provisions {
                if let Some(relevance) = match_provision(provision, &needle) {
                    results.push(SearchResult {
                        framework: fw,
                        id: provision.id.clone(),
                        title: provision.title.clone(),
                        snippet: provision.snippet(SNIPPET_CHARS),
                        relevance,
                        filename: doc.filename.clone(),
                    });
                }
            }
        }
    }

    // Stable sort: ties keep encounter order
    results.sort_by(|a, b| b.score().cmp(&a.score()));
    results.truncate(MAX_RESULTS);
    Ok(results)
}

fn match_provision(provision: &Provision, needle: &str) -> Option<Relevance> {
    if provision.title.to_lowercase().contains(needle) {
        Some(Relevance::High)
    } else if provision.id.to_lowercase().contains(needle)
        || provision.body.to_lowercase().contains(needle)
    {
        Some(Relevance::Medium)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ProvisionKind;
    use crate::store::StoredDocument;
    use serde_json::json;

    fn store_with(provisions: Vec<(&str, &str, &str)>) -> DocumentStore {
        let mut store = DocumentStore::default();
        store.push(StoredDocument {
            framework: Framework::Lccp,
            filename: "lccp-test.json".to_string(),
            raw: json!({}),
            provisions: provisions
                .into_iter()
                .map(|(id, title, body)| Provision {
                    id: id.to_string(),
                    title: title.to_string(),
                    body: body.to_string(),
                    category: String::new(),
                    kind: ProvisionKind::Condition,
                })
                .collect(),
        });
        store
    }

    #[test]
    fn empty_query_is_a_caller_error() {
        let store = store_with(vec![]);
        assert!(search(&store, "", None).is_err());
        assert!(search(&store, "   ", None).is_err());
    }

    #[test]
    fn title_match_outranks_body_match() {
        let store = store_with(vec![
            ("1.1", "Licensing basics", "customer funds must be protected"),
            ("1.2", "Customer funds", "segregation requirements"),
        ]);
        let results = search(&store, "customer funds", None).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "1.2");
        assert_eq!(results[0].relevance, Relevance::High);
        assert_eq!(results[1].id, "1.1");
        assert_eq!(results[1].relevance, Relevance::Medium);
    }

    #[test]
    fn ties_keep_encounter_order() {
        let store = store_with(vec![
            ("a", "deposit limits", ""),
            ("b", "deposit limits again", ""),
            ("c", "deposit limits once more", ""),
        ]);
        let results = search(&store, "deposit", None).unwrap();
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn capped_at_max_results() {
        let provisions: Vec<(String, String, String)> = (0..30)
            .map(|i| (format!("id-{i}"), format!("wagering rule {i}"), String::new()))
            .collect();
        let store = store_with(
            provisions
                .iter()
                .map(|(a, b, c)| (a.as_str(), b.as_str(), c.as_str()))
                .collect(),
        );
        let results = search(&store, "wagering", None).unwrap();
        assert_eq!(results.len(), MAX_RESULTS);
    }

    #[test]
    fn framework_filter_restricts_scope() {
        let mut store = store_with(vec![("1.1", "Reporting", "annual returns")]);
        store.push(StoredDocument {
            framework: Framework::Rts,
            filename: "rts-aim-1.json".to_string(),
            raw: json!({}),
            provisions: vec![Provision {
                id: "RTS-1".to_string(),
                title: "Reporting interface".to_string(),
                body: String::new(),
                category: String::new(),
                kind: ProvisionKind::Aim,
            }],
        });
        let all = search(&store, "reporting", None).unwrap();
        assert_eq!(all.len(), 2);
        let rts_only = search(&store, "reporting", Some(Framework::Rts)).unwrap();
        assert_eq!(rts_only.len(), 1);
        assert_eq!(rts_only[0].framework, Framework::Rts);
    }
}
