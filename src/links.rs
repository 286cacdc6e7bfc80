//! Documentation-URL resolution and reference-link formatting.
//!
//! The `url_mapping` index document maps framework-prefixed keys
//! (`"RTS_12"`, `"LCCP_4.1.1"`) to `{url, title}` entries. Keys are exact,
//! case-sensitive strings; the resolver tries an ordered list of candidate
//! spellings per framework and the first present key wins. A miss is a plain
//! unlinked label, never an error.

use crate::framework::Framework;
use crate::store::DocumentStore;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Filename stem of the URL mapping index document.
pub const URL_MAPPING_INDEX: &str = "url_mapping";

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)").unwrap());

#[derive(Debug, Default, Deserialize)]
struct UrlMappingDocument {
    #[serde(default)]
    mappings: HashMap<String, UrlEntry>,
}

/// One mapping target: the external documentation page for a provision.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UrlEntry {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
}

/// Typed view over the URL mapping, built once per lookup batch.
#[derive(Debug, Default)]
pub struct UrlMap {
    mappings: HashMap<String, UrlEntry>,
}

impl UrlMap {
    /// `None` when the `url_mapping` index document was never loaded.
    pub fn from_store(store: &DocumentStore) -> Option<Self> {
        let raw = store.index(URL_MAPPING_INDEX)?;
        let doc: UrlMappingDocument = serde_json::from_value(raw.clone()).unwrap_or_default();
        Some(Self {
            mappings: doc.mappings,
        })
    }

    /// First candidate key present in the mapping with a non-empty URL.
    pub fn lookup(&self, framework: Framework, id: &str) -> Option<&UrlEntry> {
        candidate_keys(framework, id)
            .into_iter()
            .filter_map(|key| self.mappings.get(&key))
            .find(|entry| !entry.url.is_empty())
    }
}

/// Ordered lookup keys to try for a (framework, identifier) pair.
///
/// RTS identifiers come in several spellings ("RTS Aim 12", "RTS-12", "12A"),
/// so the first run of digits is tried zero-padded and plain before the raw
/// identifier. The other frameworks try the prefixed form then the raw id.
pub fn candidate_keys(framework: Framework, id: &str) -> Vec<String> {
    let mut keys = Vec::new();
    match framework {
        Framework::Rts => {
            if let Some(digits) = DIGITS_RE.captures(id).and_then(|caps| caps.get(1)) {
                let number = digits.as_str();
                keys.push(format!("RTS_{:0>2}", number));
                keys.push(format!("RTS_{}", number));
            }
            keys.push(id.to_string());
        }
        Framework::Lccp => {
            keys.push(format!("LCCP_{}", id));
            keys.push(id.to_string());
        }
        Framework::Iso27001 => {
            keys.push(format!("{}_{}", framework.tag(), id));
            keys.push(id.to_string());
        }
    }
    keys
}

/// One-shot resolution for callers without a prepared [`UrlMap`].
pub fn resolve_url(store: &DocumentStore, framework: Framework, id: &str) -> Option<UrlEntry> {
    UrlMap::from_store(store)?.lookup(framework, id).cloned()
}

/// Markdown link for a provision when a URL is known, plain label otherwise.
pub fn format_reference_link(
    url_map: Option<&UrlMap>,
    framework: Framework,
    id: &str,
    title: &str,
) -> String {
    if let Some(entry) = url_map.and_then(|map| map.lookup(framework, id)) {
        return format!("📎 [{} {}: {}]({})", framework.tag(), id, title, entry.url);
    }
    format!("📋 {} {}: {}", framework.tag(), id, title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store_with_mapping() -> DocumentStore {
        let mut store = DocumentStore::default();
        store.insert_index(
            URL_MAPPING_INDEX,
            json!({
                "mappings": {
                    "RTS_12": {"url": "https://example.org/rts12", "title": "RTS 12"},
                    "LCCP_4.1.1": {"url": "https://example.org/lccp411", "title": "Segregation"},
                    "ISO27001_A.5.1": {"url": "https://example.org/iso51", "title": "Policies"}
                }
            }),
        );
        store
    }

    #[test]
    fn rts_digit_extraction_with_zero_pad() {
        let keys = candidate_keys(Framework::Rts, "RTS Aim 7");
        assert_eq!(keys, vec!["RTS_07", "RTS_7", "RTS Aim 7"]);
    }

    #[test]
    fn rts_two_digit_aims_resolve() {
        let store = store_with_mapping();
        let entry = resolve_url(&store, Framework::Rts, "RTS Aim 12").unwrap();
        assert_eq!(entry.url, "https://example.org/rts12");
    }

    #[test]
    fn lccp_prefixed_then_raw() {
        let keys = candidate_keys(Framework::Lccp, "4.1.1");
        assert_eq!(keys, vec!["LCCP_4.1.1", "4.1.1"]);
        let store = store_with_mapping();
        let entry = resolve_url(&store, Framework::Lccp, "4.1.1").unwrap();
        assert_eq!(entry.url, "https://example.org/lccp411");
    }

    #[test]
    fn missing_mapping_document_resolves_to_none() {
        let store = DocumentStore::default();
        assert!(resolve_url(&store, Framework::Rts, "RTS Aim 12").is_none());
    }

    #[test]
    fn unknown_id_formats_as_plain_label() {
        let store = store_with_mapping();
        let map = UrlMap::from_store(&store);
        let label = format_reference_link(map.as_ref(), Framework::Lccp, "9.9.9", "Unknown");
        assert_eq!(label, "📋 LCCP 9.9.9: Unknown");
    }

    #[test]
    fn known_id_formats_as_markdown_link() {
        let store = store_with_mapping();
        let map = UrlMap::from_store(&store);
        let label = format_reference_link(map.as_ref(), Framework::Rts, "RTS-12", "Financial limits");
        assert_eq!(
            label,
            "📎 [RTS RTS-12: Financial limits](https://example.org/rts12)"
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let store = store_with_mapping();
        let first = resolve_url(&store, Framework::Rts, "RTS Aim 12");
        let second = resolve_url(&store, Framework::Rts, "RTS Aim 12");
        assert_eq!(first, second);
    }
}
