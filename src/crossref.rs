//! Cross-reference resolution between the three frameworks.
//!
//! One index document records, per LCCP provision, the ISO 27001 controls and
//! RTS chapters that support it. Lookups distinguish three outcomes: the
//! mapping document was never loaded, the mapping is loaded but has no record
//! for the identifier, and a hit. Both negative outcomes are ordinary results,
//! not errors.

use crate::framework::Framework;
use crate::store::DocumentStore;
use serde::{Deserialize, Serialize};

/// Filename stem of the cross-reference index document.
pub const CROSS_REF_INDEX: &str = "cross-reference-mapping-lccp-iso27001-rts";

#[derive(Debug, Default, Deserialize)]
struct CrossRefDocument {
    #[serde(default)]
    lccp_operating_licence_conditions_mappings: Vec<CrossRefGroup>,
}

#[derive(Debug, Default, Deserialize)]
struct CrossRefGroup {
    #[serde(default)]
    mappings: Vec<CrossRefRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct CrossRefRecord {
    #[serde(default)]
    lccp_id: String,
    #[serde(default)]
    lccp_title: String,
    #[serde(default)]
    supporting_iso27001_controls: Vec<String>,
    #[serde(default)]
    supporting_rts: Vec<String>,
}

/// A resolved mapping record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossRefEntry {
    pub id: String,
    pub title: String,
    pub iso27001_controls: Vec<String>,
    pub rts_chapters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CrossRefOutcome {
    Found(CrossRefEntry),
    /// Mapping loaded, identifier not present.
    NotFound,
    /// The mapping index document was never loaded.
    Unavailable,
}

/// Resolve a provision's supporting identifiers in the other frameworks.
///
/// Identifier comparison is exact and case-sensitive. The mapping document
/// only records LCCP-sourced provisions, so ISO 27001 and RTS identifiers
/// resolve to `NotFound` whenever the mapping itself is present.
pub fn resolve(store: &DocumentStore, framework: Framework, id: &str) -> CrossRefOutcome {
    let Some(raw) = store.index(CROSS_REF_INDEX) else {
        return CrossRefOutcome::Unavailable;
    };
    if framework != Framework::Lccp {
        return CrossRefOutcome::NotFound;
    }

    let doc: CrossRefDocument = serde_json::from_value(raw.clone()).unwrap_or_default();
    for group in &doc.lccp_operating_licence_conditions_mappings {
        for record in &group.mappings {
            if record.lccp_id == id {
                return CrossRefOutcome::Found(CrossRefEntry {
                    id: record.lccp_id.clone(),
                    title: record.lccp_title.clone(),
                    iso27001_controls: record.supporting_iso27001_controls.clone(),
                    rts_chapters: record.supporting_rts.clone(),
                });
            }
        }
    }
    CrossRefOutcome::NotFound
}
