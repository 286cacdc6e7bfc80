//! One-time loading of the regulatory document tree into an immutable store.
//!
//! The tree holds one subdirectory per framework plus an `index` subdirectory
//! of named reference documents (cross-reference mapping, URL mapping,
//! framework-relationship documentation). The store is built once at startup
//! and shared read-only behind an `Arc` for the process lifetime.

use crate::extract::{Provision, extract_provisions};
use crate::framework::Framework;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One parsed framework document with its pre-extracted provisions.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub framework: Framework,
    pub filename: String,
    pub raw: Value,
    pub provisions: Vec<Provision>,
}

/// A file that could not be loaded, with the reason it was skipped.
#[derive(Debug, Clone)]
pub struct LoadWarning {
    pub path: PathBuf,
    pub reason: String,
}

/// What the loader managed to read, for startup reporting and tests.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<(Framework, usize)>,
    pub index_count: usize,
    pub warnings: Vec<LoadWarning>,
}

/// In-memory document collection, immutable after load.
#[derive(Debug, Default)]
pub struct DocumentStore {
    lccp: Vec<StoredDocument>,
    iso27001: Vec<StoredDocument>,
    rts: Vec<StoredDocument>,
    indexes: HashMap<String, Value>,
}

impl DocumentStore {
    /// Documents of one framework, in sorted-filename load order.
    pub fn documents(&self, framework: Framework) -> &[StoredDocument] {
        match framework {
            Framework::Lccp => &self.lccp,
            Framework::Iso27001 => &self.iso27001,
            Framework::Rts => &self.rts,
        }
    }

    /// A named index document, keyed by filename stem.
    pub fn index(&self, stem: &str) -> Option<&Value> {
        self.indexes.get(stem)
    }

    pub fn index_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.indexes.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn total_documents(&self) -> usize {
        self.lccp.len() + self.iso27001.len() + self.rts.len()
    }

    /// Locate the document holding a provision: exact provision id first,
    /// then filename substring, matching how callers ask for "details on X".
    pub fn find_document(&self, framework: Framework, provision_id: &str) -> Option<&StoredDocument> {
        let docs = self.documents(framework);
        docs.iter()
            .find(|doc| doc.provisions.iter().any(|p| p.id == provision_id))
            .or_else(|| docs.iter().find(|doc| doc.filename.contains(provision_id)))
    }

    pub(crate) fn push(&mut self, doc: StoredDocument) {
        match doc.framework {
            Framework::Lccp => self.lccp.push(doc),
            Framework::Iso27001 => self.iso27001.push(doc),
            Framework::Rts => self.rts.push(doc),
        }
    }

    pub(crate) fn insert_index(&mut self, stem: impl Into<String>, value: Value) {
        self.indexes.insert(stem.into(), value);
    }
}

/// Load every framework directory plus the index directory under `base`.
///
/// Missing directories and unreadable or malformed files are warnings in the
/// returned report, never fatal: one bad file must not stop the rest of the
/// tree from loading.
pub fn load_documents(base: &Path) -> (DocumentStore, LoadReport) {
    let mut store = DocumentStore::default();
    let mut report = LoadReport::default();

    for framework in Framework::ALL {
        let dir = base.join(framework.dir_name());
        let mut count = 0usize;
        for path in json_files(&dir, &mut report) {
            match read_json(&path) {
                Ok(raw) => {
                    let provisions = extract_provisions(framework, &raw);
                    store.push(StoredDocument {
                        framework,
                        filename: file_name(&path),
                        raw,
                        provisions,
                    });
                    count += 1;
                }
                Err(reason) => {
                    tracing::warn!("Skipping {}: {}", path.display(), reason);
                    report.warnings.push(LoadWarning { path, reason });
                }
            }
        }
        report.loaded.push((framework, count));
    }

    let index_dir = base.join("index");
    for path in json_files(&index_dir, &mut report) {
        match read_json(&path) {
            Ok(raw) => {
                let stem = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                store.indexes.insert(stem, raw);
            }
            Err(reason) => {
                tracing::warn!("Skipping index {}: {}", path.display(), reason);
                report.warnings.push(LoadWarning { path, reason });
            }
        }
    }
    report.index_count = store.indexes.len();

    for (framework, count) in &report.loaded {
        tracing::info!("Loaded {} {} document(s)", count, framework);
    }
    tracing::info!("Loaded {} index document(s)", report.index_count);

    (store, report)
}

/// JSON files in `dir`, sorted by filename so load order is deterministic.
fn json_files(dir: &Path, report: &mut LoadReport) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!("Directory {} not readable: {}", dir.display(), err);
            report.warnings.push(LoadWarning {
                path: dir.to_path_buf(),
                reason: format!("directory not readable: {}", err),
            });
            return Vec::new();
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();
    paths.sort();
    paths
}

fn read_json(path: &Path) -> std::result::Result<Value, String> {
    let content =
        std::fs::read_to_string(path).map_err(|err| format!("read failed: {}", err))?;
    serde_json::from_str(&content).map_err(|err| format!("invalid JSON: {}", err))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tree_is_warnings_not_errors() {
        let (store, report) = load_documents(Path::new("/nonexistent/ukgc-docs"));
        assert_eq!(store.total_documents(), 0);
        assert_eq!(report.index_count, 0);
        // One warning per framework directory plus one for the index directory
        assert_eq!(report.warnings.len(), 4);
    }

    #[test]
    fn find_document_prefers_exact_provision_id() {
        let mut store = DocumentStore::default();
        store.push(StoredDocument {
            framework: Framework::Lccp,
            filename: "lccp-section-3.json".to_string(),
            raw: serde_json::json!({}),
            provisions: vec![],
        });
        store.push(StoredDocument {
            framework: Framework::Lccp,
            filename: "lccp-conditions.json".to_string(),
            raw: serde_json::json!({}),
            provisions: vec![crate::extract::Provision {
                id: "3.2.1".to_string(),
                title: "Self-exclusion".to_string(),
                body: String::new(),
                category: String::new(),
                kind: crate::extract::ProvisionKind::Condition,
            }],
        });

        let found = store.find_document(Framework::Lccp, "3.2.1").unwrap();
        assert_eq!(found.filename, "lccp-conditions.json");

        // Falls back to filename substring when no provision id matches
        let by_name = store.find_document(Framework::Lccp, "section-3").unwrap();
        assert_eq!(by_name.filename, "lccp-section-3.json");
    }
}
