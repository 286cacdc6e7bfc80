//! Cross-reference and URL resolution over a loaded fixture tree.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use ukgc_regulatory_mcp::crossref::{CrossRefOutcome, resolve};
use ukgc_regulatory_mcp::framework::Framework;
use ukgc_regulatory_mcp::links::{UrlMap, format_reference_link, resolve_url};
use ukgc_regulatory_mcp::store::load_documents;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn fixture_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let base = dir.path();

    write(
        &base.join("index/cross-reference-mapping-lccp-iso27001-rts.json"),
        r#"{
            "lccp_operating_licence_conditions_mappings": [
                {"mappings": [
                    {"lccp_id": "4.1.1", "lccp_title": "Segregation of customer funds",
                     "supporting_iso27001_controls": ["A.8.2", "A.5.1"],
                     "supporting_rts": ["RTS 12"]},
                    {"lccp_id": "3.2.11", "lccp_title": "Age verification",
                     "supporting_iso27001_controls": ["A.9.2"],
                     "supporting_rts": []}
                ]}
            ]
        }"#,
    );
    write(
        &base.join("index/url_mapping.json"),
        r#"{
            "mappings": {
                "LCCP_4.1.1": {"url": "https://example.org/lccp-411", "title": "Segregation"},
                "RTS_07": {"url": "https://example.org/rts-07", "title": "Time requirements"},
                "RTS_12": {"url": "https://example.org/rts-12", "title": "Financial limits"},
                "ISO27001_A.9.4.2": {"url": "https://example.org/iso-942", "title": "Secure log-on"}
            }
        }"#,
    );

    dir
}

#[test]
fn crossref_resolves_lccp_identifier() {
    let tree = fixture_tree();
    let (store, _) = load_documents(tree.path());

    match resolve(&store, Framework::Lccp, "4.1.1") {
        CrossRefOutcome::Found(entry) => {
            assert_eq!(entry.title, "Segregation of customer funds");
            assert_eq!(entry.iso27001_controls, vec!["A.8.2", "A.5.1"]);
            assert_eq!(entry.rts_chapters, vec!["RTS 12"]);
        }
        other => panic!("expected Found, got {:?}", other),
    }
}

#[test]
fn crossref_empty_supporting_lists_are_found_not_missing() {
    let tree = fixture_tree();
    let (store, _) = load_documents(tree.path());

    match resolve(&store, Framework::Lccp, "3.2.11") {
        CrossRefOutcome::Found(entry) => assert!(entry.rts_chapters.is_empty()),
        other => panic!("expected Found, got {:?}", other),
    }
}

#[test]
fn crossref_distinguishes_not_found_from_unavailable() {
    let tree = fixture_tree();
    let (store, _) = load_documents(tree.path());
    assert_eq!(
        resolve(&store, Framework::Lccp, "9.9.9"),
        CrossRefOutcome::NotFound
    );

    // A tree with no index directory at all
    let empty = TempDir::new().unwrap();
    let (bare_store, _) = load_documents(empty.path());
    assert_eq!(
        resolve(&bare_store, Framework::Lccp, "4.1.1"),
        CrossRefOutcome::Unavailable
    );
}

#[test]
fn rts_aim_spellings_share_one_url() {
    let tree = fixture_tree();
    let (store, _) = load_documents(tree.path());

    // Single-digit aims zero-pad, every spelling of aim 7 lands on RTS_07
    for spelling in ["RTS Aim 7", "RTS-7", "7", "Aim 7"] {
        let entry = resolve_url(&store, Framework::Rts, spelling)
            .unwrap_or_else(|| panic!("no URL for {:?}", spelling));
        assert_eq!(entry.url, "https://example.org/rts-07");
    }

    let entry = resolve_url(&store, Framework::Rts, "RTS Aim 12").unwrap();
    assert_eq!(entry.url, "https://example.org/rts-12");
}

#[test]
fn prefixed_lookups_for_lccp_and_iso() {
    let tree = fixture_tree();
    let (store, _) = load_documents(tree.path());

    assert_eq!(
        resolve_url(&store, Framework::Lccp, "4.1.1").unwrap().url,
        "https://example.org/lccp-411"
    );
    assert_eq!(
        resolve_url(&store, Framework::Iso27001, "A.9.4.2").unwrap().url,
        "https://example.org/iso-942"
    );
}

#[test]
fn reference_links_fall_back_to_plain_labels() {
    let tree = fixture_tree();
    let (store, _) = load_documents(tree.path());
    let map = UrlMap::from_store(&store);

    let linked = format_reference_link(map.as_ref(), Framework::Lccp, "4.1.1", "Segregation");
    assert_eq!(
        linked,
        "📎 [LCCP 4.1.1: Segregation](https://example.org/lccp-411)"
    );

    let plain = format_reference_link(map.as_ref(), Framework::Lccp, "9.9.9", "Unknown");
    assert_eq!(plain, "📋 LCCP 9.9.9: Unknown");

    // No mapping loaded at all: still a usable label
    let no_map = format_reference_link(None, Framework::Rts, "RTS-12", "Financial limits");
    assert_eq!(no_map, "📋 RTS RTS-12: Financial limits");
}
