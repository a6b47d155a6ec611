//! Tests for the parse boundary.
//!
//! Fixtures (.json) and snapshots (.snap) are co-located in `fixtures/`.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::io::blocks_to_json;

// Fixture-based snapshot tests

#[test]
fn fixture_legacy_landing_page() {
    let report = assert_fixture("legacy_landing_page");

    assert_eq!(
        report.diagnostics,
        vec![
            Diagnostic {
                index: Some(1),
                id: Some("gone".to_string()),
                kind: DiagnosticKind::UnrecognizedKind {
                    type_name: "pricingWidget".to_string(),
                },
            },
            Diagnostic {
                index: Some(4),
                id: Some("steps".to_string()),
                kind: DiagnosticKind::MalformedPayload {
                    error: FieldError {
                        field: "items".to_string(),
                        expected: "an array",
                        found: "string",
                    },
                },
            },
        ]
    );
}

fn assert_fixture(name: &str) -> ParseReport {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let raw = std::fs::read_to_string(format!("{fixtures_dir}/{name}.json")).unwrap();

    let report = parse_blocks_str(&raw);
    let rendered = serde_json::to_string_pretty(&blocks_to_json(&report.document).unwrap()).unwrap();

    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, rendered);
    });

    report
}

// Array-level handling

#[rstest]
#[case(json!({ "blocks": [] }), "object")]
#[case(json!("[]"), "string")]
#[case(json!(3), "number")]
fn test_non_array_is_empty_document(#[case] raw: Value, #[case] found: &'static str) {
    let report = parse_blocks_with_report(&raw);
    assert!(report.document.is_empty());
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic {
            index: None,
            id: None,
            kind: DiagnosticKind::NotAnArray { found },
        }]
    );
}

#[test]
fn test_null_is_an_empty_document_without_diagnostics() {
    let report = parse_blocks_with_report(&Value::Null);
    assert!(report.document.is_empty());
    assert!(report.is_clean());
}

#[test]
fn test_invalid_json_text() {
    let report = parse_blocks_str("[{\"id\": \"a\",");
    assert!(report.document.is_empty());
    assert_eq!(report.diagnostics.len(), 1);
    assert!(matches!(
        report.diagnostics[0].kind,
        DiagnosticKind::InvalidJson { .. }
    ));
}

// Element-level handling

#[rstest]
#[case::not_an_object(json!("hero"), DiagnosticKind::NotAnObject { found: "string" })]
#[case::missing_type(json!({ "id": "x" }), DiagnosticKind::MissingType)]
#[case::non_string_type(json!({ "id": "x", "type": 7 }), DiagnosticKind::MissingType)]
#[case::unknown_type(
    json!({ "id": "x", "type": "carousel" }),
    DiagnosticKind::UnrecognizedKind { type_name: "carousel".to_string() }
)]
fn test_unusable_elements_are_dropped(#[case] element: Value, #[case] expected: DiagnosticKind) {
    let raw = json!([element, { "id": "ok", "type": "divider" }]);
    let report = parse_blocks_with_report(&raw);

    assert_eq!(report.document.len(), 1);
    assert_eq!(report.document.blocks()[0].id().as_str(), "ok");
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].kind, expected);
    assert_eq!(report.diagnostics[0].index, Some(0));
    assert_eq!(report.dropped().count(), 1);
}

#[test]
fn test_missing_and_duplicate_ids_are_repaired() {
    let raw = json!([
        { "id": "a", "type": "divider" },
        { "type": "spacer" },
        { "id": "", "type": "spacer" },
        { "id": "a", "type": "quote", "text": "Andra" },
    ]);
    let report = parse_blocks_with_report(&raw);

    assert_eq!(report.document.len(), 4);
    let ids: HashSet<_> = report.document.ids().into_iter().collect();
    assert_eq!(ids.len(), 4);
    assert_eq!(report.document.blocks()[0].id().as_str(), "a");
    assert_ne!(report.document.blocks()[3].id().as_str(), "a");

    let kinds: Vec<_> = report.diagnostics.iter().map(|d| d.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::MissingId,
            DiagnosticKind::MissingId,
            DiagnosticKind::DuplicateId {
                original: "a".to_string()
            },
        ]
    );
    assert_eq!(report.dropped().count(), 0);
}

#[test]
fn test_malformed_block_does_not_claim_its_id() {
    let raw = json!([
        { "id": "a", "type": "faq", "items": {} },
        { "id": "a", "type": "faq" },
    ]);
    let report = parse_blocks_with_report(&raw);

    assert_eq!(report.document.len(), 1);
    assert_eq!(report.document.blocks()[0].id().as_str(), "a");
    assert_eq!(report.diagnostics.len(), 1);
}

#[test]
fn test_layout_is_defaulted_for_every_kind() {
    let raw = Value::Array(
        BlockKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| json!({ "id": format!("b{i}"), "type": kind.as_str() }))
            .collect(),
    );
    let document = parse_blocks(&raw);

    assert_eq!(document.len(), BlockKind::ALL.len());
    for block in document.iter() {
        assert_eq!(block.layout, LayoutSettings::default(), "{}", block.kind());
        assert!(block.extra().is_empty());
    }
}

#[test]
fn test_bad_anchor_type_drops_block() {
    let raw = json!([{ "id": "a", "type": "divider", "anchor": { "name": "x" } }]);
    let report = parse_blocks_with_report(&raw);
    assert!(report.document.is_empty());
    assert!(matches!(
        &report.diagnostics[0].kind,
        DiagnosticKind::MalformedPayload { error } if error.field == "anchor"
    ));
}
