//! Unit tests for report serialization and text rendering.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use closed_enum::report::{
    CheckReport, CompareReport, KindSummary, KindsReport, ListReport, ResolveReport,
};
use closed_enum_core::ResolvedValue;
use std::cmp::Ordering;

// =============================================================================
// KINDS REPORT TESTS
// =============================================================================

#[test]
fn test_kinds_report_serialization() {
    let report = KindsReport {
        kinds: vec![KindSummary {
            kind: "Weekday".to_string(),
            value_count: 7,
        }],
    };

    let json = serde_json::to_string(&report).unwrap();
    assert_eq!(json, r#"{"kinds":[{"kind":"Weekday","value_count":7}]}"#);
}

#[test]
fn test_kinds_report_empty_display() {
    let report = KindsReport { kinds: Vec::new() };
    assert_eq!(report.to_string(), "Registered Kinds\n================\n");
}

// =============================================================================
// LIST REPORT TESTS
// =============================================================================

#[test]
fn test_list_report_deserialization() {
    let json = r#"{"kind":"Frequency","names":["DAILY","WEEKLY"]}"#;
    let report: ListReport = serde_json::from_str(json).unwrap();

    assert_eq!(report.kind, "Frequency");
    assert_eq!(report.names, vec!["DAILY", "WEEKLY"]);
    assert_eq!(report.to_string(), "DAILY\nWEEKLY\n");
}

// =============================================================================
// RESOLVE REPORT TESTS
// =============================================================================

#[test]
fn test_resolve_report_is_flattened() {
    let report = ResolveReport {
        input: "fr".to_string(),
        value: ResolvedValue {
            kind: "Weekday".to_string(),
            name: "FR".to_string(),
            position: 4,
            name_hash: 0xff,
        },
    };

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"input\":\"fr\""));
    assert!(json.contains("\"kind\":\"Weekday\""));
    assert!(json.contains("\"position\":4"));
    assert!(!json.contains("\"value\""));

    let back: ResolveReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
    assert!(report.to_string().contains("Name Hash: 00000000000000ff"));
}

// =============================================================================
// COMPARE REPORT TESTS
// =============================================================================

#[test]
fn test_ordering_sign() {
    assert_eq!(CompareReport::ordering_sign(Ordering::Less), -1);
    assert_eq!(CompareReport::ordering_sign(Ordering::Equal), 0);
    assert_eq!(CompareReport::ordering_sign(Ordering::Greater), 1);
}

#[test]
fn test_compare_report_null_ordering() {
    let report = CompareReport {
        left: "Weekday::MO".to_string(),
        right: "Frequency::DAILY".to_string(),
        equal: false,
        ordering: None,
        reason: None,
    };

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"ordering\":null"));
    assert!(report.to_string().ends_with("Ordering: none\n"));
}

// =============================================================================
// CHECK REPORT TESTS
// =============================================================================

#[test]
fn test_check_report_display() {
    let report = CheckReport {
        kind_count: 3,
        value_count: 20,
    };
    assert_eq!(
        report.to_string(),
        "3 kinds valid, 20 values, no colliding names\n"
    );
}
