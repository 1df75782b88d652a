//! Conformance tests for blockaudit.
//!
//! These tests validate:
//! 1. All rule IDs have explanations and follow the naming convention
//! 2. Emitted results validate against the generated response schema
//! 3. Request fixtures validate against the generated request schema

use assert_cmd::Command;
use blockaudit_types::{AuditRequest, AuditResult, RuleId, explain};
use serde_json::Value;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("blockaudit-cli should have parent")
        .parent()
        .expect("crates should have parent")
        .join("tests")
        .join("fixtures")
}

fn schema_validator<T: schemars::JsonSchema>() -> jsonschema::Validator {
    let schema = serde_json::to_value(schemars::schema_for!(T)).expect("schema to json");
    jsonschema::validator_for(&schema).expect("schema should compile")
}

#[allow(deprecated)]
fn run_audit(content_fixture: &str) -> Value {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let output = Command::cargo_bin("blockaudit")
        .unwrap()
        .current_dir(dir.path())
        .args(["audit", "--content"])
        .arg(fixtures_dir().join(content_fixture))
        .output()
        .expect("run blockaudit");
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// =============================================================================
// Explanation Coverage Tests
// =============================================================================

#[test]
fn all_rule_ids_have_explanations() {
    for rule_id in explain::all_rule_ids() {
        let exp = explain::lookup_explanation(rule_id)
            .unwrap_or_else(|| panic!("Rule '{rule_id}' has no explanation in registry"));
        assert!(!exp.title.is_empty(), "Rule '{rule_id}' has empty title");
        assert!(
            !exp.description.is_empty(),
            "Rule '{rule_id}' has empty description"
        );
        assert!(
            !exp.remediation.is_empty(),
            "Rule '{rule_id}' has empty remediation"
        );
    }
}

#[test]
fn registry_and_rule_enum_agree() {
    let from_enum: Vec<&str> = RuleId::ALL.iter().map(|r| r.as_str()).collect();
    assert_eq!(from_enum, explain::all_rule_ids());
}

#[test]
fn rule_ids_are_snake_case() {
    for rule_id in explain::all_rule_ids() {
        let valid = rule_id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        assert!(valid, "Rule '{rule_id}' should be snake_case");
    }
}

// =============================================================================
// Schema Conformance
// =============================================================================

#[test]
fn passing_and_failing_results_match_response_schema() {
    let validator = schema_validator::<AuditResult>();
    for fixture in ["clean_page.json", "broken_page.json"] {
        let report = run_audit(fixture);
        assert!(
            validator.is_valid(&report),
            "{fixture} result does not match schema: {report}"
        );
    }
}

#[test]
fn request_fixtures_match_request_schema() {
    let validator = schema_validator::<AuditRequest>();
    for fixture in ["request_alt_and_lorem.json", "request_malformed_content.json"] {
        let text = std::fs::read_to_string(fixtures_dir().join(fixture)).expect("read fixture");
        let value: Value = serde_json::from_str(&text).expect("fixture is JSON");
        assert!(validator.is_valid(&value), "{fixture} does not match schema");
    }
}

#[test]
fn response_schema_rejects_unknown_status() {
    let validator = schema_validator::<AuditResult>();
    let bogus = serde_json::json!({ "status": "Maybe", "issues": [] });
    assert!(!validator.is_valid(&bogus));
}
