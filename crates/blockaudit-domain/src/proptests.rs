//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - H1 counting and the whole-page verdict
//! - Rule isolation (disabling a rule removes exactly its issues)
//! - Determinism of issue ordering
//! - Robustness against arbitrary input text

use crate::aggregate::{MISSING_H1_MESSAGE, duplicate_h1_message};
use crate::checks::{ALT_TEXT_MESSAGE, LOREM_IPSUM_MESSAGE};
use crate::engine::audit;
use crate::test_support::{heading, image, page, text_block};
use blockaudit_types::{AuditStatus, Issue, RuleId, ids};
use proptest::prelude::*;
use serde_json::{Map, Value, json};

// ============================================================================
// Strategies
// ============================================================================

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Real copy for the page.".to_string()),
        Just("lorem ipsum".to_string()),
        Just("Lorem Ipsum dolor sit amet".to_string()),
        Just("LOREM IPSUM".to_string()),
        Just("lorem-ipsum".to_string()),
        "[a-z ]{0,24}",
    ]
}

fn arb_alt() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        Just(Some(json!(""))),
        Just(Some(json!(7))),
        Just(Some(Value::Null)),
        "[A-Za-z ]{1,20}".prop_map(|s| Some(Value::String(s))),
    ]
}

fn arb_block() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop_oneof![Just("h1"), Just("h2"), Just("h3"), Just("H1")].prop_map(heading),
        arb_alt().prop_map(image),
        arb_text().prop_map(|t| text_block(&t)),
        Just(json!(null)),
        Just(json!(3.5)),
        Just(json!("loose string")),
    ]
}

/// Arbitrary nesting of blocks inside arrays and untagged container objects.
fn arb_tree() -> impl Strategy<Value = Value> {
    arb_block().prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..5)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

// ============================================================================
// Oracles computed straight from the JSON value
// ============================================================================

fn fold_objects(value: &Value, f: &impl Fn(&Map<String, Value>) -> bool) -> usize {
    match value {
        Value::Object(map) => {
            usize::from(f(map)) + map.values().map(|v| fold_objects(v, f)).sum::<usize>()
        }
        Value::Array(items) => items.iter().map(|v| fold_objects(v, f)).sum(),
        _ => 0,
    }
}

fn str_field<'a>(map: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    map.get(name).and_then(Value::as_str)
}

fn count_h1(value: &Value) -> usize {
    fold_objects(value, &|m| {
        str_field(m, "component") == Some("heading") && str_field(m, "heading_level") == Some("h1")
    })
}

fn count_missing_alt(value: &Value) -> usize {
    fold_objects(value, &|m| {
        str_field(m, "component") == Some("image")
            && str_field(m, "alt").is_none_or(str::is_empty)
    })
}

fn count_lorem(value: &Value) -> usize {
    fold_objects(value, &|m| {
        str_field(m, "text").is_some_and(|t| t.to_lowercase().contains("lorem ipsum"))
    })
}

fn produced_by(issue: &Issue, rule: RuleId) -> bool {
    match rule {
        RuleId::H1Count => issue.component == ids::COMPONENT_GLOBAL_STRUCTURE,
        RuleId::AltText => issue.message == ALT_TEXT_MESSAGE,
        RuleId::LoremIpsum => issue.message == LOREM_IPSUM_MESSAGE,
    }
}

fn all_ids() -> Vec<&'static str> {
    RuleId::ALL.iter().map(|r| r.as_str()).collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn h1_verdict_matches_heading_count(tree in arb_tree()) {
        let content = tree.to_string();
        let result = audit(&content, [ids::RULE_H1_COUNT]);
        let h1s = count_h1(&tree);

        match h1s {
            0 => {
                prop_assert_eq!(result.issues.len(), 1);
                prop_assert_eq!(result.issues[0].message.as_str(), MISSING_H1_MESSAGE);
            }
            1 => prop_assert!(result.issues.is_empty()),
            n => {
                prop_assert_eq!(result.issues.len(), 1);
                prop_assert_eq!(&result.issues[0].message, &duplicate_h1_message(n));
            }
        }
    }

    #[test]
    fn exactly_n_top_level_h1s(n in 0usize..6, filler in prop::collection::vec(arb_text(), 0..4)) {
        let mut blocks: Vec<Value> = (0..n).map(|_| heading("h1")).collect();
        blocks.extend(filler.iter().map(|t| text_block(t)));
        let content = page(blocks).to_string();

        let result = audit(&content, [ids::RULE_H1_COUNT]);
        let global: Vec<&Issue> = result
            .issues
            .iter()
            .filter(|i| i.component == ids::COMPONENT_GLOBAL_STRUCTURE)
            .collect();
        prop_assert_eq!(global.len(), usize::from(n != 1));
        if n > 1 {
            let expected = format!("Page has {n} H1 headings");
            prop_assert!(global[0].message.contains(&expected));
        }
    }

    #[test]
    fn per_rule_issue_counts_match_oracles(tree in arb_tree()) {
        let content = tree.to_string();
        let result = audit(&content, all_ids());

        let alt = result.issues.iter().filter(|i| produced_by(i, RuleId::AltText)).count();
        let lorem = result.issues.iter().filter(|i| produced_by(i, RuleId::LoremIpsum)).count();
        prop_assert_eq!(alt, count_missing_alt(&tree));
        prop_assert_eq!(lorem, count_lorem(&tree));
    }

    #[test]
    fn disabling_a_rule_removes_exactly_its_issues(tree in arb_tree()) {
        let content = tree.to_string();
        let full = audit(&content, all_ids());

        for rule in RuleId::ALL {
            let rule_ids: Vec<&str> =
                all_ids().into_iter().filter(|id| *id != rule.as_str()).collect();
            let reduced = audit(&content, rule_ids);
            let expected: Vec<Issue> = full
                .issues
                .iter()
                .filter(|i| !produced_by(i, rule))
                .cloned()
                .collect();
            prop_assert_eq!(reduced.issues, expected);
        }
    }

    #[test]
    fn audits_are_deterministic(tree in arb_tree()) {
        let content = tree.to_string();
        let a = serde_json::to_vec(&audit(&content, all_ids())).expect("serialize");
        let b = serde_json::to_vec(&audit(&content, all_ids())).expect("serialize");
        prop_assert_eq!(a, b);
    }

    #[test]
    fn arbitrary_text_never_panics(raw in ".{0,200}") {
        let result = audit(&raw, all_ids());
        prop_assert_eq!(result.status == AuditStatus::Fail, !result.issues.is_empty());
    }

    #[test]
    fn status_is_fail_iff_issues(tree in arb_tree(), mask in 0u8..8) {
        let rule_ids: Vec<&str> = RuleId::ALL
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1u8 << *bit) != 0)
            .map(|(_, r)| r.as_str())
            .collect();
        let result = audit(&tree.to_string(), rule_ids);
        prop_assert_eq!(result.status == AuditStatus::Fail, !result.issues.is_empty());
    }
}
