//! Fuzz target for rule id selection.
//!
//! Goal: arbitrary rule id lists (unknown, duplicated, empty) never panic,
//! and a run with no known rules never reports issues for parseable content.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_rule_selection
//! ```

#![no_main]

use arbitrary::Arbitrary;
use blockaudit_types::RuleId;
use libfuzzer_sys::fuzz_target;

/// Structured input: content text plus requested rule ids.
#[derive(Arbitrary, Debug)]
struct SelectionInput {
    content: String,
    rule_ids: Vec<String>,
}

fuzz_target!(|input: SelectionInput| {
    if input.content.len() > 16 * 1024 || input.rule_ids.len() > 32 {
        return;
    }

    let result = blockaudit_domain::audit(&input.content, &input.rule_ids);

    let any_known = input
        .rule_ids
        .iter()
        .any(|id| RuleId::parse(id).is_some());
    let parses = serde_json::from_str::<serde_json::de::IgnoredAny>(&input.content).is_ok();
    if !any_known && parses {
        assert!(result.issues.is_empty());
    }
});
