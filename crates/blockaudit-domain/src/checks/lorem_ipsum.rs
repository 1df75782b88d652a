use crate::model::{self, Fields};
use crate::policy::RuleSet;
use blockaudit_types::{Issue, RuleId, ids};
use serde_json::Value;

pub const MESSAGE: &str =
    "Placeholder text ('lorem ipsum') found in a text field. Needs real content.";

const NEEDLE: &str = "lorem ipsum";

pub fn run(fields: &Fields, rules: &RuleSet, out: &mut Vec<Issue>) {
    if !rules.contains(RuleId::LoremIpsum) {
        return;
    }
    let Some(text) = model::field_str(fields, ids::FIELD_TEXT) else {
        return;
    };
    if !text.to_lowercase().contains(NEEDLE) {
        return;
    }

    let mut problem_data = model::snapshot(fields);
    problem_data.insert(
        ids::FIELD_TEXT.to_string(),
        Value::String(ids::PLACEHOLDER_MARKER.to_string()),
    );

    let component = model::component(fields).unwrap_or_default();
    out.push(Issue::warning(component, MESSAGE).with_problem_data(problem_data));
}
