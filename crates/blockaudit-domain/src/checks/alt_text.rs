use crate::model::{self, Fields};
use crate::policy::RuleSet;
use blockaudit_types::{Issue, RuleId, ids};

pub const MESSAGE: &str = "Image is missing mandatory Alt Text for screen readers.";

pub fn run(fields: &Fields, rules: &RuleSet, out: &mut Vec<Issue>) {
    if !rules.contains(RuleId::AltText) {
        return;
    }
    if model::component(fields) != Some(ids::COMPONENT_IMAGE) {
        return;
    }

    // Absent, non-string and empty all count as missing.
    let has_alt = model::field_str(fields, ids::FIELD_ALT).is_some_and(|alt| !alt.is_empty());
    if has_alt {
        return;
    }

    out.push(
        Issue::error(ids::COMPONENT_IMAGE, MESSAGE).with_problem_data(model::snapshot(fields)),
    );
}
