use crate::model::{self, Fields};
use crate::policy::RuleSet;
use blockaudit_types::{RuleId, ids};

/// Number of H1 headings this node contributes (0 or 1). Never emits an issue itself.
pub fn run(fields: &Fields, rules: &RuleSet) -> usize {
    if !rules.contains(RuleId::H1Count) {
        return 0;
    }

    let is_heading = model::component(fields) == Some(ids::COMPONENT_HEADING);
    let is_h1 = model::field_str(fields, ids::FIELD_HEADING_LEVEL) == Some(ids::HEADING_LEVEL_H1);
    usize::from(is_heading && is_h1)
}
