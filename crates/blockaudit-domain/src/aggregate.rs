use crate::policy::RuleSet;
use crate::walker::RunContext;
use blockaudit_types::{Issue, RuleId, ids};

pub const MISSING_H1_MESSAGE: &str = "Page is missing a mandatory H1 main heading.";

/// Whole-page rules evaluated once traversal has produced its totals.
pub fn run(ctx: &RunContext, rules: &RuleSet, out: &mut Vec<Issue>) {
    if !rules.contains(RuleId::H1Count) {
        return;
    }

    match ctx.h1_count {
        0 => out.push(Issue::error(
            ids::COMPONENT_GLOBAL_STRUCTURE,
            MISSING_H1_MESSAGE,
        )),
        1 => {}
        n => out.push(Issue::error(
            ids::COMPONENT_GLOBAL_STRUCTURE,
            duplicate_h1_message(n),
        )),
    }
}

pub fn duplicate_h1_message(count: usize) -> String {
    format!("Page has {count} H1 headings. Only one H1 is allowed per page for proper structure.")
}
