//! Node-level rules. Each one looks at a single object node and never fails: fields that are
//! missing or of the wrong type simply do not match.

use crate::model::Fields;
use crate::policy::RuleSet;
use crate::walker::RunContext;
use blockaudit_types::Issue;

mod alt_text;
mod h1_count;
mod lorem_ipsum;


pub use alt_text::MESSAGE as ALT_TEXT_MESSAGE;
pub use lorem_ipsum::MESSAGE as LOREM_IPSUM_MESSAGE;

/// Run every active node rule against one object node, in `RuleId` order.
///
/// Issues are appended to `out`; counter contributions come back as a `RunContext` delta.
pub fn run_node(fields: &Fields, rules: &RuleSet, out: &mut Vec<Issue>) -> RunContext {
    let delta = RunContext {
        h1_count: h1_count::run(fields, rules),
        ..RunContext::default()
    };
    alt_text::run(fields, rules, out);
    lorem_ipsum::run(fields, rules, out);
    delta
}
