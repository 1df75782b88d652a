use crate::checks;
use crate::model::ContentNode;
use crate::policy::RuleSet;
use blockaudit_types::Issue;

/// Traversal-wide counters. Each call to [`walk`] returns its subtree's totals; parents fold
/// children in with [`RunContext::merge`], so nothing is shared between audits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunContext {
    pub h1_count: usize,
    pub nodes_visited: usize,
}

impl RunContext {
    pub fn merge(self, other: RunContext) -> RunContext {
        RunContext {
            h1_count: self.h1_count + other.h1_count,
            nodes_visited: self.nodes_visited + other.nodes_visited,
        }
    }
}

/// Visit every node of `node`'s subtree exactly once, depth first.
///
/// Objects run the active node rules before their fields are visited; fields are visited in
/// name order and array elements in index order. Issues are appended to `out`.
pub fn walk(node: &ContentNode, rules: &RuleSet, out: &mut Vec<Issue>) -> RunContext {
    let mut ctx = RunContext {
        nodes_visited: 1,
        ..RunContext::default()
    };

    match node {
        ContentNode::Object(fields) => {
            ctx = ctx.merge(checks::run_node(fields, rules, out));
            for child in fields.values() {
                ctx = ctx.merge(walk(child, rules, out));
            }
        }
        ContentNode::Array(items) => {
            for item in items {
                ctx = ctx.merge(walk(item, rules, out));
            }
        }
        ContentNode::String(_) | ContentNode::Number(_) | ContentNode::Bool(_) | ContentNode::Null => {}
    }

    ctx
}
