use crate::aggregate;
use crate::model;
use crate::policy::{AuditOptions, RuleSet};
use crate::walker;
use blockaudit_types::{AuditResult, Issue};

/// Audit raw content with the given rule ids and default options.
pub fn audit<I, S>(raw_content: &str, active_rule_ids: I) -> AuditResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    audit_with_options(raw_content, active_rule_ids, &AuditOptions::default())
}

/// Audit raw content with the given rule ids. Unknown ids are logged and ignored.
pub fn audit_with_options<I, S>(
    raw_content: &str,
    active_rule_ids: I,
    options: &AuditOptions,
) -> AuditResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (rules, unknown) = RuleSet::resolve(active_rule_ids);
    for rule_id in &unknown {
        tracing::warn!(rule_id = %rule_id, "ignoring unknown rule id");
    }
    audit_rules(raw_content, &rules, options)
}

/// Audit raw content with an already-resolved rule set.
///
/// Never fails: unparseable content becomes a single error issue and nothing else runs.
pub fn audit_rules(raw_content: &str, rules: &RuleSet, options: &AuditOptions) -> AuditResult {
    let tree = match model::parse_content(raw_content, options.max_depth) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::debug!(error = %err, "content did not parse");
            return AuditResult::from_issues(vec![Issue::error("", err.to_string())]);
        }
    };

    let mut issues = Vec::new();
    let ctx = walker::walk(&tree, rules, &mut issues);
    aggregate::run(&ctx, rules, &mut issues);

    let result = AuditResult::from_issues(issues);
    tracing::debug!(
        nodes = ctx.nodes_visited,
        h1_count = ctx.h1_count,
        issues = result.issues.len(),
        status = ?result.status,
        "audit complete"
    );
    result
}
