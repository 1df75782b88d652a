//! The `audit` use case: turn a request envelope into an audit result.

use blockaudit_domain::policy::RuleSet;
use blockaudit_settings::EffectiveSettings;
use blockaudit_types::{AuditRequest, AuditResult, AuditStatus, RuleId};

/// Failures that reject a request before the engine sees it.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("invalid audit request: {0}")]
    Envelope(#[from] serde_json::Error),
    #[error("content is {size} bytes, which exceeds the limit of {limit} bytes")]
    ContentTooLarge { size: usize, limit: usize },
}

/// Output from the audit use case.
#[derive(Clone, Debug)]
pub struct AuditOutput {
    pub result: AuditResult,
    /// Rules the engine ran with, in evaluation order.
    pub rules: Vec<RuleId>,
    /// Requested ids that matched no known rule.
    pub ignored_rules: Vec<String>,
}

/// Decode the outer request envelope. Content is kept as raw text for the engine.
pub fn decode_request(request_json: &str) -> Result<AuditRequest, RequestError> {
    Ok(serde_json::from_str(request_json)?)
}

/// Run the audit use case.
///
/// An explicit `activeRules` list (even an empty one) is used as given; otherwise the
/// profile's default rules apply.
pub fn run_audit(
    request: &AuditRequest,
    settings: &EffectiveSettings,
) -> Result<AuditOutput, RequestError> {
    let size = request.content.len();
    if size > settings.max_content_bytes {
        return Err(RequestError::ContentTooLarge {
            size,
            limit: settings.max_content_bytes,
        });
    }

    let (rules, ignored_rules) = match &request.active_rules {
        Some(ids) => RuleSet::resolve(ids),
        None => (settings.default_rules.clone(), Vec::new()),
    };
    for rule_id in &ignored_rules {
        tracing::warn!(rule_id = %rule_id, "ignoring unknown rule id");
    }

    let result = blockaudit_domain::audit_rules(&request.content, &rules, &settings.options);
    tracing::info!(
        profile = %settings.profile,
        status = ?result.status,
        issues = result.issues.len(),
        "audit finished"
    );

    Ok(AuditOutput {
        result,
        rules: rules.iter().collect(),
        ignored_rules,
    })
}

/// Map status to exit code: 0 = pass, 2 = fail.
pub fn status_exit_code(status: AuditStatus) -> i32 {
    match status {
        AuditStatus::Pass => 0,
        AuditStatus::Fail => 2,
    }
}
