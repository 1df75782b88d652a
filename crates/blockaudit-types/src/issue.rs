use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Severity of a single issue. Serialized as `"Error"` / `"Warning"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Severity {
    Error,
    Warning,
}

/// A single reported violation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub message: String,
    pub severity: Severity,

    /// Block type of the offending node. Empty for issues not tied to a block.
    pub component: String,

    /// Snapshot of the offending node's fields, with the violating value masked where a rule
    /// says so. Empty for whole-page issues.
    #[serde(default)]
    pub problem_data: Map<String, JsonValue>,
}

impl Issue {
    pub fn error(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
            component: component.into(),
            problem_data: Map::new(),
        }
    }

    pub fn warning(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(component, message)
        }
    }

    pub fn with_problem_data(mut self, problem_data: Map<String, JsonValue>) -> Self {
        self.problem_data = problem_data;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum AuditStatus {
    Pass,
    Fail,
}

/// Outcome of one audit: `Fail` iff at least one issue was reported.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuditResult {
    pub status: AuditStatus,
    pub issues: Vec<Issue>,
}

impl AuditResult {
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        let status = if issues.is_empty() {
            AuditStatus::Pass
        } else {
            AuditStatus::Fail
        };
        Self { status, issues }
    }
}

/// Request envelope as handed over by a transport.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditRequest {
    /// Raw JSON text of the content tree. Parsed by the engine, not by the transport.
    pub content: String,

    /// Rule ids to run. When absent, the configured profile decides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_rules: Option<Vec<String>>,
}
