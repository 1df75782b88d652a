//! Render use cases: Markdown and JSON from in-memory audit output.

use crate::AuditOutput;
use anyhow::Context;
use blockaudit_render::{RenderableIssue, RenderableReport, RenderableSeverity, RenderableStatus};
use blockaudit_types::{AuditResult, AuditStatus, Severity};

pub fn to_renderable(output: &AuditOutput) -> RenderableReport {
    RenderableReport {
        status: match output.result.status {
            AuditStatus::Pass => RenderableStatus::Pass,
            AuditStatus::Fail => RenderableStatus::Fail,
        },
        issues: output
            .result
            .issues
            .iter()
            .map(|issue| RenderableIssue {
                severity: match issue.severity {
                    Severity::Warning => RenderableSeverity::Warning,
                    Severity::Error => RenderableSeverity::Error,
                },
                component: issue.component.clone(),
                message: issue.message.clone(),
                problem_data: (!issue.problem_data.is_empty())
                    .then(|| serde_json::Value::Object(issue.problem_data.clone()).to_string()),
            })
            .collect(),
        rules: output.rules.iter().map(|r| r.as_str().to_string()).collect(),
    }
}

pub fn render_markdown(output: &AuditOutput) -> String {
    blockaudit_render::render_markdown(&to_renderable(output))
}

/// Pretty JSON in the wire shape (`status` + `issues`).
pub fn serialize_result(result: &AuditResult) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(result).context("serialize audit result")?;
    data.push(b'\n');
    Ok(data)
}
