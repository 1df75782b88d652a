use crate::{RenderableReport, RenderableSeverity, RenderableStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Content audit report\n\n");
    let status = match report.status {
        RenderableStatus::Pass => "PASS",
        RenderableStatus::Fail => "FAIL",
    };
    let errors = report
        .issues
        .iter()
        .filter(|i| i.severity == RenderableSeverity::Error)
        .count();
    let warnings = report.issues.len() - errors;
    out.push_str(&format!(
        "- Status: **{}**\n- Issues: {} ({} error, {} warning)\n",
        status,
        report.issues.len(),
        errors,
        warnings
    ));

    if report.rules.is_empty() {
        out.push_str("- Rules: (none)\n\n");
    } else {
        out.push_str(&format!("- Rules: {}\n\n", report.rules.join(", ")));
    }

    if report.issues.is_empty() {
        out.push_str("No issues.\n");
        return out;
    }

    out.push_str("## Issues\n\n");

    for issue in &report.issues {
        let sev = match issue.severity {
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };
        let component = if issue.component.is_empty() {
            "(page)"
        } else {
            issue.component.as_str()
        };
        out.push_str(&format!("- [{}] `{}`: {}\n", sev, component, issue.message));

        if let Some(data) = &issue.problem_data {
            out.push_str(&format!("  - data: `{}`\n", data));
        }
    }

    out
}
