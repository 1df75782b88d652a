#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableIssue {
    pub severity: RenderableSeverity,
    pub component: String,
    pub message: String,
    /// Compact JSON of the offending block, if the issue carries one.
    pub problem_data: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub status: RenderableStatus,
    pub issues: Vec<RenderableIssue>,
    /// Rule ids the audit ran with, in evaluation order.
    pub rules: Vec<String>,
}
