//! Use case orchestration for blockaudit.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain,
//! and render layers. It is intentionally thin and delegates heavy lifting to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod explain;
mod render;

pub use audit::{AuditOutput, RequestError, decode_request, run_audit, status_exit_code};
pub use explain::{
    ExplainOutput, format_explanation, format_not_found, format_rule_list, run_explain,
};
pub use render::{render_markdown, serialize_result, to_renderable};
