//! Stable DTOs and IDs used across the blockaudit workspace.
//!
//! This crate is intentionally boring:
//! - data types for the audit request and result
//! - stable rule IDs and the component/field names rules look at
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod issue;
pub mod rule;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use issue::{AuditRequest, AuditResult, AuditStatus, Issue, Severity};
pub use rule::RuleId;
