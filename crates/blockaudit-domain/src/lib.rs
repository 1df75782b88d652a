//! Pure content audit engine (no IO).
//!
//! Input: the raw content JSON of a page plus the rule ids to run.
//! Output: issues in traversal order followed by whole-page issues, and a pass/fail status.

#![forbid(unsafe_code)]

pub mod checks;
pub mod model;
pub mod policy;

mod aggregate;
mod engine;
mod walker;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_support;

pub use engine::{audit, audit_rules, audit_with_options};
pub use walker::{RunContext, walk};
