//! Rendering utilities for human-facing surfaces (Markdown comments, terminal output).

#![forbid(unsafe_code)]

mod markdown;
mod model;

pub use markdown::render_markdown;
pub use model::{RenderableIssue, RenderableReport, RenderableSeverity, RenderableStatus};
