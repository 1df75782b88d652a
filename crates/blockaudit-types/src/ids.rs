//! Stable identifiers for rules, plus the content field and component names they inspect.
//!
//! Rule ids are the strings callers put in `activeRules`.

// Rules
pub const RULE_H1_COUNT: &str = "h1_count";
pub const RULE_ALT_TEXT: &str = "alt_text";
pub const RULE_LOREM_IPSUM: &str = "lorem_ipsum";

// Content fields
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_HEADING_LEVEL: &str = "heading_level";
pub const FIELD_ALT: &str = "alt";
pub const FIELD_TEXT: &str = "text";

// Component tags
pub const COMPONENT_HEADING: &str = "heading";
pub const COMPONENT_IMAGE: &str = "image";

/// Component reported for whole-page issues raised after traversal.
pub const COMPONENT_GLOBAL_STRUCTURE: &str = "Global Structure";

pub const HEADING_LEVEL_H1: &str = "h1";

/// Replaces the offending `text` value in lorem-ipsum issue snapshots.
pub const PLACEHOLDER_MARKER: &str = "[placeholder text removed]";
