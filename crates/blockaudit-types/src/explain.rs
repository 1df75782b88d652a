//! Explain registry for rules.
//!
//! Maps rule IDs to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule.
    pub title: &'static str,
    /// What the rule does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after content examples.
    pub examples: ExamplePair,
}

/// Before and after content examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Content that would trigger an issue.
    pub before: &'static str,
    /// Content that passes the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule id.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::RULE_H1_COUNT => Some(explain_h1_count()),
        ids::RULE_ALT_TEXT => Some(explain_alt_text()),
        ids::RULE_LOREM_IPSUM => Some(explain_lorem_ipsum()),
        _ => None,
    }
}

/// List all known rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[ids::RULE_H1_COUNT, ids::RULE_ALT_TEXT, ids::RULE_LOREM_IPSUM]
}

fn explain_h1_count() -> Explanation {
    Explanation {
        title: "Exactly One H1 Heading",
        description: "\
Counts `heading` blocks whose `heading_level` is `h1` across the whole page.

A page needs exactly one H1:
- Screen reader users jump to the H1 to find what the page is about
- Search engines treat the H1 as the primary topic
- Several H1s flatten the document outline

Zero H1s and more than one H1 are both reported once, against the page as a whole.",
        remediation: "\
Make sure the page carries one `heading` block with `heading_level: \"h1\"`.
Demote any additional H1 blocks to `h2` or lower.",
        examples: ExamplePair {
            before: r#"{
  "body": [
    { "component": "heading", "heading_level": "h1", "text": "Welcome" },
    { "component": "heading", "heading_level": "h1", "text": "Our services" }
  ]
}"#,
            after: r#"{
  "body": [
    { "component": "heading", "heading_level": "h1", "text": "Welcome" },
    { "component": "heading", "heading_level": "h2", "text": "Our services" }
  ]
}"#,
        },
    }
}

fn explain_alt_text() -> Explanation {
    Explanation {
        title: "Images Require Alt Text",
        description: "\
Detects `image` blocks whose `alt` field is missing, empty, or not a string.

Alt text is what screen readers announce in place of an image. Without it,
the image is either skipped or announced by file name.",
        remediation: "\
Describe what the image shows, or what it is for, in the `alt` field.
Keep it short and avoid phrases like \"image of\".",
        examples: ExamplePair {
            before: r#"{ "component": "image", "src": "/team.jpg", "alt": "" }"#,
            after: r#"{ "component": "image", "src": "/team.jpg", "alt": "Our support team at the office" }"#,
        },
    }
}

fn explain_lorem_ipsum() -> Explanation {
    Explanation {
        title: "No Placeholder Text",
        description: "\
Detects `text` fields that still contain \"lorem ipsum\" filler (any letter case).

Placeholder copy is easy to miss in review and embarrassing once published.
The issue snapshot masks the offending text so reports stay short.",
        remediation: "\
Replace the placeholder with the real copy for the block before publishing.",
        examples: ExamplePair {
            before: r#"{ "component": "text", "text": "Lorem ipsum dolor sit amet." }"#,
            after: r#"{ "component": "text", "text": "We ship every weekday before noon." }"#,
        },
    }
}
