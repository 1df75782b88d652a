use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of rules the engine knows how to run.
///
/// Declaration order is also evaluation order when several rules fire on the same node.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    H1Count,
    AltText,
    LoremIpsum,
}

impl RuleId {
    pub const ALL: [RuleId; 3] = [RuleId::H1Count, RuleId::AltText, RuleId::LoremIpsum];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::H1Count => ids::RULE_H1_COUNT,
            RuleId::AltText => ids::RULE_ALT_TEXT,
            RuleId::LoremIpsum => ids::RULE_LOREM_IPSUM,
        }
    }

    /// Map a wire identifier to a known rule. Matching is exact (case-sensitive).
    pub fn parse(id: &str) -> Option<RuleId> {
        match id {
            ids::RULE_H1_COUNT => Some(RuleId::H1Count),
            ids::RULE_ALT_TEXT => Some(RuleId::AltText),
            ids::RULE_LOREM_IPSUM => Some(RuleId::LoremIpsum),
            _ => None,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
