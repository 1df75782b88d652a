use crate::resolve::EffectiveSettings;
use blockaudit_domain::policy::{AuditOptions, RuleSet};
use blockaudit_types::RuleId;

pub const DEFAULT_PROFILE: &str = "strict";
pub const DEFAULT_MAX_CONTENT_BYTES: usize = 1024 * 1024;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything finer grained goes into `[rules]`.
pub fn preset(profile: &str) -> EffectiveSettings {
    match profile {
        "accessibility" => with_rules("accessibility", [RuleId::H1Count, RuleId::AltText]),
        "content" => with_rules("content", [RuleId::LoremIpsum]),
        // default
        _ => with_rules(DEFAULT_PROFILE, RuleId::ALL),
    }
}

fn with_rules(profile: &str, rules: impl IntoIterator<Item = RuleId>) -> EffectiveSettings {
    EffectiveSettings {
        profile: profile.to_string(),
        default_rules: rules.into_iter().collect::<RuleSet>(),
        max_content_bytes: DEFAULT_MAX_CONTENT_BYTES,
        options: AuditOptions::default(),
    }
}
