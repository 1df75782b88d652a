use crate::{model::BlockauditConfigV1, presets};
use anyhow::Context;
use blockaudit_domain::policy::{AuditOptions, RuleSet};
use blockaudit_types::RuleId;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub max_depth: Option<u32>,
    pub max_content_bytes: Option<u64>,
}

/// Settings the application layer runs with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveSettings {
    pub profile: String,
    /// Rules used when a request does not name any.
    pub default_rules: RuleSet,
    pub max_content_bytes: usize,
    pub options: AuditOptions,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveSettings,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            effective: presets::preset(presets::DEFAULT_PROFILE),
        }
    }
}

pub fn resolve_config(
    cfg: BlockauditConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());

    let mut effective = presets::preset(&profile);

    // per-rule overrides
    for (rule_id, rc) in cfg.rules.iter() {
        let rule = parse_rule_id(rule_id).with_context(|| format!("invalid [rules.{rule_id}]"))?;
        match rc.enabled {
            Some(true) => {
                effective.default_rules =
                    effective.default_rules.iter().chain([rule]).collect();
            }
            Some(false) => {
                effective.default_rules = effective.default_rules.without(rule);
            }
            None => {}
        }
    }

    if let Some(depth) = overrides.max_depth.or(cfg.max_depth) {
        if depth == 0 {
            anyhow::bail!("max_depth must be at least 1");
        }
        effective.options = AuditOptions {
            max_depth: depth as usize,
        };
    }

    if let Some(bytes) = overrides.max_content_bytes.or(cfg.max_content_bytes) {
        effective.max_content_bytes =
            usize::try_from(bytes).context("max_content_bytes does not fit in memory")?;
    }

    Ok(ResolvedConfig { effective })
}

fn parse_rule_id(v: &str) -> anyhow::Result<RuleId> {
    RuleId::parse(v).with_context(|| {
        let known: Vec<&str> = RuleId::ALL.iter().map(|r| r.as_str()).collect();
        format!("unknown rule: {v} (expected one of {})", known.join("|"))
    })
}
