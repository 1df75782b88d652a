//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{BlockauditConfigV1, RuleConfig};
pub use presets::{DEFAULT_MAX_CONTENT_BYTES, DEFAULT_PROFILE};
pub use resolve::{EffectiveSettings, Overrides, ResolvedConfig};

/// Parse `blockaudit.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<BlockauditConfigV1> {
    let cfg: BlockauditConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective settings (profile + per-rule config + overrides).
pub fn resolve_config(
    cfg: BlockauditConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
