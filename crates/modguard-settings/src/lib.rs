//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CheckConfig, ModguardConfigV1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `modguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ModguardConfigV1> {
    let cfg: ModguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (profiles + overrides + per-check config).
///
/// Every module and layer pattern is compiled here, so a bad regex is reported
/// before any edge is evaluated.
pub fn resolve_config(
    cfg: ModguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON schema of `modguard.toml`, for editor tooling.
pub fn config_schema() -> schemars::Schema {
    schemars::schema_for!(ModguardConfigV1)
}
