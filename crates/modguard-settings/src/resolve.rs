use crate::{model::ModguardConfigV1, presets};
use anyhow::Context;
use modguard_domain::CompiledCache;
use modguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn};
use modguard_types::{Severity, all_check_ids};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub max_findings: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    /// Compiled modules and layers of `effective`, ready for the engine.
    pub compiled: CompiledCache,
}

pub fn resolve_config(
    cfg: ModguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile).with_context(|| {
        format!("unknown profile: {profile} (expected strict|warn|compat)")
    })?;

    // max findings
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        if !all_check_ids().contains(&check_id.as_str()) {
            anyhow::bail!(
                "unknown check id in [checks]: {check_id} (known: {})",
                all_check_ids().join(", ")
            );
        }

        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = cc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {check_id}"))?;
        }
    }

    // fail_on override from config
    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    validate_bounded(&cfg.bounded)?;
    effective.modules = cfg.modules.into();
    effective.layers = cfg.layers.into();
    effective.bounded = cfg.bounded;

    let mut compiled = CompiledCache::new();
    compiled
        .modules
        .resolve(&effective.modules)
        .context("invalid [[modules]] configuration")?;
    compiled
        .layers
        .resolve(&effective.layers)
        .context("invalid [[layers]] configuration")?;

    Ok(ResolvedConfig {
        effective,
        compiled,
    })
}

fn validate_bounded(entries: &[String]) -> anyhow::Result<()> {
    if entries.iter().any(String::is_empty) {
        anyhow::bail!("invalid bounded entry: empty string would reject every import");
    }
    Ok(())
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
