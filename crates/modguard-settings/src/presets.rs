use modguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn};
use modguard_types::Severity;
use modguard_types::ids::{CHECK_IMPORTS_BOUNDED, CHECK_IMPORTS_LAYERS, CHECK_IMPORTS_MODULES};
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> Option<EffectiveConfig> {
    match profile {
        "strict" => Some(strict_profile()),
        "warn" => Some(warn_profile()),
        "compat" => Some(compat_profile()),
        _ => None,
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        checks: checks(Severity::Error, Severity::Error),
        ..EffectiveConfig::default()
    }
}

fn warn_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "warn".to_string(),
        fail_on: FailOn::Warning,
        checks: checks(Severity::Warning, Severity::Warning),
        ..EffectiveConfig::default()
    }
}

fn compat_profile() -> EffectiveConfig {
    // Module boundaries still fail the build; layer and path-depth rules only warn.
    EffectiveConfig {
        profile: "compat".to_string(),
        fail_on: FailOn::Error,
        checks: checks(Severity::Error, Severity::Warning),
        ..EffectiveConfig::default()
    }
}

fn checks(modules: Severity, others: Severity) -> BTreeMap<String, CheckPolicy> {
    let mut m = BTreeMap::new();
    m.insert(
        CHECK_IMPORTS_MODULES.to_string(),
        CheckPolicy::enabled(modules),
    );
    m.insert(CHECK_IMPORTS_LAYERS.to_string(), CheckPolicy::enabled(others));
    m.insert(CHECK_IMPORTS_BOUNDED.to_string(), CheckPolicy::enabled(others));
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compat_keeps_modules_as_errors() {
        let cfg = preset("compat").expect("known profile");
        assert_eq!(cfg.checks[CHECK_IMPORTS_MODULES].severity, Severity::Error);
        assert_eq!(cfg.checks[CHECK_IMPORTS_LAYERS].severity, Severity::Warning);
        assert_eq!(cfg.checks[CHECK_IMPORTS_BOUNDED].severity, Severity::Warning);
        assert_eq!(cfg.fail_on, FailOn::Error);
    }

    #[test]
    fn warn_fails_on_warnings() {
        let cfg = preset("warn").expect("known profile");
        assert_eq!(cfg.fail_on, FailOn::Warning);
        assert!(cfg.checks.values().all(|p| p.enabled && p.severity == Severity::Warning));
    }

    #[test]
    fn unknown_profiles_have_no_preset() {
        assert!(preset("lenient").is_none());
    }
}
