use crate::layers::LayerOption;
use crate::spec::ModuleOption;
use modguard_types::Severity;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

#[derive(Clone, Debug)]
pub struct CheckPolicy {
    pub enabled: bool,
    pub severity: Severity,
}

impl CheckPolicy {
    pub fn enabled(severity: Severity) -> Self {
        Self {
            enabled: true,
            severity,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            severity: Severity::Info,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub max_findings: usize,
    pub checks: BTreeMap<String, CheckPolicy>,

    /// Raw module declarations. Shared so the compiled tree can be cached per object.
    pub modules: Arc<[ModuleOption]>,
    pub layers: Arc<[LayerOption]>,
    /// Substrings no import string may contain.
    pub bounded: Vec<String>,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            profile: "strict".to_string(),
            fail_on: FailOn::Error,
            max_findings: 200,
            checks: BTreeMap::new(),
            modules: Arc::from(Vec::new()),
            layers: Arc::from(Vec::new()),
            bounded: Vec::new(),
        }
    }
}

impl EffectiveConfig {
    pub fn check_policy(&self, check_id: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_id).filter(|p| p.enabled)
    }
}
