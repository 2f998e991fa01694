use crate::edge::ImportEdge;
use crate::policy::{CheckPolicy, EffectiveConfig, FailOn};
use crate::spec::{ModuleOption, ModuleSpec, compile_modules};
use modguard_types::{ImportGraph, ImportRecord, RepoPath, Severity};
use std::collections::BTreeMap;

pub fn module(path: &str) -> ModuleOption {
    ModuleOption {
        path: path.to_string(),
        ..ModuleOption::default()
    }
}

pub fn compiled(raw: Vec<ModuleOption>) -> Vec<ModuleSpec> {
    compile_modules(&raw).expect("valid modules")
}

/// An edge from a repo-relative file.
pub fn edge(file: &str, import: &str) -> ImportEdge {
    ImportEdge::new(file, import, &RepoPath::new("."))
}

pub fn record(file: &str, import: &str, line: Option<u32>) -> ImportRecord {
    ImportRecord {
        file: file.to_string(),
        import: import.to_string(),
        line,
        col: None,
    }
}

pub fn graph(edges: &[(&str, &str)]) -> ImportGraph {
    ImportGraph {
        schema: None,
        edges: edges
            .iter()
            .enumerate()
            .map(|(i, (file, import))| record(file, import, Some(i as u32 + 1)))
            .collect(),
    }
}

pub fn config_with_check(check_id: &str, severity: Severity) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(check_id.to_string(), CheckPolicy::enabled(severity));
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks,
        ..EffectiveConfig::default()
    }
}
