use crate::checks::{self, CheckContext};
use crate::edge::ImportEdge;
use crate::layers::{LayerOption, LayerSpec};
use crate::memo::SpecMemo;
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, FindingCounts};
use crate::spec::{ModuleOption, ModuleSpec, SpecError, count_modules};
use modguard_types::{Finding, ImportGraph, ModguardData, RepoPath, Severity, Verdict};

/// Compiled configuration for one lint run, keyed by the identity of the raw
/// option lists in [`EffectiveConfig`]. Clones share the compiled trees.
#[derive(Clone, Debug, Default)]
pub struct CompiledCache {
    pub modules: SpecMemo<ModuleOption, ModuleSpec>,
    pub layers: SpecMemo<LayerOption, LayerSpec>,
}

impl CompiledCache {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Evaluate every edge of `graph`.
///
/// `root` is the project root used to make absolute file paths repo-relative.
/// Fails only when a pattern in `cfg` does not compile.
pub fn evaluate(
    graph: &ImportGraph,
    root: &RepoPath,
    cfg: &EffectiveConfig,
    cache: &mut CompiledCache,
) -> Result<DomainReport, SpecError> {
    let modules = cache.modules.resolve(&cfg.modules)?;
    let layers = cache.layers.resolve(&cfg.layers)?;

    let ctx = CheckContext {
        cfg,
        modules: modules.iter().collect(),
        layers: &layers,
    };

    let mut findings: Vec<Finding> = Vec::new();
    for record in &graph.edges {
        let edge = ImportEdge::new(&record.file, &record.import, root);
        checks::run_all(&ctx, &edge, record, &mut findings);
    }

    // Deterministic ordering before truncation.
    findings.sort_by(compare_findings);

    let total = findings.len() as u32;

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let verdict = compute_verdict(&emitted, cfg.fail_on);
    let counts = FindingCounts::tally(&emitted);

    let data = ModguardData {
        profile: cfg.profile.clone(),
        files_scanned: graph.file_count() as u32,
        edges_scanned: graph.edges.len() as u32,
        modules_declared: count_modules(&cfg.modules) as u32,
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
    };

    Ok(DomainReport {
        verdict,
        findings: emitted,
        data,
        counts,
    })
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) location.path (missing last)
    // 3) location.line (missing last)
    // 4) check_id
    // 5) code
    // 6) message
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let (ap, al) = match &a.location {
        Some(l) => (l.path.as_str(), l.line.unwrap_or(u32::MAX)),
        None => ("~", u32::MAX),
    };
    let (bp, bl) = match &b.location {
        Some(l) => (l.path.as_str(), l.line.unwrap_or(u32::MAX)),
        None => ("~", u32::MAX),
    };

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then(ap.cmp(bp))
        .then(al.cmp(&bl))
        .then(a.check_id.cmp(&b.check_id))
        .then(a.code.cmp(&b.code))
        .then(a.message.cmp(&b.message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::CheckPolicy;
    use crate::test_support::{config_with_check, graph, module};
    use modguard_types::ids;
    use std::sync::Arc;

    #[test]
    fn verdict_warn_becomes_fail_when_fail_on_warning() {
        let mut cfg = config_with_check(ids::CHECK_IMPORTS_BOUNDED, Severity::Warning);
        cfg.bounded = vec!["../../".to_string()];

        let g = graph(&[("src/a/b/c.ts", "../../x")]);
        let report = evaluate(&g, &RepoPath::new("."), &cfg, &mut CompiledCache::new())
            .expect("evaluate");
        assert_eq!(report.verdict, Verdict::Warn);

        cfg.fail_on = FailOn::Warning;
        let report = evaluate(&g, &RepoPath::new("."), &cfg, &mut CompiledCache::new())
            .expect("evaluate");
        assert_eq!(report.verdict, Verdict::Fail);
    }

    #[test]
    fn clean_graph_passes() {
        let mut cfg = config_with_check(ids::CHECK_IMPORTS_MODULES, Severity::Error);
        cfg.modules = vec![module("src/a")].into();

        let g = graph(&[("src/a/x.ts", "./y"), ("src/b.ts", "react")]);
        let report = evaluate(&g, &RepoPath::new("."), &cfg, &mut CompiledCache::new())
            .expect("evaluate");
        assert_eq!(report.verdict, Verdict::Pass);
        assert!(report.findings.is_empty());
        assert_eq!(report.data.edges_scanned, 2);
        assert_eq!(report.data.files_scanned, 2);
        assert_eq!(report.data.modules_declared, 1);
    }

    #[test]
    fn findings_are_sorted_and_truncated() {
        let mut cfg = config_with_check(ids::CHECK_IMPORTS_MODULES, Severity::Error);
        cfg.modules = vec![module("src/a")].into();
        cfg.max_findings = 2;

        let g = graph(&[
            ("src/z.ts", "./a/one"),
            ("src/b.ts", "./a/two"),
            ("src/m.ts", "./a/three"),
        ]);
        let report = evaluate(&g, &RepoPath::new("."), &cfg, &mut CompiledCache::new())
            .expect("evaluate");

        assert_eq!(report.data.findings_total, 3);
        assert_eq!(report.data.findings_emitted, 2);
        assert_eq!(
            report.data.truncated_reason.as_deref(),
            Some("findings truncated to max_findings=2")
        );
        let paths: Vec<&str> = report
            .findings
            .iter()
            .filter_map(|f| f.location.as_ref().map(|l| l.path.as_str()))
            .collect();
        assert_eq!(paths, ["src/b.ts", "src/m.ts"]);
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.counts.errors, 2);
        assert_eq!(report.counts.for_check(ids::CHECK_IMPORTS_MODULES), 2);
        assert_eq!(report.counts.for_check(ids::CHECK_IMPORTS_LAYERS), 0);
    }

    #[test]
    fn disabled_checks_emit_nothing() {
        let mut cfg = config_with_check(ids::CHECK_IMPORTS_MODULES, Severity::Error);
        cfg.checks
            .insert(ids::CHECK_IMPORTS_MODULES.to_string(), CheckPolicy::disabled());
        cfg.modules = vec![module("src/a")].into();

        let g = graph(&[("src/b.ts", "./a/private")]);
        let report = evaluate(&g, &RepoPath::new("."), &cfg, &mut CompiledCache::new())
            .expect("evaluate");
        assert!(report.findings.is_empty());
    }

    #[test]
    fn cache_reuses_compiled_modules_across_runs() {
        let mut cfg = config_with_check(ids::CHECK_IMPORTS_MODULES, Severity::Error);
        cfg.modules = vec![module("src/a")].into();
        let mut cache = CompiledCache::new();

        let g = graph(&[("src/b.ts", "./a/private")]);
        evaluate(&g, &RepoPath::new("."), &cfg, &mut cache).expect("evaluate");
        let first = cache.modules.resolve(&cfg.modules).expect("cached");
        evaluate(&g, &RepoPath::new("."), &cfg, &mut cache).expect("evaluate");
        let second = cache.modules.resolve(&cfg.modules).expect("cached");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn invalid_pattern_is_an_error_not_a_finding() {
        let mut cfg = config_with_check(ids::CHECK_IMPORTS_MODULES, Severity::Error);
        let mut bad = module("src/a");
        bad.interface = Some(crate::spec::InterfaceOption::One("(".into()));
        cfg.modules = vec![bad].into();

        let err = evaluate(&graph(&[]), &RepoPath::new("."), &cfg, &mut CompiledCache::new())
            .expect_err("bad pattern");
        assert_eq!(err.field, "interface");
    }
}
