//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - The module permission decision for arbitrary file names
//! - Findings ordering and truncation
//! - Compiled-configuration caching

use crate::engine::{CompiledCache, evaluate};
use crate::format::ViolationKind;
use crate::permission;
use crate::spec::{DependencyOption, ExceptionOption, ModuleOption, ModuleSpec};
use crate::test_support::{compiled, config_with_check, edge, module};
use modguard_types::{ImportGraph, ImportRecord, RepoPath, Severity, Verdict, ids};
use proptest::prelude::*;
use std::sync::Arc;

// ============================================================================
// Strategies
// ============================================================================

fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,7}").unwrap()
}

/// A file path below `dir`, one or two segments deep.
fn arb_file_in(dir: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(arb_segment(), 1..3)
        .prop_map(move |segs| format!("{dir}/{}.ts", segs.join("/")))
}

fn arb_module_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("a"), Just("b"), Just("c")]
}

/// An edge between files of `src/{a,b,c}` or to a bare package name.
fn arb_record() -> impl Strategy<Value = ImportRecord> {
    (
        arb_module_name(),
        arb_segment(),
        prop_oneof![
            arb_module_name().prop_map(Some),
            Just(None),
        ],
        arb_segment(),
        prop::option::of(1u32..500),
    )
        .prop_map(|(from, file, to, target, line)| ImportRecord {
            file: format!("src/{from}/{file}.ts"),
            import: match to {
                Some(to) => format!("../{to}/{target}"),
                None => target,
            },
            line,
            col: None,
        })
}

fn scope(specs: &[ModuleSpec]) -> Vec<&ModuleSpec> {
    specs.iter().collect()
}

fn kinds(specs: &[ModuleSpec], from: &str, import: &str) -> Vec<ViolationKind> {
    permission::evaluate(&scope(specs), &edge(from, import))
        .violations
        .into_iter()
        .map(|v| v.kind)
        .collect()
}

fn closed_modules() -> Vec<ModuleOption> {
    let mut c = module("src/c");
    c.externals = Some(vec!["^react$".into()]);
    vec![module("src/a"), module("src/b"), c]
}

// ============================================================================
// Property tests: permission decision
// ============================================================================

proptest! {
    /// A non-interface file of another module fails exactly once, whatever the
    /// source module declares.
    #[test]
    fn private_files_fail_exactly_once(
        from in arb_file_in("src/b"),
        target in arb_segment(),
        depends in any::<bool>(),
    ) {
        let mut b = module("src/b");
        if depends {
            b.dependencies = vec![DependencyOption::Path("src/a".into())];
        }
        let specs = compiled(vec![module("src/a"), b]);

        let import = format!("src/a/{target}");
        prop_assert_eq!(
            kinds(&specs, &from, &import),
            vec![ViolationKind::PrivateImplementation]
        );
    }

    /// Imports within one module are always allowed.
    #[test]
    fn same_module_imports_are_allowed(
        from in arb_file_in("src/a"),
        target in arb_file_in("src/a"),
    ) {
        let mut a = module("src/a");
        a.externals = Some(Vec::new());
        let specs = compiled(vec![a, module("src/b")]);

        prop_assert!(kinds(&specs, &from, &target).is_empty());
    }

    /// A matching exception on the destination lifts the interface check, and
    /// one on the source lifts the dependency check.
    #[test]
    fn exceptions_lift_their_own_axis(
        from in arb_file_in("src/b"),
        target in arb_segment(),
    ) {
        let exception = ExceptionOption {
            from: "^src/b/".into(),
            to: "^src/a/".into(),
        };
        let mut a = module("src/a");
        a.exceptions = vec![exception.clone()];
        let import = format!("src/a/{target}");

        let specs = compiled(vec![a.clone(), module("src/b")]);
        prop_assert_eq!(
            kinds(&specs, &from, &import),
            vec![ViolationKind::NotADependency]
        );

        let mut b = module("src/b");
        b.techdebt = vec![exception];
        let specs = compiled(vec![a, b]);
        prop_assert!(kinds(&specs, &from, &import).is_empty());
    }

    /// Files outside every module may import anything public or external.
    #[test]
    fn unowned_files_only_fail_inbound(
        file in arb_segment(),
        target in arb_segment(),
    ) {
        let specs = compiled(closed_modules());
        let from = format!("lib/{file}.ts");

        prop_assert!(kinds(&specs, &from, &target).is_empty());
        prop_assert_eq!(
            kinds(&specs, &from, &format!("src/c/{target}")),
            vec![ViolationKind::PrivateImplementation]
        );
    }
}

// ============================================================================
// Property tests: engine output
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Findings come out sorted, truncated to the cap, and the verdict follows
    /// the emitted findings.
    #[test]
    fn engine_output_is_sorted_and_capped(
        edges in prop::collection::vec(arb_record(), 0..24),
        max_findings in 0usize..8,
    ) {
        let mut cfg = config_with_check(ids::CHECK_IMPORTS_MODULES, Severity::Error);
        cfg.modules = closed_modules().into();
        cfg.max_findings = max_findings;
        let graph = ImportGraph { schema: None, edges };

        let report = evaluate(&graph, &RepoPath::new("."), &cfg, &mut CompiledCache::new())
            .expect("valid config");

        let total = report.data.findings_total as usize;
        prop_assert_eq!(report.findings.len(), total.min(max_findings));
        prop_assert_eq!(report.data.truncated_reason.is_some(), total > max_findings);
        prop_assert_eq!(report.data.edges_scanned as usize, graph.edges.len());

        let keys: Vec<(&str, u32)> = report
            .findings
            .iter()
            .map(|f| {
                let loc = f.location.as_ref().expect("edge findings carry a location");
                (loc.path.as_str(), loc.line.unwrap_or(u32::MAX))
            })
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);

        let expected = if report.findings.is_empty() { Verdict::Pass } else { Verdict::Fail };
        prop_assert_eq!(report.verdict, expected);
    }

    /// Running twice over one configuration object yields identical reports and
    /// reuses the compiled tree.
    #[test]
    fn engine_is_deterministic_across_cached_runs(
        edges in prop::collection::vec(arb_record(), 0..16),
    ) {
        let mut cfg = config_with_check(ids::CHECK_IMPORTS_MODULES, Severity::Error);
        cfg.modules = closed_modules().into();
        let graph = ImportGraph { schema: None, edges };
        let mut cache = CompiledCache::new();

        let first = evaluate(&graph, &RepoPath::new("."), &cfg, &mut cache).expect("valid config");
        let tree = cache.modules.resolve(&cfg.modules).expect("cached");
        let second = evaluate(&graph, &RepoPath::new("."), &cfg, &mut cache).expect("valid config");

        prop_assert_eq!(first.findings, second.findings);
        prop_assert!(Arc::ptr_eq(&tree, &cache.modules.resolve(&cfg.modules).expect("cached")));
    }
}
