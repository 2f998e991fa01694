//! The `check` use case: evaluate the import graph and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use modguard_domain::report::FindingCounts;
use modguard_settings::{ModguardConfigV1, Overrides, ResolvedConfig};
use modguard_types::{
    ImportGraph, ModguardReport, RepoPath, ReportEnvelope, SCHEMA_IMPORTS_V1, SCHEMA_REPORT_V1,
    ToolMeta, Verdict,
};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Project root; absolute file paths in the graph are made relative to it.
    pub root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// Import graph JSON.
    pub graph_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: ModguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
    pub counts: FindingCounts,
}

/// Run the check use case: parse config and graph, evaluate policy, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        ModguardConfigV1::default()
    } else {
        modguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved =
        modguard_settings::resolve_config(cfg, input.overrides.clone()).context("resolve config")?;

    let graph = parse_graph_json(input.graph_text)?;

    let mut cache = resolved.compiled.clone();
    let domain_report = modguard_domain::evaluate(
        &graph,
        &RepoPath::from(input.root),
        &resolved.effective,
        &mut cache,
    )
    .context("compile module configuration")?;

    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "modguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: domain_report.verdict,
        findings: domain_report.findings,
        data: domain_report.data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
        counts: domain_report.counts,
    })
}

/// Parse an import graph, rejecting graphs that declare a foreign schema.
pub fn parse_graph_json(text: &str) -> anyhow::Result<ImportGraph> {
    let graph: ImportGraph = serde_json::from_str(text).context("parse import graph json")?;
    if let Some(schema) = graph.schema.as_deref()
        && schema != SCHEMA_IMPORTS_V1
    {
        anyhow::bail!("unsupported import graph schema: {schema} (expected {SCHEMA_IMPORTS_V1})");
    }
    Ok(graph)
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modguard_types::{Severity, ids};

    const CONFIG: &str = r#"
[[modules]]
path = "src/a"
interface = "src/a/index"

[[modules]]
path = "src/b"
dependencies = ["src/a"]

[[modules]]
path = "src/c"
"#;

    const GRAPH: &str = r#"{
  "schema": "modguard.imports.v1",
  "edges": [
    { "file": "src/b/x.ts", "import": "../a/index", "line": 1 },
    { "file": "src/b/x.ts", "import": "../a/internal", "line": 2 },
    { "file": "src/c/x.ts", "import": "../a/index", "line": 1 }
  ]
}"#;

    fn input<'a>(config_text: &'a str, graph_text: &'a str) -> CheckInput<'a> {
        CheckInput {
            root: Utf8Path::new("."),
            config_text,
            graph_text,
            overrides: Overrides::default(),
        }
    }

    #[test]
    fn empty_config_uses_defaults() {
        let output = run_check(input("", r#"{"edges":[]}"#)).expect("run_check");
        assert_eq!(output.resolved_config.effective.profile, "strict");
        assert_eq!(output.report.verdict, Verdict::Pass);
        assert_eq!(output.report.schema, SCHEMA_REPORT_V1);
        assert_eq!(output.report.tool.name, "modguard");
    }

    #[test]
    fn worked_example_reports_both_violations() {
        let output = run_check(input(CONFIG, GRAPH)).expect("run_check");
        let report = &output.report;

        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.data.edges_scanned, 3);
        assert_eq!(report.data.files_scanned, 2);
        assert_eq!(report.data.modules_declared, 3);
        assert_eq!(output.counts.errors, 2);
        assert_eq!(output.counts.for_check(ids::CHECK_IMPORTS_MODULES), 2);

        let codes: Vec<&str> = report.findings.iter().map(|f| f.code.as_str()).collect();
        assert_eq!(
            codes,
            [ids::CODE_PRIVATE_IMPLEMENTATION, ids::CODE_NOT_A_DEPENDENCY]
        );
        assert!(report.findings[1].message.ends_with(
            "'src/a' is not listed as a valid dependency of 'src/c'."
        ));
    }

    #[test]
    fn warn_profile_override_still_fails() {
        let mut inp = input(CONFIG, GRAPH);
        inp.overrides.profile = Some("warn".to_string());
        let output = run_check(inp).expect("run_check");
        assert!(output.report.findings.iter().all(|f| f.severity == Severity::Warning));
        assert_eq!(output.report.verdict, Verdict::Fail);
    }

    #[test]
    fn foreign_graph_schema_is_rejected() {
        let err = run_check(input("", r#"{"schema":"other.v9","edges":[]}"#))
            .expect_err("foreign schema");
        assert!(err.to_string().contains("unsupported import graph schema"));
    }

    #[test]
    fn malformed_inputs_carry_context() {
        let err = run_check(input("", "{")).expect_err("bad json");
        assert!(err.to_string().contains("parse import graph json"));

        let err = run_check(input("profile = [", "{}")).expect_err("bad toml");
        assert!(err.to_string().contains("parse config"));
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Warn), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 2);
    }
}
