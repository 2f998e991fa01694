use crate::{RenderableFinding, RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Modguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Profile: `{}`\n- Scanned: {} files, {} imports\n- Findings: {} (emitted) / {} (total)\n\n",
        verdict,
        report.data.profile,
        report.data.files_scanned,
        report.data.edges_scanned,
        report.data.findings_emitted,
        report.data.findings_total
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        push_finding(&mut out, f);
    }

    out
}

fn push_finding(out: &mut String, f: &RenderableFinding) {
    let sev = match f.severity {
        RenderableSeverity::Info => "INFO",
        RenderableSeverity::Warning => "WARN",
        RenderableSeverity::Error => "ERROR",
    };

    out.push_str(&format!("- [{}] `{}` / `{}`", sev, f.check_id, f.code));
    if let Some(loc) = &f.location {
        match loc.line {
            Some(line) => out.push_str(&format!(" at `{}:{}`", loc.path, line)),
            None => out.push_str(&format!(" at `{}`", loc.path)),
        }
    }
    out.push('\n');

    // Messages span several lines; keep them inside the list item.
    out.push('\n');
    for line in f.message.lines() {
        if line.is_empty() {
            out.push_str("  >\n");
        } else {
            out.push_str(&format!("  > {}\n", line));
        }
    }
    out.push('\n');

    if let Some(help) = &f.help {
        out.push_str(&format!("  help: {}\n\n", help));
    }
}
