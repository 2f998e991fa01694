use super::CheckContext;
use super::utils::{FindingDraft, edge_finding};
use crate::edge::ImportEdge;
use modguard_types::{Finding, ImportRecord, ids};
use serde_json::json;

pub fn run(ctx: &CheckContext<'_>, edge: &ImportEdge, record: &ImportRecord, out: &mut Vec<Finding>) {
    let Some(policy) = ctx.cfg.check_policy(ids::CHECK_IMPORTS_BOUNDED) else {
        return;
    };

    // Only the raw import string is inspected; the destination stays unresolved.
    let import = edge.import_path();
    let rejected: Vec<&str> = ctx
        .cfg
        .bounded
        .iter()
        .map(String::as_str)
        .filter(|p| import.contains(p))
        .collect();
    if rejected.is_empty() {
        return;
    }

    let draft = FindingDraft {
        check_id: ids::CHECK_IMPORTS_BOUNDED,
        code: ids::CODE_BOUNDED_IMPORT,
        message: format!("Imports cannot contain {}", rejected.join(", ")),
        help: "Rewrite the import through an alias or a shorter path.",
        data: json!({
            "file": edge.from().absolute_file_path.as_str(),
            "import": import,
            "rejected": rejected,
        }),
    };
    out.push(edge_finding(policy, draft, edge, record));
}
