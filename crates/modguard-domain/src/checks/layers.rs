use super::CheckContext;
use super::utils::{FindingDraft, edge_finding};
use crate::edge::ImportEdge;
use crate::layers::layer_messages;
use modguard_types::{Finding, ImportRecord, ids};
use serde_json::json;

pub fn run(ctx: &CheckContext<'_>, edge: &ImportEdge, record: &ImportRecord, out: &mut Vec<Finding>) {
    let Some(policy) = ctx.cfg.check_policy(ids::CHECK_IMPORTS_LAYERS) else {
        return;
    };

    for message in layer_messages(ctx.layers, edge) {
        let draft = FindingDraft {
            check_id: ids::CHECK_IMPORTS_LAYERS,
            code: ids::CODE_LAYER_VIOLATION,
            message,
            help: "Import from a layer the file is allowed to depend on.",
            data: json!({
                "file": edge.from().absolute_file_path.as_str(),
                "import": edge.import_path(),
                "resolved": edge.to().absolute_imported_path.as_str(),
            }),
        };
        out.push(edge_finding(policy, draft, edge, record));
    }
}
