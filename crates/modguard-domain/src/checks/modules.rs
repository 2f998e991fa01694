use super::CheckContext;
use super::utils::{FindingDraft, edge_finding};
use crate::edge::ImportEdge;
use crate::format::ViolationKind;
use crate::permission;
use modguard_types::{Finding, ImportRecord, ids};
use serde_json::json;

pub fn run(ctx: &CheckContext<'_>, edge: &ImportEdge, record: &ImportRecord, out: &mut Vec<Finding>) {
    let Some(policy) = ctx.cfg.check_policy(ids::CHECK_IMPORTS_MODULES) else {
        return;
    };

    for (kind, message) in permission::edge_messages(&ctx.modules, edge) {
        let draft = FindingDraft {
            check_id: ids::CHECK_IMPORTS_MODULES,
            code: kind.code(),
            message,
            help: help(kind),
            data: json!({
                "file": edge.from().absolute_file_path.as_str(),
                "import": edge.import_path(),
                "resolved": edge.to().absolute_imported_path.as_str(),
            }),
        };
        out.push(edge_finding(policy, draft, edge, record));
    }
}

fn help(kind: ViolationKind) -> &'static str {
    match kind {
        ViolationKind::PrivateImplementation => {
            "Import the module through its interface, or add the file to the module's `interface`."
        }
        ViolationKind::NotADependency => {
            "Declare the imported module in the importing module's `dependencies`."
        }
        ViolationKind::InvalidExternal => {
            "Add a matching pattern to the importing module's `externals`."
        }
    }
}
