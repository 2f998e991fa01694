use crate::edge::ImportEdge;
use crate::fingerprint::fingerprint_for_edge;
use crate::policy::CheckPolicy;
use modguard_types::{Finding, ImportRecord, Location};
use serde_json::Value;

pub struct FindingDraft<'a> {
    pub check_id: &'a str,
    pub code: &'a str,
    pub message: String,
    pub help: &'a str,
    pub data: Value,
}

/// Attach severity, location and fingerprint to a drafted finding.
pub fn edge_finding(
    policy: &CheckPolicy,
    draft: FindingDraft<'_>,
    edge: &ImportEdge,
    record: &ImportRecord,
) -> Finding {
    let file = edge.from().absolute_file_path.clone();
    Finding {
        severity: policy.severity,
        check_id: draft.check_id.to_string(),
        code: draft.code.to_string(),
        message: draft.message,
        fingerprint: Some(fingerprint_for_edge(
            draft.check_id,
            draft.code,
            file.as_str(),
            edge.import_path(),
        )),
        location: Some(Location {
            path: file,
            line: record.line,
            col: record.col,
        }),
        help: Some(draft.help.to_string()),
        url: None,
        data: draft.data,
    }
}
