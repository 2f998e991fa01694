use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for an import finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - importing file (repo-relative)
/// - import string as written
pub fn fingerprint_for_edge(check_id: &str, code: &str, file: &str, import: &str) -> String {
    let canonical = [check_id, code, file, import].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}
