use modguard_types::{Finding, ModguardData, Severity, Verdict};
use std::collections::BTreeMap;

/// Emitted findings tallied by check id, plus the error total the verdict
/// hinges on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FindingCounts {
    pub by_check: BTreeMap<String, u32>,
    pub errors: u32,
}

impl FindingCounts {
    pub fn tally(findings: &[Finding]) -> Self {
        let mut counts = FindingCounts::default();
        for f in findings {
            *counts.by_check.entry(f.check_id.clone()).or_default() += 1;
            if f.severity == Severity::Error {
                counts.errors += 1;
            }
        }
        counts
    }

    pub fn for_check(&self, check_id: &str) -> u32 {
        self.by_check.get(check_id).copied().unwrap_or(0)
    }
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: ModguardData,
    pub counts: FindingCounts,
}
