#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableLocation {
    pub path: String,
    pub line: Option<u32>,
    pub col: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    pub check_id: String,
    pub code: String,
    /// May span several lines.
    pub message: String,
    pub location: Option<RenderableLocation>,
    pub help: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub profile: String,
    pub files_scanned: u32,
    pub edges_scanned: u32,
    pub findings_emitted: u32,
    pub findings_total: u32,
    pub truncated_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub findings: Vec<RenderableFinding>,
    pub data: RenderableData,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn data(emitted: u32, total: u32) -> RenderableData {
        RenderableData {
            profile: "strict".to_string(),
            files_scanned: 4,
            edges_scanned: 9,
            findings_emitted: emitted,
            findings_total: total,
            truncated_reason: None,
        }
    }

    pub fn private_import() -> RenderableFinding {
        RenderableFinding {
            severity: RenderableSeverity::Error,
            check_id: "imports.modules".to_string(),
            code: "private_implementation".to_string(),
            message: "Module abstraction violation: 'src/b/x.ts' cannot import '../a/internal'.\n\n\
                      '../a/internal' is part of module 'src/a' but not listed in the module public\n\
                      interface (i.e. is an implementation detail)."
                .to_string(),
            location: Some(RenderableLocation {
                path: "src/b/x.ts".to_string(),
                line: Some(3),
                col: Some(1),
            }),
            help: Some("Import the module through its interface.".to_string()),
        }
    }
}
