//! The import graph consumed by `modguard check`.
//!
//! Producing it (parsing sources, walking ASTs) is the host's job; modguard
//! only reads the edges.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_IMPORTS_V1: &str = "modguard.imports.v1";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ImportGraph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default)]
    pub edges: Vec<ImportRecord>,
}

/// One `import`/`require` occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ImportRecord {
    /// Importing file, repo-relative or absolute.
    pub file: String,
    /// Import string exactly as written in the source.
    pub import: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<u32>,
}

impl ImportGraph {
    /// Number of distinct importing files.
    pub fn file_count(&self) -> usize {
        let mut files: Vec<&str> = self.edges.iter().map(|e| e.file.as_str()).collect();
        files.sort_unstable();
        files.dedup();
        files.len()
    }
}
