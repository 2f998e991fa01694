//! Stable DTOs and IDs used across the modguard workspace.
//!
//! Nothing in here evaluates policy:
//! - data types for the emitted report and the consumed import graph
//! - stable string IDs and codes
//! - canonical repo-relative path handling
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod graph;
pub mod ids;
pub mod path;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, all_check_ids, all_codes, lookup_explanation};
pub use graph::{ImportGraph, ImportRecord, SCHEMA_IMPORTS_V1};
pub use path::RepoPath;
pub use receipt::{
    Finding, Location, ModguardData, ModguardReport, ReportEnvelope, SCHEMA_REPORT_V1, Severity,
    ToolMeta, Verdict,
};
