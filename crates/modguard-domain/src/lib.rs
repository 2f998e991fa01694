//! Pure policy evaluation (no IO).
//!
//! Input: an import graph plus the effective configuration.
//! Output: findings + verdict + summary data.
//!
//! The module rule is built from small pieces that can be used on their own:
//! [`pattern`] compiles user patterns, [`spec`] resolves raw module options into
//! a compiled tree, [`memo`] caches that tree per configuration, [`locate`] finds
//! the module owning a path, [`permission`] decides an edge and [`format`] renders
//! the verdicts.

#![forbid(unsafe_code)]

pub mod edge;
pub mod format;
pub mod layers;
pub mod locate;
pub mod memo;
pub mod pattern;
pub mod permission;
pub mod policy;
pub mod report;
pub mod spec;

mod checks;
mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{CompiledCache, evaluate};
pub use spec::SpecError;
