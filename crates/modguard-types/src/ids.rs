//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_IMPORTS_MODULES: &str = "imports.modules";
pub const CHECK_IMPORTS_LAYERS: &str = "imports.layers";
pub const CHECK_IMPORTS_BOUNDED: &str = "imports.bounded";

// Codes: imports.modules
pub const CODE_PRIVATE_IMPLEMENTATION: &str = "private_implementation";
pub const CODE_NOT_A_DEPENDENCY: &str = "not_a_dependency";
pub const CODE_INVALID_EXTERNAL: &str = "invalid_external";

// Codes: imports.layers
pub const CODE_LAYER_VIOLATION: &str = "layer_violation";

// Codes: imports.bounded
pub const CODE_BOUNDED_IMPORT: &str = "bounded_import";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
