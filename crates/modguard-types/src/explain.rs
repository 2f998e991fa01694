//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after configuration or code examples.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Input that would trigger a finding.
    pub before: &'static str,
    /// Input that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_IMPORTS_MODULES => Some(explain_modules()),
        ids::CHECK_IMPORTS_LAYERS => Some(explain_layers()),
        ids::CHECK_IMPORTS_BOUNDED => Some(explain_bounded()),

        // Codes
        ids::CODE_PRIVATE_IMPLEMENTATION => Some(explain_private_implementation()),
        ids::CODE_NOT_A_DEPENDENCY => Some(explain_not_a_dependency()),
        ids::CODE_INVALID_EXTERNAL => Some(explain_invalid_external()),
        ids::CODE_LAYER_VIOLATION => Some(explain_layer_violation()),
        ids::CODE_BOUNDED_IMPORT => Some(explain_bounded_import()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_IMPORTS_MODULES,
        ids::CHECK_IMPORTS_LAYERS,
        ids::CHECK_IMPORTS_BOUNDED,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_PRIVATE_IMPLEMENTATION,
        ids::CODE_NOT_A_DEPENDENCY,
        ids::CODE_INVALID_EXTERNAL,
        ids::CODE_LAYER_VIOLATION,
        ids::CODE_BOUNDED_IMPORT,
    ]
}

// --- Check-level explanations ---

fn explain_modules() -> Explanation {
    Explanation {
        title: "Module Boundaries",
        description: "\
Enforces the contract declared for each module in `[[modules]]`.

A module is every file under its `path`. Imports crossing a module boundary must:
- target a file listed in the destination module's `interface`
- come from a module that lists the destination in `dependencies`
- for destinations outside every module, match the source module's `externals`

Files inside a submodule follow the submodule's rules instead of the parent's.
A matching `exceptions` entry allows the import regardless of the other rules.",
        remediation: "\
Import the destination module through its public interface, declare the
dependency on the importing module, or add the external target to `externals`.
Use `exceptions` only for known, tracked debt.",
        examples: ExamplePair {
            before: r#"[[modules]]
path = "src/billing"
interface = "src/billing/index"

[[modules]]
path = "src/ui"
# src/ui/cart.ts imports src/billing/invoice.ts"#,
            after: r#"[[modules]]
path = "src/billing"
interface = "src/billing/index"

[[modules]]
path = "src/ui"
dependencies = ["src/billing"]
# src/ui/cart.ts imports src/billing/index.ts"#,
        },
    }
}

fn explain_layers() -> Explanation {
    Explanation {
        title: "Layer Rules",
        description: "\
Restricts which paths the files of a layer may import.

Each `[[layers]]` rule applies to files matching `from` and lists the patterns
those files may import in `to` (minus `except`). With `allow_children` (the
default) a file may always import files below its own directory and files of
its own layer.",
        remediation: "\
Move the import behind a layer the source is allowed to depend on, or widen
the rule's `to` list if the dependency is intended.",
        examples: ExamplePair {
            before: r#"[[layers]]
from = "src/domain"
to = ["src/domain"]
# src/domain/order.ts imports src/ui/button.ts"#,
            after: r#"[[layers]]
from = "src/domain"
to = ["src/domain", "src/shared"]
# src/domain/order.ts imports src/shared/money.ts"#,
        },
    }
}

fn explain_bounded() -> Explanation {
    Explanation {
        title: "Bounded Imports",
        description: "\
Rejects import strings containing any of the configured substrings.

Typical use is forbidding deep relative climbs such as `../../../`, which tie a
file to the exact directory layout around it.",
        remediation: "\
Rewrite the import through an alias or a shorter relative path.",
        examples: ExamplePair {
            before: r#"bounded = ["../../../"]
# import { x } from "../../../shared/x""#,
            after: r#"bounded = ["../../../"]
# import { x } from "src/shared/x""#,
        },
    }
}

// --- Code-level explanations ---

fn explain_private_implementation() -> Explanation {
    Explanation {
        title: "Private Implementation Import",
        description: "\
The imported file belongs to a module but is not part of that module's
`interface`. Only interface files may be imported from outside the module.",
        remediation: "\
Import the symbol through the module's interface file, or add the file to the
module's `interface` if it is meant to be public.",
        examples: ExamplePair {
            before: r#"# src/ui/cart.ts
import { total } from "../billing/internal/total""#,
            after: r#"# src/ui/cart.ts
import { total } from "../billing/index""#,
        },
    }
}

fn explain_not_a_dependency() -> Explanation {
    Explanation {
        title: "Undeclared Module Dependency",
        description: "\
The importing file's module does not list the imported module in its
`dependencies`, or the dependency is restricted with `on` and the imported
path matches none of those patterns.",
        remediation: "\
Add the destination module path to `dependencies` of the importing module.",
        examples: ExamplePair {
            before: r#"[[modules]]
path = "src/ui"
dependencies = []"#,
            after: r#"[[modules]]
path = "src/ui"
dependencies = ["src/billing"]"#,
        },
    }
}

fn explain_invalid_external() -> Explanation {
    Explanation {
        title: "External Import Not Allowed",
        description: "\
The importing module declares an explicit `externals` list and the imported
path belongs to no module and matches none of the listed patterns.

Omitting `externals` allows every external import; `externals = []` allows none.",
        remediation: "\
Add a pattern matching the import to `externals`, or route the import through a
module that is allowed to use it.",
        examples: ExamplePair {
            before: r#"[[modules]]
path = "src/domain"
externals = []"#,
            after: r#"[[modules]]
path = "src/domain"
externals = ["^decimal\\.js$"]"#,
        },
    }
}

fn explain_layer_violation() -> Explanation {
    Explanation {
        title: "Layer Violation",
        description: "\
A file matched by a layer rule imports a path outside the rule's `to` list (or
inside its `except` list).",
        remediation: "\
Depend on an allowed layer instead, or update the rule if the dependency is
intended.",
        examples: explain_layers().examples,
    }
}

fn explain_bounded_import() -> Explanation {
    Explanation {
        title: "Bounded Import",
        description: "\
The import string contains a substring listed in `bounded`.",
        remediation: explain_bounded().remediation,
        examples: explain_bounded().examples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_identifier_has_an_explanation() {
        for id in all_check_ids().iter().chain(all_codes()) {
            assert!(lookup_explanation(id).is_some(), "missing explanation for {id}");
        }
    }

    #[test]
    fn unknown_identifier_is_none() {
        assert!(lookup_explanation("imports.nope").is_none());
    }
}
