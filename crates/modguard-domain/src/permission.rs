//! The module permission decision for one edge.
//!
//! Axes, in order: same-module (always allowed, refined by submodules), the
//! destination's interface, then the source's dependencies or externals. An
//! exception declared on the module being checked lifts that module's axis.
//! Files inside a submodule are judged by the submodule, not by its parent.

use crate::edge::ImportEdge;
use crate::format::{MessageParams, ViolationKind, format_violation};
use crate::locate::locate;
use crate::pattern;
use crate::spec::ModuleSpec;
use std::ptr;

/// One failed axis, with the template parameters it needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation<'s> {
    pub kind: ViolationKind,
    pub from_module: Option<&'s str>,
    pub to_module: Option<&'s str>,
    /// Custom message of the module blamed for the violation.
    pub message: Option<&'s str>,
}

impl<'s> Violation<'s> {
    fn private_implementation(to_module: &'s ModuleSpec) -> Self {
        Self {
            kind: ViolationKind::PrivateImplementation,
            from_module: None,
            to_module: Some(to_module.path.as_str()),
            message: to_module.message.as_deref(),
        }
    }

    fn not_a_dependency(from_module: &'s ModuleSpec, to_module: &'s ModuleSpec) -> Self {
        Self {
            kind: ViolationKind::NotADependency,
            from_module: Some(from_module.path.as_str()),
            to_module: Some(to_module.path.as_str()),
            message: from_module.message.as_deref(),
        }
    }

    fn invalid_external(from_module: &'s ModuleSpec) -> Self {
        Self {
            kind: ViolationKind::InvalidExternal,
            from_module: Some(from_module.path.as_str()),
            to_module: None,
            message: from_module.message.as_deref(),
        }
    }

    /// Render against the edge's raw file and import strings.
    pub fn render(&self, edge: &ImportEdge) -> String {
        format_violation(
            self.kind,
            &MessageParams {
                from: Some(edge.from().file_path.as_str()),
                to: Some(edge.import_path()),
                from_module: self.from_module,
                to_module: self.to_module,
                message: self.message,
            },
        )
    }
}

/// Result of evaluating an edge against one scope.
#[derive(Clone, Debug, Default)]
pub struct Evaluation<'s> {
    pub violations: Vec<Violation<'s>>,
    /// The module of this scope containing the importing file.
    pub from_module: Option<&'s ModuleSpec>,
}

impl<'s> Evaluation<'s> {
    fn allowed(from_module: Option<&'s ModuleSpec>) -> Self {
        Self {
            violations: Vec::new(),
            from_module,
        }
    }
}

/// Evaluate `edge` against the sibling modules in `scope`.
///
/// An inbound failure (`PrivateImplementation`) ends the evaluation: the
/// source-side axes are not checked for that edge.
pub fn evaluate<'s>(scope: &[&'s ModuleSpec], edge: &ImportEdge) -> Evaluation<'s> {
    if scope.is_empty() {
        return Evaluation::allowed(None);
    }

    let from_module = locate(edge.from().absolute_file_path.as_str(), scope);
    let to_module = locate(edge.to().absolute_imported_path.as_str(), scope);

    if let (Some(f), Some(t)) = (from_module, to_module)
        && ptr::eq(f, t)
    {
        if f.submodules.is_empty() {
            return Evaluation::allowed(Some(f));
        }
        let inner_scope: Vec<&'s ModuleSpec> = f.submodules.iter().collect();
        let inner = evaluate(&inner_scope, edge);
        return Evaluation {
            violations: inner.violations,
            from_module: Some(f),
        };
    }

    if let Some(t) = to_module
        && !inbound_allowed(edge, t)
    {
        return Evaluation {
            violations: vec![Violation::private_implementation(t)],
            from_module,
        };
    }

    let Some(f) = from_module else {
        return Evaluation::allowed(None);
    };

    if !f.submodules.is_empty() {
        // Submodules first, then the parent's siblings so the destination
        // still resolves to the same module it did here.
        let inner_scope: Vec<&'s ModuleSpec> = f
            .submodules
            .iter()
            .chain(scope.iter().copied().filter(|s| !ptr::eq(*s, f)))
            .collect();
        let inner = evaluate(&inner_scope, edge);
        if inner.from_module.is_some() {
            return Evaluation {
                violations: inner.violations,
                from_module: Some(f),
            };
        }
    }

    let violation = match to_module {
        Some(t) if !dependency_allowed(edge, f, t) => Some(Violation::not_a_dependency(f, t)),
        Some(_) => None,
        None if !external_allowed(edge, f) => Some(Violation::invalid_external(f)),
        None => None,
    };

    Evaluation {
        violations: violation.into_iter().collect(),
        from_module: Some(f),
    }
}

/// Render every violation of `edge`, dropping repeated messages.
pub fn edge_messages(scope: &[&ModuleSpec], edge: &ImportEdge) -> Vec<(ViolationKind, String)> {
    let mut out: Vec<(ViolationKind, String)> = Vec::new();
    for violation in evaluate(scope, edge).violations {
        let message = violation.render(edge);
        if out.iter().any(|(_, m)| *m == message) {
            continue;
        }
        out.push((violation.kind, message));
    }
    out
}

fn is_exception(edge: &ImportEdge, module: &ModuleSpec) -> bool {
    let from = edge.from().absolute_file_path.as_str();
    let to = edge.to().absolute_imported_path.as_str();
    module.exceptions.iter().any(|e| e.covers(from, to))
}

fn inbound_allowed(edge: &ImportEdge, to_module: &ModuleSpec) -> bool {
    // The destination is part of the public interface,
    pattern::any_match(&to_module.interfaces, edge.to().absolute_imported_path.as_str())
        // or the `(from, to)` pair is a declared exception.
        || is_exception(edge, to_module)
}

fn dependency_allowed(edge: &ImportEdge, from_module: &ModuleSpec, to_module: &ModuleSpec) -> bool {
    let target = edge.to().absolute_imported_path.as_str();
    from_module
        .dependencies
        .iter()
        .any(|d| d.covers(&to_module.path, target))
        || is_exception(edge, from_module)
}

fn external_allowed(edge: &ImportEdge, from_module: &ModuleSpec) -> bool {
    from_module
        .externals
        .allows(edge.to().absolute_imported_path.as_str())
        || is_exception(edge, from_module)
}
