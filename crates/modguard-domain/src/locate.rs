//! Finding the module that owns a path.

use crate::spec::ModuleSpec;
use modguard_types::path::is_under;

/// Whether `path` is the module root or lies below it.
pub fn contains(spec: &ModuleSpec, path: &str) -> bool {
    is_under(path, &spec.path)
}

/// First module of `specs`, in declaration order, containing `path`.
///
/// Sibling modules are expected not to overlap; when they do, the earlier
/// declaration wins.
pub fn locate<'s>(path: &str, specs: &[&'s ModuleSpec]) -> Option<&'s ModuleSpec> {
    specs.iter().copied().find(|s| contains(s, path))
}
