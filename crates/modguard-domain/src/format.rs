//! Violation messages.
//!
//! Downstream tooling asserts on these texts; keep them word for word.

use modguard_types::ids;

pub const PRIVATE_IMPLEMENTATION: &str = "Module abstraction violation: '{from}' cannot import '{to}'.

'{to}' is part of module '{toModule}' but not listed in the module public
interface (i.e. is an implementation detail).";

pub const NOT_A_DEPENDENCY: &str = "Module abstraction violation: '{from}' cannot import '{to}'.

'{toModule}' is not listed as a valid dependency of '{fromModule}'.";

pub const INVALID_EXTERNAL: &str = "Module abstraction violation: '{from}' cannot import '{to}'.

'{fromModule}' has an explicit list of allowed external imports and '{to}' is not
in this list.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    PrivateImplementation,
    NotADependency,
    InvalidExternal,
}

impl ViolationKind {
    pub fn template(self) -> &'static str {
        match self {
            ViolationKind::PrivateImplementation => PRIVATE_IMPLEMENTATION,
            ViolationKind::NotADependency => NOT_A_DEPENDENCY,
            ViolationKind::InvalidExternal => INVALID_EXTERNAL,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ViolationKind::PrivateImplementation => ids::CODE_PRIVATE_IMPLEMENTATION,
            ViolationKind::NotADependency => ids::CODE_NOT_A_DEPENDENCY,
            ViolationKind::InvalidExternal => ids::CODE_INVALID_EXTERNAL,
        }
    }
}

/// Values substituted into a template. A `None` leaves its token in place.
#[derive(Clone, Copy, Debug, Default)]
pub struct MessageParams<'a> {
    pub from: Option<&'a str>,
    pub to: Option<&'a str>,
    pub from_module: Option<&'a str>,
    pub to_module: Option<&'a str>,
    /// Custom module message, appended after a blank line.
    pub message: Option<&'a str>,
}

/// Substitute every `{from}`, `{to}`, `{fromModule}` and `{toModule}` token.
pub fn fill_template(template: &str, params: &MessageParams<'_>) -> String {
    let tokens = [
        ("{fromModule}", params.from_module),
        ("{toModule}", params.to_module),
        ("{from}", params.from),
        ("{to}", params.to),
    ];

    let mut out = template.to_string();
    for (token, value) in tokens {
        if let Some(value) = value {
            out = out.replace(token, value);
        }
    }
    out
}

/// Render a violation, appending the module's custom message if any.
pub fn format_violation(kind: ViolationKind, params: &MessageParams<'_>) -> String {
    let mut out = fill_template(kind.template(), params);
    if let Some(message) = params.message.filter(|m| !m.is_empty()) {
        out.push_str("\n\n");
        out.push_str(message);
    }
    out
}
