//! Path patterns.
//!
//! Patterns are regular expression bodies, not globs, and are never anchored
//! implicitly: a matcher accepts a path when the pattern matches anywhere in it.
//! Write `^src/a/index` to pin a prefix.

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("invalid regex pattern '{pattern}': {reason}")]
    InvalidRegex { pattern: String, reason: String },
}

/// A compiled path predicate.
#[derive(Clone, Debug)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// The pattern as written in the configuration.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Compile one pattern. Fails on invalid syntax so bad configuration is caught
/// before the first edge is checked.
pub fn compile(pattern: &str) -> Result<Matcher, PatternError> {
    Regex::new(pattern)
        .map(|regex| Matcher { regex })
        .map_err(|err| PatternError::InvalidRegex {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        })
}

/// Compile a list of patterns, keeping their order.
pub fn compile_all<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Matcher>, PatternError> {
    patterns.iter().map(|p| compile(p.as_ref())).collect()
}

/// True when any matcher accepts `path`.
pub fn any_match(matchers: &[Matcher], path: &str) -> bool {
    matchers.iter().any(|m| m.is_match(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_anywhere_in_path() {
        let m = compile("src/a/index").expect("compile");
        assert!(m.is_match("src/a/index.ts"));
        assert!(m.is_match("packages/web/src/a/index"));
        assert!(!m.is_match("src/a/internal.ts"));
    }

    #[test]
    fn anchors_are_honoured() {
        let m = compile("^react$").expect("compile");
        assert!(m.is_match("react"));
        assert!(!m.is_match("react-dom"));
    }

    #[test]
    fn invalid_pattern_fails_at_compile_time() {
        let err = compile("src/(a").expect_err("unbalanced group");
        let PatternError::InvalidRegex { pattern, reason } = err;
        assert_eq!(pattern, "src/(a");
        assert!(!reason.is_empty());
    }

    #[test]
    fn compile_all_keeps_order_and_stops_on_error() {
        let ms = compile_all(&["a", "b"]).expect("compile");
        assert_eq!(ms.iter().map(Matcher::as_str).collect::<Vec<_>>(), ["a", "b"]);
        assert!(compile_all(&["ok", "[", "never"]).is_err());
        assert!(any_match(&ms, "xbx"));
        assert!(!any_match(&[], "anything"));
    }
}
