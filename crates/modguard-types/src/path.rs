use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical repo-relative path used for edges, module prefixes and findings.
///
/// Normalization is purely lexical and deterministic:
/// - always forward slashes (`/`)
/// - `.` segments and empty segments dropped
/// - `..` folded into the preceding segment; leading `..` segments are kept
/// - the empty path is spelled `.`
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct RepoPath(String);

impl Default for RepoPath {
    fn default() -> Self {
        RepoPath::new(".")
    }
}

impl RepoPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let raw = s.as_ref().replace('\\', "/");
        let absolute = raw.starts_with('/');

        let mut parts: Vec<&str> = Vec::new();
        for segment in raw.split('/') {
            match segment {
                "" | "." => {}
                ".." => match parts.last() {
                    Some(&last) if last != ".." => {
                        parts.pop();
                    }
                    // `/..` is still `/`.
                    _ if absolute => {}
                    _ => parts.push(".."),
                },
                other => parts.push(other),
            }
        }

        let joined = parts.join("/");
        let v = match (absolute, joined.is_empty()) {
            (true, _) => format!("/{joined}"),
            (false, true) => ".".to_string(),
            (false, false) => joined,
        };
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_absolute(&self) -> bool {
        self.0.starts_with('/')
    }

    pub fn to_utf8_pathbuf(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.0.clone())
    }

    pub fn join(&self, segment: &str) -> RepoPath {
        let base = Utf8Path::new(self.as_str());
        RepoPath::new(base.join(segment).as_str())
    }

    /// Directory part of the path, or `None` for a single segment.
    pub fn parent(&self) -> Option<RepoPath> {
        let (dir, _) = self.0.rsplit_once('/')?;
        if dir.is_empty() {
            return Some(RepoPath("/".to_string()));
        }
        Some(RepoPath(dir.to_string()))
    }

    /// True when `self` is `dir` or lies below it.
    pub fn is_within(&self, dir: &RepoPath) -> bool {
        if dir.as_str() == "." {
            return !self.is_absolute() && !self.0.starts_with("..");
        }
        is_under(self.as_str(), dir.as_str())
    }

    /// Express `self` relative to `root` when it lies below it; otherwise unchanged.
    pub fn relative_to(&self, root: &RepoPath) -> RepoPath {
        if self == root {
            return RepoPath::new(".");
        }
        let prefix = root.as_str().trim_end_matches('/');
        match self.0.strip_prefix(prefix) {
            Some(rest) if rest.starts_with('/') => RepoPath::new(rest.trim_start_matches('/')),
            _ => self.clone(),
        }
    }
}

impl std::fmt::Display for RepoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&Utf8Path> for RepoPath {
    fn from(value: &Utf8Path) -> Self {
        RepoPath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for RepoPath {
    fn from(value: Utf8PathBuf) -> Self {
        RepoPath::new(value.as_str())
    }
}

/// Prefix test on `/` boundaries: `path == prefix` or `path` starts with `prefix/`.
pub fn is_under(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some("") => true,
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_separators_and_dots() {
        assert_eq!(RepoPath::new("./src\\a/./b/").as_str(), "src/a/b");
        assert_eq!(RepoPath::new("src/a/../b").as_str(), "src/b");
        assert_eq!(RepoPath::new("../../x").as_str(), "../../x");
        assert_eq!(RepoPath::new("src/../../x").as_str(), "../x");
        assert_eq!(RepoPath::new("").as_str(), ".");
        assert_eq!(RepoPath::new("/..").as_str(), "/");
        assert_eq!(RepoPath::new("/repo/./src").as_str(), "/repo/src");
    }

    #[test]
    fn join_resolves_relative_segments() {
        let dir = RepoPath::new("src/b");
        assert_eq!(dir.join("../a/index").as_str(), "src/a/index");
        assert_eq!(RepoPath::new(".").join("./x").as_str(), "x");
    }

    #[test]
    fn parent_of_single_segment_is_none() {
        assert_eq!(RepoPath::new("react").parent(), None);
        assert_eq!(
            RepoPath::new("src/a/x.ts").parent(),
            Some(RepoPath::new("src/a"))
        );
        assert_eq!(RepoPath::new("/x").parent().map(|p| p.0), Some("/".into()));
    }

    #[test]
    fn is_under_respects_segment_boundaries() {
        assert!(is_under("src/a", "src/a"));
        assert!(is_under("src/a/x.ts", "src/a"));
        assert!(!is_under("src/ab/x.ts", "src/a"));
        assert!(!is_under("lib/src/a/x.ts", "src/a"));
    }

    #[test]
    fn is_within_root_excludes_escapes() {
        let root = RepoPath::new(".");
        assert!(RepoPath::new("src/x").is_within(&root));
        assert!(!RepoPath::new("../x").is_within(&root));
    }

    #[test]
    fn relative_to_strips_root() {
        let root = RepoPath::new("/work/repo");
        assert_eq!(
            RepoPath::new("/work/repo/src/a.ts").relative_to(&root).as_str(),
            "src/a.ts"
        );
        assert_eq!(
            RepoPath::new("/work/repository/a.ts").relative_to(&root).as_str(),
            "/work/repository/a.ts"
        );
        assert_eq!(RepoPath::new("/work/repo").relative_to(&root).as_str(), ".");
    }
}
