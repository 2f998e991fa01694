//! One import edge: the importing file and the (lazily resolved) destination.

use modguard_types::RepoPath;
use std::cell::OnceCell;

/// The importing file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FromInfo {
    /// Path as supplied by the host; used verbatim in messages.
    pub file_path: String,
    pub absolute_file_path: RepoPath,
    pub absolute_file_dir: RepoPath,
}

/// The import target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportInfo {
    /// Import string as written in the source; used verbatim in messages.
    pub import_path: String,
    pub absolute_imported_path: RepoPath,
    /// `None` for single-segment identifiers such as bare package names.
    pub absolute_imported_dir: Option<RepoPath>,
}

/// An import edge whose destination is resolved on first access only.
#[derive(Debug)]
pub struct ImportEdge {
    from: FromInfo,
    import_path: String,
    root: RepoPath,
    to: OnceCell<ImportInfo>,
}

impl ImportEdge {
    /// `file_path` and non-relative imports may be repo-relative or absolute;
    /// absolute paths under `root` are made repo-relative.
    pub fn new(file_path: &str, import_path: &str, root: &RepoPath) -> Self {
        let absolute_file_path = RepoPath::new(file_path).relative_to(root);
        let absolute_file_dir = absolute_file_path
            .parent()
            .unwrap_or_else(|| RepoPath::new("."));

        Self {
            from: FromInfo {
                file_path: file_path.to_string(),
                absolute_file_path,
                absolute_file_dir,
            },
            import_path: import_path.to_string(),
            root: root.clone(),
            to: OnceCell::new(),
        }
    }

    pub fn from(&self) -> &FromInfo {
        &self.from
    }

    pub fn import_path(&self) -> &str {
        &self.import_path
    }

    /// The resolved destination. Relative imports (leading `.`) resolve against
    /// the importing file's directory; anything else is only stripped of `root`.
    pub fn to(&self) -> &ImportInfo {
        self.to.get_or_init(|| {
            let absolute_imported_path = if self.import_path.starts_with('.') {
                self.from.absolute_file_dir.join(&self.import_path)
            } else {
                RepoPath::new(&self.import_path).relative_to(&self.root)
            };
            ImportInfo {
                import_path: self.import_path.clone(),
                absolute_imported_dir: absolute_imported_path.parent(),
                absolute_imported_path,
            }
        })
    }

    pub fn is_resolved(&self) -> bool {
        self.to.get().is_some()
    }
}
