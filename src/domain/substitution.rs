//! Placeholder substitution requests

use std::path::{Path, PathBuf};

/// Where a substitution applies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionScope {
    /// One explicit file
    File(PathBuf),
    /// Every file under `root` whose extension is listed
    Tree {
        root: PathBuf,
        extensions: Vec<String>,
    },
}

/// A literal search/replace pair bound to a scope
///
/// The search text is matched as an exact substring, never as a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRequest {
    search: String,
    replace: String,
    scope: SubstitutionScope,
}

impl SubstitutionRequest {
    pub fn in_file(
        path: impl Into<PathBuf>,
        search: impl Into<String>,
        replace: impl Into<String>,
    ) -> Self {
        Self {
            search: search.into(),
            replace: replace.into(),
            scope: SubstitutionScope::File(path.into()),
        }
    }

    pub fn in_tree(
        root: impl Into<PathBuf>,
        extensions: &[String],
        search: impl Into<String>,
        replace: impl Into<String>,
    ) -> Self {
        Self {
            search: search.into(),
            replace: replace.into(),
            scope: SubstitutionScope::Tree {
                root: root.into(),
                extensions: extensions.to_vec(),
            },
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn replace(&self) -> &str {
        &self.replace
    }

    pub fn scope(&self) -> &SubstitutionScope {
        &self.scope
    }
}

/// Whether `path` has one of `extensions`.
///
/// The extension is the final `.`-separated component of the file name,
/// compared case-sensitively. A dotfile such as `.html` counts as `html`.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rsplit('.').next())
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}
