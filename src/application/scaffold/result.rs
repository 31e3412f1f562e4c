//! Scaffold Result

use std::path::PathBuf;

/// Result of a completed scaffolding run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Folder the project was created in
    pub project_dir: PathBuf,
    /// Files whose placeholders were replaced
    pub updated: Vec<PathBuf>,
    /// Files checked that held no placeholder
    pub unchanged: Vec<PathBuf>,
    /// Entries the tree walk could not inspect
    pub skipped: Vec<(PathBuf, String)>,
}

impl ScaffoldReport {
    pub fn new(project_dir: PathBuf) -> Self {
        Self {
            project_dir,
            ..Self::default()
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.skipped.is_empty()
    }
}
