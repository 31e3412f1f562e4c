//! Scaffold Request

use std::path::{Path, PathBuf};

use crate::domain::{DisplayName, ProjectName};

/// Validated input for one scaffolding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub project_name: ProjectName,
    pub display_name: DisplayName,
    /// Directory the project folder is created in
    pub base_dir: PathBuf,
}

impl ScaffoldRequest {
    pub fn new(project_name: ProjectName, display_name: DisplayName, base_dir: &Path) -> Self {
        Self {
            project_name,
            display_name,
            base_dir: base_dir.to_path_buf(),
        }
    }

    pub fn project_dir(&self) -> PathBuf {
        self.project_name.target_dir(&self.base_dir)
    }
}
