//! Input validation for project and display names
//!
//! These checks run before anything touches the disk. They are advisory:
//! they catch an accidental install location, an accidental overwrite, and a
//! display name that would inject markup into generated pages.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::error::{CreatorError, CreatorResult};

const PATH_CHARACTERS: &[char] = &['/', '\\'];
const MARKUP_CHARACTERS: &[char] = &['<', '>'];

/// A project folder name that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Folder the project will be created in, relative to `base_dir`.
    pub fn target_dir(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.0)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An app display name that is safe to embed in generated markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn contains_path_characters(text: &str) -> bool {
    text.contains(PATH_CHARACTERS)
}

pub fn contains_markup_characters(text: &str) -> bool {
    text.contains(MARKUP_CHARACTERS)
}

/// Validate a project folder name against `base_dir`.
///
/// Fails with `InvalidInput` for an empty name or one containing a path
/// separator, and with `TargetExists` when `base_dir/name` is already taken.
pub fn validate_project_name(
    name: &str,
    base_dir: &Path,
    fs: &impl FileSystem,
) -> CreatorResult<ProjectName> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CreatorError::InvalidInput {
            field: "project name",
            message: "Project name is required.".to_string(),
        });
    }

    if contains_path_characters(name) {
        return Err(CreatorError::InvalidInput {
            field: "project name",
            message: "Project name cannot contain path characters. If you're trying to install \
                      to a specific location, change your working directory to the location \
                      where the project will be installed before running."
                .to_string(),
        });
    }

    if fs.exists(&base_dir.join(name)) {
        return Err(CreatorError::TargetExists {
            path: PathBuf::from(name),
        });
    }

    Ok(ProjectName(name.to_string()))
}

/// Validate an app display name.
///
/// Fails with `InvalidInput` when empty and with `InjectionRisk` when it
/// contains `<` or `>`.
pub fn validate_display_name(name: &str) -> CreatorResult<DisplayName> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CreatorError::InvalidInput {
            field: "display name",
            message: "App display name is required.".to_string(),
        });
    }

    if contains_markup_characters(name) {
        return Err(CreatorError::InjectionRisk {
            name: name.to_string(),
        });
    }

    Ok(DisplayName(name.to_string()))
}
