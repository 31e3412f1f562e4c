//! Git Template Source
//!
//! Clones the template repository by shelling out to the `git` CLI.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::ToolVersion;
use crate::domain::ports::{CloneError, TemplateSource};

const GIT: &str = "git";

/// Template source backed by `git clone`
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    min_version: ToolVersion,
    /// Keep git's progress output off stdout (JSON mode)
    quiet: bool,
}

impl GitCli {
    pub fn new(min_version: ToolVersion) -> Self {
        Self {
            program: GIT.to_string(),
            min_version,
            quiet: false,
        }
    }

    /// Use a different executable (tests, wrappers)
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Version reported by `git --version`
    pub fn installed_version(&self) -> Result<ToolVersion, CloneError> {
        let output = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| CloneError::Spawn {
                tool: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CloneError::Failed {
                tool: self.program.clone(),
                code: output.status.code(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_git_version(&stdout).ok_or_else(|| CloneError::Unsupported {
            tool: self.program.clone(),
            found: stdout.trim().to_string(),
            required: self.min_version.to_string(),
        })
    }
}

/// Extract the version from output such as `git version 2.39.3 (Apple Git-146)`.
pub fn parse_git_version(output: &str) -> Option<ToolVersion> {
    output
        .split_whitespace()
        .find_map(|word| ToolVersion::parse(word).ok())
}

impl TemplateSource for GitCli {
    fn preflight(&self) -> Result<(), CloneError> {
        let found = self.installed_version()?;
        if found < self.min_version {
            return Err(CloneError::Unsupported {
                tool: self.program.clone(),
                found: found.to_string(),
                required: self.min_version.to_string(),
            });
        }
        Ok(())
    }

    fn fetch(&self, url: &str, dest: &Path) -> Result<(), CloneError> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("clone").arg(url).arg(dest).stdin(Stdio::inherit());

        if self.quiet {
            cmd.stdout(Stdio::null()).stderr(Stdio::inherit());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        let status = cmd.status().map_err(|source| CloneError::Spawn {
            tool: self.program.clone(),
            source,
        })?;

        if !status.success() {
            return Err(CloneError::Failed {
                tool: self.program.clone(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_version() {
        let v = parse_git_version("git version 2.43.0\n").unwrap();
        assert_eq!(v, ToolVersion::new(2, 43));
    }

    #[test]
    fn parses_vendor_suffixed_version() {
        let v = parse_git_version("git version 2.39.3 (Apple Git-146)").unwrap();
        assert_eq!(v, ToolVersion::new(2, 39));

        let v = parse_git_version("git version 2.45.1.windows.1").unwrap();
        assert_eq!(v, ToolVersion::new(2, 45));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_git_version("command not found").is_none());
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let git = GitCli::new(ToolVersion::new(2, 0)).with_program("definitely-not-git-xyz");
        let err = git.preflight().unwrap_err();
        assert!(matches!(err, CloneError::Spawn { .. }));
    }
}
