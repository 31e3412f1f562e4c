//! TemplateSource port - materializes the template tree on disk
//!
//! Production uses `git clone`; tests substitute a fake that copies or
//! writes a stub tree.

use std::path::Path;

use thiserror::Error;

/// Failures reported by a template source
#[derive(Error, Debug)]
pub enum CloneError {
    /// The external tool could not be started at all
    #[error("could not run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The external tool ran and reported failure
    #[error("{tool} exited with status {}", exit_code(.code))]
    Failed { tool: String, code: Option<i32> },

    /// The tool is installed but older than required
    #[error("{tool} {found} is installed, but version {required} or greater is required")]
    Unsupported {
        tool: String,
        found: String,
        required: String,
    },
}

fn exit_code(code: &Option<i32>) -> String {
    code.map(|c| c.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub trait TemplateSource {
    /// Check the source can be used before anything touches the disk.
    fn preflight(&self) -> Result<(), CloneError> {
        Ok(())
    }

    /// Materialize the full template tree at `dest`, synchronously.
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), CloneError>;
}

impl<T: TemplateSource + ?Sized> TemplateSource for &T {
    fn preflight(&self) -> Result<(), CloneError> {
        (**self).preflight()
    }

    fn fetch(&self, url: &str, dest: &Path) -> Result<(), CloneError> {
        (**self).fetch(url, dest)
    }
}
