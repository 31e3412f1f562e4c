//! Error types for the Decent App creator
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`
//! and uses [`CreatorError::kind`] to decide how much detail to print.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for creator operations
pub type CreatorResult<T> = Result<T, CreatorError>;

/// How an error should be surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Anticipated precondition failure; short message, no diagnostics
    ExpectedValidation,
    /// Bug or environment problem; full diagnostic chain
    Internal,
}

/// Main error type for creator operations
#[derive(Error, Debug)]
pub enum CreatorError {
    /// Empty or malformed user input
    #[error("{message}")]
    InvalidInput { field: &'static str, message: String },

    /// Display name could inject markup into generated pages
    #[error(
        "App display name seems like it might contain an injection attack. \
         Consider using a different name, even if you replace it in the created project later."
    )]
    InjectionRisk { name: String },

    /// Target folder is already present
    #[error(
        "Folder named {} already exists. Please choose a different folder name or delete existing folder.",
        .path.display()
    )]
    TargetExists { path: PathBuf },

    /// Template clone did not succeed
    #[error("Failed to clone repository. {reason}")]
    CloneFailed { reason: String },

    /// Required external tool missing or too old
    #[error("{message}")]
    UnsupportedTool { message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {}: {message}", .file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// File system port failure
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CreatorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CreatorError::InvalidInput { .. }
            | CreatorError::InjectionRisk { .. }
            | CreatorError::TargetExists { .. }
            | CreatorError::CloneFailed { .. }
            | CreatorError::UnsupportedTool { .. }
            | CreatorError::InvalidConfig { .. } => ErrorKind::ExpectedValidation,
            CreatorError::Fs(_) | CreatorError::Io(_) => ErrorKind::Internal,
        }
    }

    pub fn is_expected(&self) -> bool {
        self.kind() == ErrorKind::ExpectedValidation
    }
}
