//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the scaffolding core to read, rewrite and walk files
//! without depending on concrete implementations (local disk, test doubles).

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Content is not valid UTF-8 text
    NotText(PathBuf),
    /// I/O error
    Io { path: PathBuf, source: std::io::Error },
}

impl FsError {
    /// Classify an I/O error raised while touching `path`.
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            std::io::ErrorKind::InvalidData => FsError::NotText(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound(path)
            | FsError::PermissionDenied(path)
            | FsError::NotText(path)
            | FsError::Io { path, .. } => path,
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::NotText(path) => write!(f, "Not a UTF-8 text file: {}", path.display()),
            FsError::Io { path, source } => {
                write!(f, "I/O error at {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Classification of a directory entry, resolved through symlinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// A symlink whose target is a directory; never descended into
    LinkedDirectory,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - test doubles that inject failures
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Replace file content
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if any entry exists at path
    fn exists(&self, path: &Path) -> bool;

    /// Stat an entry, following symlinks
    fn entry_kind(&self, path: &Path) -> FsResult<EntryKind>;

    /// List the entries of a directory, in listing order
    fn list_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>>;

    /// Remove a directory tree; a missing path is not an error
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read(&self, path: &Path) -> FsResult<String> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        (**self).write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn entry_kind(&self, path: &Path) -> FsResult<EntryKind> {
        (**self).entry_kind(path)
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>> {
        (**self).list_dir(path)
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).remove_dir_all(path)
    }
}
