//! Placeholder replacement within a single file

use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::error::CreatorResult;

/// What happened to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// Content contained the search text and was rewritten
    Updated,
    /// Search text absent; the file was not written
    Unchanged,
}

/// Replace every occurrence of `search` in the file at `path`.
///
/// The search text is matched literally. The file is only written when the
/// text occurs at least once, so an untouched file keeps its modification
/// time.
pub fn replace_in_file(
    fs: &impl FileSystem,
    path: &Path,
    search: &str,
    replace: &str,
) -> CreatorResult<ReplaceOutcome> {
    let content = fs.read(path)?;
    if search.is_empty() || !content.contains(search) {
        return Ok(ReplaceOutcome::Unchanged);
    }

    fs.write(path, &content.replace(search, replace))?;
    Ok(ReplaceOutcome::Updated)
}
