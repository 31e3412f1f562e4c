//! Recursive directory walk filtered by file extension
//!
//! The walk is lazy and depth-first in directory-listing order. Entries whose
//! metadata cannot be read are yielded as [`WalkEntry::Skipped`] instead of
//! ending the walk.

use std::path::{Path, PathBuf};

use crate::domain::ports::{EntryKind, FileSystem, ScaffoldEvent, ScaffoldEventSink};
use crate::domain::substitution::has_extension;
use crate::error::CreatorResult;

use super::replacer::{replace_in_file, ReplaceOutcome};

/// One item produced by [`TreeWalk`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEntry {
    /// A file whose extension matched the filter
    File(PathBuf),
    /// An entry that could not be inspected; the walk carried on
    Skipped { path: PathBuf, reason: String },
}

/// Lazy depth-first iterator over matching files
pub struct TreeWalk<'a, F: FileSystem> {
    fs: &'a F,
    extensions: &'a [String],
    stack: Vec<std::vec::IntoIter<PathBuf>>,
}

/// Start walking `root`.
///
/// Listing `root` itself must succeed; every failure below it is reported as
/// a skipped entry.
pub fn walk<'a, F: FileSystem>(
    fs: &'a F,
    root: &Path,
    extensions: &'a [String],
) -> CreatorResult<TreeWalk<'a, F>> {
    let entries = fs.list_dir(root)?;
    Ok(TreeWalk {
        fs,
        extensions,
        stack: vec![entries.into_iter()],
    })
}

impl<F: FileSystem> Iterator for TreeWalk<'_, F> {
    type Item = WalkEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next = self.stack.last_mut()?.next();
            let path = match next {
                Some(path) => path,
                None => {
                    self.stack.pop();
                    continue;
                }
            };

            match self.fs.entry_kind(&path) {
                Err(e) => {
                    return Some(WalkEntry::Skipped {
                        reason: e.to_string(),
                        path,
                    })
                }
                Ok(EntryKind::Directory) => match self.fs.list_dir(&path) {
                    Ok(children) => self.stack.push(children.into_iter()),
                    Err(e) => {
                        return Some(WalkEntry::Skipped {
                            reason: e.to_string(),
                            path,
                        })
                    }
                },
                Ok(EntryKind::LinkedDirectory) => {}
                Ok(EntryKind::File) => {
                    if has_extension(&path, self.extensions) {
                        return Some(WalkEntry::File(path));
                    }
                }
            }
        }
    }
}

/// Totals from one tree-wide replacement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeReplaceSummary {
    pub updated: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
    pub skipped: Vec<(PathBuf, String)>,
}

/// Replace `search` in every matching file under `root`.
///
/// A replacement failure on a matched file aborts the walk. Skipped entries
/// are reported to `sink` and collected.
pub fn replace_in_tree(
    fs: &impl FileSystem,
    root: &Path,
    extensions: &[String],
    search: &str,
    replace: &str,
    sink: &dyn ScaffoldEventSink,
) -> CreatorResult<TreeReplaceSummary> {
    let mut summary = TreeReplaceSummary::default();

    for entry in walk(fs, root, extensions)? {
        match entry {
            WalkEntry::File(path) => match replace_in_file(fs, &path, search, replace)? {
                ReplaceOutcome::Updated => {
                    sink.on_event(ScaffoldEvent::FileUpdated { path: path.clone() });
                    summary.updated.push(path);
                }
                ReplaceOutcome::Unchanged => {
                    sink.on_event(ScaffoldEvent::FileUnchanged { path: path.clone() });
                    summary.unchanged.push(path);
                }
            },
            WalkEntry::Skipped { path, reason } => {
                sink.on_event(ScaffoldEvent::EntrySkipped {
                    path: path.clone(),
                    reason: reason.clone(),
                });
                summary.skipped.push((path, reason));
            }
        }
    }

    Ok(summary)
}
