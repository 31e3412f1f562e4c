//! Application Layer
//!
//! Use cases that orchestrate the scaffolding flow.
//! This layer:
//! - Depends on Domain layer (validation, substitution, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ScaffoldUseCase` - clone, strip history, replace placeholders
//!
//! ## Services
//!
//! - `replace_in_file` - literal placeholder replacement in one file
//! - `walk` / `replace_in_tree` - extension-filtered recursive walk

pub mod replacer;
pub mod scaffold;
pub mod walker;

pub use replacer::{replace_in_file, ReplaceOutcome};
pub use scaffold::{ScaffoldReport, ScaffoldRequest, ScaffoldUseCase};
pub use walker::{replace_in_tree, walk, TreeReplaceSummary, TreeWalk, WalkEntry};
