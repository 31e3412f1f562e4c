//! create-decent-app - scaffold a new Decent App project
//!
//! Clones the template repository into a new folder, drops its git history,
//! and replaces the template's placeholder names with the project name and
//! display name the user picked.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    replace_in_file, replace_in_tree, walk, ReplaceOutcome, ScaffoldReport, ScaffoldRequest,
    ScaffoldUseCase, WalkEntry,
};
pub use config::CreatorConfig;
pub use domain::{validate_display_name, validate_project_name, DisplayName, ProjectName};
pub use error::{CreatorError, CreatorResult, ErrorKind};
pub use infrastructure::{GitCli, JsonEventSink, LocalFs};
