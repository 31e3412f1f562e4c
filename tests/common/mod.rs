//! Shared helpers for CLI tests.
//!
//! - `TestEnv`: an isolated working directory and HOME for one run
//! - `fixtures`: a local template repository to clone from

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
