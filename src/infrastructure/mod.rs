//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system implementation
//! - `git` - Template source backed by the `git` CLI
//! - `events/` - Event sink implementations

pub mod events;
pub mod fs;
pub mod git;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use git::GitCli;
