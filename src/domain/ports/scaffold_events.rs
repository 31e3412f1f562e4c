//! Scaffold Event Port
//!
//! Provides an observable interface for scaffolding runs.
//! Enables console progress, JSON event streams, and silent operation.

use std::path::PathBuf;

/// Event emitted while a project is being scaffolded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    /// Template clone is about to start
    Cloning { url: String, destination: PathBuf },

    /// Version-control history is being removed
    RemovingHistory { path: PathBuf },

    /// Placeholder substitution is starting
    ReplacingPlaceholders,

    /// File content was rewritten
    FileUpdated { path: PathBuf },

    /// File was read but did not contain the placeholder
    FileUnchanged { path: PathBuf },

    /// Entry could not be inspected during the tree walk (non-fatal)
    EntrySkipped { path: PathBuf, reason: String },

    /// Scaffolding finished
    Completed {
        project_dir: PathBuf,
        updated_count: usize,
        skipped_count: usize,
    },
}

/// Trait for receiving scaffold events
///
/// Implementations:
/// - ConsoleEventSink: human-readable lines in the terminal
/// - JsonEventSink: NDJSON event stream for automation
/// - NoopEventSink: Silent operation
pub trait ScaffoldEventSink {
    fn on_event(&self, event: ScaffoldEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ScaffoldEventSink for NoopEventSink {
    fn on_event(&self, _event: ScaffoldEvent) {}
}
