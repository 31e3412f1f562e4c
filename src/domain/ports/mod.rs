//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod scaffold_events;
pub mod template_source;

pub use file_system::{EntryKind, FileSystem, FsError, FsResult};
pub use scaffold_events::{NoopEventSink, ScaffoldEvent, ScaffoldEventSink};
pub use template_source::{CloneError, TemplateSource};
