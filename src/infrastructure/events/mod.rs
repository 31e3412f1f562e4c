//! Event Sink Implementations
//!
//! Provides concrete implementations of ScaffoldEventSink:
//! - JsonEventSink: NDJSON output for automation
//! - ConsoleEventSink lives in the binary's `ui` module

mod json;

pub use json::{event_to_json, JsonEventSink};
