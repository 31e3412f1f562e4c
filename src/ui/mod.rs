//! Console presentation for the create command

pub mod context;
pub mod error;
pub mod events;
pub mod json;
pub mod primitives;
pub mod prompt;
pub mod terminal;
pub mod theme;
pub mod views;
