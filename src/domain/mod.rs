//! Domain Layer
//!
//! The scaffolding rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `validation` - project and display name guards
//! - `substitution` - immutable placeholder substitution requests
//! - `ports/` - Interface definitions for infrastructure
//!
//! All I/O goes through trait-defined ports, so every rule here runs against
//! test doubles.

pub mod ports;
pub mod substitution;
pub mod validation;

pub use substitution::{SubstitutionRequest, SubstitutionScope};
pub use validation::{validate_display_name, validate_project_name, DisplayName, ProjectName};
