//! Scaffold Module
//!
//! Creates a new project folder from the template.
//!
//! ## Structure
//!
//! - `request` - validated input (`ScaffoldRequest`)
//! - `result` - outcome of a run (`ScaffoldReport`)
//! - `use_case` - orchestration (`ScaffoldUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use create_decent_app::application::scaffold::{ScaffoldRequest, ScaffoldUseCase};
//!
//! let use_case = ScaffoldUseCase::new(LocalFs::new(), GitCli::new(min), &config);
//! let report = use_case.execute(&request, &sink)?;
//! ```

mod request;
mod result;
mod use_case;

pub use request::ScaffoldRequest;
pub use result::ScaffoldReport;
pub use use_case::ScaffoldUseCase;
