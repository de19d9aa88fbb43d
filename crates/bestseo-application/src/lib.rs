//! Application layer for Best SEO.
//!
//! [`ToolSuite`] owns the live state of every panel, coordinates the content
//! generator with saved-result storage and keeps the undo/redo history.

pub mod repositories;
pub mod tool_suite;

pub use repositories::SuiteRepositories;
pub use tool_suite::ToolSuite;
