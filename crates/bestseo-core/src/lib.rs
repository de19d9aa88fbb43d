//! Domain layer of the Best SEO tool suite.
//!
//! The centerpiece is [`history`], the undo/redo history shared by every
//! panel. [`suite`] holds the state those panels produce and the traits for
//! the storage and text-generation capabilities they rely on.

pub mod config;
pub mod error;
pub mod history;
pub mod suite;

// Re-export common error type
pub use error::{Result, SeoError};
