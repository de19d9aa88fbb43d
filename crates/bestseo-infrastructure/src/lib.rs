//! Infrastructure layer for Best SEO.
//!
//! Concrete storage for saved-results lists, configuration loading, result
//! export and an offline content generator.

pub mod config_service;
pub mod export;
pub mod paths;
pub mod storage;
pub mod template_generator;

pub use config_service::ConfigService;
pub use paths::SeoPaths;
pub use storage::{AtomicJsonFile, InMemoryRepository, JsonFileRepository};
pub use template_generator::TemplateGenerator;
