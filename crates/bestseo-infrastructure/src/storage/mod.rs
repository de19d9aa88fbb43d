//! Storage backends for saved-results lists.

pub mod atomic_json;
pub mod in_memory_repository;
pub mod json_file_repository;

pub use atomic_json::AtomicJsonFile;
pub use in_memory_repository::InMemoryRepository;
pub use json_file_repository::JsonFileRepository;
