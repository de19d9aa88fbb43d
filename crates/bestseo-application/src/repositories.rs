use std::path::Path;
use std::sync::Arc;

use bestseo_core::suite::{
    SavedCompetitorKeywordResult, SavedContentBrief, SavedKeywordResult, SavedResultRepository,
    SavedSerpResult,
};
use bestseo_infrastructure::{InMemoryRepository, JsonFileRepository};

/// One repository per saved-results list.
#[derive(Clone)]
pub struct SuiteRepositories {
    pub keywords: Arc<dyn SavedResultRepository<SavedKeywordResult>>,
    pub serp: Arc<dyn SavedResultRepository<SavedSerpResult>>,
    pub competitor: Arc<dyn SavedResultRepository<SavedCompetitorKeywordResult>>,
    pub briefs: Arc<dyn SavedResultRepository<SavedContentBrief>>,
}

impl SuiteRepositories {
    /// JSON files under `data_dir`, one per list.
    pub fn json_files(data_dir: &Path) -> Self {
        Self {
            keywords: Arc::new(JsonFileRepository::<SavedKeywordResult>::new(data_dir)),
            serp: Arc::new(JsonFileRepository::<SavedSerpResult>::new(data_dir)),
            competitor: Arc::new(JsonFileRepository::<SavedCompetitorKeywordResult>::new(
                data_dir,
            )),
            briefs: Arc::new(JsonFileRepository::<SavedContentBrief>::new(data_dir)),
        }
    }

    /// Lists that live only as long as the process.
    pub fn in_memory() -> Self {
        Self {
            keywords: Arc::new(InMemoryRepository::<SavedKeywordResult>::new()),
            serp: Arc::new(InMemoryRepository::<SavedSerpResult>::new()),
            competitor: Arc::new(InMemoryRepository::<SavedCompetitorKeywordResult>::new()),
            briefs: Arc::new(InMemoryRepository::<SavedContentBrief>::new()),
        }
    }
}
