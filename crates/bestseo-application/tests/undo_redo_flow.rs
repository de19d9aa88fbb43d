use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use bestseo_application::{SuiteRepositories, ToolSuite};
use bestseo_core::config::HistoryConfig;
use bestseo_core::history::HistoryAction;
use bestseo_core::suite::{
    CompetitorKeyword, ContentBriefData, ContentGenerator, Keywords, SavedCompetitorKeywordResult,
    SavedContentBrief,
    SavedKeywordResult, SavedList, SavedRecord, SavedResultRepository, SavedSerpResult,
    SerpAnalysis,
};
use bestseo_core::{Result, SeoError};
use bestseo_infrastructure::{InMemoryRepository, JsonFileRepository, TemplateGenerator};
use tempfile::TempDir;

/// Generator whose every call fails, as an unreachable service would.
struct FailingGenerator;

#[async_trait]
impl ContentGenerator for FailingGenerator {
    async fn generate_keywords(&self, _topic: &str) -> Result<Keywords> {
        Err(SeoError::generation("service unavailable"))
    }

    async fn analyze_serp(&self, _keyword: &str, _domain: &str) -> Result<SerpAnalysis> {
        Err(SeoError::generation("service unavailable"))
    }

    async fn find_competitor_keywords(&self, _domain: &str) -> Result<Vec<CompetitorKeyword>> {
        Err(SeoError::generation("service unavailable"))
    }

    async fn create_content_brief(&self, _keyword: &str) -> Result<ContentBriefData> {
        Err(SeoError::generation("service unavailable"))
    }
}

/// Repository whose writes can be switched to fail, as on a full disk.
struct SwitchableRepository<T> {
    inner: InMemoryRepository<T>,
    failing: Arc<AtomicBool>,
}

impl<T: SavedRecord> SwitchableRepository<T> {
    fn new(inner: InMemoryRepository<T>) -> (Self, Arc<AtomicBool>) {
        let failing = Arc::new(AtomicBool::new(false));
        let repository = Self {
            inner,
            failing: Arc::clone(&failing),
        };
        (repository, failing)
    }
}

#[async_trait]
impl<T: SavedRecord> SavedResultRepository<T> for SwitchableRepository<T> {
    async fn load(&self) -> Result<Vec<T>> {
        self.inner.load().await
    }

    async fn save(&self, records: &[T]) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(SeoError::io("disk full"));
        }
        self.inner.save(records).await
    }

    async fn clear(&self) -> Result<()> {
        self.inner.clear().await
    }
}

fn history(max_entries: usize) -> HistoryConfig {
    HistoryConfig {
        max_entries,
        unbounded: false,
    }
}

async fn open(repositories: SuiteRepositories, config: &HistoryConfig) -> ToolSuite {
    ToolSuite::open(Arc::new(TemplateGenerator::new()), repositories, config)
        .await
        .expect("Should open tool suite")
}

#[tokio::test]
async fn test_undo_redo_walks_through_generations() {
    let mut suite = open(SuiteRepositories::in_memory(), &HistoryConfig::default()).await;

    suite.generate_keywords("tea").await.unwrap();
    suite.generate_keywords("coffee").await.unwrap();
    let after_coffee = suite.state().clone();

    assert!(suite.undo().await.unwrap());
    assert_eq!(suite.state().keyword_research.topic, "tea");
    assert_eq!(suite.state().keyword_research.saved.len(), 1);

    assert!(suite.undo().await.unwrap());
    assert_eq!(suite.state().keyword_research.topic, "");
    assert!(suite.state().keyword_research.saved.is_empty());

    // Already at the bootstrap state.
    assert!(!suite.undo().await.unwrap());

    assert!(suite.redo().await.unwrap());
    assert!(suite.redo().await.unwrap());
    assert!(!suite.redo().await.unwrap());
    assert_eq!(suite.state(), &after_coffee);
}

#[tokio::test]
async fn test_new_action_after_undo_drops_redo() {
    let mut suite = open(SuiteRepositories::in_memory(), &HistoryConfig::default()).await;

    suite.create_content_brief("tea").await.unwrap();
    suite.create_content_brief("coffee").await.unwrap();
    suite.undo().await.unwrap();
    assert!(suite.can_redo());

    suite.create_content_brief("matcha").await.unwrap();

    assert!(!suite.can_redo());
    let keywords: Vec<&str> = suite
        .state()
        .content_brief
        .saved
        .iter()
        .map(|brief| brief.keyword.as_str())
        .collect();
    assert_eq!(keywords, vec!["matcha", "tea"]);
}

#[tokio::test]
async fn test_undo_delete_restores_record_in_storage() {
    let briefs = InMemoryRepository::<SavedContentBrief>::new();
    let repositories = SuiteRepositories {
        briefs: Arc::new(briefs.clone()),
        ..SuiteRepositories::in_memory()
    };
    let mut suite = open(repositories, &HistoryConfig::default()).await;

    let id = suite.create_content_brief("tea").await.unwrap();
    suite.delete(SavedList::Brief, id).await.unwrap();
    assert!(briefs.snapshot().await.is_empty());

    suite.undo().await.unwrap();

    let stored = briefs.snapshot().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, id);
    assert_eq!(suite.state().content_brief.saved, stored);
}

#[tokio::test]
async fn test_view_is_undoable() {
    let mut suite = open(SuiteRepositories::in_memory(), &HistoryConfig::default()).await;

    let tea = suite.analyze_serp("tea", "example.com").await.unwrap();
    suite.analyze_serp("coffee", "example.com").await.unwrap();

    suite.view(SavedList::Serp, tea).await.unwrap();
    assert_eq!(suite.state().serp_monitoring.keyword, "tea");

    suite.undo().await.unwrap();
    assert_eq!(suite.state().serp_monitoring.keyword, "coffee");
}

#[tokio::test]
async fn test_failed_generation_changes_nothing() {
    let mut suite = ToolSuite::open(
        Arc::new(FailingGenerator),
        SuiteRepositories::in_memory(),
        &HistoryConfig::default(),
    )
    .await
    .unwrap();
    let before = suite.state().clone();

    let err = suite.find_competitor_keywords("rival.com").await.unwrap_err();

    assert!(matches!(err, SeoError::Generation(_)));
    assert_eq!(suite.state(), &before);
    assert_eq!(suite.history_status().depth, 1);
}

#[tokio::test]
async fn test_capacity_evicts_oldest_actions() {
    let mut suite = open(SuiteRepositories::in_memory(), &history(3)).await;

    for topic in ["a", "b", "c", "d"] {
        suite.generate_keywords(topic).await.unwrap();
    }
    assert_eq!(suite.history_status().depth, 3);

    while suite.undo().await.unwrap() {}

    // The bootstrap state and the first action were evicted.
    assert_eq!(suite.state().keyword_research.topic, "b");
}

#[tokio::test]
async fn test_unbounded_history_keeps_everything() {
    let config = HistoryConfig {
        max_entries: 1,
        unbounded: true,
    };
    let mut suite = open(SuiteRepositories::in_memory(), &config).await;

    for i in 0..10 {
        suite.generate_keywords(&format!("topic {i}")).await.unwrap();
    }

    assert_eq!(suite.history_status().depth, 11);
    assert_eq!(suite.history_status().capacity, None);
}

#[tokio::test]
async fn test_subscribers_see_each_transition() {
    let mut suite = open(SuiteRepositories::in_memory(), &HistoryConfig::default()).await;
    let mut events = suite.subscribe();

    suite.generate_keywords("tea").await.unwrap();
    suite.undo().await.unwrap();
    suite.redo().await.unwrap();

    let actions: Vec<HistoryAction> = std::iter::from_fn(|| events.try_recv().ok())
        .map(|event| event.action)
        .collect();
    assert_eq!(
        actions,
        vec![
            HistoryAction::Recorded,
            HistoryAction::Undone,
            HistoryAction::Redone
        ]
    );
}

#[tokio::test]
async fn test_saved_results_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();

    let mut suite = open(
        SuiteRepositories::json_files(temp_dir.path()),
        &HistoryConfig::default(),
    )
    .await;
    suite.generate_keywords("tea").await.unwrap();
    suite.find_competitor_keywords("rival.com").await.unwrap();
    drop(suite);

    let reopened = open(
        SuiteRepositories::json_files(temp_dir.path()),
        &HistoryConfig::default(),
    )
    .await;

    let state = reopened.state();
    assert_eq!(state.keyword_research.saved[0].topic, "tea");
    assert_eq!(state.serp_monitoring.saved_competitor[0].domain, "rival.com");
    // Inputs and current results are not persisted; history starts fresh.
    assert!(state.keyword_research.current.is_none());
    assert!(!reopened.can_undo());
}

#[tokio::test]
async fn test_corrupt_list_is_discarded() {
    let temp_dir = TempDir::new().unwrap();
    let briefs = JsonFileRepository::<SavedContentBrief>::new(temp_dir.path());
    std::fs::write(briefs.path(), "not json").unwrap();

    let suite = open(
        SuiteRepositories::json_files(temp_dir.path()),
        &HistoryConfig::default(),
    )
    .await;

    assert!(suite.state().content_brief.saved.is_empty());
    assert!(briefs.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_undo_and_redo_of_generate_update_storage() {
    let keywords = InMemoryRepository::<SavedKeywordResult>::new();
    let repositories = SuiteRepositories {
        keywords: Arc::new(keywords.clone()),
        ..SuiteRepositories::in_memory()
    };
    let mut suite = open(repositories, &HistoryConfig::default()).await;

    let id = suite.generate_keywords("tea").await.unwrap();
    assert_eq!(keywords.snapshot().await.len(), 1);

    suite.undo().await.unwrap();
    assert!(keywords.snapshot().await.is_empty());

    suite.redo().await.unwrap();
    let stored = keywords.snapshot().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, id);
}

#[tokio::test]
async fn test_failed_save_leaves_state_and_history_untouched() {
    let stored = InMemoryRepository::<SavedKeywordResult>::new();
    let (keywords, failing) = SwitchableRepository::new(stored.clone());
    let repositories = SuiteRepositories {
        keywords: Arc::new(keywords),
        ..SuiteRepositories::in_memory()
    };
    let mut suite = open(repositories, &HistoryConfig::default()).await;
    let before = suite.state().clone();

    failing.store(true, Ordering::SeqCst);
    let err = suite.generate_keywords("tea").await.unwrap_err();

    assert!(matches!(err, SeoError::Io { .. }));
    assert_eq!(suite.state(), &before);
    assert!(!suite.can_undo());
    assert_eq!(suite.history_status().depth, 1);
    assert!(stored.snapshot().await.is_empty());
}

#[tokio::test]
async fn test_failed_undo_keeps_present_and_live_state() {
    let stored = InMemoryRepository::<SavedKeywordResult>::new();
    let (keywords, failing) = SwitchableRepository::new(stored.clone());
    let repositories = SuiteRepositories {
        keywords: Arc::new(keywords),
        ..SuiteRepositories::in_memory()
    };
    let mut suite = open(repositories, &HistoryConfig::default()).await;
    suite.generate_keywords("tea").await.unwrap();
    let status = suite.history_status();

    failing.store(true, Ordering::SeqCst);
    assert!(suite.undo().await.is_err());

    assert_eq!(suite.state().keyword_research.topic, "tea");
    assert_eq!(suite.history_status(), status);
    assert!(suite.can_undo());
    assert!(!suite.can_redo());
    assert_eq!(stored.snapshot().await.len(), 1);

    // Once storage recovers the same undo goes through, and only one step.
    failing.store(false, Ordering::SeqCst);
    assert!(suite.undo().await.unwrap());
    assert_eq!(suite.state().keyword_research.topic, "");
    assert!(stored.snapshot().await.is_empty());
}

#[tokio::test]
async fn test_failed_redo_keeps_present_and_live_state() {
    let stored = InMemoryRepository::<SavedKeywordResult>::new();
    let (keywords, failing) = SwitchableRepository::new(stored.clone());
    let repositories = SuiteRepositories {
        keywords: Arc::new(keywords),
        ..SuiteRepositories::in_memory()
    };
    let mut suite = open(repositories, &HistoryConfig::default()).await;
    suite.generate_keywords("tea").await.unwrap();
    suite.undo().await.unwrap();

    failing.store(true, Ordering::SeqCst);
    assert!(suite.redo().await.is_err());

    assert_eq!(suite.state().keyword_research.topic, "");
    assert!(suite.can_redo());
    assert!(!suite.can_undo());
    assert!(stored.snapshot().await.is_empty());
}

#[tokio::test]
async fn test_corrupt_competitor_list_discards_serp_list_too() {
    let temp_dir = TempDir::new().unwrap();
    let serp = JsonFileRepository::<SavedSerpResult>::new(temp_dir.path());
    serp.save(&[SavedSerpResult {
        id: 1,
        keyword: "tea".to_string(),
        domain: "example.com".to_string(),
        timestamp: String::new(),
        result: SerpAnalysis::default(),
    }])
    .await
    .unwrap();
    let competitor = JsonFileRepository::<SavedCompetitorKeywordResult>::new(temp_dir.path());
    std::fs::write(competitor.path(), "{").unwrap();

    let suite = open(
        SuiteRepositories::json_files(temp_dir.path()),
        &HistoryConfig::default(),
    )
    .await;

    assert!(suite.state().serp_monitoring.saved_serp.is_empty());
    assert!(suite.state().serp_monitoring.saved_competitor.is_empty());
    assert!(serp.load().await.unwrap().is_empty());
    assert!(competitor.load().await.unwrap().is_empty());
}
