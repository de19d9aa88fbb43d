//! The tool suite: shared state root for every panel.
//!
//! Panels act only through [`ToolSuite`]. Each undoable action builds the next
//! [`SuiteState`] and writes any saved-results list that changed to storage.
//! Only once storage has accepted it does the state go live and into history.
//! Undo and redo hand back an earlier state which goes through the same
//! storage write.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bestseo_core::config::HistoryConfig;
use bestseo_core::history::{HistoryController, HistoryEvent, HistoryStatus};
use bestseo_core::suite::state::{find_record, prepend_record, remove_record};
use bestseo_core::suite::{
    ContentBriefPanel, ContentGenerator, ExportDocument, ExportFormat, KeywordResearchPanel,
    PanelKey, SavedCompetitorKeywordResult, SavedContentBrief, SavedKeywordResult, SavedList,
    SavedRecord, SavedResultRepository, SavedSerpResult, SerpMonitoringPanel, SuiteState,
    next_record_id,
};
use bestseo_core::{Result, SeoError};
use bestseo_infrastructure::export;
use tokio::sync::mpsc;

use crate::repositories::SuiteRepositories;

pub struct ToolSuite {
    state: SuiteState,
    active_panel: PanelKey,
    history: HistoryController<SuiteState>,
    generator: Arc<dyn ContentGenerator>,
    repositories: SuiteRepositories,
}

impl ToolSuite {
    /// Loads every saved-results list and seeds history with the result.
    ///
    /// A list that cannot be read is discarded (and cleared in storage) rather
    /// than failing startup. The SERP and competitor lists belong to one panel
    /// and are discarded together. Only an invalid history configuration is an
    /// error.
    pub async fn open(
        generator: Arc<dyn ContentGenerator>,
        repositories: SuiteRepositories,
        history_config: &HistoryConfig,
    ) -> Result<Self> {
        let capacity = history_config.capacity()?;

        let (saved_serp, saved_competitor) = load_serp_lists(&repositories).await;
        let state = SuiteState {
            keyword_research: KeywordResearchPanel {
                saved: load_list(repositories.keywords.as_ref()).await,
                ..KeywordResearchPanel::default()
            },
            serp_monitoring: SerpMonitoringPanel {
                saved_serp,
                saved_competitor,
                ..SerpMonitoringPanel::default()
            },
            content_brief: ContentBriefPanel {
                saved: load_list(repositories.briefs.as_ref()).await,
                ..ContentBriefPanel::default()
            },
        };

        let mut history = HistoryController::bounded(capacity);
        history.record(&state);

        tracing::info!(
            saved = state.saved_count(),
            capacity = ?capacity,
            "Tool suite opened"
        );

        Ok(Self {
            state,
            active_panel: PanelKey::default(),
            history,
            generator,
            repositories,
        })
    }

    pub fn state(&self) -> &SuiteState {
        &self.state
    }

    pub fn active_panel(&self) -> PanelKey {
        self.active_panel
    }

    /// Switches panels. Navigation is not recorded in history.
    pub fn select_panel(&mut self, panel: PanelKey) {
        self.active_panel = panel;
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_status(&self) -> HistoryStatus {
        self.history.status()
    }

    /// Receives a [`HistoryEvent`] whenever the present snapshot changes.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<HistoryEvent> {
        self.history.subscribe()
    }

    /// Generates keywords for `topic`, shows them and saves them.
    ///
    /// Returns the id of the new saved record.
    pub async fn generate_keywords(&mut self, topic: &str) -> Result<i64> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(SeoError::validation("Please enter a topic."));
        }

        let result = self.generator.generate_keywords(topic).await?;

        let mut next = self.state.clone();
        let panel = &mut next.keyword_research;
        let (id, timestamp) = stamp(&panel.saved)?;
        prepend_record(
            &mut panel.saved,
            SavedKeywordResult {
                id,
                topic: topic.to_string(),
                timestamp,
                result: result.clone(),
            },
        );
        panel.topic = topic.to_string();
        panel.current = Some(result);

        self.commit(next).await?;
        self.active_panel = PanelKey::KeywordResearch;
        Ok(id)
    }

    /// Analyzes the results page for `keyword` from the point of view of `domain`.
    pub async fn analyze_serp(&mut self, keyword: &str, domain: &str) -> Result<i64> {
        let (keyword, domain) = (keyword.trim(), domain.trim());
        if keyword.is_empty() || domain.is_empty() {
            return Err(SeoError::validation(
                "Please enter both a keyword and your domain.",
            ));
        }

        let result = self.generator.analyze_serp(keyword, domain).await?;

        let mut next = self.state.clone();
        let panel = &mut next.serp_monitoring;
        let (id, timestamp) = stamp(&panel.saved_serp)?;
        prepend_record(
            &mut panel.saved_serp,
            SavedSerpResult {
                id,
                keyword: keyword.to_string(),
                domain: domain.to_string(),
                timestamp,
                result: result.clone(),
            },
        );
        panel.keyword = keyword.to_string();
        panel.domain = domain.to_string();
        panel.current = Some(result);

        self.commit(next).await?;
        self.active_panel = PanelKey::SerpMonitoring;
        Ok(id)
    }

    /// Finds the keywords a competitor domain ranks for.
    pub async fn find_competitor_keywords(&mut self, domain: &str) -> Result<i64> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(SeoError::validation("Please enter a competitor domain."));
        }

        let result = self.generator.find_competitor_keywords(domain).await?;

        let mut next = self.state.clone();
        let panel = &mut next.serp_monitoring;
        let (id, timestamp) = stamp(&panel.saved_competitor)?;
        prepend_record(
            &mut panel.saved_competitor,
            SavedCompetitorKeywordResult {
                id,
                domain: domain.to_string(),
                timestamp,
                result: result.clone(),
            },
        );
        panel.competitor_domain = domain.to_string();
        panel.current_competitor = Some(result);

        self.commit(next).await?;
        self.active_panel = PanelKey::SerpMonitoring;
        Ok(id)
    }

    pub async fn create_content_brief(&mut self, keyword: &str) -> Result<i64> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(SeoError::validation("Please enter a target keyword."));
        }

        let result = self.generator.create_content_brief(keyword).await?;

        let mut next = self.state.clone();
        let panel = &mut next.content_brief;
        let (id, timestamp) = stamp(&panel.saved)?;
        prepend_record(
            &mut panel.saved,
            SavedContentBrief {
                id,
                keyword: keyword.to_string(),
                timestamp,
                result: result.clone(),
            },
        );
        panel.keyword = keyword.to_string();
        panel.current = Some(result);

        self.commit(next).await?;
        self.active_panel = PanelKey::ContentBrief;
        Ok(id)
    }

    /// Shows a saved record again, restoring the inputs that produced it.
    pub async fn view(&mut self, list: SavedList, id: i64) -> Result<()> {
        let mut next = self.state.clone();
        match list {
            SavedList::Keywords => {
                let record = lookup(&next.keyword_research.saved, id)?;
                next.keyword_research.topic = record.topic;
                next.keyword_research.current = Some(record.result);
            }
            SavedList::Serp => {
                let record = lookup(&next.serp_monitoring.saved_serp, id)?;
                next.serp_monitoring.keyword = record.keyword;
                next.serp_monitoring.domain = record.domain;
                next.serp_monitoring.current = Some(record.result);
            }
            SavedList::Competitor => {
                let record = lookup(&next.serp_monitoring.saved_competitor, id)?;
                next.serp_monitoring.competitor_domain = record.domain;
                next.serp_monitoring.current_competitor = Some(record.result);
            }
            SavedList::Brief => {
                let record = lookup(&next.content_brief.saved, id)?;
                next.content_brief.keyword = record.keyword;
                next.content_brief.current = Some(record.result);
            }
        }

        self.commit(next).await?;
        self.active_panel = list.panel();
        Ok(())
    }

    /// Deletes a saved record.
    pub async fn delete(&mut self, list: SavedList, id: i64) -> Result<()> {
        let mut next = self.state.clone();
        match list {
            SavedList::Keywords => {
                take(&mut next.keyword_research.saved, id)?;
            }
            SavedList::Serp => {
                take(&mut next.serp_monitoring.saved_serp, id)?;
            }
            SavedList::Competitor => {
                take(&mut next.serp_monitoring.saved_competitor, id)?;
            }
            SavedList::Brief => {
                take(&mut next.content_brief.saved, id)?;
            }
        }

        tracing::info!(list = %list, id, "Deleted saved record");
        self.commit(next).await
    }

    /// Writes the result currently shown for `list` to a file.
    ///
    /// Exporting changes no state and is not recorded.
    pub fn export(
        &self,
        list: SavedList,
        format: ExportFormat,
        target: Option<&Path>,
    ) -> Result<PathBuf> {
        let document = ExportDocument::current(&self.state, list).ok_or_else(|| {
            SeoError::validation(format!("Nothing to export from {} yet.", list))
        })?;
        export::export_to_file(&document, format, target)
    }

    /// Steps back one action. Returns `false` when there was nothing to undo.
    ///
    /// If the restored lists cannot be written, history steps forward again
    /// and the live state is left as it was.
    pub async fn undo(&mut self) -> Result<bool> {
        let Some(restored) = self.history.undo() else {
            tracing::debug!("Nothing to undo");
            return Ok(false);
        };
        if let Err(e) = self.apply(restored).await {
            if self.history.redo().is_none() {
                tracing::warn!("Could not step history forward after a failed undo");
            }
            return Err(e);
        }
        Ok(true)
    }

    /// Steps forward one action. Returns `false` when there was nothing to redo.
    ///
    /// If the restored lists cannot be written, history steps back again and
    /// the live state is left as it was.
    pub async fn redo(&mut self) -> Result<bool> {
        let Some(restored) = self.history.redo() else {
            tracing::debug!("Nothing to redo");
            return Ok(false);
        };
        if let Err(e) = self.apply(restored).await {
            if self.history.undo().is_none() {
                tracing::warn!("Could not step history back after a failed redo");
            }
            return Err(e);
        }
        Ok(true)
    }

    /// Persists `next`, then makes it live and records it unless it equals the
    /// present snapshot. Nothing changes when persisting fails.
    async fn commit(&mut self, next: SuiteState) -> Result<()> {
        self.persist_transition(&next).await?;
        self.state = next;
        if !self.history.is_present(&self.state) {
            self.history.record(&self.state);
        }
        Ok(())
    }

    /// Persists a state handed back by history, then makes it live.
    async fn apply(&mut self, restored: SuiteState) -> Result<()> {
        self.persist_transition(&restored).await?;
        self.state = restored;
        Ok(())
    }

    /// Writes the lists that differ between the live state and `next`.
    ///
    /// On failure the lists already written are put back to their live
    /// contents, so storage keeps matching the live state.
    async fn persist_transition(&self, next: &SuiteState) -> Result<()> {
        let Err(e) = self.persist_changes(&self.state, next).await else {
            return Ok(());
        };
        tracing::warn!("Failed to persist saved results, reverting: {}", e);
        if let Err(revert) = self.persist_changes(next, &self.state).await {
            tracing::warn!("Failed to revert saved results: {}", revert);
        }
        Err(e)
    }

    /// Writes every saved-results list that differs between `from` and `to`.
    async fn persist_changes(&self, from: &SuiteState, to: &SuiteState) -> Result<()> {
        persist_if_changed(
            self.repositories.keywords.as_ref(),
            &from.keyword_research.saved,
            &to.keyword_research.saved,
        )
        .await?;
        persist_if_changed(
            self.repositories.serp.as_ref(),
            &from.serp_monitoring.saved_serp,
            &to.serp_monitoring.saved_serp,
        )
        .await?;
        persist_if_changed(
            self.repositories.competitor.as_ref(),
            &from.serp_monitoring.saved_competitor,
            &to.serp_monitoring.saved_competitor,
        )
        .await?;
        persist_if_changed(
            self.repositories.briefs.as_ref(),
            &from.content_brief.saved,
            &to.content_brief.saved,
        )
        .await
    }
}

async fn load_list<T: SavedRecord>(repository: &dyn SavedResultRepository<T>) -> Vec<T> {
    match repository.load().await {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(
                storage_key = T::STORAGE_KEY,
                "Failed to load saved results, discarding them: {}",
                e
            );
            clear_list(repository).await;
            Vec::new()
        }
    }
}

/// Loads both SERP panel lists. If either is unreadable both are discarded.
async fn load_serp_lists(
    repositories: &SuiteRepositories,
) -> (Vec<SavedSerpResult>, Vec<SavedCompetitorKeywordResult>) {
    let serp = repositories.serp.load().await;
    let competitor = repositories.competitor.load().await;
    match (serp, competitor) {
        (Ok(serp), Ok(competitor)) => (serp, competitor),
        (serp, competitor) => {
            if let Some(e) = serp.err().or(competitor.err()) {
                tracing::warn!("Failed to load SERP saved results, discarding them: {}", e);
            }
            clear_list(repositories.serp.as_ref()).await;
            clear_list(repositories.competitor.as_ref()).await;
            (Vec::new(), Vec::new())
        }
    }
}

async fn clear_list<T: SavedRecord>(repository: &dyn SavedResultRepository<T>) {
    if let Err(e) = repository.clear().await {
        tracing::warn!(storage_key = T::STORAGE_KEY, "Failed to clear: {}", e);
    }
}

async fn persist_if_changed<T: SavedRecord + PartialEq>(
    repository: &dyn SavedResultRepository<T>,
    previous: &[T],
    current: &[T],
) -> Result<()> {
    if previous == current {
        return Ok(());
    }
    repository.save(current).await
}

fn stamp<T: SavedRecord>(existing: &[T]) -> Result<(i64, String)> {
    let now = chrono::Utc::now();
    Ok((
        next_record_id(existing, now.timestamp_millis())?,
        now.to_rfc3339(),
    ))
}

fn lookup<T: SavedRecord>(records: &[T], id: i64) -> Result<T> {
    find_record(records, id)
        .cloned()
        .ok_or_else(|| SeoError::not_found(T::ENTITY, id.to_string()))
}

fn take<T: SavedRecord>(records: &mut Vec<T>, id: i64) -> Result<T> {
    remove_record(records, id).ok_or_else(|| SeoError::not_found(T::ENTITY, id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestseo_infrastructure::{InMemoryRepository, TemplateGenerator};

    async fn open_in_memory() -> ToolSuite {
        ToolSuite::open(
            Arc::new(TemplateGenerator::new()),
            SuiteRepositories::in_memory(),
            &HistoryConfig::default(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_open_seeds_history() {
        let suite = open_in_memory().await;
        let status = suite.history_status();
        assert_eq!(status.depth, 1);
        assert!(!status.can_undo);
        assert!(!status.can_redo);
        assert_eq!(suite.active_panel(), PanelKey::KeywordResearch);
    }

    #[tokio::test]
    async fn test_open_loads_existing_records() {
        let briefs = InMemoryRepository::with_records(vec![SavedContentBrief {
            id: 5,
            keyword: "tea".to_string(),
            timestamp: String::new(),
            result: Default::default(),
        }]);
        let repositories = SuiteRepositories {
            briefs: Arc::new(briefs),
            ..SuiteRepositories::in_memory()
        };

        let suite = ToolSuite::open(
            Arc::new(TemplateGenerator::new()),
            repositories,
            &HistoryConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(suite.state().content_brief.saved[0].id, 5);
    }

    #[tokio::test]
    async fn test_open_rejects_zero_capacity() {
        let config = HistoryConfig {
            max_entries: 0,
            unbounded: false,
        };
        let result = ToolSuite::open(
            Arc::new(TemplateGenerator::new()),
            SuiteRepositories::in_memory(),
            &config,
        )
        .await;
        assert!(matches!(result, Err(SeoError::Config(_))));
    }

    #[tokio::test]
    async fn test_validation_records_nothing() {
        let mut suite = open_in_memory().await;

        let err = suite.generate_keywords("   ").await.unwrap_err();
        assert_eq!(err.to_string(), "Please enter a topic.");
        let err = suite.analyze_serp("coffee", "").await.unwrap_err();
        assert_eq!(err.to_string(), "Please enter both a keyword and your domain.");
        let err = suite.find_competitor_keywords("").await.unwrap_err();
        assert_eq!(err.to_string(), "Please enter a competitor domain.");
        let err = suite.create_content_brief("").await.unwrap_err();
        assert_eq!(err.to_string(), "Please enter a target keyword.");

        assert_eq!(suite.history_status().depth, 1);
    }

    #[tokio::test]
    async fn test_generate_shows_and_saves() {
        let mut suite = open_in_memory().await;

        let id = suite.generate_keywords("vegan baking").await.unwrap();

        let panel = &suite.state().keyword_research;
        assert_eq!(panel.topic, "vegan baking");
        assert!(panel.current.is_some());
        assert_eq!(panel.saved[0].id, id);
        assert!(suite.can_undo());
    }

    #[tokio::test]
    async fn test_view_same_record_twice_records_once() {
        let mut suite = open_in_memory().await;
        let first = suite.create_content_brief("tea").await.unwrap();
        suite.create_content_brief("coffee").await.unwrap();

        suite.view(SavedList::Brief, first).await.unwrap();
        let depth = suite.history_status().depth;
        suite.view(SavedList::Brief, first).await.unwrap();

        assert_eq!(suite.history_status().depth, depth);
        assert_eq!(suite.state().content_brief.keyword, "tea");
        assert_eq!(suite.active_panel(), PanelKey::ContentBrief);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        let mut suite = open_in_memory().await;
        assert!(suite.view(SavedList::Serp, 1).await.unwrap_err().is_not_found());
        assert!(
            suite
                .delete(SavedList::Competitor, 1)
                .await
                .unwrap_err()
                .is_not_found()
        );
        assert_eq!(suite.history_status().depth, 1);
    }

    #[tokio::test]
    async fn test_export_writes_current_result() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut suite = open_in_memory().await;

        let err = suite
            .export(SavedList::Brief, ExportFormat::Json, Some(temp_dir.path()))
            .unwrap_err();
        assert!(err.is_validation());

        suite.create_content_brief("cold brew").await.unwrap();
        let depth = suite.history_status().depth;
        let path = suite
            .export(SavedList::Brief, ExportFormat::Csv, Some(temp_dir.path()))
            .unwrap();

        assert_eq!(path, temp_dir.path().join("content-brief-cold-brew.csv"));
        assert!(path.exists());
        assert_eq!(suite.history_status().depth, depth);
    }

    #[tokio::test]
    async fn test_select_panel_is_not_recorded() {
        let mut suite = open_in_memory().await;
        suite.select_panel(PanelKey::SeoAudit);
        assert_eq!(suite.active_panel(), PanelKey::SeoAudit);
        assert!(!suite.can_undo());
    }
}
