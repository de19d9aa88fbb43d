//! The whole-suite state captured by undo/redo history.

use serde::{Deserialize, Serialize};

use super::model::{
    CompetitorKeyword, ContentBriefData, Keywords, SavedCompetitorKeywordResult,
    SavedContentBrief, SavedKeywordResult, SavedRecord, SavedSerpResult, SerpAnalysis,
};

/// Everything the panels display that a user can undo.
///
/// Holds the saved-results list of each tool together with the inputs and the
/// result currently shown. Navigation between panels is not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteState {
    pub keyword_research: KeywordResearchPanel,
    pub serp_monitoring: SerpMonitoringPanel,
    pub content_brief: ContentBriefPanel,
}

impl SuiteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of saved records across every list.
    pub fn saved_count(&self) -> usize {
        self.keyword_research.saved.len()
            + self.serp_monitoring.saved_serp.len()
            + self.serp_monitoring.saved_competitor.len()
            + self.content_brief.saved.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordResearchPanel {
    pub topic: String,
    pub current: Option<Keywords>,
    pub saved: Vec<SavedKeywordResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerpMonitoringPanel {
    pub keyword: String,
    pub domain: String,
    pub current: Option<SerpAnalysis>,
    pub saved_serp: Vec<SavedSerpResult>,
    pub competitor_domain: String,
    pub current_competitor: Option<Vec<CompetitorKeyword>>,
    pub saved_competitor: Vec<SavedCompetitorKeywordResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBriefPanel {
    pub keyword: String,
    pub current: Option<ContentBriefData>,
    pub saved: Vec<SavedContentBrief>,
}

/// Looks up a record by id.
pub fn find_record<T: SavedRecord>(records: &[T], id: i64) -> Option<&T> {
    records.iter().find(|record| record.id() == id)
}

/// Removes the record with `id`, keeping the order of the rest.
pub fn remove_record<T: SavedRecord>(records: &mut Vec<T>, id: i64) -> Option<T> {
    let position = records.iter().position(|record| record.id() == id)?;
    Some(records.remove(position))
}

/// Inserts `record` at the front, where the newest record lives.
pub fn prepend_record<T: SavedRecord>(records: &mut Vec<T>, record: T) {
    records.insert(0, record);
}
