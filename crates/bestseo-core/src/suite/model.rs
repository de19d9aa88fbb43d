//! Generated results and the saved records that wrap them.
//!
//! Field names serialize in camelCase so stored records keep the same shape
//! as the lists the web front end writes.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeoError};

/// Keyword ideas for one topic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keywords {
    #[serde(default)]
    pub primary_keywords: Vec<String>,
    #[serde(default)]
    pub long_tail_keywords: Vec<String>,
    #[serde(default)]
    pub question_based_keywords: Vec<String>,
    #[serde(default)]
    pub lsi_keywords: Vec<String>,
}

impl Keywords {
    pub fn total(&self) -> usize {
        self.primary_keywords.len()
            + self.long_tail_keywords.len()
            + self.question_based_keywords.len()
            + self.lsi_keywords.len()
    }
}

/// A page ranking on the results page being analyzed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerpCompetitor {
    pub title: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerpAnalysis {
    #[serde(default)]
    pub competitors: Vec<SerpCompetitor>,
    pub analysis: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// A keyword a competitor domain ranks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorKeyword {
    pub keyword: String,
    pub rank: u32,
    pub search_volume: u64,
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineSection {
    pub heading: String,
    #[serde(default)]
    pub subheadings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBriefData {
    pub title_suggestion: String,
    pub meta_description_suggestion: String,
    pub target_audience: String,
    pub suggested_word_count: u32,
    #[serde(default)]
    pub outline: Vec<OutlineSection>,
    #[serde(default)]
    pub lsi_keywords: Vec<String>,
}

/// A record in one of the saved-results lists.
///
/// Lists are kept newest first. `ENTITY` names the record in errors and logs,
/// `STORAGE_KEY` names the list in storage.
pub trait SavedRecord: Clone + Send + Sync + 'static {
    const ENTITY: &'static str;
    const STORAGE_KEY: &'static str;

    fn id(&self) -> i64;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedKeywordResult {
    pub id: i64,
    pub topic: String,
    pub timestamp: String,
    pub result: Keywords,
}

impl SavedRecord for SavedKeywordResult {
    const ENTITY: &'static str = "saved keyword analysis";
    const STORAGE_KEY: &'static str = "savedKeywordAnalyses";

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSerpResult {
    pub id: i64,
    pub keyword: String,
    pub domain: String,
    pub timestamp: String,
    pub result: SerpAnalysis,
}

impl SavedRecord for SavedSerpResult {
    const ENTITY: &'static str = "saved SERP analysis";
    const STORAGE_KEY: &'static str = "savedSerpAnalyses";

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCompetitorKeywordResult {
    pub id: i64,
    pub domain: String,
    pub timestamp: String,
    pub result: Vec<CompetitorKeyword>,
}

impl SavedRecord for SavedCompetitorKeywordResult {
    const ENTITY: &'static str = "saved competitor keyword analysis";
    const STORAGE_KEY: &'static str = "savedCompetitorKeywordAnalyses";

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedContentBrief {
    pub id: i64,
    pub keyword: String,
    pub timestamp: String,
    pub result: ContentBriefData,
}

impl SavedRecord for SavedContentBrief {
    const ENTITY: &'static str = "saved content brief";
    const STORAGE_KEY: &'static str = "savedContentBriefs";

    fn id(&self) -> i64 {
        self.id
    }
}

/// Picks an id for a new record: the current time in milliseconds, bumped
/// past every existing id so two saves in the same millisecond stay distinct.
///
/// Stored lists can be edited by hand, so an existing id of `i64::MAX` leaves
/// no room for a new one and is reported instead of wrapping.
pub fn next_record_id<T: SavedRecord>(existing: &[T], now_millis: i64) -> Result<i64> {
    match existing.iter().map(|record| record.id()).max() {
        Some(max) if max >= now_millis => max.checked_add(1).ok_or_else(|| {
            SeoError::validation(format!(
                "No record id left after {max} in {}",
                T::STORAGE_KEY
            ))
        }),
        _ => Ok(now_millis),
    }
}
