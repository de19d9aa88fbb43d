//! Tool-suite domain: panels, their results, and the capabilities they use.

pub mod export;
pub mod generator;
pub mod model;
pub mod panel;
pub mod repository;
pub mod state;

pub use export::{ExportDocument, ExportFormat};
pub use generator::ContentGenerator;
pub use model::{
    CompetitorKeyword, ContentBriefData, Keywords, OutlineSection, SavedCompetitorKeywordResult,
    SavedContentBrief, SavedKeywordResult, SavedRecord, SavedSerpResult, SerpAnalysis,
    SerpCompetitor, next_record_id,
};
pub use panel::{PanelKey, SavedList};
pub use repository::SavedResultRepository;
pub use state::{ContentBriefPanel, KeywordResearchPanel, SerpMonitoringPanel, SuiteState};
