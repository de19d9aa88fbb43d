//! Text-generation capability used by the panels.

use async_trait::async_trait;

use crate::error::Result;
use crate::suite::model::{CompetitorKeyword, ContentBriefData, Keywords, SerpAnalysis};

/// Produces the results each tool displays.
///
/// Implementations talk to a text-generation backend. Failures surface as
/// [`SeoError::Generation`](crate::SeoError::Generation) and leave the suite
/// state untouched.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate_keywords(&self, topic: &str) -> Result<Keywords>;

    async fn analyze_serp(&self, keyword: &str, domain: &str) -> Result<SerpAnalysis>;

    async fn find_competitor_keywords(&self, domain: &str) -> Result<Vec<CompetitorKeyword>>;

    async fn create_content_brief(&self, keyword: &str) -> Result<ContentBriefData>;
}
