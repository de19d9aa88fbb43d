//! Navigation keys of the tool suite.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// One tool of the suite, as shown in the navigation bar.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum PanelKey {
    #[default]
    KeywordResearch,
    SerpMonitoring,
    ContentBrief,
    OnPageOptimizer,
    KeywordStrategist,
    SeoAudit,
}

impl PanelKey {
    /// Short label used in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::KeywordResearch => "Keyword Research",
            Self::SerpMonitoring => "SERP",
            Self::ContentBrief => "Content",
            Self::OnPageOptimizer => "On-Page",
            Self::KeywordStrategist => "Keyword Strategist",
            Self::SeoAudit => "SEO Audit",
        }
    }

    /// Page heading.
    pub fn title(&self) -> &'static str {
        match self {
            Self::KeywordResearch => "Keyword Research",
            Self::SerpMonitoring => "SERP Monitoring",
            Self::ContentBrief => "AI Content Briefs",
            Self::OnPageOptimizer => "On-Page SEO Optimizer",
            Self::KeywordStrategist => "AI Keyword Strategist",
            Self::SeoAudit => "AI Website SEO Audit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::KeywordResearch => "Discover high-value keywords to target for your content.",
            Self::SerpMonitoring => {
                "Analyze search engine results pages and track your competitors."
            }
            Self::ContentBrief => "Generate comprehensive content briefs in seconds.",
            Self::OnPageOptimizer => "Optimize your content for your target keywords.",
            Self::KeywordStrategist => {
                "Develop a comprehensive keyword strategy from seed ideas to content clusters."
            }
            Self::SeoAudit => {
                "Run a comprehensive SEO audit on any URL to find optimization opportunities."
            }
        }
    }

    /// All panels in navigation order.
    pub fn all() -> Vec<PanelKey> {
        Self::iter().collect()
    }
}

/// One of the saved-results lists, addressable by a short name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum SavedList {
    #[strum(to_string = "keywords", serialize = "keyword")]
    Keywords,
    #[strum(to_string = "serp")]
    Serp,
    #[strum(to_string = "competitor", serialize = "competitors")]
    Competitor,
    #[strum(to_string = "brief", serialize = "briefs")]
    Brief,
}

impl SavedList {
    /// Panel that shows this list.
    pub fn panel(&self) -> PanelKey {
        match self {
            Self::Keywords => PanelKey::KeywordResearch,
            Self::Serp | Self::Competitor => PanelKey::SerpMonitoring,
            Self::Brief => PanelKey::ContentBrief,
        }
    }

    /// Heading used when listing saved records.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Keywords => "Saved Keyword Analyses",
            Self::Serp => "Saved SERP Analyses",
            Self::Competitor => "Saved Competitor Keyword Analyses",
            Self::Brief => "Saved Content Briefs",
        }
    }

    pub fn all() -> Vec<SavedList> {
        Self::iter().collect()
    }
}
