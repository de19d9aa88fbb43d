//! What a panel can export: its current result, in JSON or CSV.

use strum::{Display, EnumString};

use super::model::{CompetitorKeyword, ContentBriefData, Keywords, SerpAnalysis};
use super::panel::SavedList;
use super::state::SuiteState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

/// The result currently shown for one list, borrowed from the live state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportDocument<'a> {
    Keywords {
        topic: &'a str,
        keywords: &'a Keywords,
    },
    Serp {
        keyword: &'a str,
        analysis: &'a SerpAnalysis,
    },
    Competitor {
        domain: &'a str,
        keywords: &'a [CompetitorKeyword],
    },
    Brief {
        keyword: &'a str,
        brief: &'a ContentBriefData,
    },
}

impl<'a> ExportDocument<'a> {
    /// The current result for `list`, or `None` when nothing is shown.
    pub fn current(state: &'a SuiteState, list: SavedList) -> Option<Self> {
        match list {
            SavedList::Keywords => {
                let panel = &state.keyword_research;
                panel.current.as_ref().map(|keywords| Self::Keywords {
                    topic: &panel.topic,
                    keywords,
                })
            }
            SavedList::Serp => {
                let panel = &state.serp_monitoring;
                panel.current.as_ref().map(|analysis| Self::Serp {
                    keyword: &panel.keyword,
                    analysis,
                })
            }
            SavedList::Competitor => {
                let panel = &state.serp_monitoring;
                panel
                    .current_competitor
                    .as_deref()
                    .map(|keywords| Self::Competitor {
                        domain: &panel.competitor_domain,
                        keywords,
                    })
            }
            SavedList::Brief => {
                let panel = &state.content_brief;
                panel.current.as_ref().map(|brief| Self::Brief {
                    keyword: &panel.keyword,
                    brief,
                })
            }
        }
    }

    /// File name without extension, e.g. `keyword-research-vegan-baking`.
    pub fn file_stem(&self) -> String {
        let (prefix, input) = match self {
            Self::Keywords { topic, .. } => ("keyword-research", *topic),
            Self::Serp { keyword, .. } => ("serp-analysis", *keyword),
            Self::Competitor { domain, .. } => ("competitor-keywords", *domain),
            Self::Brief { keyword, .. } => ("content-brief", *keyword),
        };
        let slug: Vec<String> = input
            .split(|c: char| !(c.is_alphanumeric() || c == '.'))
            .filter(|part| !part.is_empty())
            .map(str::to_lowercase)
            .collect();
        if slug.is_empty() {
            prefix.to_string()
        } else {
            format!("{}-{}", prefix, slug.join("-"))
        }
    }
}
