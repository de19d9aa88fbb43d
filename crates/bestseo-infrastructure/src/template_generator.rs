//! Offline content generator.
//!
//! Produces deterministic results from templates so the suite can run without
//! a text-generation backend.

use async_trait::async_trait;
use bestseo_core::Result;
use bestseo_core::suite::{
    CompetitorKeyword, ContentBriefData, ContentGenerator, Keywords, OutlineSection, SerpAnalysis,
    SerpCompetitor,
};

#[derive(Debug, Clone, Default)]
pub struct TemplateGenerator;

impl TemplateGenerator {
    pub fn new() -> Self {
        Self
    }
}

fn slug(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[async_trait]
impl ContentGenerator for TemplateGenerator {
    async fn generate_keywords(&self, topic: &str) -> Result<Keywords> {
        let topic = topic.trim();
        Ok(Keywords {
            primary_keywords: vec![
                topic.to_string(),
                format!("{topic} guide"),
                format!("best {topic}"),
            ],
            long_tail_keywords: vec![
                format!("{topic} for beginners"),
                format!("how to get started with {topic}"),
            ],
            question_based_keywords: vec![
                format!("what is {topic}?"),
                format!("why is {topic} important?"),
            ],
            lsi_keywords: vec![format!("{topic} tips"), format!("{topic} examples")],
        })
    }

    async fn analyze_serp(&self, keyword: &str, domain: &str) -> Result<SerpAnalysis> {
        let keyword = keyword.trim();
        let competitors = (1..=3)
            .map(|rank| SerpCompetitor {
                title: format!("{keyword}: resource #{rank}"),
                url: format!("https://competitor{rank}.example/{}", slug(keyword)),
                description: format!("Ranking page {rank} covering {keyword}."),
            })
            .collect();

        Ok(SerpAnalysis {
            competitors,
            analysis: format!(
                "{domain} competes with three established pages for \"{keyword}\"."
            ),
            recommendations: vec![
                format!("Publish a dedicated page targeting \"{keyword}\"."),
                format!("Link to it from existing {domain} content."),
            ],
        })
    }

    async fn find_competitor_keywords(&self, domain: &str) -> Result<Vec<CompetitorKeyword>> {
        let stem = domain.trim().split('.').next().unwrap_or(domain);
        Ok(["reviews", "pricing", "alternatives"]
            .iter()
            .enumerate()
            .map(|(i, suffix)| CompetitorKeyword {
                keyword: format!("{stem} {suffix}"),
                rank: i as u32 + 1,
                search_volume: 1_000 * (3 - i as u64),
                difficulty: ["High", "Medium", "Low"][i].to_string(),
            })
            .collect())
    }

    async fn create_content_brief(&self, keyword: &str) -> Result<ContentBriefData> {
        let keyword = keyword.trim();
        Ok(ContentBriefData {
            title_suggestion: format!("The Complete Guide to {keyword}"),
            meta_description_suggestion: format!("Learn everything about {keyword}."),
            target_audience: format!("Readers researching {keyword}"),
            suggested_word_count: 1500,
            outline: vec![
                OutlineSection {
                    heading: format!("What is {keyword}?"),
                    subheadings: vec!["Definition".to_string(), "History".to_string()],
                },
                OutlineSection {
                    heading: format!("Getting started with {keyword}"),
                    subheadings: vec!["First steps".to_string()],
                },
            ],
            lsi_keywords: vec![format!("{keyword} tips")],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_keywords_mention_topic() {
        let keywords = TemplateGenerator::new()
            .generate_keywords(" vegan baking ")
            .await
            .unwrap();
        assert_eq!(keywords.primary_keywords[0], "vegan baking");
        assert!(keywords.total() > 4);
    }

    #[tokio::test]
    async fn test_serp_analysis_is_deterministic() {
        let generator = TemplateGenerator::new();
        let a = generator.analyze_serp("cold brew", "mysite.com").await.unwrap();
        let b = generator.analyze_serp("cold brew", "mysite.com").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.competitors.len(), 3);
        assert!(a.competitors[0].url.ends_with("/cold-brew"));
    }

    #[tokio::test]
    async fn test_competitor_keywords_use_domain_stem() {
        let keywords = TemplateGenerator::new()
            .find_competitor_keywords("rivalsite.com")
            .await
            .unwrap();
        assert_eq!(keywords[0].keyword, "rivalsite reviews");
        assert_eq!(keywords[2].rank, 3);
    }

    #[tokio::test]
    async fn test_brief_outline() {
        let brief = TemplateGenerator::new()
            .create_content_brief("sourdough")
            .await
            .unwrap();
        assert_eq!(brief.title_suggestion, "The Complete Guide to sourdough");
        assert_eq!(brief.outline.len(), 2);
    }
}
