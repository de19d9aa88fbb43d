//! Terminal rendering of panels and saved lists.

use bestseo_core::history::HistoryStatus;
use bestseo_core::suite::{
    CompetitorKeyword, ContentBriefData, Keywords, PanelKey, SavedList, SerpAnalysis, SuiteState,
};
use colored::Colorize;

pub fn navigation(active: PanelKey) {
    for panel in PanelKey::all() {
        let line = format!("{:<18} {}", panel.as_ref(), panel.label());
        if panel == active {
            println!("{} {}", "*".bright_green(), line.bright_green());
        } else {
            println!("  {}", line);
        }
    }
}

pub fn panel(state: &SuiteState, key: PanelKey) {
    println!();
    println!("{}", key.title().bright_magenta().bold());
    println!("{}", key.description().bright_black());

    match key {
        PanelKey::KeywordResearch => {
            let panel = &state.keyword_research;
            field("Topic", &panel.topic);
            if let Some(keywords) = &panel.current {
                keywords_result(keywords);
            }
        }
        PanelKey::SerpMonitoring => {
            let panel = &state.serp_monitoring;
            field("Keyword", &panel.keyword);
            field("Domain", &panel.domain);
            if let Some(analysis) = &panel.current {
                serp_result(analysis);
            }
            field("Competitor", &panel.competitor_domain);
            if let Some(keywords) = &panel.current_competitor {
                competitor_result(keywords);
            }
        }
        PanelKey::ContentBrief => {
            let panel = &state.content_brief;
            field("Keyword", &panel.keyword);
            if let Some(brief) = &panel.current {
                brief_result(brief);
            }
        }
        PanelKey::OnPageOptimizer | PanelKey::KeywordStrategist | PanelKey::SeoAudit => {
            println!("{}", "Nothing from this panel is kept in history.".bright_black());
        }
    }
}

pub fn saved_list(state: &SuiteState, list: SavedList) {
    println!("{}", list.heading().bright_cyan().bold());

    let rows: Vec<(i64, String, &str)> = match list {
        SavedList::Keywords => state
            .keyword_research
            .saved
            .iter()
            .map(|r| (r.id, r.topic.clone(), r.timestamp.as_str()))
            .collect(),
        SavedList::Serp => state
            .serp_monitoring
            .saved_serp
            .iter()
            .map(|r| (r.id, format!("{} @ {}", r.keyword, r.domain), r.timestamp.as_str()))
            .collect(),
        SavedList::Competitor => state
            .serp_monitoring
            .saved_competitor
            .iter()
            .map(|r| (r.id, r.domain.clone(), r.timestamp.as_str()))
            .collect(),
        SavedList::Brief => state
            .content_brief
            .saved
            .iter()
            .map(|r| (r.id, r.keyword.clone(), r.timestamp.as_str()))
            .collect(),
    };

    if rows.is_empty() {
        println!("  {}", "(none)".bright_black());
        return;
    }
    for (id, label, timestamp) in rows {
        println!(
            "  {} {} {}",
            format!("{:>14}", id).yellow(),
            label,
            timestamp.bright_black()
        );
    }
}

pub fn status(status: &HistoryStatus) {
    let capacity = status
        .capacity
        .map(|c| c.to_string())
        .unwrap_or_else(|| "unbounded".to_string());
    println!(
        "History: {} entries (capacity {}), present at {}",
        status.depth,
        capacity,
        status
            .present_index
            .map(|i| i.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!(
        "  undo: {}  redo: {}",
        flag(status.can_undo),
        flag(status.can_redo)
    );
}

fn flag(enabled: bool) -> colored::ColoredString {
    if enabled {
        "yes".bright_green()
    } else {
        "no".bright_black()
    }
}

fn field(label: &str, value: &str) {
    if !value.is_empty() {
        println!("{} {}", format!("{label}:").bright_white(), value);
    }
}

fn bullets(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{}", heading.bright_cyan());
    for item in items {
        println!("  - {}", item);
    }
}

fn keywords_result(keywords: &Keywords) {
    bullets("Primary Keywords", &keywords.primary_keywords);
    bullets("Long-Tail Keywords", &keywords.long_tail_keywords);
    bullets("Question-Based Keywords", &keywords.question_based_keywords);
    bullets("LSI Keywords", &keywords.lsi_keywords);
}

fn serp_result(analysis: &SerpAnalysis) {
    println!("{}", "Top Competitors".bright_cyan());
    for (rank, competitor) in analysis.competitors.iter().enumerate() {
        println!("  {}. {}", rank + 1, competitor.title.bright_white());
        println!("     {}", competitor.url.blue());
        println!("     {}", competitor.description);
    }
    println!("{}", "Analysis".bright_cyan());
    println!("  {}", analysis.analysis);
    bullets("Recommendations", &analysis.recommendations);
}

fn competitor_result(keywords: &[CompetitorKeyword]) {
    println!("{}", "Competitor Keywords".bright_cyan());
    for keyword in keywords {
        println!(
            "  {:<32} rank {:>3}  volume {:>8}  {}",
            keyword.keyword, keyword.rank, keyword.search_volume, keyword.difficulty
        );
    }
}

fn brief_result(brief: &ContentBriefData) {
    field("Title", &brief.title_suggestion);
    field("Meta Description", &brief.meta_description_suggestion);
    field("Target Audience", &brief.target_audience);
    println!(
        "{} {}",
        "Suggested Word Count:".bright_white(),
        brief.suggested_word_count
    );
    println!("{}", "Outline".bright_cyan());
    for section in &brief.outline {
        println!("  {}", section.heading.bright_white());
        for subheading in &section.subheadings {
            println!("    - {}", subheading);
        }
    }
    bullets("LSI Keywords", &brief.lsi_keywords);
}
