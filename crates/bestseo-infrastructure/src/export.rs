//! Export of the current result of a panel to a JSON or CSV file.
//!
//! JSON carries the result exactly as stored. CSV flattens it into one row per
//! keyword, competitor or brief field.

use std::fs;
use std::path::{Path, PathBuf};

use bestseo_core::suite::{ExportDocument, ExportFormat};
use bestseo_core::{Result, SeoError};
use serde::Serialize;

/// One keyword and the group it was suggested in.
#[derive(Serialize)]
struct KeywordRow<'a> {
    category: &'a str,
    keyword: &'a str,
}

/// One labelled value of a content brief.
#[derive(Serialize)]
struct BriefRow<'a> {
    section: &'a str,
    value: &'a str,
}

/// Renders `document` in `format`.
pub fn render(document: &ExportDocument<'_>, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => to_json(document),
        ExportFormat::Csv => to_csv(document),
    }
}

/// Writes `document` to `target` and returns the path written.
///
/// With no target the file lands in the working directory under the
/// document's default name. A directory target gets the default name too.
pub fn export_to_file(
    document: &ExportDocument<'_>,
    format: ExportFormat,
    target: Option<&Path>,
) -> Result<PathBuf> {
    let file_name = format!("{}.{}", document.file_stem(), format.extension());
    let path = match target {
        Some(dir) if dir.is_dir() => dir.join(file_name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(file_name),
    };

    let content = render(document, format)?;
    fs::write(&path, content)?;
    tracing::info!(path = %path.display(), %format, "Exported result");
    Ok(path)
}

fn to_json(document: &ExportDocument<'_>) -> Result<String> {
    let json = match *document {
        ExportDocument::Keywords { keywords, .. } => serde_json::to_string_pretty(keywords)?,
        ExportDocument::Serp { analysis, .. } => serde_json::to_string_pretty(analysis)?,
        ExportDocument::Competitor { keywords, .. } => serde_json::to_string_pretty(keywords)?,
        ExportDocument::Brief { brief, .. } => serde_json::to_string_pretty(brief)?,
    };
    Ok(json)
}

fn to_csv(document: &ExportDocument<'_>) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    match *document {
        ExportDocument::Keywords { keywords, .. } => {
            let groups = [
                ("primary", &keywords.primary_keywords),
                ("longTail", &keywords.long_tail_keywords),
                ("questionBased", &keywords.question_based_keywords),
                ("lsi", &keywords.lsi_keywords),
            ];
            for (category, items) in groups {
                for keyword in items {
                    writer
                        .serialize(KeywordRow { category, keyword })
                        .map_err(csv_error)?;
                }
            }
        }
        ExportDocument::Serp { analysis, .. } => {
            for competitor in &analysis.competitors {
                writer.serialize(competitor).map_err(csv_error)?;
            }
        }
        ExportDocument::Competitor { keywords, .. } => {
            for keyword in keywords {
                writer.serialize(keyword).map_err(csv_error)?;
            }
        }
        ExportDocument::Brief { brief, .. } => {
            let word_count = brief.suggested_word_count.to_string();
            let mut rows = vec![
                BriefRow {
                    section: "titleSuggestion",
                    value: &brief.title_suggestion,
                },
                BriefRow {
                    section: "metaDescriptionSuggestion",
                    value: &brief.meta_description_suggestion,
                },
                BriefRow {
                    section: "targetAudience",
                    value: &brief.target_audience,
                },
                BriefRow {
                    section: "suggestedWordCount",
                    value: &word_count,
                },
            ];
            for section in &brief.outline {
                rows.push(BriefRow {
                    section: "heading",
                    value: &section.heading,
                });
                rows.extend(section.subheadings.iter().map(|subheading| BriefRow {
                    section: "subheading",
                    value: subheading,
                }));
            }
            rows.extend(brief.lsi_keywords.iter().map(|keyword| BriefRow {
                section: "lsiKeyword",
                value: keyword,
            }));
            for row in rows {
                writer.serialize(row).map_err(csv_error)?;
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SeoError::io(e.error().to_string()))?;
    String::from_utf8(bytes).map_err(csv_error)
}

fn csv_error(err: impl std::fmt::Display) -> SeoError {
    SeoError::Serialization {
        format: "CSV".to_string(),
        message: err.to_string(),
    }
}
