//! REPL command parsing and dispatch.

pub mod handlers;

use std::path::PathBuf;
use std::str::FromStr;

use bestseo_core::suite::{ExportFormat, PanelKey, SavedList};
use thiserror::Error;

/// Command names offered for completion, in the order `help` lists them.
pub const COMMAND_NAMES: &[&str] = &[
    "keywords",
    "serp",
    "competitor",
    "brief",
    "view",
    "delete",
    "list",
    "export",
    "panel",
    "show",
    "undo",
    "redo",
    "status",
    "help",
    "quit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Keywords { topic: String },
    Serp { keyword: String, domain: String },
    Competitor { domain: String },
    Brief { keyword: String },
    View { list: SavedList, id: i64 },
    Delete { list: SavedList, id: i64 },
    List { list: Option<SavedList> },
    Export {
        list: SavedList,
        format: ExportFormat,
        path: Option<PathBuf>,
    },
    Panel { panel: Option<PanelKey> },
    Show,
    Undo,
    Redo,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0}. Type 'help' for a list of commands.")]
    UnknownCommand(String),
    #[error("Unknown list: {0}. Expected keywords, serp, competitor or brief.")]
    UnknownList(String),
    #[error("Unknown panel: {0}")]
    UnknownPanel(String),
    #[error("Unknown export format: {0}. Expected json or csv.")]
    UnknownFormat(String),
    #[error("Invalid id: {0}")]
    InvalidId(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
}

impl FromStr for Command {
    type Err = ParseError;

    /// Parses one REPL line. A leading `/` is accepted.
    ///
    /// Missing free-text arguments parse as empty strings so the suite can
    /// report its own validation message.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let line = line.strip_prefix('/').unwrap_or(line);
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "keywords" | "kw" => Ok(Self::Keywords {
                topic: rest.to_string(),
            }),
            "serp" => {
                let (keyword, domain) = match rest.rsplit_once(char::is_whitespace) {
                    Some((keyword, domain)) => (keyword.trim(), domain),
                    None => ("", rest),
                };
                Ok(Self::Serp {
                    keyword: keyword.to_string(),
                    domain: domain.to_string(),
                })
            }
            "competitor" => Ok(Self::Competitor {
                domain: rest.to_string(),
            }),
            "brief" => Ok(Self::Brief {
                keyword: rest.to_string(),
            }),
            "view" => {
                let (list, id) = parse_record_ref(rest, "view <list> <id>")?;
                Ok(Self::View { list, id })
            }
            "delete" | "rm" => {
                let (list, id) = parse_record_ref(rest, "delete <list> <id>")?;
                Ok(Self::Delete { list, id })
            }
            "list" | "ls" => {
                let list = if rest.is_empty() {
                    None
                } else {
                    Some(parse_list(rest)?)
                };
                Ok(Self::List { list })
            }
            "export" => {
                let mut parts = rest.splitn(3, char::is_whitespace);
                let (Some(target), Some(format)) = (parts.next(), parts.next()) else {
                    return Err(ParseError::Usage("export <list|panel> <json|csv> [path]"));
                };
                let list = parse_export_target(target)?;
                let format = ExportFormat::from_str(format)
                    .map_err(|_| ParseError::UnknownFormat(format.to_string()))?;
                let path = parts
                    .next()
                    .map(str::trim)
                    .filter(|path| !path.is_empty())
                    .map(PathBuf::from);
                Ok(Self::Export { list, format, path })
            }
            "panel" => {
                let panel = if rest.is_empty() {
                    None
                } else {
                    Some(parse_panel(rest)?)
                };
                Ok(Self::Panel { panel })
            }
            "show" => Ok(Self::Show),
            "undo" => Ok(Self::Undo),
            "redo" => Ok(Self::Redo),
            "status" => Ok(Self::Status),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_record_ref(args: &str, usage: &'static str) -> Result<(SavedList, i64), ParseError> {
    let mut parts = args.split_whitespace();
    let (Some(list), Some(id), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::Usage(usage));
    };
    let list = parse_list(list)?;
    let id = id
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidId(id.to_string()))?;
    Ok((list, id))
}

fn parse_list(name: &str) -> Result<SavedList, ParseError> {
    SavedList::from_str(name).map_err(|_| ParseError::UnknownList(name.to_string()))
}

/// Accepts a list name, or the key of a panel that shows a single result.
fn parse_export_target(name: &str) -> Result<SavedList, ParseError> {
    if let Ok(list) = SavedList::from_str(name) {
        return Ok(list);
    }
    match parse_panel(name)? {
        PanelKey::KeywordResearch => Ok(SavedList::Keywords),
        PanelKey::SerpMonitoring => Ok(SavedList::Serp),
        PanelKey::ContentBrief => Ok(SavedList::Brief),
        _ => Err(ParseError::UnknownList(name.to_string())),
    }
}

/// Accepts a panel key (`serpMonitoring`) in any case, or a saved-list alias.
fn parse_panel(name: &str) -> Result<PanelKey, ParseError> {
    PanelKey::all()
        .into_iter()
        .find(|panel| panel.as_ref().eq_ignore_ascii_case(name))
        .or_else(|| SavedList::from_str(name).ok().map(|list| list.panel()))
        .ok_or_else(|| ParseError::UnknownPanel(name.to_string()))
}
