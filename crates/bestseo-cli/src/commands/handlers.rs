use bestseo_application::ToolSuite;
use bestseo_core::Result;
use bestseo_core::suite::{PanelKey, SavedList};
use colored::Colorize;

use super::Command;
use crate::render;

/// Whether the REPL keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub async fn execute(suite: &mut ToolSuite, command: Command) -> Result<Flow> {
    match command {
        Command::Keywords { topic } => {
            let id = suite.generate_keywords(&topic).await?;
            saved(SavedList::Keywords, id);
            render::panel(suite.state(), PanelKey::KeywordResearch);
        }
        Command::Serp { keyword, domain } => {
            let id = suite.analyze_serp(&keyword, &domain).await?;
            saved(SavedList::Serp, id);
            render::panel(suite.state(), PanelKey::SerpMonitoring);
        }
        Command::Competitor { domain } => {
            let id = suite.find_competitor_keywords(&domain).await?;
            saved(SavedList::Competitor, id);
            render::panel(suite.state(), PanelKey::SerpMonitoring);
        }
        Command::Brief { keyword } => {
            let id = suite.create_content_brief(&keyword).await?;
            saved(SavedList::Brief, id);
            render::panel(suite.state(), PanelKey::ContentBrief);
        }
        Command::View { list, id } => {
            suite.view(list, id).await?;
            render::panel(suite.state(), suite.active_panel());
        }
        Command::Delete { list, id } => {
            suite.delete(list, id).await?;
            println!("{}", format!("Deleted {} record {}", list, id).yellow());
        }
        Command::List { list } => match list {
            Some(list) => render::saved_list(suite.state(), list),
            None => {
                for list in SavedList::all() {
                    render::saved_list(suite.state(), list);
                }
            }
        },
        Command::Export { list, format, path } => {
            let written = suite.export(list, format, path.as_deref())?;
            println!(
                "{}",
                format!("Exported to {}", written.display()).green()
            );
        }
        Command::Panel { panel } => match panel {
            Some(panel) => {
                suite.select_panel(panel);
                render::panel(suite.state(), panel);
            }
            None => render::navigation(suite.active_panel()),
        },
        Command::Show => render::panel(suite.state(), suite.active_panel()),
        Command::Undo => {
            if suite.undo().await? {
                println!("{}", "Undone".bright_green());
                render::panel(suite.state(), suite.active_panel());
            } else {
                println!("{}", "Nothing to undo".bright_black());
            }
        }
        Command::Redo => {
            if suite.redo().await? {
                println!("{}", "Redone".bright_green());
                render::panel(suite.state(), suite.active_panel());
            } else {
                println!("{}", "Nothing to redo".bright_black());
            }
        }
        Command::Status => render::status(&suite.history_status()),
        Command::Help => help(),
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn saved(list: SavedList, id: i64) {
    println!("{}", format!("Saved to {} (id {})", list, id).green());
}

fn help() {
    println!("{}", "Commands:".bright_cyan().bold());
    let usage = [
        ("keywords <topic>", "Generate keyword ideas for a topic"),
        ("serp <keyword> <domain>", "Analyze the results page for a keyword"),
        ("competitor <domain>", "Find keywords a competitor ranks for"),
        ("brief <keyword>", "Create a content brief"),
        ("view <list> <id>", "Show a saved result again"),
        ("delete <list> <id>", "Delete a saved result"),
        ("list [list]", "List saved results"),
        (
            "export <list> <json|csv> [path]",
            "Export the shown result to a file",
        ),
        ("panel [key]", "Switch panel, or list panels"),
        ("show", "Show the active panel"),
        ("undo / redo", "Step through history"),
        ("status", "Show history status"),
        ("quit", "Exit"),
    ];
    for (command, description) in usage {
        println!(
            "  {} {}",
            format!("{:<32}", command).bright_white(),
            description.bright_black()
        );
    }
    println!(
        "{}",
        "Lists: keywords, serp, competitor, brief".bright_black()
    );
}
