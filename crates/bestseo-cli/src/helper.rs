use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::commands::COMMAND_NAMES;

/// rustyline helper completing and hinting command names.
#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    pub fn new() -> Self {
        Self {
            commands: COMMAND_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// The command name being typed, without the optional leading `/`.
    fn typed_command(line: &str) -> Option<(usize, &str)> {
        if line.contains(char::is_whitespace) {
            return None;
        }
        match line.strip_prefix('/') {
            Some(rest) => Some((1, rest)),
            None => Some((0, line)),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let Some((start, typed)) = Self::typed_command(&line[..pos]) else {
            return Ok((0, vec![]));
        };

        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(typed))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let name = line.split_whitespace().next().unwrap_or("");
        let name = name.strip_prefix('/').unwrap_or(name);
        if self.commands.iter().any(|cmd| cmd == name) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let (_, typed) = Self::typed_command(&line[..pos])?;
        if typed.is_empty() {
            return None;
        }
        self.commands
            .iter()
            .find(|cmd| cmd.starts_with(typed) && cmd.len() > typed.len())
            .map(|cmd| cmd[typed.len()..].to_string())
    }
}

impl Validator for CliHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_command() {
        assert_eq!(CliHelper::typed_command("un"), Some((0, "un")));
        assert_eq!(CliHelper::typed_command("/re"), Some((1, "re")));
        assert_eq!(CliHelper::typed_command("brief tea"), None);
    }
}
