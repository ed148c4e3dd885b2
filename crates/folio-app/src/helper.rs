//! rustyline helper: command completion, inline hints, input highlighting.

use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Completes command names (aliases included) in the first word only.
#[derive(Clone, Default)]
pub struct FolioHelper {
    commands: Vec<String>,
}

impl FolioHelper {
    pub fn new(commands: Vec<String>) -> Self {
        Self { commands }
    }

    fn matches<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a String> {
        let lower = prefix.to_ascii_lowercase();
        self.commands
            .iter()
            .filter(move |cmd| cmd.starts_with(&lower))
    }
}

impl Helper for FolioHelper {}

impl Completer for FolioHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.contains(char::is_whitespace) {
            return Ok((0, Vec::new()));
        }
        let candidates = self
            .matches(line)
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for FolioHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with(':') {
            Owned(line.bright_magenta().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for FolioHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() || line.contains(char::is_whitespace) || line.starts_with(':') {
            return None;
        }
        self.matches(line)
            .find(|cmd| cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for FolioHelper {}
