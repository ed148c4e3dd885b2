//! Command trait, registry, and dispatch logic.
//!
//! Input lines are split on whitespace. The first token, lower-cased, names
//! the command; `--name` tokens anywhere after it become presence-only flags;
//! everything else is a positional argument in input order.

use std::collections::{BTreeSet, HashMap};

use folio_content::ContentRegistry;
use folio_types::error::{FolioError, Result};
use folio_types::route::Route;
use folio_types::theme::Theme;

/// Prefix marking a flag token.
pub const FLAG_PREFIX: &str = "--";

/// Structured views the renderer draws from profile data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RichView {
    /// System status summary block.
    Status,
    /// Condensed recruiter profile.
    Recruiter,
    /// Project list; `deep` expands every project.
    Projects { deep: bool },
    /// Architecture principles.
    Architecture,
}

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Line-oriented text with lightweight markup.
    Text(String),
    /// A structured view selected by tag.
    View(RichView),
    /// Signal to clear the transcript.
    Clear,
    /// Signal to leave the terminal for another view.
    Navigate(Route),
    /// Signal to change the colour theme (`None` toggles).
    Theme(Option<Theme>),
}

impl CommandOutput {
    /// Whether the shell must intercept this payload instead of recording it.
    pub fn is_control(&self) -> bool {
        matches!(self, Self::Clear | Self::Navigate(_) | Self::Theme(_))
    }
}

/// Presence-only flags, stored lower-cased without the `--` prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags(BTreeSet<String>);

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `--name` was given.
    pub fn has(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn insert(&mut self, name: &str) {
        self.0.insert(name.to_ascii_lowercase());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<const N: usize> From<[&str; N]> for Flags {
    fn from(names: [&str; N]) -> Self {
        let mut flags = Self::new();
        for name in names {
            flags.insert(name);
        }
        flags
    }
}

/// One input line split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Lower-cased command name (the primary token).
    pub name: String,
    /// Positional arguments, flags removed, input order.
    pub args: Vec<String>,
    pub flags: Flags,
}

/// Parse an input line. Blank input yields `None`.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?.to_ascii_lowercase();
    let mut args = Vec::new();
    let mut flags = Flags::new();
    for token in tokens {
        match token.strip_prefix(FLAG_PREFIX) {
            Some(flag) => flags.insert(flag),
            None => args.push(token.to_string()),
        }
    }
    Some(ParsedLine { name, args, flags })
}

/// Read-only context passed to every command.
pub struct Environment<'a> {
    /// Static portfolio content.
    pub content: &'a ContentRegistry,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "project <key> \[--impact\]").
    fn usage(&self) -> &str;

    /// Command category for grouping in `help` output.
    fn category(&self) -> &str {
        "explore"
    }

    /// Execute the command. Commands are total: bad input produces a usage
    /// or "not found" text payload rather than an error.
    fn execute(&self, args: &[&str], flags: &Flags, env: &Environment<'_>) -> CommandOutput;
}

enum Entry {
    Command(Box<dyn Command>),
    /// Delegates to the named canonical command.
    Alias(String),
}

/// Name of the built-in help command, handled by the registry itself.
const HELP: &str = "help";

/// Flags documented in `help` output.
const DOCUMENTED_FLAGS: &[(&str, &str)] = &[
    ("--deep", "Detailed view"),
    ("--impact", "Show measurable outcomes"),
    ("--infra", "Show technical stack details"),
];

/// Registry of available commands with dispatch.
pub struct CommandRegistry {
    entries: HashMap<String, Entry>,
    /// Names registered more than once. The first registration is kept.
    collisions: Vec<String>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            collisions: Vec::new(),
        }
    }

    /// Register a command. A name that is already taken keeps its first
    /// entry and is reported by `validate`.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let name = cmd.name().to_ascii_lowercase();
        self.insert(name, Entry::Command(cmd));
    }

    /// Register `alias` as another name for `target`.
    pub fn register_alias(&mut self, alias: &str, target: &str) {
        self.insert(
            alias.to_ascii_lowercase(),
            Entry::Alias(target.to_ascii_lowercase()),
        );
    }

    fn insert(&mut self, name: String, entry: Entry) {
        if name == HELP || self.entries.contains_key(&name) {
            log::warn!("Command name '{name}' registered twice; keeping the first");
            self.collisions.push(name);
            return;
        }
        self.entries.insert(name, entry);
    }

    /// Resolve a (possibly aliased) name to its canonical command name.
    pub fn resolve<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        let lower = name.to_ascii_lowercase();
        if lower == HELP {
            return Some(HELP);
        }
        match self.entries.get(lower.as_str())? {
            Entry::Command(cmd) => Some(cmd.name()),
            Entry::Alias(target) if target == HELP => Some(HELP),
            Entry::Alias(target) => match self.entries.get(target.as_str()) {
                Some(Entry::Command(cmd)) => Some(cmd.name()),
                _ => None,
            },
        }
    }

    /// Check that every name was registered once and that every alias points
    /// at a registered command (not another alias). Run once at startup.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = self.collisions.first() {
            return Err(FolioError::Command(format!(
                "name '{name}' is registered more than once"
            )));
        }
        for (name, entry) in &self.entries {
            if let Entry::Alias(target) = entry {
                let ok = target == HELP
                    || matches!(self.entries.get(target.as_str()), Some(Entry::Command(_)));
                if !ok {
                    return Err(FolioError::Command(format!(
                        "alias '{name}' points at unknown command '{target}'"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Parse and execute a command line.
    ///
    /// Returns `None` for blank input. Command names are case-insensitive;
    /// unknown names produce a "command not found" text payload.
    pub fn execute(&self, line: &str, env: &Environment<'_>) -> Option<CommandOutput> {
        let parsed = parse_line(line)?;
        Some(self.dispatch(&parsed, env))
    }

    /// Execute an already-parsed line.
    pub fn dispatch(&self, parsed: &ParsedLine, env: &Environment<'_>) -> CommandOutput {
        let args: Vec<&str> = parsed.args.iter().map(String::as_str).collect();
        match self.resolve(&parsed.name) {
            Some(HELP) => self.execute_help(&args),
            Some(canonical) => {
                log::debug!("Dispatching '{}' as '{canonical}'", parsed.name);
                match self.entries.get(canonical) {
                    Some(Entry::Command(cmd)) => cmd.execute(&args, &parsed.flags, env),
                    _ => not_found(&parsed.name),
                }
            },
            None => not_found(&parsed.name),
        }
    }

    /// Built-in help with access to the registry.
    fn execute_help(&self, args: &[&str]) -> CommandOutput {
        if let Some(&name) = args.first() {
            let Some(canonical) = self.resolve(name) else {
                return not_found(name);
            };
            if canonical == HELP {
                return CommandOutput::Text(
                    "help (session)\n  List available commands\n  Usage: help <command>"
                        .to_string(),
                );
            }
            return match self.entries.get(canonical) {
                Some(Entry::Command(cmd)) => {
                    let mut out = format!("{} ({})\n", cmd.name(), cmd.category());
                    out.push_str(&format!("  {}\n", cmd.description()));
                    out.push_str(&format!("  Usage: {}", cmd.usage()));
                    let aliases = self.aliases_of(canonical);
                    if !aliases.is_empty() {
                        out.push_str(&format!("\n  Aliases: {}", aliases.join(", ")));
                    }
                    CommandOutput::Text(out)
                },
                _ => not_found(name),
            };
        }

        // Group commands by category.
        let mut categories: HashMap<&str, Vec<(&str, &str)>> = HashMap::new();
        categories
            .entry("session")
            .or_default()
            .push((HELP, "List available commands"));
        for entry in self.entries.values() {
            if let Entry::Command(cmd) = entry {
                categories
                    .entry(cmd.category())
                    .or_default()
                    .push((cmd.name(), cmd.description()));
            }
        }

        let mut cats: Vec<&str> = categories.keys().copied().collect();
        cats.sort_unstable();

        let total: usize = categories.values().map(Vec::len).sum();
        let mut out = format!("Available commands ({total}):\n");
        for cat in &cats {
            let mut cmds = categories.get(cat).cloned().unwrap_or_default();
            cmds.sort_by_key(|(name, _)| *name);
            out.push_str(&format!("\n[{cat}]\n"));
            for (name, desc) in &cmds {
                out.push_str(&format!("  {name:12} {desc}\n"));
            }
        }
        out.push_str("\nFlags:\n");
        for (flag, desc) in DOCUMENTED_FLAGS {
            out.push_str(&format!("  {flag:9} {desc}\n"));
        }
        out.push_str("\nDetails: type 'help <command>' for usage and aliases.");
        CommandOutput::Text(out)
    }

    /// Aliases that resolve to `canonical`, sorted.
    fn aliases_of(&self, canonical: &str) -> Vec<&str> {
        let mut aliases: Vec<&str> = self
            .entries
            .iter()
            .filter_map(|(name, entry)| match entry {
                Entry::Alias(target) if target == canonical => Some(name.as_str()),
                _ => None,
            })
            .collect();
        aliases.sort_unstable();
        aliases
    }

    /// Return a sorted list of (name, description) pairs, `help` included.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        let mut cmds: Vec<(&str, &str)> = self
            .entries
            .values()
            .filter_map(|entry| match entry {
                Entry::Command(c) => Some((c.name(), c.description())),
                Entry::Alias(_) => None,
            })
            .collect();
        cmds.push((HELP, "List available commands"));
        cmds.sort_by_key(|(name, _)| *name);
        cmds
    }

    /// Return completions (commands and aliases) for a partial name, sorted.
    pub fn completions(&self, partial: &str) -> Vec<String> {
        let lower = partial.to_ascii_lowercase();
        let mut out: Vec<String> = self
            .entries
            .keys()
            .map(String::as_str)
            .chain(std::iter::once(HELP))
            .filter(|name| name.starts_with(&lower))
            .map(str::to_string)
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(name: &str) -> CommandOutput {
    CommandOutput::Text(format!(
        "Command not found: {}. Type 'help' for available commands.",
        name.to_ascii_lowercase()
    ))
}
