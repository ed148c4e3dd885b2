//! Output renderer: maps the invocation history to a presentation description.
//!
//! Rendering is pure. The same history and the same toggle state always yield
//! equal output; nothing is retained between calls. Each entry carries the
//! echoed input line, a block dispatched by payload tag, and 2-3 suggested
//! follow-up commands keyed by the command that produced it.

mod suggest;
mod text;
mod views;

use std::collections::BTreeSet;

use folio_content::ContentRegistry;
use folio_terminal::{CommandOutput, RichView};

use crate::session::Invocation;

pub use suggest::{chip_command, recommend, suggestion_chips, suggestions_for, validate_tables};
pub use text::{classify, format_text, split_chips};
pub use views::{
    ArchitectureBlock, ExperienceView, Field, ProjectItem, ProjectsBlock, RecruiterBlock,
    StatusBlock,
};

/// Visual role of one text line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Header,
    Divider,
    /// Bold sub-label (`--impact`).
    SubLabel,
    /// Accent-emphasized label (`* item`).
    Accent,
    Dim,
    Normal,
}

/// A clickable token that re-submits a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub label: String,
    pub command: String,
}

impl Chip {
    /// Build a chip for an inline `[label]` token.
    pub fn for_label(label: &str) -> Self {
        Self {
            label: label.trim().to_string(),
            command: chip_command(label),
        }
    }

    /// Build a chip whose label is the command itself.
    pub fn command(command: &str) -> Self {
        Self {
            label: command.to_string(),
            command: command.to_string(),
        }
    }
}

/// A run within a text line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Chip(Chip),
}

/// One formatted line of a text payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub style: LineStyle,
    pub spans: Vec<Span>,
}

impl TextLine {
    /// The line's text with chips shown as their labels.
    pub fn plain(&self) -> String {
        self.spans
            .iter()
            .map(|span| match span {
                Span::Text(t) => t.as_str(),
                Span::Chip(c) => c.label.as_str(),
            })
            .collect()
    }

    /// Chips embedded in this line, in order.
    pub fn chips(&self) -> impl Iterator<Item = &Chip> {
        self.spans.iter().filter_map(|span| match span {
            Span::Chip(c) => Some(c),
            Span::Text(_) => None,
        })
    }
}

/// Rendered body of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Text(Vec<TextLine>),
    Status(StatusBlock),
    Recruiter(RecruiterBlock),
    Projects(ProjectsBlock),
    Architecture(ArchitectureBlock),
}

impl Block {
    /// Every chip in the block, in display order.
    pub fn chips(&self) -> Vec<&Chip> {
        match self {
            Self::Text(lines) => lines.iter().flat_map(TextLine::chips).collect(),
            Self::Recruiter(r) => r.actions.iter().collect(),
            Self::Projects(p) => p
                .items
                .iter()
                .flat_map(|item| {
                    std::iter::once(&item.chip).chain(item.detail.iter().flat_map(TextLine::chips))
                })
                .collect(),
            Self::Status(_) | Self::Architecture(_) => Vec::new(),
        }
    }
}

/// One history entry as presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    /// Id of the source invocation.
    pub id: u64,
    /// Echo of the raw input line.
    pub echo: String,
    pub block: Block,
    pub suggestions: Vec<Chip>,
}

/// Local, per-render disclosure state.
///
/// Fresh state is fully collapsed. It is owned by whoever presents the
/// output and reset when that presentation is mounted again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleState {
    expanded: BTreeSet<String>,
    evidence_open: bool,
}

impl ToggleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand or collapse one project inline. Returns the new state.
    pub fn toggle_project(&mut self, id: &str) -> bool {
        let id = id.to_ascii_lowercase();
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(&id.to_ascii_lowercase())
    }

    /// Show or hide the recruiter evidence lists. Returns the new state.
    pub fn toggle_evidence(&mut self) -> bool {
        self.evidence_open = !self.evidence_open;
        self.evidence_open
    }

    pub fn evidence_open(&self) -> bool {
        self.evidence_open
    }

    /// Collapse everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Pure mapping from history to presentation.
pub struct Renderer<'a> {
    content: &'a ContentRegistry,
}

impl<'a> Renderer<'a> {
    pub fn new(content: &'a ContentRegistry) -> Self {
        Self { content }
    }

    /// Render the whole history in order.
    pub fn render(&self, history: &[Invocation], toggles: &ToggleState) -> Vec<RenderedEntry> {
        history
            .iter()
            .map(|inv| self.render_entry(inv, toggles))
            .collect()
    }

    /// Render one invocation.
    pub fn render_entry(&self, inv: &Invocation, toggles: &ToggleState) -> RenderedEntry {
        RenderedEntry {
            id: inv.id,
            echo: inv.input.clone(),
            block: self.render_output(&inv.output, toggles),
            suggestions: suggestion_chips(inv.suggestion_key()),
        }
    }

    /// Dispatch a payload by tag.
    pub fn render_output(&self, output: &CommandOutput, toggles: &ToggleState) -> Block {
        match output {
            CommandOutput::Text(text) => Block::Text(format_text(text)),
            CommandOutput::View(RichView::Status) => Block::Status(views::status()),
            CommandOutput::View(RichView::Recruiter) => {
                Block::Recruiter(views::recruiter(toggles.evidence_open()))
            },
            CommandOutput::View(RichView::Projects { deep }) => {
                Block::Projects(views::projects(self.content, *deep, toggles))
            },
            CommandOutput::View(RichView::Architecture) => {
                Block::Architecture(views::architecture())
            },
            CommandOutput::Clear | CommandOutput::Navigate(_) | CommandOutput::Theme(_) => {
                log::warn!("Control payload reached the renderer: {output:?}");
                Block::Text(Vec::new())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::route::Route;

    fn inv(id: u64, input: &str, output: CommandOutput) -> Invocation {
        Invocation::new(id, id * 100, input, None, output)
    }

    fn content() -> ContentRegistry {
        ContentRegistry::builtin().unwrap()
    }

    #[test]
    fn render_is_deterministic() {
        let content = content();
        let r = Renderer::new(&content);
        let history = vec![
            inv(1, "status", CommandOutput::View(RichView::Status)),
            inv(2, "overview", CommandOutput::Text("[OVERVIEW]\n* [status] go".into())),
            inv(3, "projects", CommandOutput::View(RichView::Projects { deep: false })),
            inv(4, "recruiter", CommandOutput::View(RichView::Recruiter)),
        ];
        let toggles = ToggleState::new();
        assert_eq!(r.render(&history, &toggles), r.render(&history, &toggles));
    }

    #[test]
    fn entry_echoes_input_and_suggests() {
        let content = content();
        let r = Renderer::new(&content);
        let entry = r.render_entry(
            &inv(7, "recruiter", CommandOutput::View(RichView::Recruiter)),
            &ToggleState::new(),
        );
        assert_eq!(entry.id, 7);
        assert_eq!(entry.echo, "recruiter");
        let cmds: Vec<&str> = entry.suggestions.iter().map(|c| c.command.as_str()).collect();
        assert_eq!(cmds, vec!["projects", "skills"]);
    }

    #[test]
    fn unknown_command_suggests_defaults() {
        let content = content();
        let r = Renderer::new(&content);
        let entry = r.render_entry(
            &inv(1, "foo", CommandOutput::Text("Command not found: foo.".into())),
            &ToggleState::new(),
        );
        let cmds: Vec<&str> = entry.suggestions.iter().map(|c| c.command.as_str()).collect();
        assert_eq!(cmds, vec!["overview", "help"]);
    }

    #[test]
    fn dispatch_by_payload_tag_not_input() {
        let content = content();
        let r = Renderer::new(&content);
        // Input text is irrelevant to the block kind.
        let block = r.render_output(
            &CommandOutput::View(RichView::Architecture),
            &ToggleState::new(),
        );
        assert!(matches!(block, Block::Architecture(_)));
        let block = r.render_output(&CommandOutput::Text("recruiter".into()), &ToggleState::new());
        assert!(matches!(block, Block::Text(_)));
    }

    #[test]
    fn control_payload_renders_empty() {
        let content = content();
        let r = Renderer::new(&content);
        let block = r.render_output(&CommandOutput::Navigate(Route::Landing), &ToggleState::new());
        assert_eq!(block, Block::Text(Vec::new()));
    }

    #[test]
    fn text_block_collects_chips() {
        let content = content();
        let r = Renderer::new(&content);
        let block = r.render_output(
            &CommandOutput::Text("* [status] and [Render-Engine]".into()),
            &ToggleState::new(),
        );
        let cmds: Vec<&str> = block.chips().iter().map(|c| c.command.as_str()).collect();
        assert_eq!(cmds, vec!["status", "project render-engine"]);
    }

    #[test]
    fn toggles_expand_single_project() {
        let content = content();
        let r = Renderer::new(&content);
        let mut toggles = ToggleState::new();
        assert!(toggles.toggle_project("Render-Engine"));
        let Block::Projects(block) = r.render_output(
            &CommandOutput::View(RichView::Projects { deep: false }),
            &toggles,
        ) else {
            panic!("expected projects block");
        };
        let expanded: Vec<&str> = block
            .items
            .iter()
            .filter(|i| i.expanded)
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(expanded, vec!["render-engine"]);
        assert!(!toggles.toggle_project("render-engine"));
    }

    #[test]
    fn toggle_reset_collapses() {
        let mut toggles = ToggleState::new();
        toggles.toggle_project("design-system");
        toggles.toggle_evidence();
        toggles.reset();
        assert_eq!(toggles, ToggleState::new());
    }

    #[test]
    fn overview_flags_line_is_plain_text() {
        let content = content();
        let body = content.get("overview").unwrap().body_text();
        let lines = format_text(&body);
        let flags = lines
            .iter()
            .find(|l| l.plain().contains("--deep"))
            .unwrap();
        assert_eq!(flags.style, LineStyle::Normal);
        let labels: Vec<String> = lines
            .iter()
            .filter(|l| l.style == LineStyle::SubLabel)
            .map(TextLine::plain)
            .collect();
        assert_eq!(labels, vec!["-- Where to start", "-- Flags"]);
    }
}
