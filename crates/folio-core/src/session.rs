//! Session state owned by the shell.

use std::collections::BTreeSet;

use folio_terminal::{CommandOutput, parse_line};

/// One submitted command and its resolved payload. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Monotonic id, unique within the session.
    pub id: u64,
    /// Shell clock time the payload resolved, in milliseconds.
    pub timestamp_ms: u64,
    /// Raw input line as submitted.
    pub input: String,
    /// Lower-cased first token of the input.
    pub token: String,
    /// Canonical command the token resolved to, if any.
    pub command: Option<String>,
    pub output: CommandOutput,
}

impl Invocation {
    pub fn new(
        id: u64,
        timestamp_ms: u64,
        input: &str,
        command: Option<String>,
        output: CommandOutput,
    ) -> Self {
        let token = parse_line(input).map(|p| p.name).unwrap_or_default();
        Self {
            id,
            timestamp_ms,
            input: input.to_string(),
            token,
            command,
            output,
        }
    }

    /// Key for the suggestion table: the canonical command, or the raw token
    /// when nothing resolved.
    pub fn suggestion_key(&self) -> &str {
        self.command.as_deref().unwrap_or(&self.token)
    }
}

/// Session-scoped notices that fire at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Notice {
    /// Shown once boot completes.
    Init,
    /// Shown the first time the recruiter view is opened.
    Recruiter,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::Init => "System initialized. Type 'help' or click a suggestion to begin.",
            Self::Recruiter => "Switched to recruiter view. Use 'mode recruiter' for the full page.",
        }
    }
}

/// Image-preview cursor over one topic's images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewCursor {
    pub key: String,
    pub index: usize,
    pub count: usize,
}

impl PreviewCursor {
    /// Move by `delta`, wrapping at both ends.
    pub fn step(&mut self, delta: i64) {
        if self.count == 0 {
            return;
        }
        let count = self.count as i64;
        self.index = (self.index as i64 + delta).rem_euclid(count) as usize;
    }
}

/// Ephemeral per-session state. The shell is its only writer.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    history: Vec<Invocation>,
    next_id: u64,
    visited: BTreeSet<String>,
    recommendation: Option<String>,
    preview: Option<PreviewCursor>,
    notices_shown: BTreeSet<Notice>,
    active_notice: Option<Notice>,
    idle_hint: bool,
    clock_ms: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordered transcript.
    pub fn history(&self) -> &[Invocation] {
        &self.history
    }

    /// Append a record and return its id.
    pub(crate) fn append(
        &mut self,
        timestamp_ms: u64,
        input: &str,
        command: Option<String>,
        output: CommandOutput,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.history
            .push(Invocation::new(id, timestamp_ms, input, command, output));
        id
    }

    /// Drop the whole transcript. Ids keep increasing.
    pub(crate) fn clear_history(&mut self) {
        self.history.clear();
    }

    pub(crate) fn mark_visited(&mut self, topic: &str) {
        self.visited.insert(topic.to_ascii_lowercase());
    }

    pub fn visited(&self, topic: &str) -> bool {
        self.visited.contains(&topic.to_ascii_lowercase())
    }

    pub fn visited_topics(&self) -> impl Iterator<Item = &str> {
        self.visited.iter().map(String::as_str)
    }

    pub(crate) fn set_recommendation(&mut self, command: &str) {
        self.recommendation = Some(command.to_string());
    }

    /// Last recommended next command.
    pub fn recommendation(&self) -> Option<&str> {
        self.recommendation.as_deref()
    }

    pub(crate) fn set_preview(&mut self, preview: Option<PreviewCursor>) {
        self.preview = preview;
    }

    pub(crate) fn preview_mut(&mut self) -> Option<&mut PreviewCursor> {
        self.preview.as_mut()
    }

    pub fn preview(&self) -> Option<&PreviewCursor> {
        self.preview.as_ref()
    }

    /// Mark `notice` shown and make it active. Returns `false` if it already
    /// fired this session.
    pub(crate) fn raise_notice(&mut self, notice: Notice) -> bool {
        if !self.notices_shown.insert(notice) {
            return false;
        }
        self.active_notice = Some(notice);
        true
    }

    pub(crate) fn clear_notice(&mut self) -> Option<Notice> {
        self.active_notice.take()
    }

    pub fn active_notice(&self) -> Option<Notice> {
        self.active_notice
    }

    pub fn notice_shown(&self, notice: Notice) -> bool {
        self.notices_shown.contains(&notice)
    }

    pub(crate) fn set_idle_hint(&mut self, shown: bool) {
        self.idle_hint = shown;
    }

    pub fn idle_hint(&self) -> bool {
        self.idle_hint
    }

    pub(crate) fn tick(&mut self, elapsed_ms: u64) -> u64 {
        self.clock_ms += elapsed_ms;
        self.clock_secs()
    }

    /// Whole seconds counted by the session clock.
    pub fn clock_secs(&self) -> u64 {
        self.clock_ms / 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_assigns_increasing_ids() {
        let mut s = SessionState::new();
        let a = s.append(10, "status", Some("status".into()), CommandOutput::Clear);
        let b = s.append(20, "help", Some("help".into()), CommandOutput::Clear);
        assert!(b > a);
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.history()[0].input, "status");
    }

    #[test]
    fn ids_survive_clear() {
        let mut s = SessionState::new();
        let a = s.append(0, "x", None, CommandOutput::Text(String::new()));
        s.clear_history();
        assert!(s.history().is_empty());
        let b = s.append(0, "y", None, CommandOutput::Text(String::new()));
        assert!(b > a);
    }

    #[test]
    fn invocation_token_and_key() {
        let inv = Invocation::new(1, 0, "  P --deep", Some("projects".into()), CommandOutput::Clear);
        assert_eq!(inv.token, "p");
        assert_eq!(inv.suggestion_key(), "projects");
        let inv = Invocation::new(2, 0, "Foo", None, CommandOutput::Clear);
        assert_eq!(inv.suggestion_key(), "foo");
    }

    #[test]
    fn notices_fire_once() {
        let mut s = SessionState::new();
        assert!(s.raise_notice(Notice::Init));
        assert_eq!(s.clear_notice(), Some(Notice::Init));
        assert!(!s.raise_notice(Notice::Init));
        assert_eq!(s.active_notice(), None);
        assert!(s.notice_shown(Notice::Init));
        assert!(!s.notice_shown(Notice::Recruiter));
    }

    #[test]
    fn preview_wraps() {
        let mut cursor = PreviewCursor {
            key: "design-system".into(),
            index: 0,
            count: 2,
        };
        cursor.step(-1);
        assert_eq!(cursor.index, 1);
        cursor.step(1);
        assert_eq!(cursor.index, 0);
        cursor.step(5);
        assert_eq!(cursor.index, 1);
    }

    #[test]
    fn clock_counts_seconds() {
        let mut s = SessionState::new();
        s.tick(600);
        assert_eq!(s.clock_secs(), 0);
        assert_eq!(s.tick(600), 1);
    }

    #[test]
    fn visited_case_insensitive() {
        let mut s = SessionState::new();
        s.mark_visited("Projects");
        assert!(s.visited("projects"));
        assert_eq!(s.visited_topics().collect::<Vec<_>>(), vec!["projects"]);
    }
}
