//! Session shell: the booting/ready state machine around the processor.
//!
//! The shell owns the session state, the command and content registries, the
//! theme store and every timer. Callers drive it with `submit` and
//! `advance_to(now)`; the latter fires due timers in deadline order and
//! reports what changed as `ShellEvent`s. No method blocks or sleeps.

use folio_content::ContentRegistry;
use folio_platform::KeyValueStore;
use folio_terminal::{CommandOutput, CommandRegistry, Environment, RichView, parse_line};
use folio_types::config::FolioConfig;
use folio_types::error::Result;
use folio_types::route::Route;
use folio_types::theme::Theme;

use crate::render::{self, Chip, RenderedEntry, Renderer, ToggleState};
use crate::session::{Notice, PreviewCursor, SessionState};
use crate::theme_store::ThemeStore;
use crate::timer::{TimerKind, TimerQueue};

/// Lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    /// Created but not mounted.
    Unmounted,
    /// Boot delay running; input is rejected.
    Booting,
    /// Accepting input unless a command is in flight.
    Ready { processing: bool },
    /// All timers cancelled; everything is inert.
    TornDown,
}

/// Why a submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Not ready yet.
    Booting,
    /// Another command is in flight.
    Busy,
    TornDown,
}

/// Outcome of `submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Queued behind the processing delay.
    Accepted,
    /// Blank input; nothing happens.
    Ignored,
    Rejected(RejectReason),
}

/// Something the presentation layer should react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// Boot finished.
    Ready,
    /// A record was appended to the history.
    Appended(u64),
    /// The history was emptied.
    Cleared,
    /// Leave the terminal for another view.
    Navigate(Route),
    /// A theme command ran. Carries the active theme, changed or not.
    ThemeApplied(Theme),
    NoticeRaised(Notice),
    NoticeCleared,
    IdleHint,
    /// Session clock advanced to this many seconds.
    Tick(u64),
}

/// The terminal session.
pub struct Shell<S: KeyValueStore> {
    config: FolioConfig,
    content: ContentRegistry,
    registry: CommandRegistry,
    theme: ThemeStore<S>,
    session: SessionState,
    timers: TimerQueue,
    state: ShellState,
    now: u64,
    initial_command: String,
    /// Line waiting out the processing delay.
    pending: Option<String>,
    /// Route waiting out the navigation grace delay.
    pending_route: Option<Route>,
}

impl<S: KeyValueStore> Shell<S> {
    /// Build the registries, validate the lookup tables and load the theme.
    pub fn new(config: FolioConfig, store: S) -> Result<Self> {
        let content = ContentRegistry::builtin()?;
        let mut registry = CommandRegistry::new();
        folio_terminal::register_builtins(&mut registry);
        registry.validate()?;
        render::validate_tables(&registry)?;
        let theme = ThemeStore::load(store, config.default_theme);
        log::info!(
            "Shell created ({} topics, {} commands)",
            content.len(),
            registry.list_commands().len()
        );
        Ok(Self {
            initial_command: config.default_command.clone(),
            config,
            content,
            registry,
            theme,
            session: SessionState::new(),
            timers: TimerQueue::new(),
            state: ShellState::Unmounted,
            now: 0,
            pending: None,
            pending_route: None,
        })
    }

    /// Enter `Booting` and start the boot and clock timers. `initial`
    /// overrides the configured default command.
    pub fn mount(&mut self, now: u64, initial: Option<&str>) {
        if self.state != ShellState::Unmounted {
            log::warn!("Ignoring mount in state {:?}", self.state);
            return;
        }
        self.now = now;
        if let Some(cmd) = initial.map(str::trim).filter(|c| !c.is_empty()) {
            self.initial_command = cmd.to_string();
        }
        self.state = ShellState::Booting;
        self.timers
            .schedule(TimerKind::Boot, now, self.config.boot_delay_ms);
        self.timers
            .schedule_every(TimerKind::Clock, now, self.config.clock_interval_ms);
        log::debug!(
            "Booting; '{}' runs in {}ms",
            self.initial_command,
            self.config.boot_delay_ms
        );
    }

    /// Submit one input line at the current shell time.
    pub fn submit(&mut self, line: &str) -> Submission {
        if line.trim().is_empty() {
            return Submission::Ignored;
        }
        match self.state {
            ShellState::Ready { processing: false } => {},
            ShellState::Ready { processing: true } => {
                log::debug!("Rejected '{line}': busy");
                return Submission::Rejected(RejectReason::Busy);
            },
            ShellState::Unmounted | ShellState::Booting => {
                return Submission::Rejected(RejectReason::Booting);
            },
            ShellState::TornDown => return Submission::Rejected(RejectReason::TornDown),
        }
        self.state = ShellState::Ready { processing: true };
        self.pending = Some(line.to_string());
        self.timers.cancel_kind(TimerKind::IdleHint);
        self.session.set_idle_hint(false);
        self.timers
            .schedule(TimerKind::Processing, self.now, self.config.processing_delay_ms);
        Submission::Accepted
    }

    /// Re-submit a chip's command through the normal path.
    pub fn activate_chip(&mut self, chip: &Chip) -> Submission {
        self.submit(&chip.command)
    }

    /// Advance the shell clock to `now`, firing every due timer in order.
    pub fn advance_to(&mut self, now: u64) -> Vec<ShellEvent> {
        let mut events = Vec::new();
        if self.state == ShellState::TornDown {
            return events;
        }
        self.now = self.now.max(now);
        while let Some(fired) = self.timers.pop_due(self.now) {
            self.fire(fired.kind, fired.at, &mut events);
        }
        events
    }

    fn fire(&mut self, kind: TimerKind, at: u64, events: &mut Vec<ShellEvent>) {
        match kind {
            TimerKind::Boot => {
                self.state = ShellState::Ready { processing: false };
                log::info!("Shell ready");
                events.push(ShellEvent::Ready);
                self.raise_notice(Notice::Init, at, events);
                let initial = self.initial_command.clone();
                // Backdate so the processing delay counts from the boot deadline.
                let now = self.now;
                self.now = at;
                self.submit(&initial);
                self.now = now;
            },
            TimerKind::Processing => self.resolve_pending(at, events),
            TimerKind::IdleHint => {
                if self.state == (ShellState::Ready { processing: false }) {
                    self.session.set_idle_hint(true);
                    events.push(ShellEvent::IdleHint);
                }
            },
            TimerKind::Notice => {
                if self.session.clear_notice().is_some() {
                    events.push(ShellEvent::NoticeCleared);
                }
            },
            TimerKind::Navigate => {
                if let Some(route) = self.pending_route.take() {
                    log::info!("Navigating to {}", route.path());
                    events.push(ShellEvent::Navigate(route));
                }
            },
            TimerKind::Clock => {
                let secs = self.session.tick(self.config.clock_interval_ms.max(1));
                events.push(ShellEvent::Tick(secs));
            },
        }
    }

    fn resolve_pending(&mut self, at: u64, events: &mut Vec<ShellEvent>) {
        self.state = ShellState::Ready { processing: false };
        let Some(line) = self.pending.take() else {
            return;
        };
        let env = Environment {
            content: &self.content,
        };
        let Some(output) = self.registry.execute(&line, &env) else {
            return;
        };
        let parsed = parse_line(&line);
        let canonical = parsed
            .as_ref()
            .and_then(|p| self.registry.resolve(&p.name))
            .map(str::to_string);
        log::debug!("Resolved '{line}' as {canonical:?}");

        match output {
            CommandOutput::Clear => {
                self.session.clear_history();
                log::debug!("History cleared");
                events.push(ShellEvent::Cleared);
            },
            CommandOutput::Navigate(route) => {
                log::debug!("Navigation to {} scheduled", route.path());
                self.pending_route = Some(route);
                self.timers.cancel_kind(TimerKind::Navigate);
                self.timers
                    .schedule(TimerKind::Navigate, at, self.config.navigate_grace_ms);
            },
            CommandOutput::Theme(choice) => {
                let target = choice.unwrap_or_else(|| self.theme.current().toggled());
                if !self.theme.set(target) {
                    log::debug!("Theme already {}", target.label());
                }
                events.push(ShellEvent::ThemeApplied(target));
            },
            output => {
                if output == CommandOutput::View(RichView::Recruiter) {
                    self.raise_notice(Notice::Recruiter, at, events);
                }
                let id = self
                    .session
                    .append(at, &line, canonical.clone(), output);
                events.push(ShellEvent::Appended(id));
            },
        }

        if let Some(cmd) = &canonical {
            self.session.mark_visited(cmd);
            if cmd == "project"
                && let Some(key) = parsed.as_ref().and_then(|p| p.args.first())
                && self.content.contains(key)
            {
                self.session.mark_visited(key);
            }
        }
        let key = canonical
            .as_deref()
            .or(parsed.as_ref().map(|p| p.name.as_str()))
            .unwrap_or_default();
        self.session.set_recommendation(render::recommend(key));

        self.timers.cancel_kind(TimerKind::IdleHint);
        self.timers
            .schedule(TimerKind::IdleHint, at, self.config.idle_hint_ms);
    }

    fn raise_notice(&mut self, notice: Notice, at: u64, events: &mut Vec<ShellEvent>) {
        if self.session.raise_notice(notice) {
            self.timers.cancel_kind(TimerKind::Notice);
            self.timers.schedule(TimerKind::Notice, at, self.config.notice_ms);
            events.push(ShellEvent::NoticeRaised(notice));
        }
    }

    /// Open the image preview for a topic. Topics without images are refused.
    pub fn open_preview(&mut self, key: &str) -> bool {
        let Some(entry) = self.content.get(key) else {
            return false;
        };
        if entry.images.is_empty() {
            return false;
        }
        self.session.set_preview(Some(PreviewCursor {
            key: entry.key().to_string(),
            index: 0,
            count: entry.images.len(),
        }));
        true
    }

    /// Move the preview cursor by `delta`, wrapping.
    pub fn step_preview(&mut self, delta: i64) {
        if let Some(cursor) = self.session.preview_mut() {
            cursor.step(delta);
        }
    }

    pub fn close_preview(&mut self) {
        self.session.set_preview(None);
    }

    /// Image under the preview cursor.
    pub fn preview_image(&self) -> Option<&str> {
        let cursor = self.session.preview()?;
        self.content
            .get(&cursor.key)?
            .images
            .get(cursor.index)
            .map(String::as_str)
    }

    /// Set the theme directly (outside the command path).
    pub fn set_theme(&mut self, theme: Theme) -> bool {
        self.theme.set(theme)
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    /// Cancel every timer and drop in-flight work.
    pub fn teardown(&mut self) {
        self.timers.clear();
        self.pending = None;
        self.pending_route = None;
        self.state = ShellState::TornDown;
        log::debug!("Shell torn down");
    }

    /// Render the current history.
    pub fn render(&self, toggles: &ToggleState) -> Vec<RenderedEntry> {
        Renderer::new(&self.content).render(self.session.history(), toggles)
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn is_processing(&self) -> bool {
        self.state == (ShellState::Ready { processing: true })
    }

    /// Whether work is scheduled that the caller should wait for: boot, an
    /// in-flight command, or a navigation grace delay.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, ShellState::Booting | ShellState::Ready { processing: true })
            || self.timers.is_pending(TimerKind::Navigate)
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn content(&self) -> &ContentRegistry {
        &self.content
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    /// Current shell time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Deadline of the next pending timer, for callers that sleep between
    /// polls.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    pub fn store(&self) -> &S {
        self.theme.store()
    }
}
