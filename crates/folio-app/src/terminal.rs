//! Interactive terminal view.
//!
//! rustyline reads lines; the shell's timers are driven from real uptime
//! between reads. Lines starting with `:` are local view commands that never
//! reach the command processor.

use std::time::Duration;

use anyhow::{Context, Result};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use folio_core::platform::JsonFileStore;
use folio_core::render::ToggleState;
use folio_core::route::Route;
use folio_core::shell::{RejectReason, Shell, ShellEvent, Submission};

use crate::app_state::AppState;
use crate::helper::FolioHelper;
use crate::paint::{self, PROMPT, Painter};

const LOCAL_USAGE: &str =
    ":N | :expand <project> | :evidence | :preview <topic> | :next | :prev | :close";

/// Run the terminal until the user navigates away (`Some`) or quits (`None`).
pub fn run(state: &mut AppState, initial: Option<&str>) -> Result<Option<Route>> {
    let shell = Shell::new(state.config.clone(), state.open_store())
        .context("starting terminal session")?;
    let mut view = TerminalView::new(shell);

    println!("{}", paint::banner());
    view.shell.mount(state.now_ms(), initial);
    if let Some(route) = view.drive(state, true) {
        return Ok(Some(view.leave(route)));
    }

    let mut editor: Editor<FolioHelper, DefaultHistory> = Editor::new()?;
    editor.set_helper(Some(FolioHelper::new(
        view.shell.registry().completions(""),
    )));

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                // Catch up on time spent at the prompt before acting.
                if let Some(route) = view.drive(state, false) {
                    return Ok(Some(view.leave(route)));
                }
                match line.trim().strip_prefix(':') {
                    Some(local) => view.local(local),
                    None => {
                        let outcome = view.shell.submit(&line);
                        view.report(outcome);
                    },
                }
                if let Some(route) = view.drive(state, true) {
                    return Ok(Some(view.leave(route)));
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("{}", paint::system("(type 'exit' or press Ctrl-D to leave)"));
            },
            Err(ReadlineError::Eof) => {
                view.shell.teardown();
                return Ok(None);
            },
            Err(e) => {
                view.shell.teardown();
                return Err(e.into());
            },
        }
    }
}

struct TerminalView {
    shell: Shell<JsonFileStore>,
    painter: Painter,
    toggles: ToggleState,
    /// Id of the entry whose chips are currently numbered.
    last: Option<u64>,
}

impl TerminalView {
    fn new(shell: Shell<JsonFileStore>) -> Self {
        let painter = Painter::new(shell.theme());
        Self {
            shell,
            painter,
            toggles: ToggleState::new(),
            last: None,
        }
    }

    /// Advance the shell to real time. With `wait` set, keep sleeping until
    /// the shell is idle. Returns the route to leave for, if any.
    fn drive(&mut self, state: &AppState, wait: bool) -> Option<Route> {
        loop {
            for event in self.shell.advance_to(state.now_ms()) {
                if let Some(route) = self.handle(event, wait) {
                    return Some(route);
                }
            }
            if !wait || !self.shell.is_busy() {
                return None;
            }
            let deadline = self.shell.next_deadline()?;
            let delay = deadline.saturating_sub(state.now_ms());
            std::thread::sleep(Duration::from_millis(delay));
        }
    }

    /// Paint one event. Idle hints that fired while the prompt was blocked
    /// are stale by the time we see them and are dropped.
    fn handle(&mut self, event: ShellEvent, live: bool) -> Option<Route> {
        match event {
            ShellEvent::Ready => log::debug!("Terminal ready"),
            ShellEvent::Appended(id) => {
                self.last = Some(id);
                self.repaint();
            },
            ShellEvent::Cleared => {
                self.last = None;
                self.toggles.reset();
                print!("\x1b[2J\x1b[H");
            },
            ShellEvent::Navigate(route) => return Some(route),
            ShellEvent::ThemeApplied(theme) => {
                self.painter.set_theme(theme);
                println!("{}", paint::system(&format!("Theme: {}", theme.label())));
            },
            ShellEvent::NoticeRaised(notice) => println!("{}", paint::notice(notice)),
            ShellEvent::NoticeCleared => {},
            ShellEvent::IdleHint => {
                if live && let Some(rec) = self.shell.session().recommendation() {
                    println!("{}", paint::hint(rec));
                }
            },
            ShellEvent::Tick(secs) => log::trace!("Session clock {secs}s"),
        }
        None
    }

    fn repaint(&mut self) {
        let Some(id) = self.last else {
            println!("{}", paint::system("Nothing to update."));
            return;
        };
        let entries = self.shell.render(&self.toggles);
        if let Some(entry) = entries.iter().find(|e| e.id == id) {
            println!("{}", self.painter.entry(entry));
        }
    }

    fn report(&self, outcome: Submission) {
        let message = match outcome {
            Submission::Accepted | Submission::Ignored => return,
            Submission::Rejected(RejectReason::Booting) => "Still booting.",
            Submission::Rejected(RejectReason::Busy) => "Busy; wait for the current command.",
            Submission::Rejected(RejectReason::TornDown) => "Session closed.",
        };
        println!("{}", paint::system(message));
    }

    /// `:`-prefixed view commands.
    fn local(&mut self, line: &str) {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default();
        let arg = parts.next();

        if let Ok(n) = verb.parse::<usize>() {
            match self.painter.chip(n).cloned() {
                Some(chip) => {
                    let outcome = self.shell.activate_chip(&chip);
                    self.report(outcome);
                },
                None => println!("{}", paint::system(&format!("No chip {n}."))),
            }
            return;
        }

        match (verb, arg) {
            ("expand", Some(id)) => {
                self.toggles.toggle_project(&id.to_ascii_lowercase());
                self.repaint();
            },
            ("evidence", None) => {
                self.toggles.toggle_evidence();
                self.repaint();
            },
            ("preview", Some(key)) => {
                if self.shell.open_preview(key) {
                    self.show_preview();
                } else {
                    println!("{}", paint::system(&format!("No previews for {key}.")));
                }
            },
            ("next", None) => {
                self.shell.step_preview(1);
                self.show_preview();
            },
            ("prev", None) => {
                self.shell.step_preview(-1);
                self.show_preview();
            },
            ("close", None) => self.shell.close_preview(),
            _ => println!("{}", paint::system(&format!("Usage: {LOCAL_USAGE}"))),
        }
    }

    fn show_preview(&self) {
        let (Some(image), Some(cursor)) = (self.shell.preview_image(), self.shell.session().preview())
        else {
            println!("{}", paint::system("No preview open."));
            return;
        };
        println!(
            "{}",
            paint::system(&format!(
                "[{}/{}] {image}",
                cursor.index + 1,
                cursor.count
            ))
        );
    }

    /// Tear the session down before handing the route back.
    fn leave(&mut self, route: Route) -> Route {
        self.shell.teardown();
        route
    }
}
