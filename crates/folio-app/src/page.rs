//! Static page view: print the page, then read single-key actions.

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use folio_core::pages::{self, Action};
use folio_core::route::Route;

use crate::app_state::AppState;
use crate::paint;

/// Show the page for `route` until an action leaves it (`Some`) or the user
/// quits (`None`).
pub fn run(state: &mut AppState, route: &Route) -> Result<Option<Route>> {
    let mut theme = state.theme_store();
    let mut editor = DefaultEditor::new()?;
    let mut dirty = true;

    loop {
        let Some(page) = pages::for_route(route, theme.current()) else {
            // The terminal route has no page; hand it back to the caller.
            return Ok(Some(route.clone()));
        };
        if dirty {
            println!("\n{}", paint::page(&page, theme.current()));
            dirty = false;
        }

        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let Some(key) = line.trim().chars().next() else {
            continue;
        };
        if key.eq_ignore_ascii_case(&'q') {
            return Ok(None);
        }
        match page.action(key) {
            Some(Action::Navigate(next)) => return Ok(Some(next.clone())),
            Some(Action::ToggleTheme) => {
                let now = theme.toggle();
                log::debug!("Theme toggled to {}", now.label());
                dirty = true;
            },
            Some(Action::OpenUrl(url)) => state.open_url(url),
            None => println!("{}", paint::system(&format!("No action bound to '{key}'."))),
        }
    }
}
