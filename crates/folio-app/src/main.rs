//! termfolio entry point.
//!
//! Usage: `termfolio [path]`, where `path` is one of `/`, `/terminal`,
//! `/terminal?mode=recruiter`, `/recruiter` or `/non-tech`. The terminal
//! route runs the interactive shell; the others print a static page with
//! key-bound actions. Moving between views switches routes until the user
//! quits.

mod app_state;
mod helper;
mod page;
mod paint;
mod terminal;

use std::path::PathBuf;

use anyhow::{Context, Result};

use app_state::AppState;
use folio_core::config::FolioConfig;
use folio_core::route::Route;

/// Environment variable naming an alternate config file.
const CONFIG_ENV: &str = "TERMFOLIO_CONFIG";
const CONFIG_FILE: &str = "termfolio.toml";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config_path = std::env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE));
    let config = FolioConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let start = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let mut route = Route::parse(&start);
    log::info!("Starting termfolio at {}", route.path());

    let mut state = AppState::new(config);
    loop {
        let next = match &route {
            Route::Terminal { initial } => terminal::run(&mut state, initial.as_deref())?,
            other => page::run(&mut state, other)?,
        };
        match next {
            Some(next) => {
                log::debug!("Route {} -> {}", route.path(), next.path());
                route = next;
            },
            None => break,
        }
    }
    Ok(())
}
