//! Theme preference with load-at-init, save-on-change persistence.

use folio_platform::KeyValueStore;
use folio_types::theme::Theme;

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "fsi-theme";

/// The active theme, mirrored to a key/value store.
#[derive(Debug)]
pub struct ThemeStore<S: KeyValueStore> {
    store: S,
    current: Theme,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Read the stored preference once. Absent or unrecognised values fall
    /// back to `default`.
    pub fn load(store: S, default: Theme) -> Self {
        let current = match store.get(THEME_KEY) {
            Some(value) => Theme::parse(&value).unwrap_or_else(|| {
                log::warn!("Ignoring stored theme '{value}', using {default}");
                default
            }),
            None => default,
        };
        log::debug!("Theme loaded: {current}");
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Switch theme, persisting only when it changes. Returns whether it
    /// changed. Write failures are logged and otherwise ignored.
    pub fn set(&mut self, theme: Theme) -> bool {
        if theme == self.current {
            return false;
        }
        self.current = theme;
        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            log::warn!("Failed to persist theme: {e}");
        }
        true
    }

    /// Flip between dark and light. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled());
        self.current
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
