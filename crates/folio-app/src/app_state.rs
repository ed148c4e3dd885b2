use folio_core::config::FolioConfig;
use folio_core::platform::{DesktopPlatform, JsonFileStore, Launcher, TimeService};
use folio_core::theme_store::ThemeStore;

/// State shared by every view for the lifetime of the process.
pub struct AppState {
    pub config: FolioConfig,
    pub platform: DesktopPlatform,
}

impl AppState {
    pub fn new(config: FolioConfig) -> Self {
        Self {
            config,
            platform: DesktopPlatform::new(),
        }
    }

    /// Open the persisted client state. Each view reads it once when it is
    /// entered.
    pub fn open_store(&self) -> JsonFileStore {
        JsonFileStore::open(&self.config.state_path)
    }

    /// Theme preference as stored right now.
    pub fn theme_store(&self) -> ThemeStore<JsonFileStore> {
        ThemeStore::load(self.open_store(), self.config.default_theme)
    }

    pub fn now_ms(&self) -> u64 {
        self.platform.uptime_ms()
    }

    /// Open an outbound link. Failures are logged and otherwise ignored.
    pub fn open_url(&self, url: &str) {
        if let Err(e) = self.platform.open_url(url) {
            log::warn!("Could not open {url}: {e}");
        }
    }
}
