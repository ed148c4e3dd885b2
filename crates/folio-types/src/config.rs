//! Runtime configuration loaded from `termfolio.toml`.
//!
//! Every field has a default, so an empty or missing file yields the stock
//! timings. Durations are milliseconds.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FolioError, Result};
use crate::theme::Theme;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FolioConfig {
    /// Delay between mount and the shell becoming ready.
    #[serde(default = "default_boot_delay")]
    pub boot_delay_ms: u64,
    /// Simulated latency between submitting a command and its result.
    #[serde(default = "default_processing_delay")]
    pub processing_delay_ms: u64,
    /// Quiet period before the idle hint appears.
    #[serde(default = "default_idle_hint")]
    pub idle_hint_ms: u64,
    /// How long a one-time notice stays visible.
    #[serde(default = "default_notice")]
    pub notice_ms: u64,
    /// Grace delay before a navigate signal leaves the terminal.
    #[serde(default = "default_navigate_grace")]
    pub navigate_grace_ms: u64,
    /// Period of the session clock.
    #[serde(default = "default_clock_interval")]
    pub clock_interval_ms: u64,
    /// Command auto-submitted once boot completes.
    #[serde(default = "default_command")]
    pub default_command: String,
    /// File backing the persisted client state.
    #[serde(default = "default_state_path")]
    pub state_path: PathBuf,
    /// Theme used when nothing valid is stored.
    #[serde(default)]
    pub default_theme: Theme,
}

fn default_boot_delay() -> u64 {
    1500
}
fn default_processing_delay() -> u64 {
    150
}
fn default_idle_hint() -> u64 {
    12_000
}
fn default_notice() -> u64 {
    4000
}
fn default_navigate_grace() -> u64 {
    400
}
fn default_clock_interval() -> u64 {
    1000
}
fn default_command() -> String {
    "status".to_string()
}
fn default_state_path() -> PathBuf {
    PathBuf::from("termfolio-state.json")
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            boot_delay_ms: default_boot_delay(),
            processing_delay_ms: default_processing_delay(),
            idle_hint_ms: default_idle_hint(),
            notice_ms: default_notice(),
            navigate_grace_ms: default_navigate_grace(),
            clock_interval_ms: default_clock_interval(),
            default_command: default_command(),
            state_path: default_state_path(),
            default_theme: Theme::default(),
        }
    }
}

impl FolioConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let config: Self = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let src = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&src)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.clock_interval_ms == 0 {
            return Err(FolioError::Config(
                "clock_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.default_command.trim().is_empty() {
            return Err(FolioError::Config(
                "default_command must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = FolioConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, FolioConfig::default());
        assert_eq!(cfg.boot_delay_ms, 1500);
        assert_eq!(cfg.processing_delay_ms, 150);
        assert_eq!(cfg.default_command, "status");
    }

    #[test]
    fn partial_override() {
        let cfg = FolioConfig::from_toml_str(
            "processing_delay_ms = 0\ndefault_theme = \"dark\"\n",
        )
        .unwrap();
        assert_eq!(cfg.processing_delay_ms, 0);
        assert_eq!(cfg.default_theme, Theme::Dark);
        assert_eq!(cfg.boot_delay_ms, 1500);
    }

    #[test]
    fn zero_clock_interval_rejected() {
        let err = FolioConfig::from_toml_str("clock_interval_ms = 0").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn blank_default_command_rejected() {
        let err = FolioConfig::from_toml_str("default_command = \"  \"").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn invalid_theme_is_parse_error() {
        let err = FolioConfig::from_toml_str("default_theme = \"sepia\"").unwrap_err();
        assert!(matches!(err, FolioError::TomlParse(_)));
    }

    #[test]
    fn missing_file_uses_defaults() {
        let cfg = FolioConfig::load(Path::new("/definitely/not/here.toml")).unwrap();
        assert_eq!(cfg, FolioConfig::default());
    }
}
