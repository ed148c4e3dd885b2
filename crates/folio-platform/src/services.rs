//! Platform service traits and desktop implementation.

use folio_types::error::{FolioError, Result};

// ---------------------------------------------------------------------------
// Time service
// ---------------------------------------------------------------------------

/// Abstraction over the monotonic clock.
pub trait TimeService {
    /// Milliseconds since the platform (or process) started.
    fn uptime_ms(&self) -> u64;
}

// ---------------------------------------------------------------------------
// Launcher
// ---------------------------------------------------------------------------

/// Opens outbound links (profile, mail-to, résumé, repositories) in a new
/// browsing context.
pub trait Launcher {
    /// Hand `url` to the system opener.
    fn open_url(&self, url: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Default platform implementation using `std` facilities.
pub struct DesktopPlatform {
    start_time: std::time::Instant,
}

impl DesktopPlatform {
    pub fn new() -> Self {
        Self {
            start_time: std::time::Instant::now(),
        }
    }
}

impl Default for DesktopPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeService for DesktopPlatform {
    fn uptime_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }
}

/// Command used to open a URL on the current OS.
fn opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

impl Launcher for DesktopPlatform {
    fn open_url(&self, url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(FolioError::Command("empty URL".to_string()));
        }
        let (program, prefix) = opener();
        log::debug!("Opening {url} with {program}");
        run_opener(program, prefix, url)
    }
}

/// Run the opener to completion so the child is reaped. The system openers
/// hand off to the browser or mail client and exit right away.
fn run_opener(program: &str, prefix: &[&str], url: &str) -> Result<()> {
    let status = std::process::Command::new(program)
        .args(prefix)
        .arg(url)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()?;
    if status.success() {
        Ok(())
    } else {
        Err(FolioError::Command(format!("{program} exited with {status}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_is_monotonic() {
        let p = DesktopPlatform::new();
        let a = p.uptime_ms();
        let b = p.uptime_ms();
        assert!(b >= a);
    }

    #[cfg(unix)]
    #[test]
    fn opener_exit_status_is_checked() {
        assert!(run_opener("true", &[], "https://example.com").is_ok());
        assert!(matches!(
            run_opener("false", &[], "https://example.com"),
            Err(FolioError::Command(_))
        ));
        assert!(run_opener("termfolio-no-such-opener", &[], "x").is_err());
    }

    #[test]
    fn empty_url_rejected() {
        let p = DesktopPlatform::default();
        assert!(p.open_url("").is_err());
    }
}
