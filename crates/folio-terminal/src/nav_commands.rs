//! Session commands: theme switching, mode switching, exit and clear.
//!
//! These produce control payloads that the shell intercepts instead of
//! recording in the transcript.

use folio_types::route::Route;
use folio_types::theme::Theme;

use crate::{Command, CommandOutput, CommandRegistry, Environment, Flags};

/// Register navigation and preference commands.
pub fn register_nav_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(ThemeCmd));
    reg.register(Box::new(ModeCmd));
    reg.register(Box::new(ExitCmd));
    reg.register(Box::new(ClearCmd));
}

/// Toggle or set the colour theme.
struct ThemeCmd;

impl Command for ThemeCmd {
    fn name(&self) -> &str {
        "theme"
    }

    fn description(&self) -> &str {
        "Toggle or set the colour theme"
    }

    fn usage(&self) -> &str {
        "theme <dark|light>"
    }

    fn category(&self) -> &str {
        "session"
    }

    fn execute(&self, args: &[&str], _flags: &Flags, _env: &Environment<'_>) -> CommandOutput {
        match args.first() {
            None => CommandOutput::Theme(None),
            Some(value) => match Theme::parse(value) {
                Some(theme) => CommandOutput::Theme(Some(theme)),
                None => CommandOutput::Text(format!(
                    "Unknown theme: {value}\nUsage: {}",
                    self.usage()
                )),
            },
        }
    }
}

/// Switch to another presentation of the portfolio.
struct ModeCmd;

impl ModeCmd {
    fn route_for(mode: &str) -> Option<Route> {
        match mode.to_ascii_lowercase().as_str() {
            "dev" | "developer" | "terminal" => Some(Route::terminal()),
            "recruiter" => Some(Route::Recruiter),
            "simple" | "non-tech" | "plain" => Some(Route::NonTech),
            _ => None,
        }
    }
}

impl Command for ModeCmd {
    fn name(&self) -> &str {
        "mode"
    }

    fn description(&self) -> &str {
        "Switch view: developer, recruiter or simple"
    }

    fn usage(&self) -> &str {
        "mode <developer|recruiter|simple>"
    }

    fn category(&self) -> &str {
        "session"
    }

    fn execute(&self, args: &[&str], _flags: &Flags, _env: &Environment<'_>) -> CommandOutput {
        match args.first().and_then(|m| Self::route_for(m)) {
            Some(route) => CommandOutput::Navigate(route),
            None => CommandOutput::Text(format!("Usage: {}", self.usage())),
        }
    }
}

struct ExitCmd;

impl Command for ExitCmd {
    fn name(&self) -> &str {
        "exit"
    }

    fn description(&self) -> &str {
        "Leave the terminal for the landing page"
    }

    fn usage(&self) -> &str {
        "exit"
    }

    fn category(&self) -> &str {
        "session"
    }

    fn execute(&self, _args: &[&str], _flags: &Flags, _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::Navigate(Route::Landing)
    }
}

struct ClearCmd;

impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }

    fn description(&self) -> &str {
        "Clear terminal output"
    }

    fn usage(&self) -> &str {
        "clear"
    }

    fn category(&self) -> &str {
        "session"
    }

    fn execute(&self, _args: &[&str], _flags: &Flags, _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::Clear
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::ContentRegistry;

    fn exec(cmd: &dyn Command, args: &[&str]) -> CommandOutput {
        let content = ContentRegistry::new();
        let env = Environment { content: &content };
        cmd.execute(args, &Flags::new(), &env)
    }

    #[test]
    fn theme_without_args_toggles() {
        assert_eq!(exec(&ThemeCmd, &[]), CommandOutput::Theme(None));
    }

    #[test]
    fn theme_with_value_sets() {
        assert_eq!(
            exec(&ThemeCmd, &["DARK"]),
            CommandOutput::Theme(Some(Theme::Dark))
        );
        assert_eq!(
            exec(&ThemeCmd, &["light"]),
            CommandOutput::Theme(Some(Theme::Light))
        );
    }

    #[test]
    fn theme_unknown_value_is_usage() {
        match exec(&ThemeCmd, &["sepia"]) {
            CommandOutput::Text(s) => assert!(s.starts_with("Unknown theme: sepia")),
            other => panic!("expected Text, got {other:?}"),
        }
    }

    #[test]
    fn mode_routes() {
        assert_eq!(
            exec(&ModeCmd, &["recruiter"]),
            CommandOutput::Navigate(Route::Recruiter)
        );
        assert_eq!(
            exec(&ModeCmd, &["Simple"]),
            CommandOutput::Navigate(Route::NonTech)
        );
        assert_eq!(
            exec(&ModeCmd, &["dev"]),
            CommandOutput::Navigate(Route::terminal())
        );
    }

    #[test]
    fn mode_without_target_is_usage() {
        assert!(matches!(exec(&ModeCmd, &[]), CommandOutput::Text(_)));
        assert!(matches!(exec(&ModeCmd, &["space"]), CommandOutput::Text(_)));
    }

    #[test]
    fn exit_and_clear_are_control() {
        assert!(exec(&ExitCmd, &[]).is_control());
        assert_eq!(exec(&ClearCmd, &["ignored"]), CommandOutput::Clear);
    }
}
