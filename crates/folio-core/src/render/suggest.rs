//! Fixed lookup tables: chip label to command, and next-command suggestions.

use folio_terminal::{CommandRegistry, parse_line};
use folio_types::error::{FolioError, Result};

use super::Chip;

/// Chip labels that map to something other than their own lower-cased text.
/// Labels are matched case-insensitively.
pub(crate) const CHIP_COMMANDS: &[(&str, &str)] = &[
    ("status", "status"),
    ("overview", "overview"),
    ("projects", "projects"),
    ("deep dive", "projects --deep"),
    ("arch", "arch"),
    ("architecture", "arch"),
    ("recruiter", "recruiter"),
    ("skills", "skills"),
    ("about", "about"),
    ("contact", "contact"),
    ("help", "help"),
    ("design-system", "project design-system"),
    ("render-engine", "project render-engine"),
    ("cli-platform", "project cli-platform"),
];

/// Suggestions keyed by canonical command name.
const SUGGESTIONS: &[(&str, &[&str])] = &[
    ("help", &["overview", "status"]),
    ("overview", &["status", "projects", "help"]),
    ("status", &["projects", "arch", "recruiter"]),
    (
        "projects",
        &["project design-system", "project render-engine", "projects --deep"],
    ),
    ("project", &["projects", "arch"]),
    ("recruiter", &["projects", "skills"]),
    ("arch", &["projects", "skills"]),
    ("skills", &["projects", "about"]),
    ("about", &["contact", "projects"]),
    ("contact", &["recruiter", "overview"]),
];

/// Commands whose suggestions also apply to longer tokens they prefix.
const PREFIX_KEYS: &[&str] = &["recruiter", "projects", "arch"];

const DEFAULT_SUGGESTIONS: &[&str] = &["overview", "help"];

/// Command a chip label re-submits.
pub fn chip_command(label: &str) -> String {
    let trimmed = label.trim();
    CHIP_COMMANDS
        .iter()
        .find(|(l, _)| l.eq_ignore_ascii_case(trimmed))
        .map(|(_, cmd)| (*cmd).to_string())
        .unwrap_or_else(|| trimmed.to_ascii_lowercase())
}

/// Suggested follow-up commands for a primary token.
pub fn suggestions_for(token: &str) -> &'static [&'static str] {
    let token = token.to_ascii_lowercase();
    if let Some((_, cmds)) = SUGGESTIONS.iter().find(|(key, _)| *key == token) {
        return *cmds;
    }
    PREFIX_KEYS
        .iter()
        .find(|key| token.starts_with(*key))
        .and_then(|key| SUGGESTIONS.iter().find(|(k, _)| k == key))
        .map(|(_, cmds)| *cmds)
        .unwrap_or(DEFAULT_SUGGESTIONS)
}

/// Suggestion chips for a primary token.
pub fn suggestion_chips(token: &str) -> Vec<Chip> {
    suggestions_for(token)
        .iter()
        .map(|cmd| Chip {
            label: (*cmd).to_string(),
            command: (*cmd).to_string(),
        })
        .collect()
}

/// The single recommended next command after `token`.
pub fn recommend(token: &str) -> &'static str {
    suggestions_for(token)
        .first()
        .copied()
        .unwrap_or("overview")
}

/// Check that every table command resolves in `registry`. Run at startup.
pub fn validate_tables(registry: &CommandRegistry) -> Result<()> {
    let commands = CHIP_COMMANDS
        .iter()
        .map(|(_, cmd)| *cmd)
        .chain(SUGGESTIONS.iter().flat_map(|(_, cmds)| cmds.iter().copied()))
        .chain(DEFAULT_SUGGESTIONS.iter().copied());
    for cmd in commands {
        let resolves = parse_line(cmd).is_some_and(|p| registry.resolve(&p.name).is_some());
        if !resolves {
            return Err(FolioError::Command(format!(
                "table entry '{cmd}' does not resolve to a command"
            )));
        }
    }
    for (key, cmds) in SUGGESTIONS {
        if registry.resolve(key).is_none() {
            return Err(FolioError::Command(format!(
                "suggestion key '{key}' is not a command"
            )));
        }
        if !(2..=3).contains(&cmds.len()) {
            return Err(FolioError::Command(format!(
                "suggestion list for '{key}' must hold 2 or 3 commands"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_terminal::register_builtins;

    #[test]
    fn tables_resolve_against_builtins() {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg);
        assert!(validate_tables(&reg).is_ok());
    }

    #[test]
    fn tables_fail_on_empty_registry() {
        let reg = CommandRegistry::new();
        assert!(matches!(
            validate_tables(&reg),
            Err(FolioError::Command(_))
        ));
    }

    #[test]
    fn chip_lookup() {
        assert_eq!(chip_command("Render-Engine"), "project render-engine");
        assert_eq!(chip_command("deep dive"), "projects --deep");
        assert_eq!(chip_command("Unknown"), "unknown");
    }

    #[test]
    fn suggestions_by_token() {
        assert_eq!(suggestions_for("recruiter"), &["projects", "skills"]);
        assert_eq!(suggestions_for("PROJECTS")[0], "project design-system");
        assert_eq!(suggestions_for("nonsense"), &["overview", "help"]);
    }

    #[test]
    fn prefix_match_for_view_commands() {
        assert_eq!(suggestions_for("architecture"), suggestions_for("arch"));
        assert_eq!(suggestions_for("projectsx"), suggestions_for("projects"));
    }

    #[test]
    fn recommendation_is_first_suggestion() {
        assert_eq!(recommend("status"), "projects");
        assert_eq!(recommend("zzz"), "overview");
    }
}
