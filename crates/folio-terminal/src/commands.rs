//! Built-in portfolio commands.

use folio_content::{ContentRegistry, TopicBody};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment, Flags, RichView};

/// Register all built-in commands and aliases into a registry.
///
/// `help` is handled by the registry itself. Navigation and preference
/// commands come from `register_nav_commands`.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(StatusCmd));
    reg.register(Box::new(OverviewCmd));
    reg.register(Box::new(ProjectsCmd));
    reg.register(Box::new(ProjectCmd));
    reg.register(Box::new(ArchCmd));
    reg.register(Box::new(RecruiterCmd));
    reg.register(Box::new(TopicCmd {
        name: "skills",
        description: "Capability map by domain",
    }));
    reg.register(Box::new(TopicCmd {
        name: "about",
        description: "Concise technical profile",
    }));
    reg.register(Box::new(TopicCmd {
        name: "contact",
        description: "Contact channels",
    }));
    crate::register_nav_commands(reg);

    reg.register_alias("p", "projects");
    reg.register_alias("ls", "projects");
    reg.register_alias("?", "help");
    reg.register_alias("whoami", "about");
    reg.register_alias("architecture", "arch");
    reg.register_alias("cls", "clear");
    reg.register_alias("home", "exit");
    reg.register_alias("quit", "exit");
}

// ---------------------------------------------------------------------------
// status
// ---------------------------------------------------------------------------

struct StatusCmd;
impl Command for StatusCmd {
    fn name(&self) -> &str {
        "status"
    }
    fn description(&self) -> &str {
        "System overview and core metrics"
    }
    fn usage(&self) -> &str {
        "status"
    }
    fn execute(&self, _args: &[&str], _flags: &Flags, _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::View(RichView::Status)
    }
}

// ---------------------------------------------------------------------------
// overview
// ---------------------------------------------------------------------------

struct OverviewCmd;
impl Command for OverviewCmd {
    fn name(&self) -> &str {
        "overview"
    }
    fn description(&self) -> &str {
        "Where to start"
    }
    fn usage(&self) -> &str {
        "overview"
    }
    fn execute(&self, _args: &[&str], _flags: &Flags, env: &Environment<'_>) -> CommandOutput {
        topic_text(env.content, "overview")
    }
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

struct ProjectsCmd;
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "List major systems shipped"
    }
    fn usage(&self) -> &str {
        "projects --deep"
    }
    fn execute(&self, _args: &[&str], flags: &Flags, _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::View(RichView::Projects {
            deep: flags.has("deep"),
        })
    }
}

// ---------------------------------------------------------------------------
// project <key>
// ---------------------------------------------------------------------------

struct ProjectCmd;

impl ProjectCmd {
    fn usage_text(content: &ContentRegistry) -> String {
        let keys: Vec<&str> = content.list("projects").iter().map(|e| e.key()).collect();
        format!(
            "Usage: project <key> --impact --infra\nKeys: {}",
            keys.join(", ")
        )
    }
}

impl Command for ProjectCmd {
    fn name(&self) -> &str {
        "project"
    }
    fn description(&self) -> &str {
        "Show one project in detail"
    }
    fn usage(&self) -> &str {
        "project <key> --impact --infra"
    }
    fn execute(&self, args: &[&str], flags: &Flags, env: &Environment<'_>) -> CommandOutput {
        let Some(&key) = args.first() else {
            return CommandOutput::Text(Self::usage_text(env.content));
        };
        let is_project = env
            .content
            .list("projects")
            .iter()
            .any(|e| e.key().eq_ignore_ascii_case(key));
        let entry = match env.content.get(key) {
            Some(entry) if is_project => entry,
            _ => {
                return CommandOutput::Text(format!(
                    "Project not found: {key}\n{}",
                    Self::usage_text(env.content)
                ));
            },
        };

        let mut out = format!("[{}]\n{}\n", entry.key(), entry.description);
        out.push_str(&"─".repeat(40));
        let (intro, sections) = match &entry.body {
            TopicBody::Sections { intro, sections } => (intro.as_str(), sections.as_slice()),
            TopicBody::Text(text) => (text.as_str(), &[][..]),
        };
        out.push('\n');
        out.push_str(intro);

        // With no section flag every section is shown.
        let filtered = flags.has("impact") || flags.has("infra");
        for section in sections {
            if filtered && !flags.has(&section.label) {
                continue;
            }
            out.push_str(&format!("\n\n--{}", section.label));
            for line in &section.lines {
                out.push('\n');
                out.push_str(line);
            }
        }

        if !entry.images.is_empty() {
            out.push_str(&format!(
                "\n\nDetails: {} preview image(s) available.",
                entry.images.len()
            ));
        } else if !filtered {
            out.push_str("\n\nDetails: add --impact or --infra to focus.");
        }
        CommandOutput::Text(out)
    }
}

// ---------------------------------------------------------------------------
// arch
// ---------------------------------------------------------------------------

struct ArchCmd;
impl Command for ArchCmd {
    fn name(&self) -> &str {
        "arch"
    }
    fn description(&self) -> &str {
        "Frontend architecture philosophy"
    }
    fn usage(&self) -> &str {
        "arch"
    }
    fn execute(&self, _args: &[&str], _flags: &Flags, _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::View(RichView::Architecture)
    }
}

// ---------------------------------------------------------------------------
// recruiter
// ---------------------------------------------------------------------------

struct RecruiterCmd;
impl Command for RecruiterCmd {
    fn name(&self) -> &str {
        "recruiter"
    }
    fn description(&self) -> &str {
        "Condensed profile for hiring"
    }
    fn usage(&self) -> &str {
        "recruiter"
    }
    fn category(&self) -> &str {
        "profile"
    }
    fn execute(&self, _args: &[&str], _flags: &Flags, _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::View(RichView::Recruiter)
    }
}

// ---------------------------------------------------------------------------
// skills / about / contact
// ---------------------------------------------------------------------------

/// A command that prints one registry topic verbatim.
struct TopicCmd {
    name: &'static str,
    description: &'static str,
}

impl Command for TopicCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        self.description
    }
    fn usage(&self) -> &str {
        self.name
    }
    fn category(&self) -> &str {
        "profile"
    }
    fn execute(&self, _args: &[&str], _flags: &Flags, env: &Environment<'_>) -> CommandOutput {
        topic_text(env.content, self.name)
    }
}

fn topic_text(content: &ContentRegistry, key: &str) -> CommandOutput {
    match content.get(key) {
        Some(entry) => CommandOutput::Text(entry.body_text()),
        None => {
            log::warn!("Topic '{key}' missing from content registry");
            CommandOutput::Text(format!("Topic not found: {key}"))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::route::Route;

    fn setup() -> (CommandRegistry, ContentRegistry) {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg);
        (reg, ContentRegistry::builtin().unwrap())
    }

    fn run(line: &str) -> Option<CommandOutput> {
        let (reg, content) = setup();
        let env = Environment { content: &content };
        reg.execute(line, &env)
    }

    fn text(line: &str) -> String {
        match run(line) {
            Some(CommandOutput::Text(s)) => s,
            other => panic!("expected text for '{line}', got {other:?}"),
        }
    }

    #[test]
    fn builtins_validate() {
        let (reg, _) = setup();
        assert!(reg.validate().is_ok());
    }

    #[test]
    fn alias_shadowing_builtin_fails_validation() {
        let (mut reg, _) = setup();
        reg.register_alias("status", "help");
        assert!(reg.validate().is_err());
        assert_eq!(reg.resolve("status"), Some("status"));
    }

    #[test]
    fn help_lists_core_commands() {
        let out = text("help");
        for name in ["help", "status", "clear", "projects", "project", "theme"] {
            assert!(out.contains(name), "help missing {name}");
        }
        assert!(out.contains("--impact"));
    }

    #[test]
    fn whitespace_yields_nothing() {
        assert_eq!(run("  "), None);
    }

    #[test]
    fn status_is_view() {
        assert_eq!(run("status"), Some(CommandOutput::View(RichView::Status)));
    }

    #[test]
    fn projects_deep_flag() {
        assert_eq!(
            run("projects"),
            Some(CommandOutput::View(RichView::Projects { deep: false }))
        );
        assert_eq!(
            run("projects --deep"),
            Some(CommandOutput::View(RichView::Projects { deep: true }))
        );
        assert_eq!(run("projects --bogus"), run("projects"));
    }

    #[test]
    fn uppercase_alias_matches_projects() {
        assert_eq!(run("P"), run("projects"));
        assert_eq!(run("ls --deep"), run("projects --deep"));
    }

    #[test]
    fn aliases_match_canonical() {
        assert_eq!(run("whoami"), run("about"));
        assert_eq!(run("architecture"), run("arch"));
        assert_eq!(run("?"), run("help"));
        assert_eq!(run("cls"), run("clear"));
        assert_eq!(run("quit"), run("exit"));
        assert_eq!(run("home"), run("exit"));
    }

    #[test]
    fn project_without_key_lists_keys() {
        let out = text("project");
        assert!(out.starts_with("Usage: project <key>"));
        assert!(out.contains("design-system, render-engine, cli-platform"));
    }

    #[test]
    fn project_unknown_key_names_it() {
        let out = text("project unknown-key");
        assert!(out.starts_with("Project not found: unknown-key"));
        assert!(!out.starts_with("Command not found"));
    }

    #[test]
    fn project_non_project_topic_is_not_found() {
        assert!(text("project skills").starts_with("Project not found: skills"));
    }

    #[test]
    fn project_detail_shows_all_sections() {
        let out = text("project Render-Engine");
        assert!(out.starts_with("[render-engine]\n"));
        assert!(out.contains("--impact\nHandles 1M+ data points at 60fps."));
        assert!(out.contains("--infra\nOptimized shader pipelines"));
        assert!(out.contains("Details: 1 preview image(s) available."));
    }

    #[test]
    fn project_impact_flag_filters() {
        let out = text("project cli-platform --impact");
        assert!(out.contains("--impact"));
        assert!(!out.contains("--infra"));
        let out = text("project --infra cli-platform");
        assert!(out.contains("--infra"));
        assert!(!out.contains("--impact"));
    }

    #[test]
    fn topic_commands_print_registry_text() {
        assert!(text("skills").starts_with("Languages:"));
        assert!(text("contact").contains("Email: dev@system.sh"));
        assert!(text("overview").starts_with("[OVERVIEW]"));
    }

    #[test]
    fn recruiter_and_arch_are_views() {
        assert_eq!(
            run("recruiter"),
            Some(CommandOutput::View(RichView::Recruiter))
        );
        assert_eq!(
            run("ARCH"),
            Some(CommandOutput::View(RichView::Architecture))
        );
    }

    #[test]
    fn exit_navigates_home() {
        assert_eq!(run("exit"), Some(CommandOutput::Navigate(Route::Landing)));
    }

    #[test]
    fn missing_topic_is_text() {
        let reg = {
            let mut reg = CommandRegistry::new();
            register_builtins(&mut reg);
            reg
        };
        let empty = ContentRegistry::new();
        let env = Environment { content: &empty };
        assert_eq!(
            reg.execute("skills", &env),
            Some(CommandOutput::Text("Topic not found: skills".to_string()))
        );
    }
}
