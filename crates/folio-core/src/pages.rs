//! Static pages outside the terminal: landing chooser, recruiter profile,
//! plain-language summary and the not-found fallback.

use folio_content::profile::{EXPERIENCE, PROFILE, PROJECTS, RECENT_ACTIVITY, SKILL_GROUPS};
use folio_types::route::Route;
use folio_types::theme::Theme;

/// What a page action does when chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(Route),
    ToggleTheme,
    /// Open an outbound link (web page, document or `mailto:`).
    OpenUrl(String),
}

/// A selectable action bound to a single key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAction {
    pub key: char,
    pub label: String,
    pub action: Action,
}

impl PageAction {
    fn new(key: char, label: impl Into<String>, action: Action) -> Self {
        Self {
            key,
            label: label.into(),
            action,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSection {
    pub heading: String,
    pub lines: Vec<String>,
}

impl PageSection {
    fn new(heading: &str, lines: Vec<String>) -> Self {
        Self {
            heading: heading.to_string(),
            lines,
        }
    }
}

/// A fully described page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Small uppercase label above the title.
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<PageSection>,
    pub actions: Vec<PageAction>,
}

impl Page {
    /// Find the action bound to `key` (case-insensitive).
    pub fn action(&self, key: char) -> Option<&Action> {
        let key = key.to_ascii_lowercase();
        self.actions
            .iter()
            .find(|a| a.key.to_ascii_lowercase() == key)
            .map(|a| &a.action)
    }
}

/// Mode switcher shared by the profile pages.
fn mode_actions(current: &Route) -> Vec<PageAction> {
    [
        ('d', "Developer", Route::terminal()),
        ('r', "Recruiter", Route::Recruiter),
        ('s', "Simple", Route::NonTech),
    ]
    .into_iter()
    .filter(|(_, _, route)| route != current)
    .map(|(key, label, route)| PageAction::new(key, label, Action::Navigate(route)))
    .collect()
}

fn theme_action(theme: Theme) -> PageAction {
    PageAction::new('t', format!("Theme: {}", theme.label()), Action::ToggleTheme)
}

/// The chooser shown at `/`.
pub fn landing() -> Page {
    Page {
        eyebrow: "Portfolio".to_string(),
        title: PROFILE.name.to_string(),
        subtitle: PROFILE.headline.to_string(),
        sections: vec![
            PageSection::new(
                "What this is",
                vec![
                    "This is my developer portfolio. It is built as an interactive system \
                     rather than a static website."
                        .to_string(),
                ],
            ),
            PageSection::new(
                "How it works",
                vec![
                    "01  Explore projects, architecture, and impact through a terminal interface."
                        .to_string(),
                    "02  Commands reveal depth (projects, arch, status).".to_string(),
                    "03  Designed for engineers and technical reviewers.".to_string(),
                ],
            ),
            PageSection::new(
                "Intent",
                vec![
                    "\"The terminal reflects how I think about frontend systems: structure, \
                     constraints, and trade-offs.\""
                        .to_string(),
                ],
            ),
        ],
        actions: vec![
            PageAction::new('e', "Enter Terminal Mode", Action::Navigate(Route::terminal())),
            PageAction::new('r', "Recruiter profile", Action::Navigate(Route::Recruiter)),
            PageAction::new('s', "Plain-language view", Action::Navigate(Route::NonTech)),
        ],
    }
}

/// Outbound links shared by the profile pages.
fn link_actions() -> Vec<PageAction> {
    let mut actions = vec![PageAction::new(
        'l',
        "LinkedIn",
        Action::OpenUrl(PROFILE.linkedin.to_string()),
    )];
    if let Some(resume) = PROFILE.resume_url {
        actions.push(PageAction::new(
            'c',
            "Download CV",
            Action::OpenUrl(resume.to_string()),
        ));
    }
    actions.push(PageAction::new('m', "Contact", Action::OpenUrl(PROFILE.mailto())));
    actions
}

/// The recruiter profile at `/recruiter`.
pub fn recruiter(theme: Theme) -> Page {
    let mut identity = vec![PROFILE.recruiter_title.to_string()];
    if let Some(loc) = PROFILE.location {
        identity.push(format!("Location: {loc}"));
    }
    identity.push(format!("Email: {}", PROFILE.email));

    let experience = EXPERIENCE
        .iter()
        .flat_map(|item| {
            std::iter::once(format!("{} · {} ({})", item.role, item.company, item.duration))
                .chain(item.bullets.iter().map(|b| format!("  - {b}")))
        })
        .collect();

    let projects = PROJECTS
        .iter()
        .flat_map(|p| {
            let mut lines = vec![format!("{}: {}", p.name, p.short_description)];
            if let Some(url) = p.github_url {
                lines.push(format!("  code: {url}"));
            }
            if let Some(url) = p.live_url {
                lines.push(format!("  live: {url}"));
            }
            lines
        })
        .collect();

    let mut actions = mode_actions(&Route::Recruiter);
    actions.push(theme_action(theme));
    actions.extend(link_actions());

    Page {
        eyebrow: "Recruiter profile".to_string(),
        title: PROFILE.name.to_string(),
        subtitle: PROFILE.headline.to_string(),
        sections: vec![
            PageSection::new("Overview", identity),
            PageSection::new(
                "About",
                PROFILE.about.iter().map(|p| p.to_string()).collect(),
            ),
            PageSection::new(
                "Skills",
                SKILL_GROUPS
                    .iter()
                    .map(|g| format!("{}: {}", g.label, g.items.join(", ")))
                    .collect(),
            ),
            PageSection::new("Experience", experience),
            PageSection::new("Selected projects", projects),
            PageSection::new(
                "Recent activity (selected)",
                RECENT_ACTIVITY.iter().map(|r| r.to_string()).collect(),
            ),
        ],
        actions,
    }
}

/// The plain-language summary at `/non-tech`.
pub fn non_tech(theme: Theme) -> Page {
    let mut actions = mode_actions(&Route::NonTech);
    actions.push(theme_action(theme));
    actions.extend(link_actions());

    Page {
        eyebrow: "Plain-language view".to_string(),
        title: PROFILE.name.to_string(),
        subtitle: PROFILE.non_tech_identity.to_string(),
        sections: vec![
            PageSection::new("What I do", vec![PROFILE.non_tech_subtext.to_string()]),
            PageSection::new(
                "Selected projects",
                PROJECTS
                    .iter()
                    .map(|p| format!("{}: {}", p.name, p.non_tech_description))
                    .collect(),
            ),
            PageSection::new(
                "Experience summary",
                EXPERIENCE
                    .iter()
                    .map(|e| format!("{} at {} ({})", e.role, e.company, e.duration))
                    .collect(),
            ),
        ],
        actions,
    }
}

/// Fallback for unknown paths.
pub fn not_found(path: &str) -> Page {
    Page {
        eyebrow: "404".to_string(),
        title: "Page not found".to_string(),
        subtitle: format!("Nothing lives at {path}."),
        sections: Vec::new(),
        actions: vec![PageAction::new('h', "Back to start", Action::Navigate(Route::Landing))],
    }
}

/// Page for a non-terminal route. The terminal route has no static page.
pub fn for_route(route: &Route, theme: Theme) -> Option<Page> {
    match route {
        Route::Landing => Some(landing()),
        Route::Recruiter => Some(recruiter(theme)),
        Route::NonTech => Some(non_tech(theme)),
        Route::NotFound(path) => Some(not_found(path)),
        Route::Terminal { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_enters_terminal() {
        let page = landing();
        assert_eq!(page.action('e'), Some(&Action::Navigate(Route::terminal())));
        assert_eq!(page.action('E'), page.action('e'));
        assert_eq!(page.action('x'), None);
    }

    #[test]
    fn recruiter_page_has_links_and_theme() {
        let page = recruiter(Theme::Dark);
        assert_eq!(page.action('t'), Some(&Action::ToggleTheme));
        assert!(page.actions.iter().any(|a| a.label == "Theme: Dark"));
        assert_eq!(
            page.action('m'),
            Some(&Action::OpenUrl("mailto:dev@system.sh".to_string()))
        );
        assert!(page.action('c').is_some());
    }

    #[test]
    fn mode_switcher_hides_current_mode() {
        let page = recruiter(Theme::Light);
        assert_eq!(page.action('r'), None);
        assert_eq!(page.action('s'), Some(&Action::Navigate(Route::NonTech)));
        let page = non_tech(Theme::Light);
        assert_eq!(page.action('s'), None);
        assert_eq!(page.action('d'), Some(&Action::Navigate(Route::terminal())));
    }

    #[test]
    fn non_tech_lists_every_project() {
        let page = non_tech(Theme::Light);
        let projects = page
            .sections
            .iter()
            .find(|s| s.heading == "Selected projects")
            .unwrap();
        assert_eq!(projects.lines.len(), PROJECTS.len());
    }

    #[test]
    fn not_found_names_path() {
        let page = not_found("/blog");
        assert_eq!(page.subtitle, "Nothing lives at /blog.");
        assert_eq!(page.action('h'), Some(&Action::Navigate(Route::Landing)));
    }

    #[test]
    fn route_dispatch() {
        assert!(for_route(&Route::terminal(), Theme::Light).is_none());
        assert_eq!(
            for_route(&Route::Landing, Theme::Light),
            Some(landing())
        );
    }
}
