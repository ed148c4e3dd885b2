//! Structured views built from profile data.

use folio_content::ContentRegistry;
use folio_content::profile::{
    self, ARCHITECTURE, EXPERIENCE, PROFILE, RECENT_ACTIVITY, SKILL_GROUPS, STATUS,
};

use super::{Chip, TextLine, ToggleState, format_text};

/// A label/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub value: String,
}

impl Field {
    fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// System status summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBlock {
    pub title: String,
    pub rows: Vec<Field>,
    pub metrics: Vec<Field>,
}

pub(super) fn status() -> StatusBlock {
    StatusBlock {
        title: format!("System Status: {}", STATUS.state),
        rows: vec![
            Field::new("ROLE_FOCUS", STATUS.role_focus),
            Field::new("DOMAINS", STATUS.domains),
            Field::new("UPTIME", STATUS.uptime),
        ],
        metrics: STATUS
            .metrics
            .iter()
            .map(|m| Field::new(m.label, m.value))
            .collect(),
    }
}

/// One project row in the projects view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub expanded: bool,
    /// Formatted project body; empty while collapsed.
    pub detail: Vec<TextLine>,
    /// Opens the full project detail.
    pub chip: Chip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsBlock {
    pub items: Vec<ProjectItem>,
    pub footer: Option<String>,
}

pub(super) fn projects(
    content: &ContentRegistry,
    deep: bool,
    toggles: &ToggleState,
) -> ProjectsBlock {
    let items = content
        .list("projects")
        .into_iter()
        .map(|entry| {
            let id = entry.key().to_string();
            let expanded = deep || toggles.is_expanded(&id);
            let name = profile::project(&id)
                .map(|p| p.name)
                .unwrap_or(entry.label.as_str())
                .to_string();
            ProjectItem {
                chip: Chip {
                    label: id.clone(),
                    command: format!("project {id}"),
                },
                name,
                description: entry.description.clone(),
                detail: if expanded {
                    format_text(&entry.body_text())
                } else {
                    Vec::new()
                },
                expanded,
                id,
            }
        })
        .collect();
    ProjectsBlock {
        items,
        footer: (!deep).then(|| "(Use --deep for details)".to_string()),
    }
}

/// Architecture principles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchitectureBlock {
    pub heading: String,
    /// Numbered principle titles with their rationale.
    pub principles: Vec<Field>,
    pub closing: String,
}

pub(super) fn architecture() -> ArchitectureBlock {
    ArchitectureBlock {
        heading: ARCHITECTURE.heading.to_string(),
        principles: ARCHITECTURE
            .principles
            .iter()
            .enumerate()
            .map(|(i, p)| Field {
                label: format!("{}. {}", i + 1, p.title),
                value: p.rationale.to_string(),
            })
            .collect(),
        closing: ARCHITECTURE.closing.to_string(),
    }
}

/// One role in the recruiter experience list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceView {
    pub heading: String,
    pub duration: String,
    /// Evidence bullets; empty while the disclosure is closed.
    pub bullets: Vec<String>,
    /// Number of bullets behind the disclosure.
    pub hidden: usize,
}

/// Condensed hiring profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecruiterBlock {
    pub name: String,
    pub title: String,
    pub location: Option<String>,
    pub headline: String,
    pub about: Vec<String>,
    pub highlights: Vec<Field>,
    pub experience: Vec<ExperienceView>,
    pub skills: Vec<Field>,
    pub recent: Vec<String>,
    pub contact: Vec<Field>,
    pub actions: Vec<Chip>,
}

pub(super) fn recruiter(evidence_open: bool) -> RecruiterBlock {
    let experience = EXPERIENCE
        .iter()
        .map(|item| {
            let mut heading = format!("{} · {}", item.role, item.company);
            if let Some(loc) = item.location {
                heading.push_str(&format!(" ({loc})"));
            }
            ExperienceView {
                heading,
                duration: item.duration.to_string(),
                bullets: if evidence_open {
                    item.bullets.iter().map(|b| b.to_string()).collect()
                } else {
                    Vec::new()
                },
                hidden: if evidence_open { 0 } else { item.bullets.len() },
            }
        })
        .collect();

    let mut contact = vec![Field::new("Email", PROFILE.email)];
    if let Some(phone) = PROFILE.phone {
        contact.push(Field::new("Phone", phone));
    }
    contact.push(Field::new("LinkedIn", PROFILE.linkedin));
    contact.push(Field::new("GitHub", PROFILE.github));

    RecruiterBlock {
        name: PROFILE.name.to_string(),
        title: PROFILE.recruiter_title.to_string(),
        location: PROFILE.location.map(str::to_string),
        headline: PROFILE.headline.to_string(),
        about: PROFILE.about.iter().map(|p| p.to_string()).collect(),
        highlights: profile::PROJECTS
            .iter()
            .map(|p| Field::new(p.name, p.short_description))
            .collect(),
        experience,
        skills: SKILL_GROUPS
            .iter()
            .map(|g| Field {
                label: g.label.to_string(),
                value: g.items.join(", "),
            })
            .collect(),
        recent: RECENT_ACTIVITY.iter().map(|r| r.to_string()).collect(),
        contact,
        actions: vec![
            Chip::command("projects"),
            Chip::command("skills"),
            Chip::command("contact"),
        ],
    }
}
