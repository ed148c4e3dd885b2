//! Profile data behind the structured views.

/// Identity and contact details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileMeta {
    pub name: &'static str,
    pub headline: &'static str,
    /// One-sentence identity for the plain-language page.
    pub non_tech_identity: &'static str,
    pub non_tech_subtext: &'static str,
    pub recruiter_title: &'static str,
    pub location: Option<&'static str>,
    pub email: &'static str,
    pub phone: Option<&'static str>,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub resume_url: Option<&'static str>,
    /// Two short paragraphs shown in the recruiter "About" card.
    pub about: &'static [&'static str],
}

impl ProfileMeta {
    /// `mailto:` link for the contact action.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// A project as presented on the recruiter and plain-language pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub short_description: &'static str,
    pub non_tech_description: &'static str,
    pub image: Option<&'static str>,
    pub github_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
}

/// One role in the experience timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceItem {
    pub company: &'static str,
    pub role: &'static str,
    pub location: Option<&'static str>,
    pub duration: &'static str,
    pub bullets: &'static [&'static str],
}

/// A labelled group of skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub label: &'static str,
    pub items: &'static [&'static str],
}

/// A single headline metric on the status block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

/// Content of the `status` view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSummary {
    pub state: &'static str,
    pub role_focus: &'static str,
    pub domains: &'static str,
    pub uptime: &'static str,
    pub metrics: &'static [Metric],
}

/// One architecture principle with its rationale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principle {
    pub title: &'static str,
    pub rationale: &'static str,
}

/// Content of the `arch` view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchitectureNotes {
    pub heading: &'static str,
    pub principles: &'static [Principle],
    pub closing: &'static str,
}

pub const PROFILE: ProfileMeta = ProfileMeta {
    name: "Jordan Vale",
    headline: "Frontend Infrastructure / UI Platform / Systems-leaning Frontend",
    non_tech_identity: "Frontend engineer who builds fast, reliable user interfaces for real-world products.",
    non_tech_subtext: "I focus on how products feel, how they scale, and how they stay maintainable over time.",
    recruiter_title: "Senior Frontend Infrastructure Engineer",
    location: Some("Remote / UTC+1"),
    email: "dev@system.sh",
    phone: None,
    linkedin: "https://www.linkedin.com/in/system-dev",
    github: "https://github.com/system-dev",
    resume_url: Some("https://system.sh/resume.pdf"),
    about: &[
        "I work on frontend systems for real products, with a focus on clear interfaces, \
         predictable behaviour, and code that stays maintainable over time.",
        "I enjoy owning pieces of the platform end to end: from breaking down requirements, \
         to designing component contracts, to shipping and refining them with the teams that use them.",
    ],
};

pub const PROJECTS: &[ProjectSummary] = &[
    ProjectSummary {
        id: "design-system",
        name: "Design System",
        short_description: "Headless, accessible component library serving 50+ internal squads.",
        non_tech_description: "A shared set of building blocks so every team's screens look and behave the same way.",
        image: Some("/projects/design-system/overview.png"),
        github_url: Some("https://github.com/system-dev/design-system"),
        live_url: None,
    },
    ProjectSummary {
        id: "render-engine",
        name: "Render Engine",
        short_description: "WebGL visualization layer drawing 1M+ data points at 60fps.",
        non_tech_description: "Charts that stay smooth even when they show millions of numbers at once.",
        image: Some("/projects/render-engine/overview.png"),
        github_url: None,
        live_url: None,
    },
    ProjectSummary {
        id: "cli-platform",
        name: "CLI Platform",
        short_description: "Unified developer CLI that cut onboarding from 3 days to 4 hours.",
        non_tech_description: "One tool that gets new engineers productive on their first afternoon.",
        image: None,
        github_url: Some("https://github.com/system-dev/cli-platform"),
        live_url: None,
    },
];

pub const EXPERIENCE: &[ExperienceItem] = &[
    ExperienceItem {
        company: "Northwind Labs",
        role: "Senior Frontend Infrastructure Engineer",
        location: Some("Remote"),
        duration: "2022 – Present",
        bullets: &[
            "Own the design system and its release pipeline used by 50+ squads.",
            "Cut median CI build time by 60% through caching and task graph pruning.",
            "Lead the accessibility working group across product lines.",
        ],
    },
    ExperienceItem {
        company: "Contoso Analytics",
        role: "Frontend Engineer",
        location: None,
        duration: "2019 – 2022",
        bullets: &[
            "Built the WebGL rendering layer behind the real-time dashboards.",
            "Moved heavy data transforms into Web Workers, freeing the main thread.",
        ],
    },
    ExperienceItem {
        company: "Fabrikam",
        role: "Frontend Intern",
        location: None,
        duration: "6 months",
        bullets: &[
            "Shipped pages for the customer portal under guidance from senior engineers.",
            "Learned to work within an existing codebase and its conventions.",
        ],
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        label: "Languages",
        items: &["TypeScript", "Rust", "Go"],
    },
    SkillGroup {
        label: "Frameworks",
        items: &["React", "Next.js", "Vue"],
    },
    SkillGroup {
        label: "Infrastructure",
        items: &["Docker", "K8s", "Terraform", "AWS"],
    },
    SkillGroup {
        label: "Tooling",
        items: &["Vite", "Esbuild", "Turborepo"],
    },
];

pub const STATUS: StatusSummary = StatusSummary {
    state: "ONLINE",
    role_focus: "Frontend Infrastructure / UI Platform",
    domains: "Rendering, Performance, Tooling, Architecture",
    uptime: "5 Years Commercial Exp.",
    metrics: &[
        Metric {
            label: "Design Systems",
            value: "50+ Squads",
        },
        Metric {
            label: "Build Speed",
            value: "-60% Latency",
        },
        Metric {
            label: "Platform",
            value: "99.9% Uptime",
        },
    ],
};

pub const ARCHITECTURE: ArchitectureNotes = ArchitectureNotes {
    heading: "Architecture Philosophy",
    principles: &[
        Principle {
            title: "Composition over Inheritance",
            rationale: "Small primitives that combine; no deep component hierarchies.",
        },
        Principle {
            title: "Platform Agnosticism",
            rationale: "Core logic stays independent of the framework that renders it.",
        },
        Principle {
            title: "Performance as a Feature",
            rationale: "Budgets are set up front and enforced in CI, not fixed after launch.",
        },
        Principle {
            title: "Type Safety at Boundaries",
            rationale: "Every API edge is typed and validated; the inside can stay simple.",
        },
    ],
    closing: "Frontend is treated as a distributed system: contracts, versioning, observability.",
};

pub const RECENT_ACTIVITY: &[&str] = &[
    "Built this multi-mode portfolio to show frontend systems thinking and audience-aware UX.",
    "Ongoing work on the design system's zero-runtime styling migration.",
    "Continuous learning around rendering performance and maintainable architectures.",
];

/// Find a project summary by id (case-insensitive).
pub fn project(id: &str) -> Option<&'static ProjectSummary> {
    PROJECTS.iter().find(|p| p.id.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_lookup_case_insensitive() {
        assert_eq!(project("Render-Engine").unwrap().name, "Render Engine");
        assert!(project("nope").is_none());
    }

    #[test]
    fn project_ids_unique() {
        let mut ids: Vec<&str> = PROJECTS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn mailto_link() {
        assert_eq!(PROFILE.mailto(), "mailto:dev@system.sh");
    }

    #[test]
    fn status_has_metrics() {
        assert_eq!(STATUS.metrics.len(), 3);
    }
}
