//! The compiled-in topic set.

use folio_types::error::Result;

use crate::profile::{ARCHITECTURE, PROFILE, SKILL_GROUPS};
use crate::registry::{ContentRegistry, Section, TopicBody, TopicEntry};

/// Display order of the `projects` group.
const PROJECT_ORDER: &[&str] = &["design-system", "render-engine", "cli-platform"];

fn text(s: impl Into<String>) -> TopicBody {
    TopicBody::Text(s.into())
}

fn project_entries() -> Vec<TopicEntry> {
    vec![
        TopicEntry::new(
            "design-system",
            "design-system",
            "Enterprise component library used by 50+ squads",
            TopicBody::Sections {
                intro: "Built a headless, accessible design system serving 50+ internal squads."
                    .to_string(),
                sections: vec![
                    Section::new(
                        "impact",
                        &[
                            "Reduced UI debt by 40%.",
                            "Standardized accessibility patterns across the org.",
                            "Zero-runtime CSS adoption.",
                        ],
                    ),
                    Section::new("infra", &["Stack: React, Aria, Stitches, Turborepo."]),
                ],
            },
        )
        .with_images(&[
            "/projects/design-system/overview.png",
            "/projects/design-system/tokens.png",
        ]),
        TopicEntry::new(
            "render-engine",
            "render-engine",
            "High-performance WebGL visualization layer",
            TopicBody::Sections {
                intro: "Architected a WebGL rendering engine for real-time data visualization."
                    .to_string(),
                sections: vec![
                    Section::new(
                        "impact",
                        &[
                            "Handles 1M+ data points at 60fps.",
                            "Reduced main thread blocking by 90% via Web Workers.",
                        ],
                    ),
                    Section::new(
                        "infra",
                        &["Optimized shader pipelines, Geometry instancing, OffscreenCanvas."],
                    ),
                ],
            },
        )
        .with_images(&["/projects/render-engine/overview.png"]),
        TopicEntry::new(
            "cli-platform",
            "cli-platform",
            "Internal developer tooling platform",
            TopicBody::Sections {
                intro: "Created the unified CLI for developer productivity.".to_string(),
                sections: vec![
                    Section::new(
                        "impact",
                        &[
                            "Reduced onboarding time from 3 days to 4 hours.",
                            "Unified CI/CD pipelines for 200+ services.",
                        ],
                    ),
                    Section::new("infra", &["Node.js, Rust bindings, Oclif, Ink."]),
                ],
            },
        ),
    ]
}

fn skills_text() -> String {
    SKILL_GROUPS
        .iter()
        .map(|g| format!("{}: {}", g.label, g.items.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn arch_text() -> String {
    let mut out = format!("{}:", ARCHITECTURE.heading);
    for (i, p) in ARCHITECTURE.principles.iter().enumerate() {
        out.push_str(&format!("\n{}. {}", i + 1, p.title));
    }
    out
}

fn contact_text() -> String {
    let github = PROFILE.github.trim_start_matches("https://");
    format!(
        "Email: {}\nGitHub: {github}\nLinkedIn: {}",
        PROFILE.email, PROFILE.linkedin
    )
}

const ABOUT: &str = "Senior Frontend Infrastructure Engineer focused on developer experience, \
build tooling, and design systems.\n\nI solve problems at the platform level, treating frontend \
as a distributed system.";

const OVERVIEW: &str = "[OVERVIEW]
Frontend System Interface v1.0
─────────────────────────────
-- Where to start
* [status]     system summary
* [projects]   major systems shipped
* [arch]       architecture philosophy
* [recruiter]  condensed profile for hiring
-- Flags
Flags --deep, --impact and --infra reveal more on project commands.
Details: type 'help' for the full command list.";

impl ContentRegistry {
    /// Build the compiled-in registry and validate it.
    pub fn builtin() -> Result<Self> {
        let mut reg = Self::new();
        for entry in project_entries() {
            reg.insert(entry)?;
        }
        reg.insert(
            TopicEntry::new("projects", "Projects", "Major systems shipped", text(""))
                .with_children(PROJECT_ORDER),
        )?;
        reg.insert(TopicEntry::new(
            "skills",
            "Skills",
            "Capability map by domain",
            text(skills_text()),
        ))?;
        reg.insert(TopicEntry::new(
            "about",
            "About",
            "Concise technical profile",
            text(ABOUT),
        ))?;
        reg.insert(TopicEntry::new(
            "arch",
            "Architecture",
            "Frontend architecture philosophy",
            text(arch_text()),
        ))?;
        reg.insert(TopicEntry::new(
            "contact",
            "Contact",
            "Contact channels",
            text(contact_text()),
        ))?;
        reg.insert(TopicEntry::new(
            "overview",
            "Overview",
            "Where to start",
            text(OVERVIEW),
        ))?;
        reg.validate()?;
        log::debug!("Content registry ready ({} topics)", reg.len());
        Ok(reg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::PROJECTS;

    #[test]
    fn builtin_validates() {
        let reg = ContentRegistry::builtin().unwrap();
        assert!(reg.len() >= 9);
    }

    #[test]
    fn projects_listed_in_curated_order() {
        let reg = ContentRegistry::builtin().unwrap();
        let keys: Vec<&str> = reg.list("projects").iter().map(|e| e.key()).collect();
        assert_eq!(keys, PROJECT_ORDER);
    }

    #[test]
    fn every_summary_has_a_topic() {
        let reg = ContentRegistry::builtin().unwrap();
        for summary in PROJECTS {
            assert!(reg.contains(summary.id), "missing topic for {}", summary.id);
        }
    }

    #[test]
    fn project_topics_have_impact_and_infra() {
        let reg = ContentRegistry::builtin().unwrap();
        for entry in reg.list("projects") {
            assert!(entry.section("impact").is_some());
            assert!(entry.section("infra").is_some());
        }
    }

    #[test]
    fn skills_text_lists_groups() {
        let reg = ContentRegistry::builtin().unwrap();
        let body = reg.get("skills").unwrap().body_text();
        assert!(body.starts_with("Languages: TypeScript, Rust, Go"));
    }

    #[test]
    fn arch_text_numbers_principles() {
        let reg = ContentRegistry::builtin().unwrap();
        let body = reg.get("ARCH").unwrap().body_text();
        assert!(body.contains("1. Composition over Inheritance"));
        assert!(body.contains("4. Type Safety at Boundaries"));
    }
}
