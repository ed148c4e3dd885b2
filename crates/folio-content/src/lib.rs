//! Static portfolio content.
//!
//! The registry maps topic keys (`projects`, `skills`, `arch`, ...) to display
//! text. Lookups are case-insensitive and never fail loudly: callers turn a
//! `None` into a user-facing message. Profile data feeds the structured
//! recruiter, status and architecture views.

mod builtin;
pub mod profile;
mod registry;

pub use profile::{
    ArchitectureNotes, ExperienceItem, Metric, Principle, ProfileMeta, ProjectSummary,
    SkillGroup, StatusSummary,
};
pub use registry::{ContentRegistry, Section, TopicBody, TopicEntry};
