//! Topic entries and the map-backed registry.

use std::collections::HashMap;

use folio_types::error::{FolioError, Result};

/// A labelled sub-section of a topic body (e.g. `impact`, `infra`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: String,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(label: &str, lines: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// Body of a topic: free text or an intro followed by labelled sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicBody {
    Text(String),
    Sections { intro: String, sections: Vec<Section> },
}

/// One unit of content addressable by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicEntry {
    key: String,
    /// Display label.
    pub label: String,
    /// One-line description.
    pub description: String,
    /// Body content.
    pub body: TopicBody,
    /// Child keys in curated display order (hierarchical topics only).
    pub children: Vec<String>,
    /// Preview images, in display order.
    pub images: Vec<String>,
}

impl TopicEntry {
    /// Create a leaf entry. The key is stored lower-cased.
    pub fn new(key: &str, label: &str, description: &str, body: TopicBody) -> Self {
        Self {
            key: key.to_ascii_lowercase(),
            label: label.to_string(),
            description: description.to_string(),
            body,
            children: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Attach child keys (display order is the order given).
    pub fn with_children(mut self, children: &[&str]) -> Self {
        self.children = children.iter().map(|c| c.to_ascii_lowercase()).collect();
        self
    }

    /// Attach preview images.
    pub fn with_images(mut self, images: &[&str]) -> Self {
        self.images = images.iter().map(|i| i.to_string()).collect();
        self
    }

    /// The immutable registry key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Look up a section by label (case-insensitive).
    pub fn section(&self, label: &str) -> Option<&Section> {
        match &self.body {
            TopicBody::Sections { sections, .. } => {
                sections.iter().find(|s| s.label.eq_ignore_ascii_case(label))
            },
            TopicBody::Text(_) => None,
        }
    }

    /// Flatten the body to terminal text. Sections become `--label` sub-labels.
    pub fn body_text(&self) -> String {
        match &self.body {
            TopicBody::Text(text) => text.clone(),
            TopicBody::Sections { intro, sections } => {
                let mut out = intro.clone();
                for section in sections {
                    out.push_str("\n\n--");
                    out.push_str(&section.label);
                    for line in &section.lines {
                        out.push('\n');
                        out.push_str(line);
                    }
                }
                out
            },
        }
    }
}

/// Static mapping from topic key to entry.
#[derive(Debug, Clone, Default)]
pub struct ContentRegistry {
    topics: HashMap<String, TopicEntry>,
}

impl ContentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. Returns an error if the key is already taken.
    pub fn insert(&mut self, entry: TopicEntry) -> Result<()> {
        if self.topics.contains_key(entry.key()) {
            return Err(FolioError::Content(format!(
                "duplicate topic key: {}",
                entry.key()
            )));
        }
        self.topics.insert(entry.key().to_string(), entry);
        Ok(())
    }

    /// Case-insensitive lookup.
    pub fn get(&self, key: &str) -> Option<&TopicEntry> {
        self.topics.get(key.trim().to_ascii_lowercase().as_str())
    }

    /// Whether `key` names a topic.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Ordered children of a hierarchical topic. Unknown groups and leaf
    /// topics yield an empty list.
    pub fn list(&self, group: &str) -> Vec<&TopicEntry> {
        self.get(group)
            .map(|parent| {
                parent
                    .children
                    .iter()
                    .filter_map(|child| self.topics.get(child))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.topics.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of topics.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Whether the registry holds no topics.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Check that every child key resolves.
    pub fn validate(&self) -> Result<()> {
        for entry in self.topics.values() {
            for child in &entry.children {
                if !self.topics.contains_key(child) {
                    return Err(FolioError::Content(format!(
                        "topic '{}' lists unknown child '{child}'",
                        entry.key()
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> TopicBody {
        TopicBody::Text(s.to_string())
    }

    fn sample() -> ContentRegistry {
        let mut reg = ContentRegistry::new();
        reg.insert(TopicEntry::new("b-proj", "B", "second", text("b"))).unwrap();
        reg.insert(TopicEntry::new("a-proj", "A", "first", text("a"))).unwrap();
        reg.insert(
            TopicEntry::new("projects", "Projects", "all", text(""))
                .with_children(&["b-proj", "a-proj"]),
        )
        .unwrap();
        reg
    }

    #[test]
    fn get_is_case_insensitive() {
        let reg = sample();
        assert_eq!(reg.get("PROJECTS").unwrap().key(), "projects");
        assert_eq!(reg.get(" a-Proj ").unwrap().label, "A");
    }

    #[test]
    fn get_unknown_is_none() {
        assert!(sample().get("nope").is_none());
    }

    #[test]
    fn keys_stored_lowercase() {
        let mut reg = ContentRegistry::new();
        reg.insert(TopicEntry::new("Skills", "Skills", "", text(""))).unwrap();
        assert_eq!(reg.keys(), vec!["skills"]);
    }

    #[test]
    fn duplicate_key_rejected() {
        let mut reg = sample();
        let err = reg
            .insert(TopicEntry::new("A-PROJ", "dup", "", text("")))
            .unwrap_err();
        assert!(matches!(err, FolioError::Content(_)));
    }

    #[test]
    fn list_uses_curated_order() {
        let reg = sample();
        let keys: Vec<&str> = reg.list("projects").iter().map(|e| e.key()).collect();
        assert_eq!(keys, vec!["b-proj", "a-proj"]);
    }

    #[test]
    fn list_of_leaf_or_unknown_is_empty() {
        let reg = sample();
        assert!(reg.list("a-proj").is_empty());
        assert!(reg.list("missing").is_empty());
    }

    #[test]
    fn validate_catches_dangling_child() {
        let mut reg = ContentRegistry::new();
        reg.insert(TopicEntry::new("group", "G", "", text("")).with_children(&["ghost"]))
            .unwrap();
        assert!(reg.validate().is_err());
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn body_text_flattens_sections() {
        let entry = TopicEntry::new(
            "x",
            "X",
            "",
            TopicBody::Sections {
                intro: "Intro.".to_string(),
                sections: vec![Section::new("impact", &["Fast.", "Small."])],
            },
        );
        assert_eq!(entry.body_text(), "Intro.\n\n--impact\nFast.\nSmall.");
        assert_eq!(entry.section("IMPACT").unwrap().lines.len(), 2);
        assert!(entry.section("infra").is_none());
    }
}
