//! Typed document model
//!
//! A document is an ordered list of sections. Each section carries an
//! optional header and zero-or-one of every block kind; blocks are
//! independent and may appear together.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::carousel::CarouselOptions;

/// Stable section identity, used as anchor target and minimap key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionKey(String);

impl SectionKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for SectionKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl PartialEq<str> for SectionKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Opaque navigation link (href + label)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub label: String,
}

/// Links to neighbouring documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    pub back: Option<Link>,
    pub next: Option<Link>,
}

/// A loaded document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub title: Option<String>,
    /// Explicit initial active section; the first section otherwise
    pub initial_section: Option<SectionKey>,
    pub navigation: Navigation,
    pub sections: Vec<Section>,
}

impl Document {
    /// Section the scroll state starts on
    pub fn initial_section(&self) -> Option<SectionKey> {
        self.initial_section
            .clone()
            .or_else(|| self.sections.first().map(|s| s.key.clone()))
    }

    /// First section with the given key
    pub fn section(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// Position of the first section with the given key
    pub fn position(&self, key: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.key == key)
    }

    /// Keys that appear more than once, in first-repeat order.
    ///
    /// Duplicate keys make active-section resolution ambiguous; they are
    /// reported but otherwise left alone.
    pub fn duplicate_keys(&self) -> Vec<&SectionKey> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut dupes = Vec::new();
        for section in &self.sections {
            if !seen.insert(&section.key) && reported.insert(&section.key) {
                dupes.push(&section.key);
            }
        }
        dupes
    }
}

/// One top-level scrollable unit
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub key: SectionKey,
    pub header: Option<Header>,
    pub layout: Option<TwoColumn>,
    pub grid: Option<Grid>,
    pub carousel: Option<CarouselBlock>,
    pub agents: Option<Agents>,
    pub stepper: Option<Stepper>,
    pub metrics: Option<Metrics>,
    pub teaser: Option<String>,
    pub tagline: Option<String>,
    pub cta: Option<Link>,
}

impl Section {
    /// Empty section with only a key
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: SectionKey::new(key),
            header: None,
            layout: None,
            grid: None,
            carousel: None,
            agents: None,
            stepper: None,
            metrics: None,
            teaser: None,
            tagline: None,
            cta: None,
        }
    }

    /// Display title: header title, or the key when there is none
    pub fn title(&self) -> &str {
        self.header
            .as_ref()
            .map(|h| h.title.as_str())
            .filter(|t| !t.is_empty())
            .unwrap_or(self.key.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub subtitle: Option<String>,
}

/// Two-column block: free text on the left, bullet list on the right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoColumn {
    pub title: String,
    pub body: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub columns: u16,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselBlock {
    pub items: Vec<AgentCard>,
    pub options: CarouselOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Agents {
    pub items: Vec<AgentCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stepper {
    pub steps: Vec<Step>,
    /// Optional labels drawn between consecutive steps
    pub connectors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub items: Vec<Metric>,
}

/// Card variant, chosen per item by the `component` discriminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Card {
    Agent(AgentCard),
    Doc(DocCard),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentCard {
    pub icon: String,
    pub title: String,
    pub body: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    /// Free-form status tag
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocCard {
    pub icon: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// 1-based, matches position
    pub index: u32,
    pub title: String,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub value: String,
    pub caption: String,
}
