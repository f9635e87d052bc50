//! Content schema parsing
//!
//! The JSON schema is read permissively: every field is optional and
//! missing data degrades to an omitted sub-view. Only malformed JSON or an
//! unreadable file is an error.

use std::path::Path;

use serde::Deserialize;

use super::model::{
    AgentCard, Agents, Card, CarouselBlock, DocCard, Document, Grid, Header, Link, Metric,
    Metrics, Navigation, Section, SectionKey, Step, Stepper, TwoColumn,
};
use crate::carousel::{Align, CarouselOptions};
use crate::constants::layout::{DEFAULT_GRID_COLUMNS, MAX_GRID_COLUMNS};
use crate::error::{DeckError, DeckResult};

/// Discriminator value selecting the agent card view
const AGENT_COMPONENT: &str = "AgentCard";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawDocument {
    title: Option<String>,
    initial_section: Option<String>,
    navigation: RawNavigation,
    sections: Vec<RawSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawNavigation {
    back: Option<RawLink>,
    next: Option<RawLink>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawLink {
    href: String,
    label: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSection {
    id: String,
    header: Option<RawHeader>,
    layout: Option<RawLayout>,
    // Legacy two-column form: `layout: true` with the columns on the section
    left: Option<RawColumn>,
    right: Option<RawList>,
    grid: Option<RawGrid>,
    carousel: Option<RawCarousel>,
    agents: Option<RawItems>,
    stepper: Option<RawStepper>,
    metrics: Option<RawMetrics>,
    teaser: Option<String>,
    tagline: Option<String>,
    cta: Option<RawLink>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawHeader {
    title: String,
    subtitle: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLayout {
    Flag(bool),
    Columns {
        #[serde(default)]
        left: RawColumn,
        #[serde(default)]
        right: RawList,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawColumn {
    title: String,
    body: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawList {
    items: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawGrid {
    columns: Option<u16>,
    cards: Vec<RawCard>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCarousel {
    items: Vec<RawCard>,
    options: Option<RawCarouselOptions>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCarouselOptions {
    #[serde(rename = "loop")]
    loop_items: Option<bool>,
    align: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawItems {
    items: Vec<RawCard>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawCard {
    component: Option<String>,
    icon: String,
    title: String,
    body: String,
    chips_in: Vec<String>,
    chips_out: Vec<String>,
    status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawStepper {
    steps: Vec<RawStep>,
    connectors: Vec<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawStep {
    index: Option<u32>,
    title: String,
    caption: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMetrics {
    items: Vec<RawMetric>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMetric {
    value: String,
    caption: String,
}

impl Document {
    /// Parse a document from its JSON content schema
    pub fn from_json_str(json: &str) -> DeckResult<Self> {
        let raw: RawDocument = serde_json::from_str(json)?;
        let document = raw.into_document();

        let dupes = document.duplicate_keys();
        if !dupes.is_empty() {
            let keys: Vec<&str> = dupes.iter().map(|k| k.as_str()).collect();
            tracing::warn!(
                keys = ?keys,
                "Duplicate section keys; active-section tracking is ambiguous for them"
            );
        }

        tracing::debug!(sections = document.sections.len(), "Parsed document");
        Ok(document)
    }

    /// Read and parse a document file
    pub fn load(path: &Path) -> DeckResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| DeckError::read(path, e))?;
        let document = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            sections = document.sections.len(),
            "Loaded document"
        );
        Ok(document)
    }
}

impl RawDocument {
    fn into_document(self) -> Document {
        let sections = self
            .sections
            .into_iter()
            .enumerate()
            .map(|(i, raw)| raw.into_section(i))
            .collect();

        Document {
            title: non_empty(self.title),
            initial_section: non_empty(self.initial_section).map(SectionKey::new),
            navigation: Navigation {
                back: self.navigation.back.and_then(RawLink::into_link),
                next: self.navigation.next.and_then(RawLink::into_link),
            },
            sections,
        }
    }
}

impl RawLink {
    fn into_link(self) -> Option<Link> {
        if self.href.is_empty() && self.label.is_empty() {
            return None;
        }
        let label = if self.label.is_empty() {
            self.href.clone()
        } else {
            self.label
        };
        Some(Link {
            href: self.href,
            label,
        })
    }
}

impl RawSection {
    fn into_section(self, position: usize) -> Section {
        let key = if self.id.trim().is_empty() {
            let generated = format!("section-{}", position + 1);
            tracing::warn!(position, key = %generated, "Section without id, generated key");
            generated
        } else {
            self.id
        };

        let layout = match self.layout {
            Some(RawLayout::Columns { left, right }) => Some(two_column(left, right)),
            Some(RawLayout::Flag(true)) => Some(two_column(
                self.left.unwrap_or_default(),
                self.right.unwrap_or_default(),
            )),
            Some(RawLayout::Flag(false)) | None => None,
        };

        let mut section = Section::new(key);
        section.header = self.header.map(|h| Header {
            title: h.title,
            subtitle: non_empty(h.subtitle),
        });
        section.layout = layout;
        section.grid = self.grid.map(|g| Grid {
            columns: g
                .columns
                .filter(|c| *c > 0)
                .unwrap_or(DEFAULT_GRID_COLUMNS)
                .min(MAX_GRID_COLUMNS),
            cards: g.cards.into_iter().map(RawCard::into_card).collect(),
        });
        section.carousel = self.carousel.map(|c| CarouselBlock {
            items: c.items.into_iter().map(RawCard::into_agent).collect(),
            options: c
                .options
                .map(RawCarouselOptions::into_options)
                .unwrap_or_default(),
        });
        section.agents = self.agents.map(|a| Agents {
            items: a.items.into_iter().map(RawCard::into_agent).collect(),
        });
        section.stepper = self.stepper.map(RawStepper::into_stepper);
        section.metrics = self.metrics.map(|m| Metrics {
            items: m
                .items
                .into_iter()
                .map(|m| Metric {
                    value: m.value,
                    caption: m.caption,
                })
                .collect(),
        });
        section.teaser = non_empty(self.teaser);
        section.tagline = non_empty(self.tagline);
        section.cta = self.cta.and_then(RawLink::into_link);
        section
    }
}

impl RawCard {
    fn into_card(self) -> Card {
        if self.component.as_deref() == Some(AGENT_COMPONENT) {
            Card::Agent(self.into_agent())
        } else {
            Card::Doc(DocCard {
                icon: self.icon,
                title: self.title,
                body: self.body,
            })
        }
    }

    fn into_agent(self) -> AgentCard {
        AgentCard {
            icon: self.icon,
            title: self.title,
            body: self.body,
            inputs: self.chips_in,
            outputs: self.chips_out,
            status: non_empty(self.status),
        }
    }
}

impl RawCarouselOptions {
    fn into_options(self) -> CarouselOptions {
        let defaults = CarouselOptions::default();
        CarouselOptions {
            loop_items: self.loop_items.unwrap_or(defaults.loop_items),
            align: self
                .align
                .as_deref()
                .map(Align::parse)
                .unwrap_or(defaults.align),
        }
    }
}

impl RawStepper {
    fn into_stepper(self) -> Stepper {
        let steps = self
            .steps
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                let position = i as u32 + 1;
                if s.index.is_some_and(|idx| idx != position) {
                    tracing::debug!(
                        declared = ?s.index,
                        position,
                        "Step index does not match position, using position"
                    );
                }
                Step {
                    index: position,
                    title: s.title,
                    caption: non_empty(s.caption),
                }
            })
            .collect();

        // Connectors are free-form; only textual ones carry a label
        let connectors = self
            .connectors
            .into_iter()
            .map(|c| match c {
                serde_json::Value::String(s) => s,
                serde_json::Value::Object(map) => map
                    .get("label")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string(),
                _ => String::new(),
            })
            .collect();

        Stepper { steps, connectors }
    }
}

fn two_column(left: RawColumn, right: RawList) -> TwoColumn {
    TwoColumn {
        title: left.title,
        body: left.body,
        items: right.items,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_degrade() {
        let doc = Document::from_json_str(
            r#"{"sections": [{"id": "a"}, {"id": "b", "grid": {"cards": [{}]}}]}"#,
        )
        .unwrap();

        assert_eq!(doc.sections.len(), 2);
        assert!(doc.sections[0].header.is_none());
        assert!(doc.sections[0].cta.is_none());
        let grid = doc.sections[1].grid.as_ref().unwrap();
        assert_eq!(grid.columns, DEFAULT_GRID_COLUMNS);
        assert_eq!(grid.cards, vec![Card::Doc(DocCard::default())]);
    }

    #[test]
    fn test_card_discriminator_per_item() {
        let doc = Document::from_json_str(
            r#"{"sections": [{"id": "s", "grid": {"columns": 2, "cards": [
                {"component": "AgentCard", "icon": "brain", "title": "A", "body": "x",
                 "chipsIn": ["brief"], "chipsOut": ["copy"], "status": "Beta"},
                {"icon": "file-text", "title": "D", "body": "y"},
                {"component": "DocCard", "title": "E"}
            ]}}]}"#,
        )
        .unwrap();

        let cards = &doc.sections[0].grid.as_ref().unwrap().cards;
        match &cards[0] {
            Card::Agent(a) => {
                assert_eq!(a.inputs, vec!["brief"]);
                assert_eq!(a.outputs, vec!["copy"]);
                assert_eq!(a.status.as_deref(), Some("Beta"));
            }
            other => panic!("expected agent card, got {:?}", other),
        }
        assert!(matches!(cards[1], Card::Doc(_)));
        assert!(matches!(cards[2], Card::Doc(_)));
    }

    #[test]
    fn test_layout_forms() {
        let doc = Document::from_json_str(
            r#"{"sections": [
                {"id": "nested", "layout": {"left": {"title": "L", "body": "B"}, "right": {"items": ["1", "2"]}}},
                {"id": "legacy", "layout": true, "left": {"title": "L2"}, "right": {"items": ["x"]}},
                {"id": "off", "layout": false, "left": {"title": "ignored"}}
            ]}"#,
        )
        .unwrap();

        let nested = doc.sections[0].layout.as_ref().unwrap();
        assert_eq!(nested.title, "L");
        assert_eq!(nested.items, vec!["1", "2"]);
        let legacy = doc.sections[1].layout.as_ref().unwrap();
        assert_eq!(legacy.title, "L2");
        assert_eq!(legacy.items, vec!["x"]);
        assert!(doc.sections[2].layout.is_none());
    }

    #[test]
    fn test_carousel_options_defaults() {
        let doc = Document::from_json_str(
            r#"{"sections": [
                {"id": "a", "carousel": {"items": [{"title": "one"}]}},
                {"id": "b", "carousel": {"items": [], "options": {"loop": false, "align": "center"}}}
            ]}"#,
        )
        .unwrap();

        let a = &doc.sections[0].carousel.as_ref().unwrap().options;
        assert!(a.loop_items);
        assert_eq!(a.align, Align::Start);
        let b = &doc.sections[1].carousel.as_ref().unwrap().options;
        assert!(!b.loop_items);
        assert_eq!(b.align, Align::Center);
    }

    #[test]
    fn test_steps_reindexed_by_position() {
        let doc = Document::from_json_str(
            r#"{"sections": [{"id": "s", "stepper": {
                "steps": [{"index": 1, "title": "a"}, {"index": 7, "title": "b"}, {"title": "c"}],
                "connectors": ["then", {"label": "after"}, 3]
            }}]}"#,
        )
        .unwrap();

        let stepper = doc.sections[0].stepper.as_ref().unwrap();
        let indices: Vec<u32> = stepper.steps.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(stepper.connectors, vec!["then", "after", ""]);
    }

    #[test]
    fn test_initial_section_and_navigation() {
        let doc = Document::from_json_str(
            r#"{"title": "Deck", "navigation": {"next": {"href": "/part2", "label": "Part 2"}},
                "sections": [{"id": "cover"}, {"id": "intro"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.initial_section().unwrap(), "cover");
        assert_eq!(doc.navigation.next.as_ref().unwrap().label, "Part 2");
        assert!(doc.navigation.back.is_none());

        let doc = Document::from_json_str(
            r#"{"initialSection": "intro", "sections": [{"id": "cover"}, {"id": "intro"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.initial_section().unwrap(), "intro");
    }

    #[test]
    fn test_duplicate_keys_reported_not_rejected() {
        let doc = Document::from_json_str(
            r#"{"sections": [{"id": "a"}, {"id": "b"}, {"id": "a"}, {"id": "a"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.sections.len(), 4);
        let dupes: Vec<&str> = doc.duplicate_keys().iter().map(|k| k.as_str()).collect();
        assert_eq!(dupes, vec!["a"]);
    }

    #[test]
    fn test_missing_id_gets_generated_key() {
        let doc = Document::from_json_str(r#"{"sections": [{"header": {"title": "T"}}]}"#).unwrap();
        assert_eq!(doc.sections[0].key, "section-1");
        assert_eq!(doc.sections[0].title(), "T");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            Document::from_json_str("{\"sections\": ["),
            Err(DeckError::Document(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        std::fs::write(&path, r#"{"sections": [{"id": "only"}]}"#).unwrap();

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.sections[0].key, "only");

        let missing = Document::load(&dir.path().join("nope.json"));
        assert!(matches!(missing, Err(DeckError::Read { .. })));
    }
}
