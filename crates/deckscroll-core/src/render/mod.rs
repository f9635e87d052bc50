//! Block renderer
//!
//! Turns a [`Section`] into an ordered list of view nodes. Dispatch is an
//! explicit ordered list of presence checks, so the output order never
//! depends on how the source JSON ordered its fields. Rendering is pure: it
//! reads the section and the icon registry and nothing else.

pub mod bespoke;

use crate::carousel::CarouselOptions;
use crate::document::{AgentCard, Card, DocCard, Document, Header, Link, Metric, Section, SectionKey, Step, TwoColumn};
use crate::icons::{Icon, IconRegistry, DOC_FALLBACK_ICON_KEY};

pub use bespoke::{Bespoke, Hero, PlatformDiagram, PlatformFeatures, Timeline};
use bespoke::{HERO, PLATFORM_DIAGRAM, PLATFORM_FEATURES, TIMELINE};

use crate::constants::layout::AGENTS_COLUMNS;

/// Visual tone of an agent status tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Active,
    Beta,
    Planned,
    Neutral,
}

impl StatusTone {
    /// Tone for a free-form status label, matched case-insensitively
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "active" | "live" | "ativo" => StatusTone::Active,
            "beta" | "preview" => StatusTone::Beta,
            "planned" | "soon" | "coming soon" | "em breve" => StatusTone::Planned,
            _ => StatusTone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTag {
    pub label: String,
    pub tone: StatusTone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentCardView {
    pub icon: Icon,
    pub title: String,
    pub body: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub status: Option<StatusTag>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocCardView {
    pub icon: Icon,
    pub title: String,
    pub body: String,
}

/// A card after per-item dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardView {
    Agent(AgentCardView),
    Doc(DocCardView),
}

impl CardView {
    pub fn title(&self) -> &str {
        match self {
            CardView::Agent(card) => &card.title,
            CardView::Doc(card) => &card.title,
        }
    }

    pub fn icon(&self) -> &Icon {
        match self {
            CardView::Agent(card) => &card.icon,
            CardView::Doc(card) => &card.icon,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CardView::Agent(_) => "agent",
            CardView::Doc(_) => "doc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub columns: u16,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView {
    pub cards: Vec<CardView>,
    pub options: CarouselOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepperView {
    pub steps: Vec<Step>,
    /// Label between step `i` and `i + 1`, empty when none was given
    pub connectors: Vec<String>,
}

impl StepperView {
    pub fn connector(&self, after: usize) -> Option<&str> {
        self.connectors
            .get(after)
            .map(String::as_str)
            .filter(|c| !c.is_empty())
    }
}

/// One painted unit of a section
#[derive(Debug, Clone, PartialEq)]
pub enum ViewNode {
    Hero(&'static Hero),
    Header(Header),
    Timeline(&'static Timeline),
    PlatformDiagram(&'static PlatformDiagram),
    PlatformFeatures(&'static PlatformFeatures),
    TwoColumn(TwoColumn),
    Grid(GridView),
    Carousel(CarouselView),
    Agents(GridView),
    Stepper(StepperView),
    Metrics(Vec<Metric>),
    Teaser(String),
    Tagline(String),
    Cta(Link),
}

impl ViewNode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewNode::Hero(_) => "hero",
            ViewNode::Header(_) => "header",
            ViewNode::Timeline(_) => "timeline",
            ViewNode::PlatformDiagram(_) => "platform-diagram",
            ViewNode::PlatformFeatures(_) => "platform-features",
            ViewNode::TwoColumn(_) => "layout",
            ViewNode::Grid(_) => "grid",
            ViewNode::Carousel(_) => "carousel",
            ViewNode::Agents(_) => "agents",
            ViewNode::Stepper(_) => "stepper",
            ViewNode::Metrics(_) => "metrics",
            ViewNode::Teaser(_) => "teaser",
            ViewNode::Tagline(_) => "tagline",
            ViewNode::Cta(_) => "cta",
        }
    }

    /// Cards carried by this node, if it is a card container
    pub fn cards(&self) -> &[CardView] {
        match self {
            ViewNode::Grid(grid) | ViewNode::Agents(grid) => &grid.cards,
            ViewNode::Carousel(carousel) => &carousel.cards,
            _ => &[],
        }
    }
}

/// Rendered section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub key: SectionKey,
    pub title: String,
    pub nodes: Vec<ViewNode>,
}

impl SectionView {
    pub fn labels(&self) -> Vec<&'static str> {
        self.nodes.iter().map(ViewNode::label).collect()
    }

    pub fn carousel(&self) -> Option<&CarouselView> {
        self.nodes.iter().find_map(|node| match node {
            ViewNode::Carousel(carousel) => Some(carousel),
            _ => None,
        })
    }
}

/// Render one section into its ordered view nodes
pub fn render_section(section: &Section, icons: &IconRegistry) -> SectionView {
    let bespoke = Bespoke::for_section(&section.key);
    let mut nodes = Vec::new();

    if bespoke == Bespoke::Hero {
        nodes.push(ViewNode::Hero(&HERO));
    }

    if let Some(header) = &section.header {
        nodes.push(ViewNode::Header(header.clone()));
    }

    match bespoke {
        Bespoke::Timeline => nodes.push(ViewNode::Timeline(&TIMELINE)),
        Bespoke::Platform => {
            nodes.push(ViewNode::PlatformDiagram(&PLATFORM_DIAGRAM));
            nodes.push(ViewNode::PlatformFeatures(&PLATFORM_FEATURES));
        }
        Bespoke::Hero | Bespoke::None => {}
    }

    if let Some(layout) = &section.layout {
        nodes.push(ViewNode::TwoColumn(layout.clone()));
    }

    if let Some(grid) = &section.grid {
        nodes.push(ViewNode::Grid(GridView {
            columns: grid.columns,
            cards: grid.cards.iter().map(|card| render_card(card, icons)).collect(),
        }));
    }

    if let Some(carousel) = &section.carousel {
        nodes.push(ViewNode::Carousel(CarouselView {
            cards: carousel
                .items
                .iter()
                .map(|item| CardView::Agent(render_agent_card(item, icons)))
                .collect(),
            options: carousel.options,
        }));
    }

    if let Some(agents) = &section.agents {
        nodes.push(ViewNode::Agents(GridView {
            columns: AGENTS_COLUMNS,
            cards: agents
                .items
                .iter()
                .map(|item| CardView::Agent(render_agent_card(item, icons)))
                .collect(),
        }));
    }

    if let Some(stepper) = &section.stepper {
        nodes.push(ViewNode::Stepper(StepperView {
            steps: stepper.steps.clone(),
            connectors: stepper.connectors.clone(),
        }));
    }

    if let Some(metrics) = &section.metrics {
        nodes.push(ViewNode::Metrics(metrics.items.clone()));
    }

    if let Some(teaser) = &section.teaser {
        nodes.push(ViewNode::Teaser(teaser.clone()));
    }

    if let Some(tagline) = &section.tagline {
        nodes.push(ViewNode::Tagline(tagline.clone()));
    }

    if let Some(cta) = &section.cta {
        nodes.push(ViewNode::Cta(cta.clone()));
    }

    SectionView {
        key: section.key.clone(),
        title: section.title().to_string(),
        nodes,
    }
}

/// Render every section of a document, in document order
pub fn render_document(document: &Document, icons: &IconRegistry) -> Vec<SectionView> {
    document
        .sections
        .iter()
        .map(|section| render_section(section, icons))
        .collect()
}

/// Per-item card dispatch
pub fn render_card(card: &Card, icons: &IconRegistry) -> CardView {
    match card {
        Card::Agent(agent) => CardView::Agent(render_agent_card(agent, icons)),
        Card::Doc(doc) => CardView::Doc(render_doc_card(doc, icons)),
    }
}

fn render_agent_card(card: &AgentCard, icons: &IconRegistry) -> AgentCardView {
    AgentCardView {
        icon: icons.resolve(&card.icon),
        title: card.title.clone(),
        body: card.body.clone(),
        inputs: card.inputs.clone(),
        outputs: card.outputs.clone(),
        status: card.status.as_ref().map(|label| StatusTag {
            label: label.clone(),
            tone: StatusTone::from_label(label),
        }),
    }
}

fn render_doc_card(card: &DocCard, icons: &IconRegistry) -> DocCardView {
    DocCardView {
        icon: icons.resolve_or(&card.icon, DOC_FALLBACK_ICON_KEY),
        title: card.title.clone(),
        body: card.body.clone(),
    }
}
