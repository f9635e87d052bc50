//! Bespoke embedded content
//!
//! A closed mapping from a few well-known section keys to fixed content:
//! the cover's hero visual, the intro's funnel timeline, and the model
//! section's platform diagram and features panel.

use crate::constants::sections::{COVER, INTRO, MODEL};
use crate::document::SectionKey;

/// Bespoke content attached to a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bespoke {
    None,
    Hero,
    Timeline,
    Platform,
}

impl Bespoke {
    pub fn for_section(key: &SectionKey) -> Self {
        match key.as_str() {
            COVER => Bespoke::Hero,
            INTRO => Bespoke::Timeline,
            MODEL => Bespoke::Platform,
            _ => Bespoke::None,
        }
    }
}

/// Icon + label pair
#[derive(Debug, PartialEq, Eq)]
pub struct Badge {
    pub icon: &'static str,
    pub label: &'static str,
}

/// Cover hero: platform modules orbiting a core, plus customization tools
#[derive(Debug, PartialEq, Eq)]
pub struct Hero {
    pub modules: &'static [Badge],
    pub tools: &'static [Badge],
}

pub static HERO: Hero = Hero {
    modules: &[
        Badge { icon: "box", label: "Core" },
        Badge { icon: "layers", label: "Stack" },
        Badge { icon: "database", label: "Data" },
        Badge { icon: "cloud", label: "Cloud" },
        Badge { icon: "cpu", label: "Processing" },
        Badge { icon: "code", label: "API" },
    ],
    tools: &[
        Badge { icon: "palette", label: "Brand" },
        Badge { icon: "settings", label: "Config" },
    ],
};

#[derive(Debug, PartialEq, Eq)]
pub struct TimelineStage {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    /// Share carried to the next stage, drawn as a bar
    pub percentage: u8,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SummaryItem {
    pub label: &'static str,
    pub value: &'static str,
}

/// Intro funnel timeline
#[derive(Debug, PartialEq, Eq)]
pub struct Timeline {
    pub stages: &'static [TimelineStage],
    pub summary: &'static [SummaryItem],
}

pub static TIMELINE: Timeline = Timeline {
    stages: &[
        TimelineStage {
            icon: "users",
            title: "Traffic",
            value: "10,000 visitors",
            description: "Attract a qualified audience with optimized campaigns",
            percentage: 100,
        },
        TimelineStage {
            icon: "target",
            title: "Interest",
            value: "3,000 leads",
            description: "Capture engaged, interested contacts",
            percentage: 30,
        },
        TimelineStage {
            icon: "shopping-cart",
            title: "Conversion",
            value: "500 customers",
            description: "Turn leads into paying customers",
            percentage: 17,
        },
        TimelineStage {
            icon: "trending-up",
            title: "Result",
            value: "150k MRR",
            description: "Consolidated monthly recurring revenue",
            percentage: 100,
        },
    ],
    summary: &[
        SummaryItem { label: "Conversion rate", value: "5%" },
        SummaryItem { label: "Average time", value: "7 days" },
        SummaryItem { label: "ROI", value: "300%" },
    ],
};

#[derive(Debug, PartialEq, Eq)]
pub struct DiagramNode {
    pub id: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DiagramEdge {
    pub from: &'static str,
    pub to: &'static str,
    pub label: &'static str,
}

/// Model section platform diagram
#[derive(Debug, PartialEq, Eq)]
pub struct PlatformDiagram {
    pub nodes: &'static [DiagramNode],
    pub edges: &'static [DiagramEdge],
}

impl PlatformDiagram {
    pub fn node(&self, id: &str) -> Option<&DiagramNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

pub static PLATFORM_DIAGRAM: PlatformDiagram = PlatformDiagram {
    nodes: &[
        DiagramNode {
            id: "brain",
            icon: "brain",
            label: "Central AI",
            description: "Coordinates every agent",
        },
        DiagramNode {
            id: "lp",
            icon: "globe",
            label: "Landing Pages",
            description: "Pages that convert",
        },
        DiagramNode {
            id: "copy",
            icon: "message-square",
            label: "Copy",
            description: "Persuasive writing",
        },
        DiagramNode {
            id: "traffic",
            icon: "zap",
            label: "Traffic",
            description: "Optimized campaigns",
        },
        DiagramNode {
            id: "analytics",
            icon: "bar-chart",
            label: "Analytics",
            description: "Real-time metrics",
        },
        DiagramNode {
            id: "data",
            icon: "database",
            label: "Data",
            description: "Actionable insights",
        },
    ],
    edges: &[
        DiagramEdge { from: "brain", to: "lp", label: "Templates" },
        DiagramEdge { from: "brain", to: "copy", label: "Briefings" },
        DiagramEdge { from: "brain", to: "traffic", label: "Strategy" },
        DiagramEdge { from: "brain", to: "analytics", label: "Monitoring" },
        DiagramEdge { from: "data", to: "copy", label: "Insights" },
        DiagramEdge { from: "data", to: "traffic", label: "Optimization" },
    ],
};

#[derive(Debug, PartialEq, Eq)]
pub struct Feature {
    pub number: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Model section features panel
#[derive(Debug, PartialEq, Eq)]
pub struct PlatformFeatures {
    pub heading: &'static str,
    pub features: &'static [Feature],
}

pub static PLATFORM_FEATURES: PlatformFeatures = PlatformFeatures {
    heading: "Advanced capabilities",
    features: &[
        Feature {
            number: "01",
            icon: "network",
            title: "Smart orchestration",
            description: "Every agent works together, sharing context and insights",
        },
        Feature {
            number: "02",
            icon: "layers",
            title: "Automatic scaling",
            description: "The platform adapts to your clients' demand without intervention",
        },
        Feature {
            number: "03",
            icon: "tag",
            title: "Full whitelabel",
            description: "Your brand on every touchpoint, our technology behind the scenes",
        },
    ],
};
