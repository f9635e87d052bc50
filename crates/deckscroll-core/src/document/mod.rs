//! Document model and content schema
//!
//! A document is loaded once, before the first render, and is immutable
//! afterwards. Parsing is permissive: missing optional fields simply omit
//! the corresponding sub-view.

mod model;
mod schema;

pub use model::{
    AgentCard, Agents, Card, CarouselBlock, DocCard, Document, Grid, Header, Link,
    Metric, Metrics, Navigation, Section, SectionKey, Step, Stepper, TwoColumn,
};
