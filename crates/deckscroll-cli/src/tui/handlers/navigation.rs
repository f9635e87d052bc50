//! Minimap activation and link following

use std::path::{Path, PathBuf};

use deckscroll_core::document::Link;
use deckscroll_core::{MinimapInput, SectionKey};

use crate::tui::app::App;
use crate::tui::components::Toast;
use crate::tui::state::ViewportNavigator;

/// Where an href leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// `#key`: a section of the current document
    Section(SectionKey),
    /// A deck file next to the current one
    Document(PathBuf),
    /// Anything else; shown, not opened
    External(String),
}

/// Resolve `href` against the file the current document came from
pub fn resolve_href(href: &str, source: Option<&Path>) -> LinkTarget {
    let href = href.trim();
    if let Some(key) = href.strip_prefix('#') {
        if !key.is_empty() {
            return LinkTarget::Section(key.into());
        }
    }

    let path = href.split('#').next().unwrap_or(href);
    let is_deck = !path.contains("://")
        && Path::new(path)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_deck {
        let base = source.and_then(Path::parent).unwrap_or(Path::new(""));
        let candidate = base.join(path);
        if candidate.is_file() {
            return LinkTarget::Document(candidate);
        }
        tracing::debug!(path = %candidate.display(), "Linked deck not found");
    }
    LinkTarget::External(href.to_string())
}

impl App {
    /// Feed one input to the minimap. Returns whether a jump started.
    pub fn minimap_input(&mut self, input: MinimapInput) -> bool {
        let mut navigator = ViewportNavigator {
            layout: self.tracker.layout(),
            viewport: &mut self.viewport,
            smooth: self.config.smooth_scroll,
        };
        self.minimap.handle_input(input, &mut navigator)
    }

    /// Scroll to a section the way a minimap click would
    pub fn navigate_to_section(&mut self, key: &SectionKey) -> bool {
        let jumped = self
            .document
            .position(key.as_str())
            .is_some_and(|index| self.minimap_input(MinimapInput::Click(index)));
        if !jumped {
            self.toasts.push(Toast::error(format!("No section '{}'", key)));
        }
        jumped
    }

    pub fn follow_back_link(&mut self) {
        match self.document.navigation.back.clone() {
            Some(link) => self.follow_link(&link),
            None => tracing::trace!("No back link"),
        }
    }

    pub fn follow_next_link(&mut self) {
        match self.document.navigation.next.clone() {
            Some(link) => self.follow_link(&link),
            None => tracing::trace!("No next link"),
        }
    }

    /// Follow the call-to-action of the active section, if it has one
    pub fn follow_active_cta(&mut self) {
        let cta = self
            .active_index()
            .and_then(|i| self.document.sections.get(i))
            .and_then(|section| section.cta.clone());
        if let Some(link) = cta {
            self.follow_link(&link);
        }
    }

    pub fn follow_link(&mut self, link: &Link) {
        tracing::info!(href = %link.href, "Following link");
        match resolve_href(&link.href, self.source.as_deref()) {
            LinkTarget::Section(key) => {
                self.navigate_to_section(&key);
            }
            LinkTarget::Document(path) => {
                if self.load_document(&path) {
                    self.toasts.push(Toast::success(format!("Opened {}", link.label)));
                }
            }
            LinkTarget::External(href) => {
                self.toasts.push(Toast::info(format!("{}: {}", link.label, href)));
            }
        }
    }
}
