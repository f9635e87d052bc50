//! Navigation index (minimap)
//!
//! One entry per section in document order. The highlighted entry follows
//! the published [`ScrollState`], and activating an entry jumps the viewport
//! to that section through an [`AnchorNavigator`]. The highlight moves
//! optimistically on activation, before the scroll lands.

use tokio::sync::watch;

use crate::document::{Document, SectionKey};
use crate::tracking::ScrollState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimapEntry {
    pub key: SectionKey,
    /// Header title, or the key when the section has no title
    pub title: String,
}

/// User input addressed to the minimap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinimapInput {
    /// Pointer activation of the entry at this position
    Click(usize),
    /// Activate the focused entry
    Enter,
    /// Activate the focused entry
    Space,
    FocusNext,
    FocusPrev,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Anchor lookup and scroll primitive provided by the host view
pub trait AnchorNavigator {
    /// Document offset of the section's anchor, `None` if it is not present
    fn locate(&self, key: &SectionKey) -> Option<u32>;

    /// Bring `offset` to the top of the viewport
    fn scroll_to(&mut self, offset: u32, behavior: ScrollBehavior);
}

pub struct Minimap {
    entries: Vec<MinimapEntry>,
    active: Option<SectionKey>,
    focused: usize,
    receiver: Option<watch::Receiver<ScrollState>>,
}

impl Minimap {
    pub fn new(entries: Vec<MinimapEntry>) -> Self {
        Self {
            entries,
            active: None,
            focused: 0,
            receiver: None,
        }
    }

    pub fn from_document(document: &Document) -> Self {
        let entries = document
            .sections
            .iter()
            .map(|section| MinimapEntry {
                key: section.key.clone(),
                title: section.title().to_string(),
            })
            .collect();
        let mut minimap = Self::new(entries);
        minimap.active = document.initial_section();
        minimap
    }

    /// Follow a published scroll state. Takes the current value right away.
    pub fn attach(&mut self, mut receiver: watch::Receiver<ScrollState>) {
        self.set_active(receiver.borrow_and_update().active_section.clone());
        self.receiver = Some(receiver);
    }

    pub fn is_attached(&self) -> bool {
        self.receiver.is_some()
    }

    /// Pull the latest published state. Returns whether the highlight moved.
    ///
    /// A closed channel (the tracker unmounted) detaches the minimap.
    pub fn sync(&mut self) -> bool {
        let Some(receiver) = self.receiver.as_mut() else {
            return false;
        };
        match receiver.has_changed() {
            Ok(true) => {
                let key = receiver.borrow_and_update().active_section.clone();
                self.set_active(key)
            }
            Ok(false) => false,
            Err(_) => {
                tracing::debug!("Scroll state closed, minimap detached");
                self.receiver = None;
                false
            }
        }
    }

    /// Apply one input. Returns whether a jump was requested.
    pub fn handle_input(&mut self, input: MinimapInput, navigator: &mut dyn AnchorNavigator) -> bool {
        match input {
            MinimapInput::Click(index) => self.activate(index, navigator),
            MinimapInput::Enter | MinimapInput::Space => self.activate(self.focused, navigator),
            MinimapInput::FocusNext => {
                if self.focused + 1 < self.entries.len() {
                    self.focused += 1;
                }
                false
            }
            MinimapInput::FocusPrev => {
                self.focused = self.focused.saturating_sub(1);
                false
            }
        }
    }

    /// Jump to the entry at `index`.
    ///
    /// Missing entries and sections with no anchor are silent no-ops.
    pub fn activate(&mut self, index: usize, navigator: &mut dyn AnchorNavigator) -> bool {
        let Some(entry) = self.entries.get(index) else {
            return false;
        };
        let Some(offset) = navigator.locate(&entry.key) else {
            tracing::trace!(key = %entry.key, "No anchor for minimap entry");
            return false;
        };

        let key = entry.key.clone();
        navigator.scroll_to(offset, ScrollBehavior::Smooth);
        self.focused = index;
        self.set_active(key);
        true
    }

    pub fn entries(&self) -> &[MinimapEntry] {
        &self.entries
    }

    pub fn active(&self) -> Option<&SectionKey> {
        self.active.as_ref()
    }

    pub fn is_active(&self, index: usize) -> bool {
        match (self.entries.get(index), &self.active) {
            (Some(entry), Some(active)) => &entry.key == active,
            _ => false,
        }
    }

    /// Position of the highlighted entry
    pub fn active_index(&self) -> Option<usize> {
        let active = self.active.as_ref()?;
        self.entries.iter().position(|e| &e.key == active)
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Move keyboard focus onto the highlighted entry
    pub fn focus_active(&mut self) {
        if let Some(index) = self.active_index() {
            self.focused = index;
        }
    }

    fn set_active(&mut self, key: SectionKey) -> bool {
        if self.active.as_ref() == Some(&key) {
            return false;
        }
        self.active = Some(key);
        true
    }
}
