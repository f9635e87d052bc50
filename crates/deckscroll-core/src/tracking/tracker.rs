//! Active-section and progress tracking
//!
//! [`track`] is a pure function of the measured layout and the viewport.
//! [`ScrollTracker`] wraps it in a mount / track / unmount lifecycle and
//! publishes the result on a `watch` channel, notifying subscribers only
//! when the state actually changes.

use tokio::sync::watch;

use super::layout::{DocumentLayout, Viewport};
use crate::document::SectionKey;

/// Published reading position
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    pub active_section: SectionKey,
    /// Always within `[0, 100]`
    pub progress_percent: f64,
}

/// Result of one tracking pass
#[derive(Debug, Clone, PartialEq)]
pub struct Tracked {
    /// `None` when no section qualifies; the caller keeps its previous value
    pub active_section: Option<SectionKey>,
    pub progress_percent: f64,
}

/// Scroll progress as a percentage of the scrollable distance.
///
/// A document no taller than the viewport has nothing to scroll and
/// reports 0.
pub fn progress_percent(document_height: u32, viewport: Viewport) -> f64 {
    if document_height <= viewport.height {
        return 0.0;
    }
    let scrollable = f64::from(document_height - viewport.height);
    (100.0 * f64::from(viewport.offset) / scrollable).clamp(0.0, 100.0)
}

/// Last section, in document order, whose top edge sits in the upper half
/// of the viewport: `0 <= top - offset < height / 2`.
pub fn active_section(layout: &DocumentLayout, viewport: Viewport) -> Option<&SectionKey> {
    let offset = i64::from(viewport.offset);
    let height = i64::from(viewport.height);
    layout
        .sections()
        .iter()
        .filter(|s| {
            let rel_top = i64::from(s.top) - offset;
            rel_top >= 0 && 2 * rel_top < height
        })
        .last()
        .map(|s| &s.key)
}

/// One tracking pass
pub fn track(layout: &DocumentLayout, viewport: Viewport) -> Tracked {
    Tracked {
        active_section: active_section(layout, viewport).cloned(),
        progress_percent: progress_percent(layout.height(), viewport),
    }
}

enum Phase {
    Idle,
    Tracking {
        layout: DocumentLayout,
        viewport: Viewport,
        sender: watch::Sender<ScrollState>,
    },
}

/// Owner of one document view's [`ScrollState`]
pub struct ScrollTracker {
    phase: Phase,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Start tracking and compute once immediately.
    ///
    /// Mounting while already tracking replaces the previous state; its
    /// subscribers observe the channel closing.
    pub fn mount(
        &mut self,
        initial: SectionKey,
        layout: DocumentLayout,
        viewport: Viewport,
    ) -> watch::Receiver<ScrollState> {
        let (sender, receiver) = watch::channel(ScrollState {
            active_section: initial,
            progress_percent: 0.0,
        });
        tracing::debug!(
            sections = layout.sections().len(),
            height = layout.height(),
            "Scroll tracker mounted"
        );
        self.phase = Phase::Tracking {
            layout,
            viewport,
            sender,
        };
        self.recompute();
        receiver
    }

    /// New receiver on the published state, `None` while idle
    pub fn subscribe(&self) -> Option<watch::Receiver<ScrollState>> {
        match &self.phase {
            Phase::Tracking { sender, .. } => Some(sender.subscribe()),
            Phase::Idle => None,
        }
    }

    /// Viewport moved. Returns whether the published state changed.
    pub fn on_viewport_moved(&mut self, new_viewport: Viewport) -> bool {
        match &mut self.phase {
            Phase::Tracking { viewport, .. } => *viewport = new_viewport,
            Phase::Idle => return false,
        }
        self.recompute()
    }

    /// Layout changed (content re-measured). Returns whether the published
    /// state changed.
    pub fn relayout(&mut self, new_layout: DocumentLayout, new_viewport: Viewport) -> bool {
        match &mut self.phase {
            Phase::Tracking {
                layout, viewport, ..
            } => {
                *layout = new_layout;
                *viewport = new_viewport;
            }
            Phase::Idle => return false,
        }
        self.recompute()
    }

    /// Current state, `None` while idle
    pub fn state(&self) -> Option<ScrollState> {
        match &self.phase {
            Phase::Tracking { sender, .. } => Some(sender.borrow().clone()),
            Phase::Idle => None,
        }
    }

    pub fn layout(&self) -> Option<&DocumentLayout> {
        match &self.phase {
            Phase::Tracking { layout, .. } => Some(layout),
            Phase::Idle => None,
        }
    }

    pub fn viewport(&self) -> Option<Viewport> {
        match &self.phase {
            Phase::Tracking { viewport, .. } => Some(*viewport),
            Phase::Idle => None,
        }
    }

    /// Stop tracking and drop the published state
    pub fn unmount(&mut self) {
        if matches!(self.phase, Phase::Tracking { .. }) {
            tracing::debug!("Scroll tracker unmounted");
        }
        self.phase = Phase::Idle;
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.phase, Phase::Tracking { .. })
    }

    fn recompute(&mut self) -> bool {
        let Phase::Tracking {
            layout,
            viewport,
            sender,
        } = &self.phase
        else {
            return false;
        };

        let tracked = track(layout, *viewport);
        sender.send_if_modified(|state| {
            let mut changed = false;
            if let Some(active) = tracked.active_section {
                if state.active_section != active {
                    tracing::debug!(from = %state.active_section, to = %active, "Active section changed");
                    state.active_section = active;
                    changed = true;
                }
            }
            if state.progress_percent != tracked.progress_percent {
                state.progress_percent = tracked.progress_percent;
                changed = true;
            }
            changed
        })
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}
