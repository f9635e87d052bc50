//! Main TUI application
//!
//! Core application state, document measurement and the event loop.
//! Handler implementations are in the handlers/ module.

use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use deckscroll_core::{
    render_document, CarouselState, DeckConfig, Document, DocumentLayout, IconRegistry, Minimap,
    ScrollTracker, SectionKey, SectionView,
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use crate::tui::components::{MinimapPanelState, Toast, ToastQueue};
use crate::tui::paint::{paint_section, PaintCache, PaintContext};
use crate::tui::state::{LayoutState, ViewportState};
use crate::tui::themes::{Theme, THEME_REGISTRY};

/// Columns of padding either side of the document text
pub const CONTENT_PAD_X: u16 = 2;

/// Narrowest text column painting is attempted at
const MIN_TEXT_WIDTH: u16 = 16;

/// Startup choices that override the config file
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    pub theme: Option<String>,
    /// Section to open on instead of the document's initial section
    pub section: Option<String>,
    pub hide_minimap: bool,
}

/// Size the current layout was measured at: (text width, viewport height)
type Measure = (u16, u16);

pub struct App {
    // Document
    pub document: Document,
    /// File the document was read from, used to resolve relative links
    pub source: Option<PathBuf>,
    pub views: Vec<SectionView>,
    /// Per-section carousel state, `None` for sections without a carousel
    pub carousels: Vec<Option<CarouselState>>,
    pub icons: IconRegistry,

    // Scrolling
    pub viewport: ViewportState,
    pub tracker: ScrollTracker,
    pub minimap: Minimap,
    pub minimap_panel: MinimapPanelState,

    // Rendering
    pub theme: Arc<Theme>,
    pub theme_name: String,
    pub paint_cache: PaintCache,
    pub layout: LayoutState,
    pub toasts: ToastQueue,
    measured: Option<Measure>,
    layout_dirty: bool,
    /// Section to jump to once the first layout is measured
    pending_section: Option<SectionKey>,

    pub config: DeckConfig,
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(document: Document, source: Option<PathBuf>, config: DeckConfig, options: ViewOptions) -> Self {
        let theme_name = options.theme.unwrap_or_else(|| config.theme.clone());
        let theme = Arc::new(THEME_REGISTRY.get_or_default(&theme_name).clone());
        let show_minimap = config.show_minimap && !options.hide_minimap;
        let icons = config.icon_registry();

        let mut app = Self {
            document: Document::default(),
            source: None,
            views: Vec::new(),
            carousels: Vec::new(),
            icons,
            viewport: ViewportState::new(),
            tracker: ScrollTracker::new(),
            minimap: Minimap::new(Vec::new()),
            minimap_panel: MinimapPanelState::new(show_minimap),
            theme_name: theme.name.clone(),
            theme,
            paint_cache: PaintCache::new(),
            layout: LayoutState::new(),
            toasts: ToastQueue::new(),
            measured: None,
            layout_dirty: true,
            pending_section: None,
            config,
            needs_redraw: true,
            should_quit: false,
        };
        app.set_document(document, source);
        if let Some(section) = options.section {
            app.pending_section = Some(section.into());
        }
        app
    }

    /// Replace the displayed document.
    ///
    /// Tracking stops here and restarts on the new document's initial
    /// section at the next layout pass.
    pub fn set_document(&mut self, document: Document, source: Option<PathBuf>) {
        self.tracker.unmount();
        self.views = render_document(&document, &self.icons);
        self.carousels = self
            .views
            .iter()
            .map(|view| {
                view.carousel()
                    .map(|c| CarouselState::new(c.cards.len(), c.options))
            })
            .collect();
        self.minimap = Minimap::from_document(&document);
        self.minimap_panel.scroll_offset = 0;
        self.minimap_panel.focused = false;
        self.viewport = ViewportState::new();
        self.paint_cache.clear();
        // An explicit initial section is where reading starts
        self.pending_section = document.initial_section.clone();
        self.layout_dirty = true;
        self.needs_redraw = true;

        tracing::info!(
            sections = document.sections.len(),
            source = ?source,
            "Document opened"
        );
        self.document = document;
        self.source = source;
    }

    /// Read `path` and display it. On failure the current document stays.
    pub fn load_document(&mut self, path: &Path) -> bool {
        match Document::load(path) {
            Ok(document) => {
                self.set_document(document, Some(path.to_path_buf()));
                true
            }
            Err(e) => {
                tracing::warn!("Failed to open {}: {}", path.display(), e);
                self.toasts.push(Toast::error(e.to_string()));
                false
            }
        }
    }

    /// Force re-measurement on the next frame (carousel paging, theme)
    pub fn invalidate_layout(&mut self) {
        self.layout_dirty = true;
        self.needs_redraw = true;
    }

    /// Text width painted into a content area of this width
    pub fn text_width(content_width: u16) -> u16 {
        content_width
            .saturating_sub(1 + CONTENT_PAD_X * 2)
            .max(MIN_TEXT_WIDTH)
    }

    pub fn paint_context(&self, width: u16) -> PaintContext<'_> {
        PaintContext {
            theme: &self.theme,
            icons: &self.icons,
            width: usize::from(width),
            per_view: self.config.carousel_per_view.max(1),
        }
    }

    fn carousel_index(&self, section: usize) -> usize {
        self.carousels
            .get(section)
            .and_then(Option::as_ref)
            .map_or(0, CarouselState::index)
    }

    /// Painted lines of section `index` at `width`, from the cache
    pub fn section_lines(&mut self, index: usize, width: u16) -> Arc<Vec<ratatui::text::Line<'static>>> {
        let carousel = self.carousel_index(index);
        let Some(view) = self.views.get(index) else {
            return Arc::new(Vec::new());
        };
        if let Some(lines) = self.paint_cache.get(index, usize::from(width), carousel) {
            return lines;
        }
        let ctx = self.paint_context(width);
        let state = self.carousels.get(index).and_then(Option::as_ref);
        let lines = paint_section(view, state, &ctx);
        self.paint_cache
            .get_or_paint(index, usize::from(width), carousel, move || lines)
    }

    /// Measure every section for the content area and feed the tracker.
    ///
    /// A section is at least one viewport tall, so each one reads as a
    /// slide. The first pass mounts the tracker; later passes keep the
    /// reader on the same section while the layout shifts underneath.
    pub fn refresh_layout(&mut self, content: Rect) {
        let width = Self::text_width(content.width);
        let height = content.height;
        if !self.layout_dirty && self.measured == Some((width, height)) {
            return;
        }

        let heights: Vec<(SectionKey, u32)> = (0..self.views.len())
            .map(|i| {
                let painted = self.section_lines(i, width).len() as u32;
                (self.views[i].key.clone(), painted.max(u32::from(height)))
            })
            .collect();
        let layout = DocumentLayout::sequential(heights);

        // Reading position relative to the top of the section under the
        // viewport's first row
        let anchor = self.tracker.layout().and_then(|old| {
            let offset = self.viewport.offset;
            let (_, section) = old.section_at(offset)?;
            Some((section.key.clone(), offset - section.top))
        });

        self.viewport.update_max_scroll(layout.height(), height);
        if let Some((key, delta)) = anchor {
            if let Some(top) = layout.anchor(&key) {
                self.viewport.scroll_to_line(top + delta);
            }
        }

        if self.tracker.is_tracking() {
            self.tracker.relayout(layout, self.viewport.viewport());
        } else {
            let initial = self
                .document
                .initial_section()
                .unwrap_or_else(|| SectionKey::new(""));
            let receiver = self.tracker.mount(initial, layout, self.viewport.viewport());
            self.minimap.attach(receiver);
        }

        if let Some(key) = self.pending_section.take() {
            self.jump_to_section(&key);
        }

        self.measured = Some((width, height));
        self.layout_dirty = false;
    }

    /// Land on `key` instantly. Unknown keys leave the viewport alone.
    pub fn jump_to_section(&mut self, key: &SectionKey) -> bool {
        let Some(top) = self.tracker.layout().and_then(|l| l.anchor(key)) else {
            tracing::warn!(section = %key, "No such section");
            self.toasts.push(Toast::error(format!("No section '{}'", key)));
            return false;
        };
        self.viewport.scroll_to_line(top);
        self.sync_scroll();
        true
    }

    /// Index of the section the tracker reports as active
    pub fn active_index(&self) -> Option<usize> {
        let state = self.tracker.state()?;
        self.document.position(state.active_section.as_str())
    }

    /// Run the TUI until the user quits
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        self.tracker.unmount();
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let mut event_stream = EventStream::new();
        let frame = self.config.frame_interval();

        loop {
            if self.tick() {
                self.needs_redraw = true;
            }

            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased; // Prefer events over timeout when both are ready

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => {
                            tracing::error!("Terminal event error: {}", e);
                            self.should_quit = true;
                        }
                        None => self.should_quit = true,
                    }
                }
                _ = tokio::time::sleep(frame) => {}
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                self.handle_key(key);
                self.needs_redraw = true;
            }
            Event::Mouse(mouse) => {
                self.handle_mouse_event(mouse);
                self.needs_redraw = true;
            }
            Event::Resize(_, _) => {
                self.needs_redraw = true;
            }
            _ => {}
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_first_layout_mounts_tracker() {
        let mut app = app();
        assert!(!app.tracker.is_tracking());

        let mut terminal = terminal(100, 30);
        draw(&mut app, &mut terminal);

        assert!(app.tracker.is_tracking());
        assert!(app.minimap.is_attached());
        assert_eq!(app.active_index(), Some(0));
        let layout = app.tracker.layout().unwrap();
        assert_eq!(layout.sections().len(), 4);
        // Every section is at least one viewport tall
        assert!(layout.sections().iter().all(|s| s.height >= 28));
    }

    #[test]
    fn test_initial_section_option() {
        let document = Document::from_json_str(DECK).unwrap();
        let options = ViewOptions {
            section: Some("closing".to_string()),
            ..ViewOptions::default()
        };
        let mut app = App::new(document, None, DeckConfig::default(), options);
        let mut terminal = terminal(100, 30);
        draw(&mut app, &mut terminal);

        assert_eq!(app.active_index(), Some(3));
        assert_eq!(app.minimap.active_index(), Some(3));
    }

    #[test]
    fn test_resize_keeps_active_section() {
        let mut app = app();
        let mut terminal = terminal(100, 30);
        draw(&mut app, &mut terminal);
        assert!(app.jump_to_section(&"cards".into()));

        let mut narrow = super::test_support::terminal(60, 20);
        draw(&mut app, &mut narrow);
        assert_eq!(app.active_index(), Some(2));
        let top = app.tracker.layout().unwrap().anchor(&"cards".into());
        assert_eq!(Some(app.viewport.offset), top);
    }

    #[test]
    fn test_relayout_above_active_section_keeps_position() {
        let mut app = app();
        let mut terminal = terminal(100, 30);
        draw(&mut app, &mut terminal);
        assert!(app.jump_to_section(&"closing".into()));

        // Scroll back into the previous section without changing width
        let closing_top = app.tracker.layout().unwrap().anchor(&"closing".into()).unwrap();
        let target = closing_top - app.viewport.height * 3 / 4;
        app.viewport.scroll_to_line(target);
        app.sync_scroll();
        draw(&mut app, &mut terminal);
        assert_eq!(app.viewport.offset, target);

        app.invalidate_layout();
        draw(&mut app, &mut terminal);
        assert_eq!(app.viewport.offset, target);
    }

    #[test]
    fn test_resize_keeps_offset_within_section() {
        let mut app = app();
        let mut terminal = terminal(100, 30);
        draw(&mut app, &mut terminal);
        let cards_top = app.tracker.layout().unwrap().anchor(&"cards".into()).unwrap();
        app.viewport.scroll_to_line(cards_top + 3);
        app.sync_scroll();

        let mut taller = super::test_support::terminal(100, 40);
        draw(&mut app, &mut taller);
        let cards_top = app.tracker.layout().unwrap().anchor(&"cards".into()).unwrap();
        assert_eq!(app.viewport.offset, cards_top + 3);
    }

    #[test]
    fn test_unknown_section_jump_is_reported() {
        let mut app = app();
        let mut terminal = terminal(100, 30);
        draw(&mut app, &mut terminal);

        let before = app.viewport.offset;
        assert!(!app.jump_to_section(&"ghost".into()));
        assert_eq!(app.viewport.offset, before);
        assert!(!app.toasts.is_empty());
    }

    #[test]
    fn test_load_failure_keeps_document() {
        let mut app = app();
        let dir = tempfile::tempdir().unwrap();
        assert!(!app.load_document(&dir.path().join("missing.json")));
        assert_eq!(app.document.sections.len(), 4);
        assert!(!app.toasts.is_empty());
    }

    #[test]
    fn test_load_document_remounts() {
        let mut app = app();
        let mut terminal = terminal(100, 30);
        draw(&mut app, &mut terminal);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("other.json");
        std::fs::write(
            &path,
            r#"{"initialSection": "b", "sections": [{"id": "a"}, {"id": "b"}]}"#,
        )
        .unwrap();

        assert!(app.load_document(&path));
        assert!(!app.tracker.is_tracking());
        assert!(!app.minimap.is_attached());

        draw(&mut app, &mut terminal);
        assert!(app.tracker.is_tracking());
        assert_eq!(
            app.tracker.state().map(|s| s.active_section),
            Some(SectionKey::from("b"))
        );
        assert_eq!(app.source.as_deref(), Some(path.as_path()));
    }
}
