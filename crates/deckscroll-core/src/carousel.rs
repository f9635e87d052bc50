//! Carousel navigator
//!
//! Bounded paging over a fixed-length item sequence. With `loop` enabled
//! prev/next wrap around; without it they clamp at either end. Both are
//! no-ops on an empty carousel.

/// Which edge of the visible window the current item is pinned to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

impl Align {
    /// Parse an alignment name; unknown names fall back to `Start`
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "center" | "centre" => Align::Center,
            "end" => Align::End,
            _ => Align::Start,
        }
    }
}

/// Paging configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselOptions {
    /// Wrap around at either end instead of clamping
    pub loop_items: bool,
    pub align: Align,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            loop_items: true,
            align: Align::Start,
        }
    }
}

/// Index state for one carousel instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
    options: CarouselOptions,
}

impl CarouselState {
    pub fn new(len: usize, options: CarouselOptions) -> Self {
        Self {
            index: 0,
            len,
            options,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn options(&self) -> CarouselOptions {
        self.options
    }

    /// Move to the previous item
    pub fn scroll_prev(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.options.loop_items {
            self.index = (self.index + self.len - 1) % self.len;
        } else {
            self.index = self.index.saturating_sub(1);
        }
    }

    /// Move to the next item
    pub fn scroll_next(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.options.loop_items {
            self.index = (self.index + 1) % self.len;
        } else {
            self.index = (self.index + 1).min(self.len - 1);
        }
    }

    pub fn can_scroll_prev(&self) -> bool {
        self.len > 1 && (self.options.loop_items || self.index > 0)
    }

    pub fn can_scroll_next(&self) -> bool {
        self.len > 1 && (self.options.loop_items || self.index + 1 < self.len)
    }

    /// Item indices shown when `per_view` items fit side by side.
    ///
    /// The current item sits at the start, middle or end of the window per
    /// the alignment. Looping carousels wrap the window; clamping ones keep
    /// it inside the item range.
    pub fn visible_window(&self, per_view: usize) -> Vec<usize> {
        if self.len == 0 {
            return Vec::new();
        }
        let per_view = per_view.clamp(1, self.len);
        let lead = match self.options.align {
            Align::Start => 0,
            Align::Center => per_view / 2,
            Align::End => per_view - 1,
        };

        if self.options.loop_items {
            let first = (self.index + self.len - lead % self.len) % self.len;
            (0..per_view).map(|i| (first + i) % self.len).collect()
        } else {
            let first = self
                .index
                .saturating_sub(lead)
                .min(self.len - per_view);
            (first..first + per_view).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looping(len: usize) -> CarouselState {
        CarouselState::new(len, CarouselOptions::default())
    }

    fn clamped(len: usize) -> CarouselState {
        CarouselState::new(
            len,
            CarouselOptions {
                loop_items: false,
                align: Align::Start,
            },
        )
    }

    #[test]
    fn test_next_then_prev_returns_to_start() {
        for len in 1..6 {
            let mut state = looping(len);
            for start in 0..len {
                while state.index() != start {
                    state.scroll_next();
                }
                state.scroll_next();
                state.scroll_prev();
                assert_eq!(state.index(), start);
            }
        }
    }

    #[test]
    fn test_loop_wraps_both_ways() {
        let mut state = looping(3);
        state.scroll_prev();
        assert_eq!(state.index(), 2);
        state.scroll_next();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_empty_carousel_is_noop() {
        let mut state = looping(0);
        state.scroll_next();
        state.scroll_prev();
        assert_eq!(state.index(), 0);
        assert!(state.visible_window(3).is_empty());

        let mut state = clamped(0);
        state.scroll_next();
        state.scroll_prev();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_clamp_without_loop() {
        let mut state = clamped(3);
        state.scroll_prev();
        assert_eq!(state.index(), 0);
        assert!(!state.can_scroll_prev());

        state.scroll_next();
        state.scroll_next();
        assert_eq!(state.index(), 2);
        assert!(!state.can_scroll_next());
        state.scroll_next();
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn test_visible_window_alignment() {
        let mut state = CarouselState::new(
            5,
            CarouselOptions {
                loop_items: true,
                align: Align::Center,
            },
        );
        assert_eq!(state.visible_window(3), vec![4, 0, 1]);
        state.scroll_next();
        assert_eq!(state.visible_window(3), vec![0, 1, 2]);

        let mut state = CarouselState::new(
            5,
            CarouselOptions {
                loop_items: false,
                align: Align::End,
            },
        );
        assert_eq!(state.visible_window(2), vec![0, 1]);
        for _ in 0..4 {
            state.scroll_next();
        }
        assert_eq!(state.visible_window(2), vec![3, 4]);
    }

    #[test]
    fn test_visible_window_clamps_per_view() {
        let state = looping(2);
        assert_eq!(state.visible_window(5), vec![0, 1]);
        assert_eq!(state.visible_window(0), vec![0]);
    }

    #[test]
    fn test_align_parse() {
        assert_eq!(Align::parse("center"), Align::Center);
        assert_eq!(Align::parse(" END "), Align::End);
        assert_eq!(Align::parse("start"), Align::Start);
        assert_eq!(Align::parse("diagonal"), Align::Start);
    }
}
