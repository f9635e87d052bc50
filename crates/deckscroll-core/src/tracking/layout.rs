//! Measured document geometry, in terminal rows

use crate::document::SectionKey;

/// One section's vertical extent within the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBox {
    pub key: SectionKey,
    /// Offset of the section's top edge from the document top
    pub top: u32,
    pub height: u32,
}

impl SectionBox {
    pub fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }
}

/// Section boxes in document order plus the total scrollable height
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentLayout {
    sections: Vec<SectionBox>,
    height: u32,
}

impl DocumentLayout {
    /// Stack sections top to bottom with no gaps
    pub fn sequential<I, K>(heights: I) -> Self
    where
        I: IntoIterator<Item = (K, u32)>,
        K: Into<SectionKey>,
    {
        let mut top = 0u32;
        let sections = heights
            .into_iter()
            .map(|(key, height)| {
                let section = SectionBox {
                    key: key.into(),
                    top,
                    height,
                };
                top = top.saturating_add(height);
                section
            })
            .collect();
        Self {
            sections,
            height: top,
        }
    }

    /// Layout from explicit boxes. The document height is at least the
    /// furthest section bottom, and may be larger.
    pub fn new(sections: Vec<SectionBox>, height: u32) -> Self {
        let extent = sections.iter().map(SectionBox::bottom).max().unwrap_or(0);
        Self {
            sections,
            height: height.max(extent),
        }
    }

    pub fn sections(&self) -> &[SectionBox] {
        &self.sections
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Anchor offset (top edge) of the first section with `key`
    pub fn anchor(&self, key: &SectionKey) -> Option<u32> {
        self.sections.iter().find(|s| &s.key == key).map(|s| s.top)
    }

    /// Section whose extent contains the document row `row`, with its
    /// position in document order
    pub fn section_at(&self, row: u32) -> Option<(usize, &SectionBox)> {
        self.sections
            .iter()
            .enumerate()
            .rev()
            .find(|(_, s)| s.top <= row && row < s.bottom())
    }
}

/// The visible window onto the document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Document row shown at the top of the viewport
    pub offset: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(offset: u32, height: u32) -> Self {
        Self { offset, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_stacks_sections() {
        let layout = DocumentLayout::sequential([("a", 10), ("b", 5), ("c", 20)]);
        let tops: Vec<u32> = layout.sections().iter().map(|s| s.top).collect();
        assert_eq!(tops, vec![0, 10, 15]);
        assert_eq!(layout.height(), 35);
        assert_eq!(layout.anchor(&"b".into()), Some(10));
        assert_eq!(layout.anchor(&"zzz".into()), None);
    }

    #[test]
    fn test_new_extends_height_to_content() {
        let layout = DocumentLayout::new(
            vec![SectionBox {
                key: "a".into(),
                top: 4,
                height: 10,
            }],
            8,
        );
        assert_eq!(layout.height(), 14);
    }

    #[test]
    fn test_section_at() {
        let layout = DocumentLayout::sequential([("a", 10), ("b", 0), ("c", 5)]);
        assert_eq!(layout.section_at(0).map(|(i, s)| (i, s.key.as_str())), Some((0, "a")));
        assert_eq!(layout.section_at(10).map(|(i, s)| (i, s.key.as_str())), Some((2, "c")));
        assert_eq!(layout.section_at(15), None);
    }
}
