//! Paint Cache
//!
//! Caches painted section lines so scrolling doesn't repaint every frame.

use std::collections::HashMap;
use std::sync::Arc;

use ratatui::text::Line;

/// Cache key: (section position, text width, carousel index)
type CacheKey = (usize, usize, usize);

/// Painted sections keyed by what their painting depends on
pub struct PaintCache {
    cache: HashMap<CacheKey, Arc<Vec<Line<'static>>>>,
    /// Max cache entries to prevent unbounded growth
    max_entries: usize,
}

impl Default for PaintCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintCache {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            max_entries: 512,
        }
    }

    /// Evict a fifth of the entries when full
    fn evict_if_full(&mut self) {
        if self.cache.len() >= self.max_entries {
            let remove_count = (self.max_entries / 5).max(1);
            let keys_to_remove: Vec<_> = self.cache.keys().take(remove_count).cloned().collect();
            for k in keys_to_remove {
                self.cache.remove(&k);
            }
        }
    }

    pub fn get(&self, section: usize, width: usize, carousel: usize) -> Option<Arc<Vec<Line<'static>>>> {
        self.cache.get(&(section, width, carousel)).cloned()
    }

    /// Cached lines, painting and storing them on a miss
    pub fn get_or_paint<F>(&mut self, section: usize, width: usize, carousel: usize, paint: F) -> Arc<Vec<Line<'static>>>
    where
        F: FnOnce() -> Vec<Line<'static>>,
    {
        if let Some(lines) = self.get(section, width, carousel) {
            return lines;
        }
        self.evict_if_full();
        let lines = Arc::new(paint());
        self.cache.insert((section, width, carousel), lines.clone());
        lines
    }

    /// Drop everything (document or theme changed)
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_skips_painting() {
        let mut cache = PaintCache::new();
        let first = cache.get_or_paint(0, 80, 0, || vec![Line::from("a")]);
        let second = cache.get_or_paint(0, 80, 0, || panic!("should be cached"));
        assert!(Arc::ptr_eq(&first, &second));

        cache.get_or_paint(0, 60, 0, || vec![Line::from("narrow")]);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_eviction_bounds_size() {
        let mut cache = PaintCache::new();
        for i in 0..2000 {
            cache.get_or_paint(i, 80, 0, Vec::new);
        }
        assert!(cache.len() <= 512);
    }
}
