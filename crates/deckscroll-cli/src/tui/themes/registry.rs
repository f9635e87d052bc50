//! Theme registry for discovering and accessing themes

use std::collections::HashMap;

use deckscroll_core::constants::ui::DEFAULT_THEME;

use super::Theme;

/// Registry of all available themes
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    ordered_names: Vec<String>,
    fallback: Theme,
}

impl ThemeRegistry {
    /// Create a new registry with all built-in themes
    pub fn new() -> Self {
        use super::definitions::*;

        let mut registry = Self {
            themes: HashMap::new(),
            ordered_names: Vec::new(),
            fallback: deck(),
        };

        registry.register(deck());
        registry.register(midnight());
        registry.register(paper());
        registry.register(terminal());

        registry
    }

    fn register(&mut self, theme: Theme) {
        self.ordered_names.push(theme.name.clone());
        self.themes.insert(theme.name.clone(), theme);
    }

    /// Get a theme by name, or the default theme
    pub fn get_or_default(&self, name: &str) -> &Theme {
        self.themes
            .get(name)
            .or_else(|| {
                tracing::warn!(theme = name, "Unknown theme, using {}", DEFAULT_THEME);
                self.themes.get(DEFAULT_THEME)
            })
            .unwrap_or(&self.fallback)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// List all themes in registration order
    pub fn list(&self) -> Vec<(&String, &Theme)> {
        self.ordered_names
            .iter()
            .filter_map(|name| self.themes.get(name).map(|theme| (name, theme)))
            .collect()
    }

    /// Theme after `current` in registration order, wrapping around
    pub fn next_name(&self, current: &str) -> &str {
        let next = self
            .ordered_names
            .iter()
            .position(|name| name == current)
            .map_or(0, |i| (i + 1) % self.ordered_names.len());
        self.ordered_names
            .get(next)
            .map_or(self.fallback.name.as_str(), String::as_str)
    }

    /// Get the number of registered themes
    pub fn count(&self) -> usize {
        self.themes.len()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_registered() {
        let registry = ThemeRegistry::new();
        assert!(registry.contains(DEFAULT_THEME));
        assert_eq!(registry.get_or_default("no-such-theme").name, DEFAULT_THEME);
        assert_eq!(registry.get_or_default("paper").name, "paper");
    }

    #[test]
    fn test_list_keeps_registration_order() {
        let registry = ThemeRegistry::new();
        let names: Vec<&str> = registry.list().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["deck", "midnight", "paper", "terminal"]);
        assert_eq!(registry.count(), 4);
    }

    #[test]
    fn test_next_name_wraps() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.next_name("deck"), "midnight");
        assert_eq!(registry.next_name("terminal"), "deck");
        assert_eq!(registry.next_name("unknown"), "deck");
    }
}
