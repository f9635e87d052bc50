//! Icon registry
//!
//! Cards name their icon with a hyphenated key (`bar-chart`, `file-text`).
//! Keys resolve against a statically declared glyph table; anything not in
//! the table resolves to the default `box` icon.

use std::collections::HashMap;

/// Key of the registry-wide default icon
pub const DEFAULT_ICON_KEY: &str = "box";

/// Fallback key used by doc cards
pub const DOC_FALLBACK_ICON_KEY: &str = "file-text";

const DEFAULT_GLYPH: &str = "▣";

/// Built-in key to glyph table. Glyphs are single-column so card layout
/// stays predictable across terminals.
const BUILTIN_ICONS: &[(&str, &str)] = &[
    ("box", DEFAULT_GLYPH),
    ("file-text", "≣"),
    ("file", "▤"),
    ("brain", "◉"),
    ("bot", "◎"),
    ("search", "⌕"),
    ("target", "◎"),
    ("users", "☷"),
    ("user", "☺"),
    ("trending-up", "↗"),
    ("trending-down", "↘"),
    ("bar-chart", "▥"),
    ("line-chart", "∿"),
    ("pie-chart", "◔"),
    ("calendar", "▦"),
    ("clock", "◷"),
    ("check-circle", "✓"),
    ("check-circle-2", "✓"),
    ("check", "✓"),
    ("zap", "ϟ"),
    ("globe", "◍"),
    ("message-square", "✉"),
    ("message-circle", "✉"),
    ("mail", "✉"),
    ("database", "≋"),
    ("rocket", "➶"),
    ("lightbulb", "✺"),
    ("settings", "✲"),
    ("graduation-cap", "♜"),
    ("refresh-cw", "↻"),
    ("repeat", "⟲"),
    ("shopping-cart", "⊞"),
    ("dollar-sign", "$"),
    ("layers", "≡"),
    ("sparkles", "✧"),
    ("star", "★"),
    ("award", "✪"),
    ("network", "⋈"),
    ("tag", "⌗"),
    ("cpu", "▩"),
    ("code", "⌥"),
    ("cloud", "☁"),
    ("palette", "✎"),
    ("pen-tool", "✎"),
    ("edit", "✎"),
    ("megaphone", "◁"),
    ("layout", "▤"),
    ("filter", "⏷"),
    ("link", "∞"),
    ("heart", "♥"),
    ("shield", "◈"),
    ("lock", "◘"),
    ("eye", "◐"),
    ("arrow-right", "→"),
];

/// A resolved icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    /// Registry key the icon resolved to (not necessarily the requested key)
    pub key: String,
    pub glyph: String,
}

/// Key to glyph lookup table
#[derive(Debug, Clone)]
pub struct IconRegistry {
    glyphs: HashMap<String, String>,
}

impl IconRegistry {
    /// Registry with only the built-in table
    pub fn builtin() -> Self {
        let glyphs = BUILTIN_ICONS
            .iter()
            .map(|(key, glyph)| (key.to_string(), glyph.to_string()))
            .collect();
        Self { glyphs }
    }

    /// Built-in table with user glyph overrides (or additions) applied
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut registry = Self::builtin();
        for (key, glyph) in overrides {
            if glyph.is_empty() {
                tracing::warn!(key = %key, "Ignoring empty icon glyph override");
                continue;
            }
            registry.glyphs.insert(normalize(key), glyph.clone());
        }
        registry
    }

    /// Exact lookup, `None` when the key is unknown
    pub fn get(&self, key: &str) -> Option<Icon> {
        let key = normalize(key);
        self.glyphs.get(&key).map(|glyph| Icon {
            key,
            glyph: glyph.clone(),
        })
    }

    /// Resolve a key, falling back to the default icon
    pub fn resolve(&self, key: &str) -> Icon {
        self.resolve_or(key, DEFAULT_ICON_KEY)
    }

    /// Resolve a key, falling back to `fallback` and then the default icon
    pub fn resolve_or(&self, key: &str, fallback: &str) -> Icon {
        self.get(key)
            .or_else(|| {
                if !key.is_empty() {
                    tracing::debug!(key, fallback, "Unknown icon key, using fallback");
                }
                self.get(fallback)
            })
            .or_else(|| self.get(DEFAULT_ICON_KEY))
            .unwrap_or_else(|| Icon {
                key: DEFAULT_ICON_KEY.to_string(),
                glyph: DEFAULT_GLYPH.to_string(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.glyphs.contains_key(&normalize(key))
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Default for IconRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}
