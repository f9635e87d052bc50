//! Viewer configuration, read from `~/.deckscroll/config.toml`

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::timing::FRAME_INTERVAL;
use crate::constants::ui::DEFAULT_THEME;
use crate::error::{DeckError, DeckResult};
use crate::icons::IconRegistry;
use crate::paths;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub theme: String,
    pub show_minimap: bool,
    /// Rows moved per line-scroll key or wheel notch
    pub scroll_step: u16,
    /// Animate jumps instead of landing instantly
    pub smooth_scroll: bool,
    /// Cards shown side by side in a carousel
    pub carousel_per_view: usize,
    pub frame_ms: u64,
    /// Glyph overrides, icon key to glyph
    pub icons: HashMap<String, String>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            show_minimap: true,
            scroll_step: 3,
            smooth_scroll: true,
            carousel_per_view: 3,
            frame_ms: FRAME_INTERVAL.as_millis() as u64,
            icons: HashMap::new(),
        }
    }
}

impl DeckConfig {
    /// Load the user config, falling back to defaults on any error
    pub fn load() -> Self {
        let path = paths::config_file();
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config: {}", e);
                Self::default()
            }
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> DeckResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|e| DeckError::read(path, e))?;
        let config: Self = toml::from_str(&text).map_err(|e| DeckError::config(path, e))?;
        tracing::info!(path = %path.display(), theme = %config.theme, "Loaded config");
        Ok(config)
    }

    /// Event loop tick, never faster than 1ms
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }

    /// Scroll step, at least one row
    pub fn scroll_step(&self) -> u32 {
        u32::from(self.scroll_step.max(1))
    }

    /// Icon registry with this config's glyph overrides applied
    pub fn icon_registry(&self) -> IconRegistry {
        if self.icons.is_empty() {
            IconRegistry::builtin()
        } else {
            IconRegistry::with_overrides(&self.icons)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeckConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, DeckConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"paper\"\nscroll_step = 5\n\n[icons]\nbrain = \"B\"").unwrap();

        let config = DeckConfig::load_from(file.path()).unwrap();
        assert_eq!(config.theme, "paper");
        assert_eq!(config.scroll_step(), 5);
        assert!(config.show_minimap);
        assert_eq!(config.icon_registry().resolve("brain").glyph, "B");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "theme = [unterminated").unwrap();

        let err = DeckConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, DeckError::Config { .. }));
    }

    #[test]
    fn test_clamped_accessors() {
        let config = DeckConfig {
            frame_ms: 0,
            scroll_step: 0,
            ..DeckConfig::default()
        };
        assert_eq!(config.frame_interval(), Duration::from_millis(1));
        assert_eq!(config.scroll_step(), 1);
    }
}
