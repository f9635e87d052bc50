//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

use std::time::Duration;

/// Paths and file names
pub mod ui {
    /// Config directory name (under the home directory)
    pub const CONFIG_DIR_NAME: &str = ".deckscroll";

    /// Logs subdirectory name
    pub const LOGS_DIR_NAME: &str = "logs";

    /// Log file name
    pub const LOG_FILE_NAME: &str = "deckscroll.log";

    /// Config file name
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Default theme name
    pub const DEFAULT_THEME: &str = "deck";
}

/// Section keys that receive bespoke embedded content
pub mod sections {
    /// Cover section, gets the hero visual
    pub const COVER: &str = "cover";

    /// Intro section, gets the funnel timeline
    pub const INTRO: &str = "intro";

    /// Model section, gets the platform diagram and features panel
    pub const MODEL: &str = "model";
}

/// Block layout defaults
pub mod layout {
    /// Column count used by `agents` blocks
    pub const AGENTS_COLUMNS: u16 = 3;

    /// Column count used when a grid omits `columns`
    pub const DEFAULT_GRID_COLUMNS: u16 = 3;

    /// Upper bound on grid columns
    pub const MAX_GRID_COLUMNS: u16 = 6;
}

/// Viewer timing
pub mod timing {
    use super::*;

    /// Frame interval for the event loop (~60fps)
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
}
