//! Load-time error types
//!
//! Rendering and tracking never fail; only reading documents and config can.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type used across deckscroll.
pub type DeckResult<T> = Result<T, DeckError>;

/// deckscroll error type
#[derive(Debug, Error)]
pub enum DeckError {
    /// Document or config file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is not valid JSON for the content schema
    #[error("invalid document: {0}")]
    Document(#[from] serde_json::Error),

    /// Config file is not valid TOML
    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl DeckError {
    /// Build a [`DeckError::Read`] value.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn config(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Config {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_path() {
        let err = DeckError::read(
            "/nowhere/deck.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "failed to read /nowhere/deck.json: gone");
    }
}
