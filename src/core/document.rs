//! Reading structured input documents (catalogs, edit lists).
//!
//! Documents are JSON or TOML, chosen by file extension.

use std::path::Path;

use serde::de::DeserializeOwned;

use super::error::{BalanceError, Result};

/// Serialization format of an input document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// `.toml` files are TOML; everything else is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Json,
        }
    }

    /// Parse `text` in this format.
    pub fn parse<T: DeserializeOwned>(self, text: &str) -> std::result::Result<T, String> {
        match self {
            DocumentFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            DocumentFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        }
    }
}

/// Read a whole file as UTF-8 text.
pub(crate) fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| BalanceError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a document, picking the format from the extension.
pub(crate) fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = read_text(path)?;
    DocumentFormat::from_path(path)
        .parse(&text)
        .map_err(|message| BalanceError::Parse {
            path: path.to_path_buf(),
            message,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(DocumentFormat::from_path(Path::new("edits.toml")), DocumentFormat::Toml);
        assert_eq!(DocumentFormat::from_path(Path::new("EDITS.TOML")), DocumentFormat::Toml);
        assert_eq!(DocumentFormat::from_path(Path::new("cards.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("cards")), DocumentFormat::Json);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_text(Path::new("/nonexistent/cards.json")).unwrap_err();
        assert!(matches!(err, BalanceError::Read { .. }));
    }
}
