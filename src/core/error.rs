//! Error types for the audit and rebalance paths.
//!
//! Errors are split by blast radius:
//!
//! - `InvalidCardError`: one card could not be scored. The card is excluded
//!   from its tier and listed in the report; the audit continues.
//! - `PatchFailure`: one rebalance edit could not be applied. The edit is
//!   skipped and listed; the batch continues.
//! - `BalanceError`: the run itself cannot continue (unreadable input,
//!   unparseable document, failed write-back).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a card record could not be turned into scoring inputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum InvalidCardReason {
    #[error("missing required field `rarity`")]
    MissingRarity,

    #[error("unknown rarity `{0}`")]
    UnknownRarity(String),

    #[error("missing required field `baseStats`")]
    MissingBaseStats,

    /// The record did not decode (wrong type, negative stat, and so on).
    #[error("malformed record: {0}")]
    Malformed(String),
}

/// A card could not be decoded or is missing a required field, and was
/// excluded from aggregation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("invalid card `{card}`: {reason}")]
pub struct InvalidCardError {
    /// Name of the offending card.
    pub card: String,

    /// What was wrong with it.
    pub reason: InvalidCardReason,
}

impl InvalidCardError {
    /// Create a new invalid-card error.
    #[must_use]
    pub fn new(card: impl Into<String>, reason: InvalidCardReason) -> Self {
        Self {
            card: card.into(),
            reason,
        }
    }
}

/// A single rebalance edit that was skipped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum PatchFailure {
    #[error("`{field}` block for `{card}` not found in source")]
    PatternNotFound { card: String, field: String },

    #[error("`{field}` block for `{card}` matched {occurrences} times in source")]
    AmbiguousPattern {
        card: String,
        field: String,
        occurrences: usize,
    },
}

impl PatchFailure {
    /// Name of the card the failed edit targeted.
    #[must_use]
    pub fn card(&self) -> &str {
        match self {
            PatchFailure::PatternNotFound { card, .. }
            | PatchFailure::AmbiguousPattern { card, .. } => card,
        }
    }
}

/// Fatal errors that abort a whole run.
#[derive(Debug, Error)]
pub enum BalanceError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {} ({pending_edits} edits not persisted): {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        pending_edits: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, BalanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_card_message() {
        let err = InvalidCardError::new("Fire", InvalidCardReason::MissingBaseStats);
        assert_eq!(
            err.to_string(),
            "invalid card `Fire`: missing required field `baseStats`"
        );
    }

    #[test]
    fn test_patch_failure_card() {
        let failure = PatchFailure::AmbiguousPattern {
            card: "Water".to_string(),
            field: "baseStats".to_string(),
            occurrences: 2,
        };
        assert_eq!(failure.card(), "Water");
        assert!(failure.to_string().contains("2 times"));
    }

    #[test]
    fn test_write_failure_reports_pending() {
        let err = BalanceError::WriteFailure {
            path: PathBuf::from("cards.js"),
            pending_edits: 3,
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("3 edits not persisted"));
    }
}
