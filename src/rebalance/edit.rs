//! Declarative rebalance edits.
//!
//! Edits are authored by a designer, not computed by the scorer. In TOML:
//!
//! ```toml
//! [[edit]]
//! card = "Fire"
//! field = "baseStats"
//! from = { HP = 0, Attack = 70, Defense = 0, Instinct = 10, Speed = 15 }
//! to = { HP = 0, Attack = 65, Defense = 0, Instinct = 10, Speed = 15 }
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cards::{BaseStats, TrainingBonus};
use crate::core::document::load_document;
use crate::core::Result;

use super::template;

/// Which attribute block an edit rewrites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditField {
    BaseStats,
    TrainingBonus,
}

impl EditField {
    /// Key of the block in the canonical source.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EditField::BaseStats => "baseStats",
            EditField::TrainingBonus => "trainingBonus",
        }
    }
}

impl fmt::Display for EditField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A before/after change to one attribute block of one card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "camelCase")]
pub enum RebalanceEdit {
    BaseStats {
        card: String,
        from: BaseStats,
        to: BaseStats,
    },
    TrainingBonus {
        card: String,
        from: TrainingBonus,
        to: TrainingBonus,
    },
}

impl RebalanceEdit {
    /// Edit a card's base stats.
    #[must_use]
    pub fn base_stats(card: impl Into<String>, from: BaseStats, to: BaseStats) -> Self {
        RebalanceEdit::BaseStats {
            card: card.into(),
            from,
            to,
        }
    }

    /// Edit a card's training bonus.
    #[must_use]
    pub fn training_bonus(card: impl Into<String>, from: TrainingBonus, to: TrainingBonus) -> Self {
        RebalanceEdit::TrainingBonus {
            card: card.into(),
            from,
            to,
        }
    }

    /// Name of the targeted card.
    #[must_use]
    pub fn card(&self) -> &str {
        match self {
            RebalanceEdit::BaseStats { card, .. } | RebalanceEdit::TrainingBonus { card, .. } => card,
        }
    }

    #[must_use]
    pub fn field(&self) -> EditField {
        match self {
            RebalanceEdit::BaseStats { .. } => EditField::BaseStats,
            RebalanceEdit::TrainingBonus { .. } => EditField::TrainingBonus,
        }
    }

    /// The `from` block as it must appear in the canonical source.
    #[must_use]
    pub fn from_literal(&self) -> String {
        match self {
            RebalanceEdit::BaseStats { from, .. } => template::base_stats_literal(from),
            RebalanceEdit::TrainingBonus { from, .. } => template::training_bonus_literal(from),
        }
    }

    /// The `to` block that replaces it.
    #[must_use]
    pub fn to_literal(&self) -> String {
        match self {
            RebalanceEdit::BaseStats { to, .. } => template::base_stats_literal(to),
            RebalanceEdit::TrainingBonus { to, .. } => template::training_bonus_literal(to),
        }
    }
}

/// A batch of edits, applied in order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EditList {
    #[serde(rename = "edit", default)]
    pub edits: Vec<RebalanceEdit>,
}

impl EditList {
    /// Load an edit list from a JSON or TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let list: EditList = load_document(path)?;
        tracing::info!("Loaded {} edits from {}", list.edits.len(), path.display());
        Ok(list)
    }
}

impl From<Vec<RebalanceEdit>> for EditList {
    fn from(edits: Vec<RebalanceEdit>) -> Self {
        Self { edits }
    }
}
