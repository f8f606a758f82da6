//! Attribute extraction: `CardRecord` → flat scoring inputs.

use serde::{Deserialize, Serialize};

use crate::cards::{BaseStats, CardRecord, Rarity, SpecialEffects, TrainingBonus};
use crate::core::{InvalidCardError, InvalidCardReason};

/// A card's attributes with every optional field defaulted.
///
/// Missing optional numbers read as zero and missing nested blocks as
/// empty. Only `rarity` and `baseStats` are required.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedAttributes {
    pub name: String,
    pub rarity: Rarity,
    pub base_stats: BaseStats,
    pub training_bonus: TrainingBonus,
    pub special_effects: SpecialEffects,
    pub appearance_rate: f64,
    pub type_match_preference: f64,
    pub initial_friendship: u32,
}

/// Validates card records and fills defaults.
pub struct AttributeExtractor;

impl AttributeExtractor {
    /// Normalize one card.
    ///
    /// Fails only when a required field is missing or the rarity is not one
    /// of the four known tiers.
    pub fn extract(name: &str, record: &CardRecord) -> Result<NormalizedAttributes, InvalidCardError> {
        let rarity = match record.rarity.as_deref() {
            None => return Err(InvalidCardError::new(name, InvalidCardReason::MissingRarity)),
            Some(text) => text.parse::<Rarity>().map_err(|unknown| {
                InvalidCardError::new(name, InvalidCardReason::UnknownRarity(unknown))
            })?,
        };

        let base_stats = record
            .base_stats
            .ok_or_else(|| InvalidCardError::new(name, InvalidCardReason::MissingBaseStats))?;

        Ok(NormalizedAttributes {
            name: name.to_string(),
            rarity,
            base_stats,
            training_bonus: record.training_bonus.unwrap_or_default(),
            special_effects: record.special_effect.clone().unwrap_or_default(),
            appearance_rate: record.appearance_rate.unwrap_or(0.0),
            type_match_preference: record.type_match_preference.unwrap_or(0.0),
            initial_friendship: record.initial_friendship.unwrap_or(0),
        })
    }
}
