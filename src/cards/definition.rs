//! Card records as supplied by the catalog.
//!
//! `CardRecord` mirrors the catalog's shape: every field is optional so a
//! malformed card can be reported and excluded without failing the whole
//! catalog load. Validation happens in `scoring::extractor`.

use serde::{Deserialize, Serialize};

use super::attributes::{BaseStats, EffectKind, SpecialEffects, TrainingBonus};
use super::rarity::Rarity;

/// Raw card record.
///
/// ## Example
///
/// ```
/// use ccg_balance::cards::{BaseStats, CardRecord, Rarity};
///
/// let fire = CardRecord::new(Rarity::Legendary, BaseStats::new(0, 70, 0, 10, 15))
///     .with_appearance_rate(0.30)
///     .with_type_match_preference(0.45)
///     .with_initial_friendship(40);
///
/// assert_eq!(fire.rarity.as_deref(), Some("Legendary"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardRecord {
    /// Rarity name. Kept as text so unknown tiers are reported per card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_stats: Option<BaseStats>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_bonus: Option<TrainingBonus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_effect: Option<SpecialEffects>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance_rate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_match_preference: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_friendship: Option<u32>,
}

impl CardRecord {
    /// Create a record with the two required fields set.
    #[must_use]
    pub fn new(rarity: Rarity, base_stats: BaseStats) -> Self {
        Self {
            rarity: Some(rarity.name().to_string()),
            base_stats: Some(base_stats),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_training_bonus(mut self, bonus: TrainingBonus) -> Self {
        self.training_bonus = Some(bonus);
        self
    }

    /// Add a special effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, kind: EffectKind, value: f64) -> Self {
        self.special_effect
            .get_or_insert_with(SpecialEffects::default)
            .insert(kind, value);
        self
    }

    #[must_use]
    pub fn with_appearance_rate(mut self, rate: f64) -> Self {
        self.appearance_rate = Some(rate);
        self
    }

    #[must_use]
    pub fn with_type_match_preference(mut self, preference: f64) -> Self {
        self.type_match_preference = Some(preference);
        self
    }

    #[must_use]
    pub fn with_initial_friendship(mut self, friendship: u32) -> Self {
        self.initial_friendship = Some(friendship);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_record_builder() {
        let card = CardRecord::new(Rarity::Rare, BaseStats::new(10, 20, 30, 0, 0))
            .with_training_bonus(TrainingBonus::new(5.0, 1.0, 10.0))
            .with_effect(EffectKind::RestBonus, 3.0)
            .with_initial_friendship(20);

        assert_eq!(card.rarity.as_deref(), Some("Rare"));
        assert_eq!(card.training_bonus.map(|b| b.total()), Some(16.0));
        assert_eq!(
            card.special_effect
                .as_ref()
                .and_then(|e| e.get(&EffectKind::RestBonus)),
            Some(&3.0)
        );
        assert_eq!(card.appearance_rate, None);
    }

    #[test]
    fn test_card_record_from_json() {
        let json = r#"{
            "rarity": "Legendary",
            "baseStats": { "HP": 0, "Attack": 70, "Defense": 0, "Instinct": 10, "Speed": 15 },
            "trainingBonus": { "typeMatch": 11, "otherStats": 1, "maxFriendshipTypeMatch": 29 },
            "appearanceRate": 0.30,
            "typeMatchPreference": 0.45,
            "initialFriendship": 40
        }"#;
        let card: CardRecord = serde_json::from_str(json).unwrap();

        assert_eq!(card.base_stats, Some(BaseStats::new(0, 70, 0, 10, 15)));
        assert_eq!(card.initial_friendship, Some(40));
        assert!(card.special_effect.is_none());
    }

    #[test]
    fn test_card_record_missing_fields_parse() {
        let card: CardRecord = serde_json::from_str(r#"{"appearanceRate": 0.5}"#).unwrap();
        assert!(card.rarity.is_none());
        assert!(card.base_stats.is_none());
    }

    #[test]
    fn test_card_record_serialization_skips_absent() {
        let card = CardRecord::new(Rarity::Common, BaseStats::default());
        let json = serde_json::to_string(&card).unwrap();
        assert!(!json.contains("appearanceRate"));

        let deserialized: CardRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
