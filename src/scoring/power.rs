//! Power budget model.
//!
//! Converts normalized attributes into one comparable scalar:
//!
//! ```text
//! basePower     = baseStatsTotal + trainingBonusTotal + specialEffectPower
//! adjustedPower = basePower × appearance × typePreference × friendship
//! ```
//!
//! The weights are a fixed heuristic. They are reproduced exactly and are
//! not tunable.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{BaseStats, EffectKind, Rarity};

use super::extractor::NormalizedAttributes;

/// Share of the extra stat gain from a `statGainMultiplier` counted as power.
pub const STAT_GAIN_WEIGHT: f64 = 0.5;
pub const FAIL_RATE_WEIGHT: f64 = 133.0;
pub const BONUS_MATCH_WEIGHT: f64 = 100.0;
pub const FRIENDSHIP_GAIN_WEIGHT: f64 = 2.0;
pub const SKILL_POINT_WEIGHT: f64 = 40.0;
pub const MAX_ENERGY_WEIGHT: f64 = 0.5;
pub const ENERGY_REGEN_WEIGHT: f64 = 3.0;
pub const ENERGY_COST_WEIGHT: f64 = 5.0;
pub const REST_WEIGHT: f64 = 2.0;

/// Appearance rate with a neutral (1.0) modifier.
pub const APPEARANCE_PIVOT: f64 = 0.425;
pub const APPEARANCE_SLOPE: f64 = 0.6;

/// Type-match preference with a neutral (1.0) modifier.
pub const TYPE_PREFERENCE_PIVOT: f64 = 0.30;
pub const TYPE_PREFERENCE_SLOPE: f64 = 0.3;

/// Friendship at which the full friendship bonus applies.
pub const FRIENDSHIP_CAP: f64 = 60.0;
pub const FRIENDSHIP_SLOPE: f64 = 0.05;

/// Power contributed by one special effect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectContribution {
    pub kind: EffectKind,
    /// Raw magnitude from the card.
    pub value: f64,
    /// Power-equivalent of `value`.
    pub power: f64,
}

/// Score of one card with its full additive/multiplicative breakdown.
///
/// Recomputed on every run and never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowerScore {
    pub name: String,
    pub rarity: Rarity,
    pub base_stats: BaseStats,

    pub base_stats_total: f64,
    pub training_bonus_total: f64,
    pub special_effect_power: f64,
    /// Per-effect contributions in `EffectKind::ALL` order.
    pub effects: SmallVec<[EffectContribution; 4]>,
    pub base_power: f64,

    pub appearance_rate: f64,
    pub type_match_preference: f64,
    pub initial_friendship: u32,

    pub appearance_modifier: f64,
    pub type_preference_modifier: f64,
    pub friendship_modifier: f64,

    pub adjusted_power: f64,
}

impl PowerScore {
    /// Product of the three multiplicative modifiers.
    #[must_use]
    pub fn total_modifier(&self) -> f64 {
        self.appearance_modifier * self.type_preference_modifier * self.friendship_modifier
    }
}

/// Stateless power scorer.
///
/// ## Example
///
/// ```
/// use ccg_balance::cards::{BaseStats, CardRecord, Rarity};
/// use ccg_balance::scoring::{AttributeExtractor, PowerScorer};
///
/// let record = CardRecord::new(Rarity::Common, BaseStats::new(10, 10, 10, 10, 10))
///     .with_appearance_rate(0.425)
///     .with_type_match_preference(0.30);
/// let attrs = AttributeExtractor::extract("Plain", &record).unwrap();
/// let score = PowerScorer::score(&attrs);
///
/// assert_eq!(score.base_power, 50.0);
/// assert!((score.adjusted_power - 50.0).abs() < 1e-9);
/// ```
pub struct PowerScorer;

impl PowerScorer {
    /// Score one card. Pure: identical input always yields identical output.
    #[must_use]
    pub fn score(attrs: &NormalizedAttributes) -> PowerScore {
        let base_stats_total = attrs.base_stats.total();
        let training_bonus_total = attrs.training_bonus.total();

        // Fixed kind order keeps float summation deterministic regardless of
        // map iteration order.
        let effects: SmallVec<[EffectContribution; 4]> = EffectKind::ALL
            .into_iter()
            .filter_map(|kind| {
                attrs.special_effects.get(&kind).map(|&value| EffectContribution {
                    kind,
                    value,
                    power: effect_power(kind, value, base_stats_total),
                })
            })
            .collect();
        let special_effect_power: f64 = effects.iter().map(|e| e.power).sum();

        let base_power = base_stats_total + training_bonus_total + special_effect_power;

        let appearance_modifier = appearance_modifier(attrs.appearance_rate);
        let type_preference_modifier = type_preference_modifier(attrs.type_match_preference);
        let friendship_modifier = friendship_modifier(attrs.initial_friendship);

        let adjusted_power =
            base_power * appearance_modifier * type_preference_modifier * friendship_modifier;

        tracing::debug!(
            card = %attrs.name,
            base_power,
            adjusted_power,
            "Scored card"
        );

        PowerScore {
            name: attrs.name.clone(),
            rarity: attrs.rarity,
            base_stats: attrs.base_stats,
            base_stats_total,
            training_bonus_total,
            special_effect_power,
            effects,
            base_power,
            appearance_rate: attrs.appearance_rate,
            type_match_preference: attrs.type_match_preference,
            initial_friendship: attrs.initial_friendship,
            appearance_modifier,
            type_preference_modifier,
            friendship_modifier,
            adjusted_power,
        }
    }
}

/// Power-equivalent of one special effect.
#[must_use]
pub fn effect_power(kind: EffectKind, value: f64, base_stats_total: f64) -> f64 {
    match kind {
        EffectKind::StatGainMultiplier => base_stats_total * (value - 1.0) * STAT_GAIN_WEIGHT,
        EffectKind::FailRateReduction => value * FAIL_RATE_WEIGHT,
        EffectKind::BonusMatchChance => value * BONUS_MATCH_WEIGHT,
        EffectKind::FriendshipGainBonus => value * FRIENDSHIP_GAIN_WEIGHT,
        EffectKind::SkillPointMultiplier => (value - 1.0) * SKILL_POINT_WEIGHT,
        EffectKind::MaxEnergyBonus => value * MAX_ENERGY_WEIGHT,
        EffectKind::EnergyRegenBonus => value * ENERGY_REGEN_WEIGHT,
        EffectKind::EnergyCostReduction => value * ENERGY_COST_WEIGHT,
        EffectKind::RestBonus => value * REST_WEIGHT,
    }
}

/// Lower appearance rate ⇒ modifier above 1.
#[must_use]
pub fn appearance_modifier(appearance_rate: f64) -> f64 {
    1.0 + (APPEARANCE_PIVOT - appearance_rate) * APPEARANCE_SLOPE
}

#[must_use]
pub fn type_preference_modifier(type_match_preference: f64) -> f64 {
    1.0 + (type_match_preference - TYPE_PREFERENCE_PIVOT) * TYPE_PREFERENCE_SLOPE
}

#[must_use]
pub fn friendship_modifier(initial_friendship: u32) -> f64 {
    1.0 + (f64::from(initial_friendship) / FRIENDSHIP_CAP) * FRIENDSHIP_SLOPE
}
