//! Card attribute blocks.
//!
//! A card carries three attribute groups that feed the power model:
//!
//! - `BaseStats`: five fixed stats (HP, Attack, Defense, Instinct, Speed)
//! - `TrainingBonus`: three optional training bonuses
//! - `SpecialEffects`: magnitudes keyed by a closed set of `EffectKind`s
//!
//! Field names and key order match the canonical card source, which the
//! rebalancer patches as literal text.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One of the five base stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKey {
    #[serde(rename = "HP")]
    Hp,
    Attack,
    Defense,
    Instinct,
    Speed,
}

impl StatKey {
    /// All stats in canonical source order.
    pub const ALL: [StatKey; 5] = [
        StatKey::Hp,
        StatKey::Attack,
        StatKey::Defense,
        StatKey::Instinct,
        StatKey::Speed,
    ];

    /// Key as written in the canonical source.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StatKey::Hp => "HP",
            StatKey::Attack => "Attack",
            StatKey::Defense => "Defense",
            StatKey::Instinct => "Instinct",
            StatKey::Speed => "Speed",
        }
    }
}

/// Base stat block. Missing keys read as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseStats {
    #[serde(rename = "HP")]
    pub hp: u32,
    #[serde(rename = "Attack")]
    pub attack: u32,
    #[serde(rename = "Defense")]
    pub defense: u32,
    #[serde(rename = "Instinct")]
    pub instinct: u32,
    #[serde(rename = "Speed")]
    pub speed: u32,
}

impl BaseStats {
    /// Create a stat block in canonical order.
    #[must_use]
    pub const fn new(hp: u32, attack: u32, defense: u32, instinct: u32, speed: u32) -> Self {
        Self {
            hp,
            attack,
            defense,
            instinct,
            speed,
        }
    }

    /// Get a single stat.
    #[must_use]
    pub const fn get(&self, key: StatKey) -> u32 {
        match key {
            StatKey::Hp => self.hp,
            StatKey::Attack => self.attack,
            StatKey::Defense => self.defense,
            StatKey::Instinct => self.instinct,
            StatKey::Speed => self.speed,
        }
    }

    /// Replace a single stat (builder pattern).
    #[must_use]
    pub fn with(mut self, key: StatKey, value: u32) -> Self {
        let slot = match key {
            StatKey::Hp => &mut self.hp,
            StatKey::Attack => &mut self.attack,
            StatKey::Defense => &mut self.defense,
            StatKey::Instinct => &mut self.instinct,
            StatKey::Speed => &mut self.speed,
        };
        *slot = value;
        self
    }

    /// Iterate `(key, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKey, u32)> + '_ {
        StatKey::ALL.into_iter().map(move |k| (k, self.get(k)))
    }

    /// Sum of all five stats.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, v)| f64::from(v)).sum()
    }
}

impl From<[u32; 5]> for BaseStats {
    fn from(v: [u32; 5]) -> Self {
        Self::new(v[0], v[1], v[2], v[3], v[4])
    }
}

/// Training bonus block. Each field defaults to zero when absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrainingBonus {
    pub type_match: f64,
    pub other_stats: f64,
    pub max_friendship_type_match: f64,
}

impl TrainingBonus {
    /// Create a training bonus block in canonical source order.
    #[must_use]
    pub const fn new(type_match: f64, other_stats: f64, max_friendship_type_match: f64) -> Self {
        Self {
            type_match,
            other_stats,
            max_friendship_type_match,
        }
    }

    /// `typeMatch + maxFriendshipTypeMatch + otherStats`.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.type_match + self.max_friendship_type_match + self.other_stats
    }
}

/// Kind of special effect a card may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EffectKind {
    StatGainMultiplier,
    FailRateReduction,
    BonusMatchChance,
    FriendshipGainBonus,
    SkillPointMultiplier,
    MaxEnergyBonus,
    EnergyRegenBonus,
    EnergyCostReduction,
    RestBonus,
}

impl EffectKind {
    /// All effect kinds, in the order contributions are accumulated.
    pub const ALL: [EffectKind; 9] = [
        EffectKind::StatGainMultiplier,
        EffectKind::FailRateReduction,
        EffectKind::BonusMatchChance,
        EffectKind::FriendshipGainBonus,
        EffectKind::SkillPointMultiplier,
        EffectKind::MaxEnergyBonus,
        EffectKind::EnergyRegenBonus,
        EffectKind::EnergyCostReduction,
        EffectKind::RestBonus,
    ];

    /// Key as written in card data.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EffectKind::StatGainMultiplier => "statGainMultiplier",
            EffectKind::FailRateReduction => "failRateReduction",
            EffectKind::BonusMatchChance => "bonusMatchChance",
            EffectKind::FriendshipGainBonus => "friendshipGainBonus",
            EffectKind::SkillPointMultiplier => "skillPointMultiplier",
            EffectKind::MaxEnergyBonus => "maxEnergyBonus",
            EffectKind::EnergyRegenBonus => "energyRegenBonus",
            EffectKind::EnergyCostReduction => "energyCostReduction",
            EffectKind::RestBonus => "restBonus",
        }
    }
}

/// Special effect magnitudes. Absent kinds contribute nothing.
pub type SpecialEffects = FxHashMap<EffectKind, f64>;
