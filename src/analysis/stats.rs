//! Descriptive statistics over tier members.

use serde::{Deserialize, Serialize};

use crate::cards::StatKey;
use crate::scoring::PowerScore;

/// Population statistics of a set of values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Population variance (divides by N).
    pub variance: f64,
    pub std_dev: f64,
    /// Coefficient of variation as a percentage (`std_dev / mean × 100`).
    /// Zero when the mean is zero.
    pub cv_percent: f64,
}

impl Summary {
    /// Summarize `values`. Returns `None` for an empty slice.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let n = count as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let cv_percent = if mean == 0.0 {
            0.0
        } else {
            std_dev / mean * 100.0
        };

        Some(Self {
            count,
            mean,
            min,
            max,
            variance,
            std_dev,
            cv_percent,
        })
    }

    /// Spread between the strongest and weakest member.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Mean raw attributes of a tier, for spotting where power comes from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeProfile {
    /// Mean of each base stat, in canonical stat order.
    pub base_stats: Vec<(StatKey, f64)>,
    pub training_bonus_total: f64,
    pub special_effect_power: f64,
    pub appearance_rate: f64,
    pub type_match_preference: f64,
    pub initial_friendship: f64,
}

impl AttributeProfile {
    /// Average the raw attributes of `members`. Empty input gives an
    /// all-zero profile.
    #[must_use]
    pub fn from_scores(members: &[PowerScore]) -> Self {
        if members.is_empty() {
            return Self::default();
        }

        let n = members.len() as f64;
        let mean = |f: fn(&PowerScore) -> f64| members.iter().map(f).sum::<f64>() / n;

        Self {
            base_stats: StatKey::ALL
                .into_iter()
                .map(|key| {
                    let sum: f64 = members.iter().map(|m| f64::from(m.base_stats.get(key))).sum();
                    (key, sum / n)
                })
                .collect(),
            training_bonus_total: mean(|m| m.training_bonus_total),
            special_effect_power: mean(|m| m.special_effect_power),
            appearance_rate: mean(|m| m.appearance_rate),
            type_match_preference: mean(|m| m.type_match_preference),
            initial_friendship: mean(|m| f64::from(m.initial_friendship)),
        }
    }

    /// Mean value of one base stat.
    #[must_use]
    pub fn base_stat(&self, key: StatKey) -> f64 {
        self.base_stats
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(0.0, |(_, v)| *v)
    }
}
