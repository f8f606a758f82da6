//! Groups scored cards into rarity tiers and summarizes each tier.

use serde::{Deserialize, Serialize};

use crate::cards::Rarity;
use crate::scoring::PowerScore;

use super::stats::{AttributeProfile, Summary};

/// Statistics for one rarity tier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierStatistics {
    pub rarity: Rarity,

    /// Statistics of `adjusted_power` across members.
    pub summary: Summary,

    /// Mean of unadjusted `base_power`, for comparison with the adjusted mean.
    pub mean_base_power: f64,

    /// Mean raw attributes of the members.
    pub profile: AttributeProfile,

    /// Members sorted by `adjusted_power`, strongest first. Ties keep
    /// catalog order.
    pub members: Vec<PowerScore>,
}

impl TierStatistics {
    /// Build statistics for one tier. Returns `None` if `members` is empty.
    #[must_use]
    pub fn new(rarity: Rarity, mut members: Vec<PowerScore>) -> Option<Self> {
        let adjusted: Vec<f64> = members.iter().map(|m| m.adjusted_power).collect();
        let summary = Summary::from_values(&adjusted)?;
        let mean_base_power =
            members.iter().map(|m| m.base_power).sum::<f64>() / members.len() as f64;
        let profile = AttributeProfile::from_scores(&members);

        // Stable sort: equal scores stay in insertion order.
        members.sort_by(|a, b| b.adjusted_power.total_cmp(&a.adjusted_power));

        Some(Self {
            rarity,
            summary,
            mean_base_power,
            profile,
            members,
        })
    }

    /// Number of cards in the tier.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Mean `adjusted_power` of the tier.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.summary.mean
    }
}

/// Partitions scores by rarity.
pub struct TierAggregator;

impl TierAggregator {
    /// Group `scores` into tiers, rarest first. Tiers with no members are
    /// skipped.
    #[must_use]
    pub fn aggregate(scores: &[PowerScore]) -> Vec<TierStatistics> {
        Rarity::ALL
            .into_iter()
            .filter_map(|rarity| {
                let members: Vec<PowerScore> = scores
                    .iter()
                    .filter(|s| s.rarity == rarity)
                    .cloned()
                    .collect();
                let tier = TierStatistics::new(rarity, members)?;
                tracing::debug!(
                    tier = %rarity,
                    cards = tier.len(),
                    mean = tier.mean(),
                    "Aggregated tier"
                );
                Some(tier)
            })
            .collect()
    }
}
