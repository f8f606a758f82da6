//! The read-only audit path: extract → score → aggregate → flag.

use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, Rarity};
use crate::core::{AuditConfig, InvalidCardError};
use crate::scoring::{AttributeExtractor, PowerScore, PowerScorer};

use super::aggregator::{TierAggregator, TierStatistics};
use super::report::{BalanceReporter, Outlier};

/// Result of auditing a catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Tolerance the outliers were flagged with.
    pub tolerance: f64,
    /// Non-empty tiers, rarest first.
    pub tiers: Vec<TierStatistics>,
    pub outliers: Vec<Outlier>,
    /// Cards that could not be scored: undecodable entries first, then
    /// cards missing required fields, each in catalog order.
    pub excluded: Vec<InvalidCardError>,
}

impl AuditReport {
    /// Number of cards that made it into a tier.
    #[must_use]
    pub fn scored_count(&self) -> usize {
        self.tiers.iter().map(TierStatistics::len).sum()
    }

    /// Look up a tier.
    #[must_use]
    pub fn tier(&self, rarity: Rarity) -> Option<&TierStatistics> {
        self.tiers.iter().find(|t| t.rarity == rarity)
    }
}

/// Score every card in `catalog`, in catalog order.
///
/// Invalid cards are collected separately and never abort the run.
pub fn score_catalog(catalog: &CardCatalog) -> (Vec<PowerScore>, Vec<InvalidCardError>) {
    let mut scores = Vec::with_capacity(catalog.len());
    let mut excluded = Vec::new();

    for err in catalog.rejected() {
        tracing::warn!("Excluding card from audit: {}", err);
        excluded.push(err.clone());
    }
    for (name, record) in catalog.iter() {
        match AttributeExtractor::extract(name, record) {
            Ok(attrs) => scores.push(PowerScorer::score(&attrs)),
            Err(err) => {
                tracing::warn!("Excluding card from audit: {}", err);
                excluded.push(err);
            }
        }
    }
    (scores, excluded)
}

/// Run the full audit.
#[must_use]
pub fn audit(catalog: &CardCatalog, config: &AuditConfig) -> AuditReport {
    let (scores, excluded) = score_catalog(catalog);
    let tiers = TierAggregator::aggregate(&scores);
    let outliers = BalanceReporter::find_outliers(&tiers, config.tolerance);

    tracing::info!(
        scored = scores.len(),
        excluded = excluded.len(),
        tiers = tiers.len(),
        outliers = outliers.len(),
        "Audit complete"
    );

    AuditReport {
        tolerance: config.tolerance,
        tiers,
        outliers,
        excluded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{BaseStats, CardRecord};
    use crate::core::InvalidCardReason;

    #[test]
    fn test_invalid_cards_isolated() {
        let mut catalog = CardCatalog::new();
        catalog.insert("Good", CardRecord::new(Rarity::Common, BaseStats::new(1, 1, 1, 1, 1)));
        catalog.insert(
            "NoStats",
            CardRecord {
                rarity: Some("Common".to_string()),
                ..CardRecord::default()
            },
        );

        let report = audit(&catalog, &AuditConfig::default());

        assert_eq!(report.scored_count(), 1);
        assert_eq!(report.excluded.len(), 1);
        assert_eq!(report.excluded[0].card, "NoStats");
        assert_eq!(report.excluded[0].reason, InvalidCardReason::MissingBaseStats);
    }

    #[test]
    fn test_empty_catalog() {
        let report = audit(&CardCatalog::new(), &AuditConfig::default());
        assert!(report.tiers.is_empty());
        assert!(report.outliers.is_empty());
        assert_eq!(report.tolerance, 0.10);
    }

    #[test]
    fn test_report_serialization() {
        let mut catalog = CardCatalog::new();
        catalog.insert("A", CardRecord::new(Rarity::Rare, BaseStats::new(5, 5, 5, 5, 5)));

        let report = audit(&catalog, &AuditConfig::default());
        let json = serde_json::to_string(&report).unwrap();
        let deserialized: AuditReport = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.scored_count(), 1);
        assert!(deserialized.tier(Rarity::Rare).is_some());
    }
}
