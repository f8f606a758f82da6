//! Balance reporting: outlier detection and plain-text rendering.
//!
//! Pure read/format step. Nothing here mutates scores or the catalog.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::cards::Rarity;

use super::aggregator::TierStatistics;
use super::audit::AuditReport;

/// Which side of the tier mean an outlier falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Overpowered,
    Underpowered,
}

impl Direction {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Direction::Overpowered => "OVER",
            Direction::Underpowered => "UNDER",
        }
    }
}

/// A card whose adjusted power strays too far from its tier mean.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outlier {
    pub name: String,
    pub rarity: Rarity,
    pub adjusted_power: f64,
    pub tier_mean: f64,
    /// Signed relative deviation (`(score - mean) / mean`).
    pub deviation: f64,
    pub direction: Direction,
}

impl Outlier {
    /// Signed deviation as a percentage.
    #[must_use]
    pub fn deviation_percent(&self) -> f64 {
        self.deviation * 100.0
    }
}

/// Signed relative deviation of `score` from `mean`. Zero when the mean is
/// not positive.
#[must_use]
pub fn relative_deviation(score: f64, mean: f64) -> f64 {
    if mean <= 0.0 {
        0.0
    } else {
        (score - mean) / mean
    }
}

/// Strictly greater than `tolerance`: a deviation equal to it is not flagged.
#[must_use]
pub fn is_outlier(score: f64, mean: f64, tolerance: f64) -> bool {
    relative_deviation(score, mean).abs() > tolerance
}

/// Width of a name column: the longest name or the header, in chars.
fn name_width<'a>(names: impl Iterator<Item = &'a str>, header: &str) -> usize {
    names
        .map(|n| n.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

/// Formats audit results.
pub struct BalanceReporter;

impl BalanceReporter {
    /// Flag members of each tier outside `tolerance`, in tier then
    /// leaderboard order.
    #[must_use]
    pub fn find_outliers(tiers: &[TierStatistics], tolerance: f64) -> Vec<Outlier> {
        let mut outliers = Vec::new();
        for tier in tiers {
            let mean = tier.mean();
            for member in &tier.members {
                if !is_outlier(member.adjusted_power, mean, tolerance) {
                    continue;
                }
                let deviation = relative_deviation(member.adjusted_power, mean);
                outliers.push(Outlier {
                    name: member.name.clone(),
                    rarity: tier.rarity,
                    adjusted_power: member.adjusted_power,
                    tier_mean: mean,
                    deviation,
                    direction: if deviation > 0.0 {
                        Direction::Overpowered
                    } else {
                        Direction::Underpowered
                    },
                });
            }
        }
        outliers
    }

    /// Render a leaderboard table for one tier.
    #[must_use]
    pub fn render_tier(tier: &TierStatistics) -> String {
        let mut out = String::new();
        let s = &tier.summary;

        let _ = writeln!(out, "=== {} ({} cards) ===", tier.rarity, tier.len());
        let _ = writeln!(
            out,
            "mean {:.1}  min {:.1}  max {:.1}  stddev {:.2}  cv {:.1}%  (raw mean {:.1})",
            s.mean, s.min, s.max, s.std_dev, s.cv_percent, tier.mean_base_power
        );
        let width = name_width(tier.members.iter().map(|m| m.name.as_str()), "Card");
        let _ = writeln!(
            out,
            "{:<width$} {:>6} {:>6} {:>7} {:>7} {:>6} {:>6} {:>6} {:>9}",
            "Card", "Stats", "Train", "Effect", "Raw", "App", "Type", "Friend", "Adjusted"
        );
        for m in &tier.members {
            let _ = writeln!(
                out,
                "{:<width$} {:>6.0} {:>6.0} {:>7.1} {:>7.1} {:>6.2} {:>6.2} {:>6} {:>9.1}",
                m.name,
                m.base_stats_total,
                m.training_bonus_total,
                m.special_effect_power,
                m.base_power,
                m.appearance_rate,
                m.type_match_preference,
                m.initial_friendship,
                m.adjusted_power
            );
        }
        out
    }

    /// Render mean raw attributes for one tier.
    #[must_use]
    pub fn render_profile(tier: &TierStatistics) -> String {
        let p = &tier.profile;
        let stats = p
            .base_stats
            .iter()
            .map(|(key, mean)| format!("{} {:.1}", key.name(), mean))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "  avg stats: {}\n  avg train {:.1}  effect {:.1}  app {:.3}  type {:.3}  friend {:.1}\n",
            stats,
            p.training_bonus_total,
            p.special_effect_power,
            p.appearance_rate,
            p.type_match_preference,
            p.initial_friendship
        )
    }

    /// Render the outlier section.
    #[must_use]
    pub fn render_outliers(outliers: &[Outlier], tolerance: f64) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Outliers (tolerance {:.1}%) ===", tolerance * 100.0);
        if outliers.is_empty() {
            out.push_str("none\n");
            return out;
        }
        let width = name_width(outliers.iter().map(|o| o.name.as_str()), "");
        for o in outliers {
            let _ = writeln!(
                out,
                "[{:<5}] {:<width$} {:<9} {:>9.1} vs mean {:>9.1} ({:+.1}%)",
                o.direction.label(),
                o.name,
                o.rarity.name(),
                o.adjusted_power,
                o.tier_mean,
                o.deviation_percent()
            );
        }
        out
    }

    /// Render the complete text report.
    #[must_use]
    pub fn render(report: &AuditReport, show_profiles: bool) -> String {
        let mut out = String::new();

        for tier in &report.tiers {
            out.push_str(&Self::render_tier(tier));
            if show_profiles {
                out.push_str(&Self::render_profile(tier));
            }
            out.push('\n');
        }

        out.push_str(&Self::render_outliers(&report.outliers, report.tolerance));

        if !report.excluded.is_empty() {
            let _ = writeln!(out, "\n=== Excluded cards ({}) ===", report.excluded.len());
            for err in &report.excluded {
                let _ = writeln!(out, "{}: {}", err.card, err.reason);
            }
        }
        out
    }
}
