//! Tier aggregation and balance reporting.
//!
//! ## Key Types
//!
//! - `Summary`: Population statistics (mean, variance, cv, ...)
//! - `TierStatistics`: One rarity tier with its sorted leaderboard
//! - `Outlier`: A card outside the tier tolerance
//! - `AuditReport`: Everything the audit path produces

pub mod aggregator;
pub mod audit;
pub mod report;
pub mod stats;

pub use aggregator::{TierAggregator, TierStatistics};
pub use audit::{audit, score_catalog, AuditReport};
pub use report::{is_outlier, relative_deviation, BalanceReporter, Direction, Outlier};
pub use stats::{AttributeProfile, Summary};
