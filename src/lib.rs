//! # ccg-balance
//!
//! Power-budget auditing and bounded rebalancing for collectible cards.
//!
//! ## Design Principles
//!
//! 1. **Pure Scoring**: A card's power score is a deterministic function of
//!    its record. The catalog is passed in explicitly, never read from
//!    ambient state.
//!
//! 2. **Isolated Failures**: A malformed card is excluded from its tier and
//!    listed; a stale edit is skipped and listed. Neither aborts the run.
//!
//! 3. **Literal Patching**: Rebalancing rewrites exact text blocks so every
//!    untouched byte of the canonical source survives unchanged.
//!
//! ## Pipeline
//!
//! - Audit (read-only): `CardCatalog` → `AttributeExtractor` → `PowerScorer`
//!   → `TierAggregator` → `BalanceReporter`
//! - Rebalance (write): `EditList` → `Rebalancer` → canonical source
//!
//! ## Modules
//!
//! - `core`: Errors, configuration, document loading
//! - `cards`: Rarity tiers, attribute blocks, records, catalog
//! - `scoring`: Attribute extraction and the power model
//! - `analysis`: Tier statistics, outliers, report rendering
//! - `rebalance`: Edit lists and the source patcher

pub mod analysis;
pub mod cards;
pub mod core;
pub mod rebalance;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    AuditConfig, BalanceError, InvalidCardError, InvalidCardReason, PatchFailure, Result,
};

pub use crate::cards::{
    BaseStats, CardCatalog, CardRecord, EffectKind, Rarity, SpecialEffects, StatKey,
    TrainingBonus,
};

pub use crate::scoring::{AttributeExtractor, NormalizedAttributes, PowerScore, PowerScorer};

pub use crate::analysis::{
    audit, AuditReport, BalanceReporter, Direction, Outlier, Summary, TierAggregator,
    TierStatistics,
};

pub use crate::rebalance::{
    EditField, EditList, EditOutcome, RebalanceEdit, RebalanceSummary, Rebalancer,
};
