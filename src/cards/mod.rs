//! Card data model: rarity tiers, attribute blocks, records and the catalog.
//!
//! ## Key Types
//!
//! - `Rarity`: Closed set of tiers, rarest first
//! - `BaseStats` / `TrainingBonus` / `SpecialEffects`: Attribute blocks
//! - `CardRecord`: One card as supplied by the catalog (fields optional)
//! - `CardCatalog`: Ordered name → record mapping

pub mod attributes;
pub mod catalog;
pub mod definition;
pub mod rarity;

pub use attributes::{BaseStats, EffectKind, SpecialEffects, StatKey, TrainingBonus};
pub use catalog::CardCatalog;
pub use definition::CardRecord;
pub use rarity::Rarity;
