//! The write path: apply designer-authored edits to the canonical source.
//!
//! ## Key Types
//!
//! - `RebalanceEdit`: Before/after values for one block of one card
//! - `EditList`: A batch of edits loaded from JSON or TOML
//! - `Rebalancer`: Applies a batch in memory and writes once
//! - `RebalanceSummary`: Per-edit outcomes and applied/skipped counts

pub mod edit;
pub mod patcher;
pub mod template;

pub use edit::{EditField, EditList, RebalanceEdit};
pub use patcher::{find_card_block, EditOutcome, EditReport, RebalanceSummary, Rebalancer};
