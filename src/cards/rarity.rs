//! Rarity tiers.
//!
//! Tiers are the comparison groups for balance auditing. The set is closed
//! and ordered from rarest to most common.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Rarity tier of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Legendary,
    Rare,
    Uncommon,
    Common,
}

impl Rarity {
    /// All tiers, rarest first. This is the report order.
    pub const ALL: [Rarity; 4] = [
        Rarity::Legendary,
        Rarity::Rare,
        Rarity::Uncommon,
        Rarity::Common,
    ];

    /// Canonical name as written in card data.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rarity::Legendary => "Legendary",
            Rarity::Rare => "Rare",
            Rarity::Uncommon => "Uncommon",
            Rarity::Common => "Common",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| s.to_string())
    }
}
