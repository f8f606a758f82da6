//! Card catalog: name → record mapping in document order.
//!
//! The catalog is handed to the scorer explicitly rather than read from
//! ambient state. Insertion order is preserved because tier leaderboards
//! break score ties by catalog position.
//!
//! Entries are decoded one at a time. An entry that does not decode as a
//! `CardRecord` is kept aside as a rejected card instead of failing the
//! whole catalog.

use std::fmt;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::document::load_document;
use crate::core::{InvalidCardError, InvalidCardReason, Result};

use super::definition::CardRecord;

/// Ordered collection of card records keyed by unique name.
///
/// ## Example
///
/// ```
/// use ccg_balance::cards::{BaseStats, CardCatalog, CardRecord, Rarity};
///
/// let mut catalog = CardCatalog::new();
/// catalog.insert("Fire", CardRecord::new(Rarity::Legendary, BaseStats::new(0, 70, 0, 10, 15)));
///
/// let found = catalog.get("Fire").unwrap();
/// assert_eq!(found.rarity.as_deref(), Some("Legendary"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardCatalog {
    cards: Vec<(String, CardRecord)>,
    index: FxHashMap<String, usize>,
    rejected: Vec<InvalidCardError>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a card.
    ///
    /// Re-inserting an existing name replaces its record but keeps its
    /// original position. Returns the replaced record, if any.
    pub fn insert(&mut self, name: impl Into<String>, record: CardRecord) -> Option<CardRecord> {
        let name = name.into();
        if let Some(&pos) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.cards[pos].1, record));
        }
        self.index.insert(name.clone(), self.cards.len());
        self.cards.push((name, record));
        None
    }

    /// Get a card record by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardRecord> {
        self.index.get(name).map(|&pos| &self.cards[pos].1)
    }

    /// Check if a card name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Entries that failed to decode, in document order.
    #[must_use]
    pub fn rejected(&self) -> &[InvalidCardError] {
        &self.rejected
    }

    /// Iterate over `(name, record)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CardRecord)> {
        self.cards.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Load a catalog from a JSON or TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let catalog: CardCatalog = load_document(path)?;
        tracing::info!(
            rejected = catalog.rejected.len(),
            "Loaded {} cards from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }
}

impl<N: Into<String>> FromIterator<(N, CardRecord)> for CardCatalog {
    fn from_iter<I: IntoIterator<Item = (N, CardRecord)>>(iter: I) -> Self {
        let mut catalog = CardCatalog::new();
        for (name, record) in iter {
            catalog.insert(name, record);
        }
        catalog
    }
}

impl Serialize for CardCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cards.len()))?;
        for (name, record) in &self.cards {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = CardCatalog;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of card name to card record")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut catalog = CardCatalog::new();
        while let Some((name, value)) = access.next_entry::<String, serde_json::Value>()? {
            match serde_json::from_value::<CardRecord>(value) {
                Ok(record) => {
                    catalog.insert(name, record);
                }
                Err(err) => {
                    let reason = InvalidCardReason::Malformed(err.to_string());
                    catalog.rejected.push(InvalidCardError::new(name, reason));
                }
            }
        }
        Ok(catalog)
    }
}

impl<'de> Deserialize<'de> for CardCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}
