//! Card pools.
//!
//! A `CardPool` is an ordered, immutable list of definitions with a name
//! index. The engine holds two: the normal pool decks are dealt from, and
//! the fusion-result pool fusion outputs are drawn from.
//!
//! Pool order is significant: fusion tie-breaks fall back to it.

use std::collections::BTreeMap;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::attributes::Attribute;
use super::definition::CardDefinition;

/// Ordered list of card definitions with lookup by name.
///
/// ## Example
///
/// ```
/// use fusion_duel::cards::{CardDefinition, CardPool, CatalogId};
///
/// let pool = CardPool::new(vec![
///     CardDefinition::new(CatalogId::new(1), "Dark Sage", 2800, 3200),
///     CardDefinition::new(CatalogId::new(2), "Flame Champion", 1900, 1300),
/// ]);
///
/// assert_eq!(pool.len(), 2);
/// assert_eq!(pool.find_by_name("Dark Sage").unwrap().attack, 2800);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardPool {
    cards: Vec<Arc<CardDefinition>>,
    by_name: FxHashMap<String, usize>,
}

impl CardPool {
    /// Build a pool from definitions, keeping their order.
    ///
    /// When two definitions share a name, name lookup returns the first.
    #[must_use]
    pub fn new(definitions: impl IntoIterator<Item = CardDefinition>) -> Self {
        let cards: Vec<_> = definitions.into_iter().map(Arc::new).collect();
        let mut by_name = FxHashMap::default();
        for (index, card) in cards.iter().enumerate() {
            by_name.entry(card.name.clone()).or_insert(index);
        }
        Self { cards, by_name }
    }

    /// Get the number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over definitions in pool order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.iter()
    }

    /// All definitions as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Arc<CardDefinition>] {
        &self.cards
    }

    /// Get a definition by pool index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arc<CardDefinition>> {
        self.cards.get(index)
    }

    /// Find the first definition with an exact name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Arc<CardDefinition>> {
        self.by_name.get(name).map(|&index| &self.cards[index])
    }

    /// Case-insensitive substring search over names.
    #[must_use]
    pub fn search_name(&self, query: &str) -> Vec<&Arc<CardDefinition>> {
        let needle = query.to_lowercase();
        self.cards
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// The `count` highest-attack definitions, strongest first.
    #[must_use]
    pub fn strongest(&self, count: usize) -> Vec<&Arc<CardDefinition>> {
        let mut sorted: Vec<_> = self.cards.iter().collect();
        sorted.sort_by(|a, b| b.attack.cmp(&a.attack));
        sorted.truncate(count);
        sorted
    }

    /// Number of definitions per attribute.
    #[must_use]
    pub fn attribute_counts(&self) -> BTreeMap<Attribute, usize> {
        let mut counts = BTreeMap::new();
        for card in &self.cards {
            *counts.entry(card.attribute).or_insert(0) += 1;
        }
        counts
    }

    /// Number of definitions per creature type, most common first.
    ///
    /// Ties are ordered by type name.
    #[must_use]
    pub fn type_counts(&self) -> Vec<(String, usize)> {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.creature_type.as_str()).or_insert(0) += 1;
        }
        let mut sorted: Vec<_> = counts
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        sorted
    }
}

impl FromIterator<CardDefinition> for CardPool {
    fn from_iter<I: IntoIterator<Item = CardDefinition>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CatalogId;

    fn sample() -> CardPool {
        CardPool::new(vec![
            CardDefinition::new(CatalogId::new(1), "Silver Fang", 1200, 800)
                .with_attribute(Attribute::Earth)
                .with_type("Beast"),
            CardDefinition::new(CatalogId::new(2), "Dark Magician", 2500, 2100)
                .with_attribute(Attribute::Dark)
                .with_type("Spellcaster"),
            CardDefinition::new(CatalogId::new(3), "Dark Elf", 2000, 800)
                .with_attribute(Attribute::Dark)
                .with_type("Spellcaster"),
            CardDefinition::new(CatalogId::new(4), "Mountain Warrior", 600, 1000)
                .with_attribute(Attribute::Earth)
                .with_type("Beast-Warrior"),
        ])
    }

    #[test]
    fn test_find_by_name() {
        let pool = sample();
        assert_eq!(pool.find_by_name("Dark Elf").unwrap().id, CatalogId::new(3));
        assert!(pool.find_by_name("dark elf").is_none());
    }

    #[test]
    fn test_duplicate_name_returns_first() {
        let pool = CardPool::new(vec![
            CardDefinition::new(CatalogId::new(1), "Twin", 100, 100),
            CardDefinition::new(CatalogId::new(2), "Twin", 900, 900),
        ]);
        assert_eq!(pool.find_by_name("Twin").unwrap().id, CatalogId::new(1));
    }

    #[test]
    fn test_search_name() {
        let pool = sample();
        let found: Vec<_> = pool.search_name("dark").iter().map(|c| c.id.raw()).collect();
        assert_eq!(found, vec![2, 3]);
    }

    #[test]
    fn test_strongest() {
        let pool = sample();
        let names: Vec<_> = pool.strongest(2).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Dark Magician", "Dark Elf"]);
        assert_eq!(pool.strongest(10).len(), 4);
    }

    #[test]
    fn test_attribute_counts() {
        let counts = sample().attribute_counts();
        assert_eq!(counts[&Attribute::Dark], 2);
        assert_eq!(counts[&Attribute::Earth], 2);
        assert!(!counts.contains_key(&Attribute::Wind));
    }

    #[test]
    fn test_type_counts() {
        let counts = sample().type_counts();
        assert_eq!(counts[0], ("Spellcaster".to_string(), 2));
        assert_eq!(counts[1], ("Beast".to_string(), 1));
        assert_eq!(counts[2], ("Beast-Warrior".to_string(), 1));
    }
}
