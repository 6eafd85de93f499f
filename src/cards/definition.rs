//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable identity of a monster: catalog id,
//! name, stats, attribute, creature type, and art reference. It never
//! changes once loaded.
//!
//! Instance-specific data (uid, battle position) lives in `Card`, which
//! shares its definition behind an `Arc`.

use serde::{Deserialize, Serialize};

use super::attributes::Attribute;

/// Catalog identifier for a card definition.
///
/// This identifies the printed card (e.g., "Dark Magician"), not a specific
/// copy held by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogId(pub u32);

impl CatalogId {
    /// Create a new catalog ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CatalogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use fusion_duel::cards::{Attribute, CardDefinition, CatalogId};
///
/// let magician = CardDefinition::new(CatalogId::new(46986414), "Dark Magician", 2500, 2100)
///     .with_level(7)
///     .with_attribute(Attribute::Dark)
///     .with_type("Spellcaster");
///
/// assert_eq!(magician.attack, 2500);
/// assert_eq!(magician.creature_type, "Spellcaster");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Catalog identifier.
    pub id: CatalogId,

    /// Card name. Exact fusion recipes are keyed on names.
    pub name: String,

    /// Attack stat.
    pub attack: u32,

    /// Defense stat.
    pub defense: u32,

    /// Star level.
    pub level: u8,

    /// Element attribute.
    pub attribute: Attribute,

    /// Creature type ("Dragon", "Warrior", ...).
    pub creature_type: String,

    /// Art reference for the display layer.
    pub art: String,
}

impl CardDefinition {
    /// Create a definition with the given stats.
    ///
    /// Level defaults to 1, attribute to DARK, type to "Warrior", and the art
    /// reference to the catalog image path.
    #[must_use]
    pub fn new(id: CatalogId, name: impl Into<String>, attack: u32, defense: u32) -> Self {
        Self {
            id,
            name: name.into(),
            attack,
            defense,
            level: 1,
            attribute: Attribute::default(),
            creature_type: "Warrior".to_string(),
            art: Self::default_art(id),
        }
    }

    /// Catalog image path for a card id.
    #[must_use]
    pub fn default_art(id: CatalogId) -> String {
        format!("datos/imagenes/{}.jpg", id.0)
    }

    /// Set the level.
    #[must_use]
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    /// Set the attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attribute = attribute;
        self
    }

    /// Set the creature type.
    #[must_use]
    pub fn with_type(mut self, creature_type: impl Into<String>) -> Self {
        self.creature_type = creature_type.into();
        self
    }

    /// Set the art reference.
    #[must_use]
    pub fn with_art(mut self, art: impl Into<String>) -> Self {
        self.art = art.into();
        self
    }
}

impl std::fmt::Display for CardDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (ATK:{}/DEF:{})", self.name, self.attack, self.defense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_id() {
        let id = CatalogId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_defaults() {
        let card = CardDefinition::new(CatalogId::new(9), "Plain", 100, 200);
        assert_eq!(card.level, 1);
        assert_eq!(card.attribute, Attribute::Dark);
        assert_eq!(card.creature_type, "Warrior");
        assert_eq!(card.art, "datos/imagenes/9.jpg");
    }

    #[test]
    fn test_builder() {
        let card = CardDefinition::new(CatalogId::new(1), "Flame Swordsman", 1800, 1600)
            .with_level(5)
            .with_attribute(Attribute::Fire)
            .with_type("Warrior")
            .with_art("flame.jpg");

        assert_eq!(card.level, 5);
        assert_eq!(card.attribute, Attribute::Fire);
        assert_eq!(card.art, "flame.jpg");
        assert_eq!(card.to_string(), "Flame Swordsman (ATK:1800/DEF:1600)");
    }

    #[test]
    fn test_serialization() {
        let card = CardDefinition::new(CatalogId::new(1), "Test", 500, 400);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
