//! Card instances - runtime card state.
//!
//! A `Card` is one copy of a definition held by a player. Its only mutable
//! state is the battle `Position`; everything else is shared, immutable
//! definition data behind an `Arc`, so cloning a card is a refcount bump
//! plus two words.
//!
//! Zone membership is extrinsic: a card does not know its owner or zone.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::attributes::Attribute;
use super::definition::{CardDefinition, CatalogId};
use crate::core::entity::CardUid;

/// Battle stance of a card on the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[default]
    Attack,
    Defense,
}

impl Position {
    /// The other position.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Position::Attack => Position::Defense,
            Position::Defense => Position::Attack,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Attack => f.write_str("attack"),
            Position::Defense => f.write_str("defense"),
        }
    }
}

/// A card instance held by a player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    uid: CardUid,
    definition: Arc<CardDefinition>,
    position: Position,
}

impl Card {
    /// Create a card instance in attack position.
    #[must_use]
    pub fn new(uid: CardUid, definition: Arc<CardDefinition>) -> Self {
        Self {
            uid,
            definition,
            position: Position::Attack,
        }
    }

    #[must_use]
    pub fn uid(&self) -> CardUid {
        self.uid
    }

    /// Shared definition data.
    #[must_use]
    pub fn definition(&self) -> &Arc<CardDefinition> {
        &self.definition
    }

    #[must_use]
    pub fn catalog_id(&self) -> CatalogId {
        self.definition.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    #[must_use]
    pub fn attack(&self) -> u32 {
        self.definition.attack
    }

    #[must_use]
    pub fn defense(&self) -> u32 {
        self.definition.defense
    }

    #[must_use]
    pub fn level(&self) -> u8 {
        self.definition.level
    }

    #[must_use]
    pub fn attribute(&self) -> Attribute {
        self.definition.attribute
    }

    #[must_use]
    pub fn creature_type(&self) -> &str {
        &self.definition.creature_type
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Set the battle position.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Flip between attack and defense.
    pub fn toggle_position(&mut self) {
        self.position = self.position.toggled();
    }

    /// Stat that applies in the current position.
    #[must_use]
    pub fn power(&self) -> u32 {
        match self.position {
            Position::Attack => self.definition.attack,
            Position::Defense => self.definition.defense,
        }
    }

    #[must_use]
    pub fn is_attacking(&self) -> bool {
        self.position == Position::Attack
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.definition)
    }
}
