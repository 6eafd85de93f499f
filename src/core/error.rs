//! Error types.
//!
//! `CommandError` covers illegal actions: a command that fails leaves the
//! match untouched, and the error's `Display` is the reason shown to the
//! player. `SetupError` covers match (re)initialization and catalog ingress.
//!
//! Running out of something (empty deck, no fusion for a pair) is not an
//! error at the `Player` level; those return `Option`/`bool`.

use thiserror::Error;

use super::entity::CardUid;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("It is not your turn")]
    NotYourTurn,

    #[error("The match is over")]
    MatchOver,

    #[error("Only one card may be summoned per turn")]
    AlreadySummoned,

    #[error("Card {0} is not in your hand")]
    NotInHand(CardUid),

    #[error("Card {0} is not on your field")]
    NotOnField(CardUid),

    #[error("Target {0} is not on the opponent's field")]
    TargetNotOnField(CardUid),

    #[error("Field is full (maximum 5 cards)")]
    FieldFull,

    #[error("Card {0} must be in attack position")]
    NotInAttackPosition(CardUid),

    #[error("The opponent has cards on the field")]
    OpponentHasDefenders,

    #[error("Fusion not available")]
    NoFusion,

    #[error("A card cannot be fused with itself")]
    SameCard,
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    #[error("Not enough cards to deal two decks: {available} available, {required} required")]
    InsufficientCards { available: usize, required: usize },

    #[error("Invalid catalog data: {0}")]
    Catalog(String),
}

pub type CommandResult<T> = std::result::Result<T, CommandError>;
