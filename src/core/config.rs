//! Match configuration and rule constants.
//!
//! The rules themselves are fixed (life total, zone capacities). What a
//! caller configures is the deck size, the shuffle seed, what the snapshot
//! shows, and how hard the AI searches.

use serde::{Deserialize, Serialize};

use crate::search::SearchConfig;

/// Life points each player starts with.
pub const STARTING_LIFE: u32 = 8000;

/// Maximum cards in hand.
pub const HAND_LIMIT: usize = 5;

/// Maximum cards on the field.
pub const FIELD_LIMIT: usize = 5;

/// Cards drawn at match start.
pub const OPENING_HAND: usize = 5;

/// Smallest configurable deck.
pub const MIN_DECK_SIZE: usize = 10;

/// Largest configurable deck.
pub const MAX_DECK_SIZE: usize = 40;

/// Match configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Requested cards per deck. Clamped to `[MIN_DECK_SIZE, MAX_DECK_SIZE]`.
    pub deck_size: usize,

    /// Seed for deck shuffling. Same seed and pool produce the same decks.
    pub seed: u64,

    /// Number of most recent log lines a snapshot carries.
    pub log_window: usize,

    /// Show the AI's hand in snapshots instead of only its size.
    pub reveal_ai_hand: bool,

    /// AI search parameters.
    pub search: SearchConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            deck_size: 20,
            seed: 42,
            log_window: 100,
            reveal_ai_hand: false,
            search: SearchConfig::default(),
        }
    }
}

impl MatchConfig {
    /// Set the requested deck size.
    #[must_use]
    pub fn with_deck_size(mut self, deck_size: usize) -> Self {
        self.deck_size = deck_size;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the snapshot log window.
    #[must_use]
    pub fn with_log_window(mut self, lines: usize) -> Self {
        self.log_window = lines;
        self
    }

    /// Reveal the AI's hand in snapshots.
    #[must_use]
    pub fn revealing_ai_hand(mut self) -> Self {
        self.reveal_ai_hand = true;
        self
    }

    /// Set the AI search parameters.
    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Deck size after clamping to the legal range.
    #[must_use]
    pub fn clamped_deck_size(&self) -> usize {
        clamp_deck_size(self.deck_size)
    }
}

/// Clamp a requested deck size to `[MIN_DECK_SIZE, MAX_DECK_SIZE]`.
#[must_use]
pub fn clamp_deck_size(deck_size: usize) -> usize {
    deck_size.clamp(MIN_DECK_SIZE, MAX_DECK_SIZE)
}
