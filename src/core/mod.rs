//! Core engine types: card uids, seats and players, actions, RNG,
//! configuration, and errors.
//!
//! Everything here is independent of the rules. `rules` decides what an
//! action does; `core` only says what a player and an action are.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionKind, ActionList, ActionRecord};
pub use config::{
    clamp_deck_size, MatchConfig, FIELD_LIMIT, HAND_LIMIT, MAX_DECK_SIZE, MIN_DECK_SIZE,
    OPENING_HAND, STARTING_LIFE,
};
pub use entity::CardUid;
pub use error::{CommandError, CommandResult, SetupError};
pub use player::{Player, Seat, SeatMap};
pub use rng::ShuffleRng;
