//! # fusion-duel
//!
//! A two-player fusion card-battle engine with an alpha-beta search
//! opponent.
//!
//! ## Design Principles
//!
//! 1. **Validate, Then Mutate**: Every command checks all of its
//!    preconditions first. A rejected command leaves the match untouched.
//!
//! 2. **One Rules Path**: Human commands and AI actions go through the same
//!    `apply_action`, so the search simulates exactly the rules the match
//!    enforces.
//!
//! 3. **Events, Not Callbacks**: Commands return `MatchEvent`s. The display
//!    layer renders or polls; the engine never calls back into it.
//!
//! ## Architecture
//!
//! - **Cheap Clones**: Player zones are `im` persistent vectors and card
//!   definitions are shared behind `Arc`, so the search clones players at
//!   every node for O(1).
//!
//! - **Stable Card Identity**: Each card carries a `CardUid` that survives
//!   cloning, so a hypothetical future refers to the same card without
//!   matching names.
//!
//! - **Negamax**: One recursive search scores the position for the side to
//!   move; no separate maximizing and minimizing branches.
//!
//! ## Modules
//!
//! - `core`: Card uids, seats, players, actions, RNG, configuration, errors
//! - `cards`: Card definitions, instances, pools, and catalog ingress
//! - `fusion`: Fusion recipes and the fallback resolver
//! - `rules`: Battle arithmetic, action application, and the match engine
//! - `search`: Candidate generation, evaluation, and alpha-beta search

pub mod cards;
pub mod core;
pub mod fusion;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, ActionRecord, CardUid, CommandError, CommandResult, MatchConfig, Player,
    Seat, SeatMap, SetupError, ShuffleRng,
};

pub use crate::cards::{
    Attribute, Card, CardCatalog, CardDefinition, CardPool, CatalogId, CatalogSummary, Position,
};

pub use crate::fusion::{FusionResolver, FusionTable};

pub use crate::rules::{
    BattleOutcome, MatchEngine, MatchEvent, MatchSnapshot, Phase, TurnReport,
};

pub use crate::search::{ActionPolicy, SearchAgent, SearchConfig, SearchStats};
