//! Match rules: battle arithmetic, action application, events, and the
//! match state machine.
//!
//! ## Key Types
//!
//! - `BattleOutcome`: What a battle destroys and who loses life
//! - `MatchEvent`: Notification returned by every successful command
//! - `MatchEngine`: Turn cycle, human commands, and the AI turn
//! - `MatchSnapshot`: Read-only view for the display layer

pub mod apply;
pub mod battle;
pub mod engine;
pub mod events;

pub use apply::apply_action;
pub use battle::{battle_outcome, predict, resolve_battle, BattleOutcome, BattleReport};
pub use engine::{
    CardView, HandView, MatchEngine, MatchSnapshot, Phase, SideView, TurnReport,
};
pub use events::MatchEvent;
