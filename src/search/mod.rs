//! Adversarial search for the AI player.
//!
//! ## Key Types
//!
//! - `SearchAgent`: Picks one action per turn by depth-bounded negamax
//! - `SearchConfig`: Depth, branching caps, evaluation weights, bonuses
//! - `ActionPolicy`: The seam the match engine asks for AI actions
//!
//! ## Algorithm
//!
//! 1. Generate a small filtered candidate list (`movegen`)
//! 2. For each candidate, clone both players and apply it
//! 3. Search the opponent's replies with alpha-beta (`minimax`)
//! 4. Score leaves with a linear evaluation (`eval`)

pub mod agent;
pub mod config;
pub mod eval;
pub mod minimax;
pub mod movegen;
pub mod stats;

pub use agent::{ActionPolicy, SearchAgent};
pub use config::{ActionBonuses, EvalWeights, SearchConfig};
pub use eval::evaluate;
pub use minimax::{alpha_beta, minimax, search, SearchContext};
pub use movegen::{generate_actions, summon_position};
pub use stats::SearchStats;
