//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::ActionKind;

/// Weights of the linear state evaluation.
///
/// Each weight multiplies a (mover minus opponent) difference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalWeights {
    pub life: f64,
    pub field_power: f64,
    pub hand_size: f64,
    pub field_size: f64,
    pub attackers: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            life: 2.0,
            field_power: 0.5,
            hand_size: 100.0,
            field_size: 150.0,
            attackers: 50.0,
        }
    }
}

/// Score added to a root candidate by action kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionBonuses {
    pub direct_attack: f64,
    pub attack: f64,
    pub play: f64,
    pub fuse: f64,
    pub reposition: f64,
}

impl Default for ActionBonuses {
    fn default() -> Self {
        Self {
            direct_attack: 500.0,
            attack: 100.0,
            play: 50.0,
            fuse: 0.0,
            reposition: 0.0,
        }
    }
}

impl ActionBonuses {
    #[must_use]
    pub fn for_kind(&self, kind: ActionKind) -> f64 {
        match kind {
            ActionKind::DirectAttack => self.direct_attack,
            ActionKind::Attack => self.attack,
            ActionKind::Play => self.play,
            ActionKind::Fuse => self.fuse,
            ActionKind::Reposition => self.reposition,
            ActionKind::Pass => 0.0,
        }
    }
}

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched, counting the root decision. 1 scores the root
    /// candidates by evaluation alone.
    pub depth: u32,

    /// Cap on candidates generated per node (branching factor).
    pub max_actions: usize,

    /// Fusion pairs considered per node, before the benefit filter.
    pub fusion_candidates: usize,

    /// Hand cards considered for summoning, strongest first.
    pub play_candidates: usize,

    /// A summon goes to attack when its attack exceeds the strongest enemy's
    /// attack times this margin.
    pub dominance_margin: f64,

    /// Rebound damage at or above which an attacker retreats to defense,
    /// and below which attacking a defender is tolerated.
    pub retreat_threshold: u32,

    /// Alpha-beta pruning. Off runs plain minimax with the same result.
    pub pruning: bool,

    pub weights: EvalWeights,

    pub bonuses: ActionBonuses,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            max_actions: 12,
            fusion_candidates: 3,
            play_candidates: 3,
            dominance_margin: 1.2,
            retreat_threshold: 300,
            pruning: true,
            weights: EvalWeights::default(),
            bonuses: ActionBonuses::default(),
        }
    }
}

impl SearchConfig {
    /// Set the search depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the per-node candidate cap.
    #[must_use]
    pub fn with_max_actions(mut self, max_actions: usize) -> Self {
        self.max_actions = max_actions;
        self
    }

    /// Enable or disable alpha-beta pruning.
    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }

    #[must_use]
    pub fn with_bonuses(mut self, bonuses: ActionBonuses) -> Self {
        self.bonuses = bonuses;
        self
    }
}
