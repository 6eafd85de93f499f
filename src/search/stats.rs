//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `choose_best_action` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Root candidates scored.
    pub root_candidates: u32,

    /// Nodes visited below the root, leaves included.
    pub nodes: u64,

    /// Static evaluations performed.
    pub leaves: u64,

    /// Alpha-beta cutoffs taken.
    pub cutoffs: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Average nodes explored per root candidate.
    #[must_use]
    pub fn avg_nodes_per_candidate(&self) -> f64 {
        if self.root_candidates == 0 {
            0.0
        } else {
            self.nodes as f64 / f64::from(self.root_candidates)
        }
    }
}
