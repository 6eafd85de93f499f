//! Static state evaluation.
//!
//! Linear in five (mover minus opponent) differences: life, field power,
//! hand size, field size, and attack-position cards. Antisymmetric:
//! `evaluate(a, b) == -evaluate(b, a)`, which is what lets the search run
//! in negamax form.

use super::config::EvalWeights;
use crate::core::Player;

/// Score of the position from `player`'s point of view.
#[must_use]
pub fn evaluate(player: &Player, opponent: &Player, weights: &EvalWeights) -> f64 {
    let diff = |f: fn(&Player) -> f64| f(player) - f(opponent);

    weights.life * diff(|p| f64::from(p.life_points()))
        + weights.field_power * diff(|p| f64::from(p.field_power()))
        + weights.hand_size * diff(|p| p.hand().len() as f64)
        + weights.field_size * diff(|p| p.field().len() as f64)
        + weights.attackers * diff(|p| p.attackers_on_field() as f64)
}
