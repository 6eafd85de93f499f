//! Battle arithmetic.
//!
//! ## Attack-position defender
//!
//! | Comparison | Destroyed | Life loss |
//! |------------|-----------|-----------|
//! | atk > atk  | defender  | defender's owner, by the difference |
//! | atk < atk  | attacker  | attacker's owner, by the difference |
//! | equal      | both      | none |
//!
//! ## Defense-position defender
//!
//! | Comparison | Destroyed | Life loss |
//! |------------|-----------|-----------|
//! | atk > def  | defender  | none |
//! | atk < def  | none      | attacker's owner, by the difference |
//! | equal      | none      | none |
//!
//! The same rules apply whichever seat attacks.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardDefinition, Position};
use crate::core::{CardUid, Player};

/// What a single battle does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub attacker_destroyed: bool,
    pub defender_destroyed: bool,
    /// Life lost by the attacker's owner.
    pub attacker_damage: u32,
    /// Life lost by the defender's owner.
    pub defender_damage: u32,
}

impl BattleOutcome {
    /// Neither card destroyed and no damage.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        *self == Self::default()
    }
}

/// Outcome of `attack` striking a defender with the given stats.
#[must_use]
pub fn battle_outcome(
    attack: u32,
    defender_attack: u32,
    defender_defense: u32,
    defender_position: Position,
) -> BattleOutcome {
    match defender_position {
        Position::Attack => match attack.cmp(&defender_attack) {
            std::cmp::Ordering::Greater => BattleOutcome {
                defender_destroyed: true,
                defender_damage: attack - defender_attack,
                ..BattleOutcome::default()
            },
            std::cmp::Ordering::Less => BattleOutcome {
                attacker_destroyed: true,
                attacker_damage: defender_attack - attack,
                ..BattleOutcome::default()
            },
            std::cmp::Ordering::Equal => BattleOutcome {
                attacker_destroyed: true,
                defender_destroyed: true,
                ..BattleOutcome::default()
            },
        },
        Position::Defense => match attack.cmp(&defender_defense) {
            std::cmp::Ordering::Greater => BattleOutcome {
                defender_destroyed: true,
                ..BattleOutcome::default()
            },
            std::cmp::Ordering::Less => BattleOutcome {
                attacker_damage: defender_defense - attack,
                ..BattleOutcome::default()
            },
            std::cmp::Ordering::Equal => BattleOutcome::default(),
        },
    }
}

/// Outcome of `attacker` striking `defender` in its current position.
#[must_use]
pub fn predict(attacker: &Card, defender: &Card) -> BattleOutcome {
    battle_outcome(
        attacker.attack(),
        defender.attack(),
        defender.defense(),
        defender.position(),
    )
}

/// A resolved battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleReport {
    pub attacker: Arc<CardDefinition>,
    pub defender: Arc<CardDefinition>,
    pub defender_position: Position,
    pub outcome: BattleOutcome,
}

/// Fight `attacker_uid` (on `attacker_owner`'s field) against
/// `defender_uid` (on `defender_owner`'s field) and apply the result.
///
/// Returns `None` with no effect if either card is not on its owner's field.
pub fn resolve_battle(
    attacker_uid: CardUid,
    defender_uid: CardUid,
    attacker_owner: &mut Player,
    defender_owner: &mut Player,
) -> Option<BattleReport> {
    let attacker = attacker_owner.field_card(attacker_uid)?;
    let defender = defender_owner.field_card(defender_uid)?;

    let report = BattleReport {
        attacker: Arc::clone(attacker.definition()),
        defender: Arc::clone(defender.definition()),
        defender_position: defender.position(),
        outcome: predict(attacker, defender),
    };

    let outcome = report.outcome;
    if outcome.defender_destroyed {
        defender_owner.remove_from_field(defender_uid);
    }
    if outcome.attacker_destroyed {
        attacker_owner.remove_from_field(attacker_uid);
    }
    defender_owner.take_damage(outcome.defender_damage);
    attacker_owner.take_damage(outcome.attacker_damage);

    Some(report)
}
