//! Action application.
//!
//! `apply_action` is the single place an `Action` changes players. The
//! match engine calls it on the live players after its turn checks; the
//! search calls it on clones. Every check runs before the first mutation,
//! so an `Err` always leaves both players untouched.
//!
//! Turn ownership, the once-per-turn summon, and win detection belong to
//! the caller.

use std::sync::Arc;

use super::battle::resolve_battle;
use super::events::MatchEvent;
use crate::cards::{CardDefinition, CardPool};
use crate::core::{Action, CardUid, CommandError, CommandResult, Player, FIELD_LIMIT};
use crate::fusion::FusionResolver;

/// Apply `action` for `actor` against `opponent`.
pub fn apply_action(
    actor: &mut Player,
    opponent: &mut Player,
    action: &Action,
    resolver: &FusionResolver,
    fusion_pool: &CardPool,
) -> CommandResult<Vec<MatchEvent>> {
    let seat = actor.seat();
    match *action {
        Action::Play { card, position } => {
            let definition = actor
                .hand_card(card)
                .map(|c| Arc::clone(c.definition()))
                .ok_or(CommandError::NotInHand(card))?;
            if actor.field().len() >= FIELD_LIMIT {
                return Err(CommandError::FieldFull);
            }
            actor.play(card, position);
            Ok(vec![MatchEvent::CardPlayed {
                seat,
                card: definition,
                position,
            }])
        }

        Action::Attack { attacker, target } => {
            check_attacker(actor, attacker)?;
            if opponent.field_card(target).is_none() {
                return Err(CommandError::TargetNotOnField(target));
            }
            let report = resolve_battle(attacker, target, actor, opponent)
                .ok_or(CommandError::TargetNotOnField(target))?;
            Ok(vec![MatchEvent::Battle { seat, report }])
        }

        Action::DirectAttack { attacker } => {
            let definition = check_attacker(actor, attacker)?;
            if opponent.has_field_cards() {
                return Err(CommandError::OpponentHasDefenders);
            }
            let damage = definition.attack;
            opponent.take_damage(damage);
            Ok(vec![MatchEvent::DirectAttack {
                seat,
                attacker: definition,
                damage,
            }])
        }

        Action::Reposition { card } => {
            let definition = actor
                .field_card(card)
                .map(|c| Arc::clone(c.definition()))
                .ok_or(CommandError::NotOnField(card))?;
            let position = actor
                .toggle_position(card)
                .ok_or(CommandError::NotOnField(card))?;
            Ok(vec![MatchEvent::PositionChanged {
                seat,
                card: definition,
                position,
            }])
        }

        Action::Fuse { first, second } => {
            if first == second {
                return Err(CommandError::SameCard);
            }
            let a = actor.hand_card(first).ok_or(CommandError::NotInHand(first))?;
            let b = actor.hand_card(second).ok_or(CommandError::NotInHand(second))?;
            let result = resolver
                .resolve(a, b, fusion_pool)
                .ok_or(CommandError::NoFusion)?;
            let (first_def, second_def) = (Arc::clone(a.definition()), Arc::clone(b.definition()));

            actor
                .fuse_in_hand(first, second, Arc::clone(&result))
                .ok_or(CommandError::NoFusion)?;
            Ok(vec![MatchEvent::Fused {
                seat,
                first: first_def,
                second: second_def,
                result,
            }])
        }

        Action::Pass => Ok(vec![MatchEvent::Passed { seat }]),
    }
}

/// `attacker` is on `actor`'s field in attack position.
fn check_attacker(actor: &Player, attacker: CardUid) -> CommandResult<Arc<CardDefinition>> {
    let card = actor
        .field_card(attacker)
        .ok_or(CommandError::NotOnField(attacker))?;
    if !card.is_attacking() {
        return Err(CommandError::NotInAttackPosition(attacker));
    }
    Ok(Arc::clone(card.definition()))
}
