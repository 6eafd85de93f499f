//! Match events.
//!
//! Every successful command returns the events it caused. The display
//! layer renders them (their `Display` is the narrated log line) instead of
//! being called back by the engine.

use std::fmt;
use std::sync::Arc;

use super::battle::BattleReport;
use crate::cards::{CardDefinition, Position};
use crate::core::Seat;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchEvent {
    MatchStarted,
    TurnStarted { seat: Seat, turn: u32 },
    CardDrawn { seat: Seat, card: Arc<CardDefinition> },
    DrawFailed { seat: Seat },
    CardPlayed { seat: Seat, card: Arc<CardDefinition>, position: Position },
    PositionChanged { seat: Seat, card: Arc<CardDefinition>, position: Position },
    Fused {
        seat: Seat,
        first: Arc<CardDefinition>,
        second: Arc<CardDefinition>,
        result: Arc<CardDefinition>,
    },
    Battle { seat: Seat, report: BattleReport },
    DirectAttack { seat: Seat, attacker: Arc<CardDefinition>, damage: u32 },
    Passed { seat: Seat },
    MatchWon { winner: Seat },
}

impl MatchEvent {
    /// The seat that caused the event, if any.
    #[must_use]
    pub fn seat(&self) -> Option<Seat> {
        match self {
            MatchEvent::MatchStarted => None,
            MatchEvent::MatchWon { winner } => Some(*winner),
            MatchEvent::TurnStarted { seat, .. }
            | MatchEvent::CardDrawn { seat, .. }
            | MatchEvent::DrawFailed { seat }
            | MatchEvent::CardPlayed { seat, .. }
            | MatchEvent::PositionChanged { seat, .. }
            | MatchEvent::Fused { seat, .. }
            | MatchEvent::Battle { seat, .. }
            | MatchEvent::DirectAttack { seat, .. }
            | MatchEvent::Passed { seat } => Some(*seat),
        }
    }
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchEvent::MatchStarted => f.write_str("The match has begun. Your turn."),
            MatchEvent::TurnStarted { seat, turn } => write!(f, "--- Turn {turn}: {seat} ---"),
            // The AI's draws stay hidden.
            MatchEvent::CardDrawn { seat: Seat::Ai, .. } => f.write_str("AI drew a card."),
            MatchEvent::CardDrawn { seat, card } => write!(f, "{seat} drew {}", card.name),
            MatchEvent::DrawFailed { seat } => write!(f, "{seat} cannot draw."),
            MatchEvent::CardPlayed { seat, card, position } => write!(
                f,
                "{seat} summoned {} in {position} position (ATK: {}, DEF: {})",
                card.name, card.attack, card.defense
            ),
            MatchEvent::PositionChanged { seat, card, position } => {
                write!(f, "{seat} switched {} to {position} position", card.name)
            }
            MatchEvent::Fused {
                seat,
                first,
                second,
                result,
            } => write!(
                f,
                "{seat} fused {} + {} = {}",
                first.name, second.name, result.name
            ),
            MatchEvent::Battle { seat, report } => {
                let defender_seat = seat.opponent();
                let outcome = &report.outcome;
                write!(f, "{} attacks {}: ", report.attacker.name, report.defender.name)?;
                match (outcome.attacker_destroyed, outcome.defender_destroyed) {
                    (true, true) => f.write_str("both cards destroyed, no damage"),
                    (false, true) if outcome.defender_damage > 0 => write!(
                        f,
                        "{} destroyed! {defender_seat} loses {} LP",
                        report.defender.name, outcome.defender_damage
                    ),
                    (false, true) => write!(f, "{} destroyed (no damage)", report.defender.name),
                    (true, false) => write!(
                        f,
                        "{} destroyed! {seat} loses {} LP",
                        report.attacker.name, outcome.attacker_damage
                    ),
                    (false, false) if outcome.attacker_damage > 0 => write!(
                        f,
                        "attack repelled! {seat} loses {} LP",
                        outcome.attacker_damage
                    ),
                    (false, false) => write!(f, "{} holds, no damage", report.defender.name),
                }
            }
            MatchEvent::DirectAttack {
                seat,
                attacker,
                damage,
            } => write!(
                f,
                "Direct attack! {seat}'s {} deals {damage} damage",
                attacker.name
            ),
            MatchEvent::Passed { seat } => write!(f, "{seat} passed."),
            MatchEvent::MatchWon { winner } => write!(f, "{winner} wins the match!"),
        }
    }
}
