//! Action representation.
//!
//! An `Action` is one thing a player can do on their turn. Card arguments
//! are uids: `Play`, `Reposition`, `Fuse` and the attacker of an attack
//! refer to the actor's own cards, `Attack::target` to the opponent's.
//!
//! The engine validates and applies actions for the human; the search
//! generates them for the AI and applies them to cloned players. Both go
//! through the same rules code, so a generated action is legal by
//! construction.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::CardUid;
use super::player::Seat;
use crate::cards::Position;

/// A complete game action.
///
/// ```
/// use fusion_duel::core::{Action, ActionKind, CardUid};
/// use fusion_duel::cards::Position;
///
/// let play = Action::Play { card: CardUid::new(3), position: Position::Attack };
/// assert_eq!(play.kind(), ActionKind::Play);
/// assert!(ActionKind::DirectAttack.priority() < ActionKind::Play.priority());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Summon a hand card in the given position. Once per turn.
    Play { card: CardUid, position: Position },
    /// Battle an opponent's field card.
    Attack { attacker: CardUid, target: CardUid },
    /// Hit the opponent's life points; only with an empty opposing field.
    DirectAttack { attacker: CardUid },
    /// Flip a field card between attack and defense.
    Reposition { card: CardUid },
    /// Combine two hand cards into a fusion result.
    Fuse { first: CardUid, second: CardUid },
    /// Do nothing.
    Pass,
}

impl Action {
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Play { .. } => ActionKind::Play,
            Action::Attack { .. } => ActionKind::Attack,
            Action::DirectAttack { .. } => ActionKind::DirectAttack,
            Action::Reposition { .. } => ActionKind::Reposition,
            Action::Fuse { .. } => ActionKind::Fuse,
            Action::Pass => ActionKind::Pass,
        }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Action::Pass)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play { card, position } => write!(f, "play {card} in {position}"),
            Action::Attack { attacker, target } => write!(f, "attack {target} with {attacker}"),
            Action::DirectAttack { attacker } => write!(f, "direct attack with {attacker}"),
            Action::Reposition { card } => write!(f, "reposition {card}"),
            Action::Fuse { first, second } => write!(f, "fuse {first} + {second}"),
            Action::Pass => f.write_str("pass"),
        }
    }
}

/// Action category, used to order candidates at the search root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    DirectAttack,
    Play,
    Fuse,
    Attack,
    Reposition,
    Pass,
}

impl ActionKind {
    /// Root ordering rank; lower is tried first.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            ActionKind::DirectAttack => 0,
            ActionKind::Play => 1,
            ActionKind::Fuse => 2,
            ActionKind::Attack => 3,
            ActionKind::Reposition => 4,
            ActionKind::Pass => 5,
        }
    }
}

/// Candidate list. Inline capacity covers the default `max_actions`.
pub type ActionList = SmallVec<[Action; 12]>;

/// An applied action with the seat and turn it happened on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: Seat,
    pub action: Action,
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(seat: Seat, action: Action, turn: u32) -> Self {
        Self { seat, action, turn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let uid = CardUid::new(1);
        assert_eq!(Action::Reposition { card: uid }.kind(), ActionKind::Reposition);
        assert_eq!(
            Action::Fuse { first: uid, second: uid.next() }.kind(),
            ActionKind::Fuse
        );
        assert_eq!(Action::Pass.kind(), ActionKind::Pass);
        assert!(Action::Pass.is_pass());
    }

    #[test]
    fn test_priority_order() {
        let mut kinds = vec![
            ActionKind::Pass,
            ActionKind::Attack,
            ActionKind::Fuse,
            ActionKind::DirectAttack,
            ActionKind::Reposition,
            ActionKind::Play,
        ];
        kinds.sort_by_key(|k| k.priority());
        assert_eq!(
            kinds,
            vec![
                ActionKind::DirectAttack,
                ActionKind::Play,
                ActionKind::Fuse,
                ActionKind::Attack,
                ActionKind::Reposition,
                ActionKind::Pass,
            ]
        );
    }

    #[test]
    fn test_display() {
        let attack = Action::Attack {
            attacker: CardUid::new(2),
            target: CardUid::new(7),
        };
        assert_eq!(attack.to_string(), "attack #7 with #2");
        assert_eq!(Action::Pass.to_string(), "pass");
    }

    #[test]
    fn test_record_serialization() {
        let record = ActionRecord::new(
            Seat::Ai,
            Action::Play {
                card: CardUid::new(4),
                position: Position::Defense,
            },
            3,
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
