//! Candidate generation.
//!
//! The search does not expand every legal action. Each node gets a small,
//! heuristically filtered candidate list built from these kinds:
//!
//! 1. Fusions of hand pairs that improve on both inputs
//! 2. Summons of the strongest hand cards, position chosen by matchup
//! 3. Position flips that open an attack or avoid rebound damage
//! 4. Attacks that destroy the target or cost little rebound damage
//! 5. Direct attacks, when the opposing field is empty
//!
//! An empty list becomes a single `Pass`. The list is stably sorted by
//! `ActionKind::priority` and then capped at `SearchConfig::max_actions`,
//! so a direct attack is never cut in favour of a summon. Every candidate
//! is legal for `player`.

use super::config::SearchConfig;
use crate::cards::{Card, CardPool, Position};
use crate::core::{Action, ActionList, Player};
use crate::fusion::FusionResolver;

/// Candidate actions for `player` against `opponent`.
#[must_use]
pub fn generate_actions(
    player: &Player,
    opponent: &Player,
    resolver: &FusionResolver,
    fusion_pool: &CardPool,
    config: &SearchConfig,
) -> ActionList {
    let mut actions = ActionList::new();

    if player.hand().len() >= 2 {
        let fusions = resolver.enumerate_possible(player.hand(), fusion_pool);
        actions.extend(
            fusions
                .iter()
                .take(config.fusion_candidates)
                .filter(|candidate| candidate.is_beneficial())
                .map(|candidate| Action::Fuse {
                    first: candidate.first.uid(),
                    second: candidate.second.uid(),
                }),
        );
    }

    if player.can_play_card() {
        let mut by_attack: Vec<&Card> = player.hand().iter().collect();
        by_attack.sort_by(|a, b| b.attack().cmp(&a.attack()));
        for card in by_attack.into_iter().take(config.play_candidates) {
            actions.push(Action::Play {
                card: card.uid(),
                position: summon_position(card, opponent, config),
            });
        }
    }

    for card in player.field() {
        if should_flip(card, opponent, config) {
            actions.push(Action::Reposition { card: card.uid() });
        }
    }

    if opponent.has_field_cards() {
        for attacker in player.field().iter().filter(|c| c.is_attacking()) {
            for target in opponent.field() {
                if worth_attacking(attacker, target, config) {
                    actions.push(Action::Attack {
                        attacker: attacker.uid(),
                        target: target.uid(),
                    });
                }
            }
        }
    } else {
        actions.extend(
            player
                .field()
                .iter()
                .filter(|c| c.is_attacking())
                .map(|c| Action::DirectAttack { attacker: c.uid() }),
        );
    }

    if actions.is_empty() {
        actions.push(Action::Pass);
    }
    // the cap drops the lowest-priority kinds first
    actions.sort_by_key(|action| action.kind().priority());
    actions.truncate(config.max_actions.max(1));
    actions
}

/// Position for summoning `card` against `opponent`'s field.
///
/// Against an empty field the summon always goes to defense.
#[must_use]
pub fn summon_position(card: &Card, opponent: &Player, config: &SearchConfig) -> Position {
    let Some(strongest) = opponent.field().iter().map(Card::attack).max() else {
        return Position::Defense;
    };
    if f64::from(card.attack()) > f64::from(strongest) * config.dominance_margin {
        Position::Attack
    } else if card.defense() > card.attack() {
        Position::Defense
    } else {
        Position::Attack
    }
}

/// `card` strictly beats at least one opposing card as it stands.
fn can_destroy_any(card: &Card, opponent: &Player) -> bool {
    opponent
        .field()
        .iter()
        .any(|enemy| card.attack() > enemy.power())
}

fn should_flip(card: &Card, opponent: &Player, config: &SearchConfig) -> bool {
    match card.position() {
        Position::Defense => !opponent.has_field_cards() || can_destroy_any(card, opponent),
        Position::Attack => {
            if !opponent.has_field_cards() || can_destroy_any(card, opponent) {
                return false;
            }
            let least_rebound = opponent
                .field()
                .iter()
                .map(|enemy| enemy.power().saturating_sub(card.attack()))
                .min()
                .unwrap_or(0);
            card.defense() > card.attack() || least_rebound >= config.retreat_threshold
        }
    }
}

fn worth_attacking(attacker: &Card, target: &Card, config: &SearchConfig) -> bool {
    if attacker.attack() > target.power() {
        return true;
    }
    target.position() == Position::Defense
        && target.defense().saturating_sub(attacker.attack()) < config.retreat_threshold
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::{Attribute, CardDefinition, CatalogId};
    use crate::core::{CardUid, Seat};
    use crate::fusion::FusionTable;

    fn player(seat: Seat, stats: &[(&str, u32, u32)]) -> Player {
        let deck = stats.iter().enumerate().map(|(i, &(name, atk, def))| {
            Arc::new(
                CardDefinition::new(CatalogId::new(i as u32), name, atk, def)
                    .with_attribute(Attribute::Earth),
            )
        });
        let mut p = Player::new(seat.to_string(), seat, deck);
        p.draw_initial(stats.len());
        p
    }

    fn field(p: &mut Player, index: usize, position: Position) -> CardUid {
        let uid = p.hand()[index].uid();
        p.play(uid, position);
        uid
    }

    fn empty_resolver() -> (FusionResolver, CardPool) {
        (FusionResolver::new(FusionTable::new()), CardPool::default())
    }

    #[test]
    fn test_summons_to_defense_against_empty_field() {
        let me = player(
            Seat::Ai,
            &[("A", 1000, 500), ("B", 3000, 100), ("C", 200, 100), ("D", 1500, 0)],
        );
        let them = player(Seat::Human, &[]);
        let (resolver, pool) = empty_resolver();

        let actions = generate_actions(&me, &them, &resolver, &pool, &SearchConfig::default());
        let plays: Vec<_> = actions
            .iter()
            .filter_map(|a| match a {
                Action::Play { card, position } => Some((card.raw(), *position)),
                _ => None,
            })
            .collect();
        // strongest three: B, D, A
        assert_eq!(
            plays,
            vec![(1, Position::Defense), (3, Position::Defense), (0, Position::Defense)]
        );
    }

    #[test]
    fn test_summon_position_by_matchup() {
        let config = SearchConfig::default();
        let mut them = player(Seat::Human, &[("Enemy", 1000, 0)]);
        field(&mut them, 0, Position::Defense);
        let me = player(
            Seat::Ai,
            &[("Dominant", 1300, 0), ("Wall", 900, 1800), ("Even", 1100, 200)],
        );

        assert_eq!(summon_position(&me.hand()[0], &them, &config), Position::Attack);
        assert_eq!(summon_position(&me.hand()[1], &them, &config), Position::Defense);
        assert_eq!(summon_position(&me.hand()[2], &them, &config), Position::Attack);
    }

    #[test]
    fn test_direct_attacks_only_on_empty_field() {
        let mut me = player(Seat::Ai, &[("A", 1000, 500), ("B", 1200, 500)]);
        let a = field(&mut me, 0, Position::Attack);
        field(&mut me, 0, Position::Defense);
        let them = player(Seat::Human, &[]);
        let (resolver, pool) = empty_resolver();

        let actions = generate_actions(&me, &them, &resolver, &pool, &SearchConfig::default());
        let directs: Vec<_> = actions
            .iter()
            .filter(|a| matches!(a, Action::DirectAttack { .. }))
            .collect();
        assert_eq!(directs, vec![&Action::DirectAttack { attacker: a }]);
        // the defender flips up against an empty field
        assert!(actions.iter().any(|a| matches!(a, Action::Reposition { .. })));
    }

    #[test]
    fn test_attack_filters() {
        let mut me = player(Seat::Ai, &[("Mid", 1500, 500)]);
        let attacker = field(&mut me, 0, Position::Attack);
        let mut them = player(
            Seat::Human,
            &[
                ("Weak", 1000, 0),
                ("Strong", 2000, 0),
                ("Soft Wall", 0, 1700),
                ("Hard Wall", 0, 1900),
            ],
        );
        let weak = field(&mut them, 0, Position::Attack);
        field(&mut them, 0, Position::Attack);
        let soft = field(&mut them, 0, Position::Defense);
        field(&mut them, 0, Position::Defense);
        let (resolver, pool) = empty_resolver();

        let actions = generate_actions(&me, &them, &resolver, &pool, &SearchConfig::default());
        let attacks: Vec<_> = actions
            .iter()
            .filter(|a| matches!(a, Action::Attack { .. }))
            .copied()
            .collect();
        assert_eq!(
            attacks,
            vec![
                Action::Attack { attacker, target: weak },
                Action::Attack { attacker, target: soft },
            ]
        );
    }

    #[test]
    fn test_retreat_when_outclassed() {
        let mut me = player(Seat::Ai, &[("Sturdy", 800, 1500), ("Glass", 1000, 200)]);
        let sturdy = field(&mut me, 0, Position::Attack);
        let glass = field(&mut me, 0, Position::Attack);
        let mut them = player(Seat::Human, &[("Big", 2500, 2000)]);
        field(&mut them, 0, Position::Attack);
        let (resolver, pool) = empty_resolver();

        let actions = generate_actions(&me, &them, &resolver, &pool, &SearchConfig::default());
        assert!(actions.contains(&Action::Reposition { card: sturdy }));
        // 1500 rebound is over the threshold
        assert!(actions.contains(&Action::Reposition { card: glass }));
    }

    #[test]
    fn test_no_retreat_when_rebound_small() {
        let mut me = player(Seat::Ai, &[("Close", 1000, 200)]);
        let close = field(&mut me, 0, Position::Attack);
        let mut them = player(Seat::Human, &[("Slightly Bigger", 1100, 0)]);
        field(&mut them, 0, Position::Attack);
        let (resolver, pool) = empty_resolver();

        let actions = generate_actions(&me, &them, &resolver, &pool, &SearchConfig::default());
        assert!(!actions.contains(&Action::Reposition { card: close }));
    }

    #[test]
    fn test_beneficial_fusions_only() {
        let me = player(Seat::Ai, &[("A", 1000, 0), ("B", 1000, 0), ("C", 1000, 0)]);
        let them = player(Seat::Human, &[]);
        let resolver = FusionResolver::new(
            FusionTable::new()
                .with_recipe("A", "B", "Big")
                .with_recipe("A", "C", "Small"),
        );
        let pool = CardPool::new(vec![
            CardDefinition::new(CatalogId::new(90), "Big", 2000, 0),
            CardDefinition::new(CatalogId::new(91), "Small", 1100, 0),
        ]);

        let actions = generate_actions(&me, &them, &resolver, &pool, &SearchConfig::default());
        let fusions: Vec<_> = actions
            .iter()
            .filter(|a| matches!(a, Action::Fuse { .. }))
            .collect();
        // A+C yields only 1100; B+C falls back to the strongest EARTH card
        assert_eq!(
            fusions,
            vec![
                &Action::Fuse { first: CardUid::new(0), second: CardUid::new(1) },
                &Action::Fuse { first: CardUid::new(1), second: CardUid::new(2) },
            ]
        );
    }

    #[test]
    fn test_pass_when_nothing_to_do() {
        let me = player(Seat::Ai, &[]);
        let them = player(Seat::Human, &[]);
        let (resolver, pool) = empty_resolver();

        let actions = generate_actions(&me, &them, &resolver, &pool, &SearchConfig::default());
        assert_eq!(actions.as_slice(), &[Action::Pass]);
    }

    #[test]
    fn test_capped_at_max_actions() {
        let mut me = player(
            Seat::Ai,
            &[("A", 3000, 0), ("B", 3000, 0), ("C", 3000, 0), ("D", 3000, 0), ("E", 100, 0)],
        );
        for _ in 0..4 {
            field(&mut me, 0, Position::Attack);
        }
        let mut them = player(
            Seat::Human,
            &[("W", 100, 0), ("X", 100, 0), ("Y", 100, 0), ("Z", 100, 0)],
        );
        for _ in 0..4 {
            field(&mut them, 0, Position::Attack);
        }
        let (resolver, pool) = empty_resolver();
        let config = SearchConfig::default().with_max_actions(5);

        let actions = generate_actions(&me, &them, &resolver, &pool, &config);
        assert_eq!(actions.len(), 5);
        assert!(matches!(actions[0], Action::Play { .. }));
    }

    #[test]
    fn test_cap_keeps_direct_attacks() {
        let stats = [
            ("Wall A", 100, 2000),
            ("Wall B", 100, 2000),
            ("Striker A", 2500, 0),
            ("Striker B", 2500, 0),
            ("Core", 1000, 0),
            ("Left", 1000, 0),
            ("Middle", 1000, 0),
            ("Right", 1000, 0),
            ("Spare", 500, 0),
        ];
        let deck = stats.iter().enumerate().map(|(i, &(name, atk, def))| {
            Arc::new(CardDefinition::new(CatalogId::new(i as u32), name, atk, def))
        });
        let mut me = Player::new("AI", Seat::Ai, deck);
        for position in [Position::Defense, Position::Defense, Position::Attack, Position::Attack] {
            let card = me.draw().unwrap();
            me.play(card.uid(), position);
        }
        me.draw_initial(5);

        let mut them = player(Seat::Human, &[]);
        them.take_damage(7000);
        let resolver = FusionResolver::new(
            FusionTable::new()
                .with_recipe("Core", "Left", "Fused Left")
                .with_recipe("Core", "Middle", "Fused Middle")
                .with_recipe("Core", "Right", "Fused Right"),
        );
        let pool = CardPool::new(vec![
            CardDefinition::new(CatalogId::new(90), "Fused Left", 2200, 0),
            CardDefinition::new(CatalogId::new(91), "Fused Middle", 2200, 0),
            CardDefinition::new(CatalogId::new(92), "Fused Right", 2200, 0),
        ]);
        let config = SearchConfig::default().with_max_actions(8);

        // 3 fusions, 3 summons, 2 flips and 2 direct attacks compete for 8 slots
        let actions = generate_actions(&me, &them, &resolver, &pool, &config);
        assert_eq!(actions.len(), 8);
        assert_eq!(
            &actions[..2],
            &[
                Action::DirectAttack { attacker: CardUid::new(2) },
                Action::DirectAttack { attacker: CardUid::new(3) },
            ]
        );
        assert!(actions
            .windows(2)
            .all(|pair| pair[0].kind().priority() <= pair[1].kind().priority()));
    }
}
