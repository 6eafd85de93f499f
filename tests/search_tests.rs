//! Search agent behaviour on hand-built positions.

use std::sync::Arc;

use fusion_duel::cards::{Attribute, CardDefinition, CardPool, CatalogId, Position};
use fusion_duel::core::{Action, Player, Seat};
use fusion_duel::fusion::{FusionResolver, FusionTable};
use fusion_duel::search::{evaluate, ActionPolicy, EvalWeights, SearchAgent, SearchConfig};

fn defs(stats: &[(u32, u32)]) -> Vec<Arc<CardDefinition>> {
    stats
        .iter()
        .enumerate()
        .map(|(i, &(atk, def))| {
            Arc::new(
                CardDefinition::new(CatalogId::new(i as u32 + 1), format!("Card {i}"), atk, def)
                    .with_attribute(if i % 2 == 0 { Attribute::Fire } else { Attribute::Water })
                    .with_type("Warrior"),
            )
        })
        .collect()
}

/// A player whose first `on_field` deck cards are summoned in attack, and
/// whose next five are in hand.
fn player(seat: Seat, stats: &[(u32, u32)], on_field: usize) -> Player {
    let mut player = Player::new(seat.to_string(), seat, defs(stats));
    for _ in 0..on_field {
        let card = player.draw().unwrap();
        assert!(player.play(card.uid(), Position::Attack));
    }
    player.draw_initial(5);
    player
}

fn agent(config: SearchConfig) -> SearchAgent {
    let fusion_pool = CardPool::new(vec![
        CardDefinition::new(CatalogId::new(90), "Blaze Knight", 2600, 2000)
            .with_attribute(Attribute::Fire)
            .with_type("Warrior"),
        CardDefinition::new(CatalogId::new(91), "Tide Knight", 2300, 2400)
            .with_attribute(Attribute::Water)
            .with_type("Warrior"),
    ]);
    SearchAgent::new(config, Arc::new(FusionResolver::default()), Arc::new(fusion_pool))
}

fn midgame() -> (Player, Player) {
    let ai = player(
        Seat::Ai,
        &[
            (1800, 1200),
            (900, 1900),
            (1500, 1000),
            (1200, 1300),
            (700, 600),
            (2100, 1700),
            (1000, 1000),
        ],
        2,
    );
    let human = player(
        Seat::Human,
        &[(1600, 1400), (2000, 800), (1100, 1500), (1300, 900), (800, 2000), (1400, 1100)],
        2,
    );
    (ai, human)
}

#[test]
fn test_pruning_does_not_change_choice() {
    let (ai, human) = midgame();
    for depth in 1..=3 {
        let config = SearchConfig::default().with_depth(depth);
        let mut pruned = agent(config.clone().with_pruning(true));
        let mut plain = agent(config.with_pruning(false));

        assert_eq!(
            pruned.choose_best_action(&ai, &human),
            plain.choose_best_action(&ai, &human),
            "depth {depth}"
        );
        assert!(pruned.stats().nodes <= plain.stats().nodes);
        assert_eq!(plain.stats().cutoffs, 0);
    }
}

#[test]
fn test_minimax_entry_agrees_with_and_without_pruning() {
    let (ai, human) = midgame();
    let mut pruned = agent(SearchConfig::default().with_pruning(true));
    let mut plain = agent(SearchConfig::default().with_pruning(false));

    for depth in 0..=3 {
        for maximizing in [true, false] {
            let (low, high) = (f64::NEG_INFINITY, f64::INFINITY);
            let a = pruned.minimax(&ai, &human, depth, low, high, maximizing);
            let b = plain.minimax(&ai, &human, depth, low, high, maximizing);
            assert!((a - b).abs() < 1e-6, "depth {depth}, maximizing {maximizing}: {a} vs {b}");
        }
    }
}

#[test]
fn test_depth_zero_is_static_evaluation() {
    let (ai, human) = midgame();
    let mut agent = agent(SearchConfig::default());
    let weights = EvalWeights::default();

    let value = agent.minimax(&ai, &human, 0, f64::NEG_INFINITY, f64::INFINITY, true);
    assert!((value - evaluate(&ai, &human, &weights)).abs() < 1e-9);
    let value = agent.minimax(&ai, &human, 0, f64::NEG_INFINITY, f64::INFINITY, false);
    assert!((value - evaluate(&ai, &human, &weights)).abs() < 1e-9);
}

#[test]
fn test_takes_lethal_direct_attack() {
    let ai = player(Seat::Ai, &[(2500, 2000), (500, 500)], 1);
    let mut human = Player::new("Human", Seat::Human, defs(&[(1000, 1000)]));
    human.take_damage(7000);

    let mut agent = agent(SearchConfig::default());
    let attacker = ai.field()[0].uid();
    assert_eq!(
        agent.choose_best_action(&ai, &human),
        Action::DirectAttack { attacker }
    );
}

#[test]
fn test_search_leaves_inputs_alone() {
    let (ai, human) = midgame();
    let (ai_before, human_before) = (ai.clone(), human.clone());

    let mut agent = agent(SearchConfig::default().with_depth(3));
    let _ = agent.choose_action(&ai, &human);

    assert_eq!(ai.hand(), ai_before.hand());
    assert_eq!(ai.field(), ai_before.field());
    assert_eq!(human.field(), human_before.field());
    assert_eq!(human.life_points(), human_before.life_points());
    assert!(agent.last_stats().is_some_and(|s| s.root_candidates > 0));
}

#[test]
fn test_empty_position_passes() {
    let ai = Player::new("AI", Seat::Ai, Vec::<Arc<CardDefinition>>::new());
    let human = Player::new("Human", Seat::Human, Vec::<Arc<CardDefinition>>::new());
    let mut agent = agent(SearchConfig::default());
    assert_eq!(agent.choose_best_action(&ai, &human), Action::Pass);
}

#[test]
fn test_lethal_survives_small_candidate_cap() {
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
    let mut ai = Player::new("AI", Seat::Ai, deck);
    for position in [Position::Defense, Position::Defense, Position::Attack, Position::Attack] {
        let card = ai.draw().unwrap();
        assert!(ai.play(card.uid(), position));
    }
    ai.draw_initial(5);

    let mut human = Player::new("Human", Seat::Human, defs(&[(1000, 1000)]));
    human.take_damage(7000);

    let table = FusionTable::new()
        .with_recipe("Core", "Left", "Fused Left")
        .with_recipe("Core", "Middle", "Fused Middle")
        .with_recipe("Core", "Right", "Fused Right");
    let pool = CardPool::new(
        ["Fused Left", "Fused Middle", "Fused Right"]
            .into_iter()
            .enumerate()
            .map(|(i, name)| CardDefinition::new(CatalogId::new(90 + i as u32), name, 2200, 0)),
    );
    let mut agent = SearchAgent::new(
        SearchConfig::default().with_max_actions(8),
        Arc::new(FusionResolver::new(table)),
        Arc::new(pool),
    );

    let chosen = agent.choose_best_action(&ai, &human);
    assert!(matches!(chosen, Action::DirectAttack { .. }), "chose {chosen}");
}
