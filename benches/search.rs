//! Search throughput benchmarks.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fusion_duel::cards::{Attribute, CardDefinition, CardPool, CatalogId, Position};
use fusion_duel::core::{Player, Seat};
use fusion_duel::fusion::FusionResolver;
use fusion_duel::search::{generate_actions, SearchAgent, SearchConfig};

fn deck(offset: u32) -> Vec<Arc<CardDefinition>> {
    (0..20)
        .map(|i| {
            let n = i + offset;
            Arc::new(
                CardDefinition::new(
                    CatalogId::new(n),
                    format!("Card {n}"),
                    400 + (n * 173) % 2400,
                    300 + (n * 97) % 2200,
                )
                .with_attribute(Attribute::ALL[n as usize % 6])
                .with_type(if n % 3 == 0 { "Dragon" } else { "Warrior" }),
            )
        })
        .collect()
}

fn fusion_pool() -> Arc<CardPool> {
    Arc::new(CardPool::new((0..12).map(|i| {
        CardDefinition::new(CatalogId::new(500 + i), format!("Fusion {i}"), 1600 + 150 * i, 1400)
            .with_attribute(Attribute::ALL[i as usize % 6])
            .with_type(if i % 3 == 0 { "Dragon" } else { "Warrior" })
    })))
}

/// Both sides with three field cards and a full hand.
fn midgame() -> (Player, Player) {
    let setup = |seat: Seat, offset: u32| {
        let mut player = Player::new(seat.to_string(), seat, deck(offset));
        for _ in 0..3 {
            if let Some(card) = player.draw() {
                player.play(card.uid(), Position::Attack);
            }
        }
        player.draw_initial(5);
        player
    };
    (setup(Seat::Ai, 0), setup(Seat::Human, 40))
}

fn bench_player_clone(c: &mut Criterion) {
    let (ai, _) = midgame();
    c.bench_function("player_clone", |b| b.iter(|| black_box(ai.clone())));
}

fn bench_generate_actions(c: &mut Criterion) {
    let (ai, human) = midgame();
    let resolver = FusionResolver::default();
    let pool = fusion_pool();
    let config = SearchConfig::default();

    c.bench_function("generate_actions", |b| {
        b.iter(|| generate_actions(black_box(&ai), black_box(&human), &resolver, &pool, &config))
    });
}

fn bench_choose_action(c: &mut Criterion) {
    let (ai, human) = midgame();
    let resolver = Arc::new(FusionResolver::default());
    let pool = fusion_pool();

    let mut group = c.benchmark_group("choose_best_action");
    for depth in [1u32, 2, 3] {
        for pruning in [true, false] {
            let config = SearchConfig::default().with_depth(depth).with_pruning(pruning);
            let mut agent = SearchAgent::new(config, Arc::clone(&resolver), Arc::clone(&pool));
            let label = if pruning { "alpha_beta" } else { "minimax" };
            group.bench_with_input(BenchmarkId::new(label, depth), &depth, |b, _| {
                b.iter(|| agent.choose_best_action(black_box(&ai), black_box(&human)))
            });
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_player_clone,
    bench_generate_actions,
    bench_choose_action
);
criterion_main!(benches);
