//! Depth-bounded adversarial search in negamax form.
//!
//! Both searches score a position for the side to move and recurse with
//! the roles swapped and the score negated, so there is no separate
//! maximizing and minimizing branch. Children are built by cloning both
//! players and applying one candidate to the clones; the players passed
//! in are never mutated.
//!
//! `alpha_beta` and `minimax` return the same value for the same input;
//! pruning only skips subtrees that cannot change the result.

use super::config::SearchConfig;
use super::eval::evaluate;
use super::movegen::generate_actions;
use super::stats::SearchStats;
use crate::cards::CardPool;
use crate::core::{Action, Player};
use crate::fusion::FusionResolver;
use crate::rules::apply_action;

/// What a search needs besides the players.
#[derive(Clone, Copy, Debug)]
pub struct SearchContext<'a> {
    pub resolver: &'a FusionResolver,
    pub fusion_pool: &'a CardPool,
    pub config: &'a SearchConfig,
}

impl SearchContext<'_> {
    /// Clone both players and apply `action` for `mover`.
    ///
    /// `None` if the action is rejected.
    pub(crate) fn child(
        &self,
        mover: &Player,
        other: &Player,
        action: &Action,
    ) -> Option<(Player, Player)> {
        let mut next_mover = mover.clone();
        let mut next_other = other.clone();
        apply_action(
            &mut next_mover,
            &mut next_other,
            action,
            self.resolver,
            self.fusion_pool,
        )
        .ok()?;
        Some((next_mover, next_other))
    }

    fn is_leaf(depth: u32, mover: &Player, other: &Player) -> bool {
        depth == 0 || mover.is_defeated() || other.is_defeated()
    }

    fn leaf(&self, mover: &Player, other: &Player, stats: &mut SearchStats) -> f64 {
        stats.leaves += 1;
        evaluate(mover, other, &self.config.weights)
    }
}

/// Negamax with alpha-beta pruning. Score is from `mover`'s point of view.
pub fn alpha_beta(
    ctx: &SearchContext<'_>,
    mover: &Player,
    other: &Player,
    depth: u32,
    mut alpha: f64,
    beta: f64,
    stats: &mut SearchStats,
) -> f64 {
    stats.nodes += 1;
    if SearchContext::is_leaf(depth, mover, other) {
        return ctx.leaf(mover, other, stats);
    }

    let mut best = f64::NEG_INFINITY;
    for action in generate_actions(mover, other, ctx.resolver, ctx.fusion_pool, ctx.config) {
        let Some((next_mover, next_other)) = ctx.child(mover, other, &action) else {
            continue;
        };
        let score = -alpha_beta(ctx, &next_other, &next_mover, depth - 1, -beta, -alpha, stats);
        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }

    if best == f64::NEG_INFINITY {
        ctx.leaf(mover, other, stats)
    } else {
        best
    }
}

/// Negamax without pruning. Score is from `mover`'s point of view.
pub fn minimax(
    ctx: &SearchContext<'_>,
    mover: &Player,
    other: &Player,
    depth: u32,
    stats: &mut SearchStats,
) -> f64 {
    stats.nodes += 1;
    if SearchContext::is_leaf(depth, mover, other) {
        return ctx.leaf(mover, other, stats);
    }

    let mut best = f64::NEG_INFINITY;
    for action in generate_actions(mover, other, ctx.resolver, ctx.fusion_pool, ctx.config) {
        if let Some((next_mover, next_other)) = ctx.child(mover, other, &action) {
            best = best.max(-minimax(ctx, &next_other, &next_mover, depth - 1, stats));
        }
    }

    if best == f64::NEG_INFINITY {
        ctx.leaf(mover, other, stats)
    } else {
        best
    }
}

/// Score for `mover`, with or without pruning per the config.
pub fn search(
    ctx: &SearchContext<'_>,
    mover: &Player,
    other: &Player,
    depth: u32,
    stats: &mut SearchStats,
) -> f64 {
    if ctx.config.pruning {
        alpha_beta(
            ctx,
            mover,
            other,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            stats,
        )
    } else {
        minimax(ctx, mover, other, depth, stats)
    }
}
