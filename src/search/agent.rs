//! The AI player.
//!
//! ## Decision
//!
//! `choose_best_action` generates root candidates, orders them by
//! `ActionKind::priority`, and scores each one as the negated search value
//! of the opponent's reply at `depth - 1`, plus a per-kind bonus. The first
//! candidate with the strictly highest score wins, so ties go to the
//! higher-priority kind. With no candidates it passes.
//!
//! The search never fails: at worst the agent passes.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, trace};

use super::config::SearchConfig;
use super::minimax::{alpha_beta, minimax, search, SearchContext};
use super::movegen::generate_actions;
use super::stats::SearchStats;
use crate::cards::CardPool;
use crate::core::{Action, Player};
use crate::fusion::FusionResolver;

/// Something that picks one action for the side to move.
///
/// The match engine asks its policy once per AI turn. `SearchAgent` is the
/// standard implementation.
pub trait ActionPolicy: Send {
    fn choose_action(&mut self, actor: &Player, opponent: &Player) -> Action;

    /// Statistics of the most recent decision, if the policy keeps any.
    fn last_stats(&self) -> Option<&SearchStats> {
        None
    }
}

/// Alpha-beta search agent.
#[derive(Clone, Debug)]
pub struct SearchAgent {
    config: SearchConfig,
    resolver: Arc<FusionResolver>,
    fusion_pool: Arc<CardPool>,
    stats: SearchStats,
}

impl SearchAgent {
    #[must_use]
    pub fn new(
        config: SearchConfig,
        resolver: Arc<FusionResolver>,
        fusion_pool: Arc<CardPool>,
    ) -> Self {
        Self {
            config,
            resolver,
            fusion_pool,
            stats: SearchStats::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the last `choose_best_action` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Score of the position for `max_player`, searching `depth` plies with
    /// `max_player` to move if `is_maximizing`, else `min_player`.
    ///
    /// Uses pruning when the config enables it; `alpha` and `beta` bound the
    /// window from `max_player`'s side and are ignored without pruning.
    pub fn minimax(
        &mut self,
        max_player: &Player,
        min_player: &Player,
        depth: u32,
        alpha: f64,
        beta: f64,
        is_maximizing: bool,
    ) -> f64 {
        let ctx = SearchContext {
            resolver: &self.resolver,
            fusion_pool: &self.fusion_pool,
            config: &self.config,
        };
        let stats = &mut self.stats;
        match (self.config.pruning, is_maximizing) {
            (true, true) => alpha_beta(&ctx, max_player, min_player, depth, alpha, beta, stats),
            (true, false) => -alpha_beta(&ctx, min_player, max_player, depth, -beta, -alpha, stats),
            (false, true) => minimax(&ctx, max_player, min_player, depth, stats),
            (false, false) => -minimax(&ctx, min_player, max_player, depth, stats),
        }
    }

    /// Pick one action for `agent` against `opponent`.
    pub fn choose_best_action(&mut self, agent: &Player, opponent: &Player) -> Action {
        let start = Instant::now();
        self.stats.reset();

        let ctx = SearchContext {
            resolver: &self.resolver,
            fusion_pool: &self.fusion_pool,
            config: &self.config,
        };
        let mut candidates = generate_actions(
            agent,
            opponent,
            ctx.resolver,
            ctx.fusion_pool,
            ctx.config,
        );
        candidates.sort_by_key(|action| action.kind().priority());

        let reply_depth = self.config.depth.saturating_sub(1);
        let mut best: Option<(Action, f64)> = None;
        for action in candidates {
            let Some((next_agent, next_opponent)) = ctx.child(agent, opponent, &action) else {
                continue;
            };
            self.stats.root_candidates += 1;
            let value = -search(&ctx, &next_opponent, &next_agent, reply_depth, &mut self.stats)
                + self.config.bonuses.for_kind(action.kind());
            trace!(%action, value, "root candidate scored");

            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((action, value));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        let chosen = best.map_or(Action::Pass, |(action, _)| action);
        debug!(
            %chosen,
            candidates = self.stats.root_candidates,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            time_us = self.stats.time_us,
            "search finished"
        );
        chosen
    }
}

impl ActionPolicy for SearchAgent {
    fn choose_action(&mut self, actor: &Player, opponent: &Player) -> Action {
        self.choose_best_action(actor, opponent)
    }

    fn last_stats(&self) -> Option<&SearchStats> {
        Some(&self.stats)
    }
}
