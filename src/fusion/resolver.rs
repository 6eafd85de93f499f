//! Fusion resolution.
//!
//! ## Resolution Order
//!
//! `resolve` tries each stage in turn and returns the first hit:
//!
//! 1. Exact recipe, if the named result is in the pool
//! 2. Shared attribute: attack in `[0.7, 2.0] x avg`, highest attack
//! 3. Shared creature type: same window and pick
//! 4. Any pool card: attack in `[0.6, 2.5] x avg`, closest to `avg`
//!
//! Stages 2 to 4 never return a card named like either input. Ties go to
//! the earlier card in pool order.

use std::sync::Arc;

use super::table::FusionTable;
use crate::cards::{Card, CardDefinition, CardPool};

/// Attack window for the shared-attribute and shared-type stages.
const AFFINITY_WINDOW: (f64, f64) = (0.7, 2.0);

/// Attack window for the generic stage.
const GENERIC_WINDOW: (f64, f64) = (0.6, 2.5);

/// A fusion available from a hand.
#[derive(Clone, Debug)]
pub struct FusionCandidate<'a> {
    pub first: &'a Card,
    pub second: &'a Card,
    pub result: Arc<CardDefinition>,
}

impl FusionCandidate<'_> {
    #[must_use]
    pub fn is_beneficial(&self) -> bool {
        is_beneficial(self.first, self.second, &self.result)
    }
}

/// Turns two cards into a fusion result.
#[derive(Clone, Debug)]
pub struct FusionResolver {
    table: FusionTable,
}

impl Default for FusionResolver {
    fn default() -> Self {
        Self::new(FusionTable::standard())
    }
}

impl FusionResolver {
    #[must_use]
    pub fn new(table: FusionTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub fn table(&self) -> &FusionTable {
        &self.table
    }

    /// Result of fusing `a` with `b`, drawn from `pool`.
    ///
    /// Symmetric in `a` and `b`. `None` means the pair cannot fuse.
    #[must_use]
    pub fn resolve(&self, a: &Card, b: &Card, pool: &CardPool) -> Option<Arc<CardDefinition>> {
        if let Some(found) = self
            .table
            .lookup(a.name(), b.name())
            .and_then(|name| pool.find_by_name(name))
        {
            return Some(Arc::clone(found));
        }

        let average = (f64::from(a.attack()) + f64::from(b.attack())) / 2.0;
        let eligible = |def: &Arc<CardDefinition>, (low, high): (f64, f64)| {
            let attack = f64::from(def.attack);
            def.name != a.name()
                && def.name != b.name()
                && attack >= low * average
                && attack <= high * average
        };

        if a.attribute() == b.attribute() {
            let best = strongest(pool.iter().filter(|def| {
                def.attribute == a.attribute() && eligible(*def, AFFINITY_WINDOW)
            }));
            if best.is_some() {
                return best;
            }
        }

        if a.creature_type() == b.creature_type() {
            let best = strongest(pool.iter().filter(|def| {
                def.creature_type == a.creature_type() && eligible(*def, AFFINITY_WINDOW)
            }));
            if best.is_some() {
                return best;
            }
        }

        let mut closest: Option<(&Arc<CardDefinition>, f64)> = None;
        for def in pool.iter().filter(|def| eligible(*def, GENERIC_WINDOW)) {
            let distance = (f64::from(def.attack) - average).abs();
            if closest.map_or(true, |(_, best)| distance < best) {
                closest = Some((def, distance));
            }
        }
        closest.map(|(def, _)| Arc::clone(def))
    }

    /// Every fusion available among distinct pairs of `hand`, in hand order.
    ///
    /// At most `n * (n - 1) / 2` entries for a hand of `n` cards.
    #[must_use]
    pub fn enumerate_possible<'a>(
        &self,
        hand: impl IntoIterator<Item = &'a Card>,
        pool: &CardPool,
    ) -> Vec<FusionCandidate<'a>> {
        let cards: Vec<&Card> = hand.into_iter().collect();
        let mut candidates = Vec::new();
        for (i, &first) in cards.iter().enumerate() {
            for &second in &cards[i + 1..] {
                if let Some(result) = self.resolve(first, second, pool) {
                    candidates.push(FusionCandidate {
                        first,
                        second,
                        result,
                    });
                }
            }
        }
        candidates
    }
}

/// Worth spending two cards on: at least 80% of the combined attack and
/// stronger than either input.
#[must_use]
pub fn is_beneficial(a: &Card, b: &Card, result: &CardDefinition) -> bool {
    let combined = u64::from(a.attack()) + u64::from(b.attack());
    5 * u64::from(result.attack) >= 4 * combined
        && result.attack > a.attack()
        && result.attack > b.attack()
}

/// Highest attack, first in pool order on ties.
fn strongest<'a>(
    candidates: impl Iterator<Item = &'a Arc<CardDefinition>>,
) -> Option<Arc<CardDefinition>> {
    let mut best: Option<&Arc<CardDefinition>> = None;
    for def in candidates {
        if best.map_or(true, |b| def.attack > b.attack) {
            best = Some(def);
        }
    }
    best.map(Arc::clone)
}
