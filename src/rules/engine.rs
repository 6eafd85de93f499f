//! The match state machine.
//!
//! ## Phases
//!
//! `Setup -> Main -> Ended`. A match leaves `Setup` once decks are dealt and
//! enters `Ended` the moment either player is defeated. Only
//! `reinitialize_match` leaves `Ended`.
//!
//! ## Turn Cycle
//!
//! The human acts through the command methods, then calls `end_turn`:
//!
//! 1. The AI becomes turn owner, its summon flag resets, and it draws
//! 2. The AI's policy picks exactly one action, which is applied
//! 3. Unless someone has won, the human becomes turn owner, its summon
//!    flag resets, and it draws
//!
//! Every command validates before mutating: an `Err` leaves the match
//! exactly as it was.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::apply::apply_action;
use super::events::MatchEvent;
use crate::cards::{Attribute, Card, CardCatalog, CardDefinition, CardPool, CatalogId, Position};
use crate::core::{
    clamp_deck_size, Action, ActionRecord, CardUid, CommandError, CommandResult, MatchConfig,
    Player, Seat, SeatMap, SetupError, ShuffleRng, OPENING_HAND,
};
use crate::fusion::FusionResolver;
use crate::search::{ActionPolicy, SearchAgent, SearchConfig, SearchStats};

const HUMAN_NAME: &str = "Player";
const AI_NAME: &str = "AI";

/// Coarse match phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    Setup,
    Main,
    Ended,
}

/// What one `end_turn` call did.
#[derive(Clone, Debug)]
pub struct TurnReport {
    /// The single action the AI committed.
    pub ai_action: Action,
    /// Everything that happened, in order.
    pub events: Vec<MatchEvent>,
}

/// A two-player match between the human and a search-driven AI.
pub struct MatchEngine {
    config: MatchConfig,
    normal_pool: Arc<CardPool>,
    fusion_pool: Arc<CardPool>,
    resolver: Arc<FusionResolver>,
    policy: Box<dyn ActionPolicy>,
    rng: ShuffleRng,

    players: SeatMap<Player>,
    turn_owner: Seat,
    phase: Phase,
    summoned: SeatMap<bool>,
    winner: Option<Seat>,
    deck_size: usize,
    turn: u32,
    revision: u64,
    log: Vec<String>,
    history: Vec<ActionRecord>,
}

impl MatchEngine {
    /// Create a match with the standard fusion recipes and deal it.
    pub fn new(catalog: CardCatalog, config: MatchConfig) -> Result<Self, SetupError> {
        Self::with_resolver(catalog, config, FusionResolver::default())
    }

    /// Create a match with a custom fusion resolver and deal it.
    pub fn with_resolver(
        catalog: CardCatalog,
        config: MatchConfig,
        resolver: FusionResolver,
    ) -> Result<Self, SetupError> {
        let normal_pool = Arc::new(catalog.normal);
        let fusion_pool = Arc::new(catalog.fusion);
        let resolver = Arc::new(resolver);
        let agent = SearchAgent::new(
            config.search.clone(),
            Arc::clone(&resolver),
            Arc::clone(&fusion_pool),
        );

        let mut engine = Self {
            rng: ShuffleRng::new(config.seed),
            normal_pool,
            fusion_pool,
            resolver,
            policy: Box::new(agent),
            players: SeatMap::from_parts(
                Player::new(HUMAN_NAME, Seat::Human, Vec::new()),
                Player::new(AI_NAME, Seat::Ai, Vec::new()),
            ),
            turn_owner: Seat::Human,
            phase: Phase::Setup,
            summoned: SeatMap::with_value(false),
            winner: None,
            deck_size: 0,
            turn: 0,
            revision: 0,
            log: Vec::new(),
            history: Vec::new(),
            config,
        };
        engine.reinitialize_match(engine.config.deck_size)?;
        Ok(engine)
    }

    /// Replace the AI's policy. The current match continues.
    #[must_use]
    pub fn with_policy(mut self, policy: impl ActionPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Replace the AI with a search agent using `config`.
    #[must_use]
    pub fn with_search_config(mut self, config: SearchConfig) -> Self {
        self.config.search = config.clone();
        self.policy = Box::new(SearchAgent::new(
            config,
            Arc::clone(&self.resolver),
            Arc::clone(&self.fusion_pool),
        ));
        self
    }

    /// Deal a fresh match.
    ///
    /// `deck_size` is clamped to `[MIN_DECK_SIZE, MAX_DECK_SIZE]`, then
    /// shrunk to half the normal pool if the pool cannot fill two decks.
    /// Fails without touching the current match if the decks would be
    /// smaller than an opening hand.
    pub fn reinitialize_match(&mut self, deck_size: usize) -> Result<Vec<MatchEvent>, SetupError> {
        let available = self.normal_pool.len();
        let size = clamp_deck_size(deck_size).min(available / 2);
        if size < OPENING_HAND {
            return Err(SetupError::InsufficientCards {
                available,
                required: 2 * OPENING_HAND,
            });
        }

        let mut shuffler = self.rng.fork();
        let mut cards: Vec<Arc<CardDefinition>> = self.normal_pool.iter().cloned().collect();
        shuffler.shuffle(&mut cards);
        let ai_deck = cards.split_off(size).into_iter().take(size);

        let mut human = Player::new(HUMAN_NAME, Seat::Human, cards);
        let mut ai = Player::new(AI_NAME, Seat::Ai, ai_deck);
        human.draw_initial(OPENING_HAND);
        ai.draw_initial(OPENING_HAND);

        self.players = SeatMap::from_parts(human, ai);
        self.turn_owner = Seat::Human;
        self.phase = Phase::Main;
        self.summoned = SeatMap::with_value(false);
        self.winner = None;
        self.deck_size = size;
        self.turn = 1;
        self.log.clear();
        self.history.clear();

        info!(deck_size = size, seed = shuffler.seed(), "match initialized");
        let events = vec![MatchEvent::MatchStarted];
        self.record(&events);
        Ok(events)
    }

    // === Queries ===

    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    #[must_use]
    pub fn human(&self) -> &Player {
        &self.players[Seat::Human]
    }

    #[must_use]
    pub fn ai(&self) -> &Player {
        &self.players[Seat::Ai]
    }

    #[must_use]
    pub fn turn_owner(&self) -> Seat {
        self.turn_owner
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    /// Whether `seat` has summoned this turn.
    #[must_use]
    pub fn has_summoned(&self, seat: Seat) -> bool {
        self.summoned[seat]
    }

    /// Cards per deck in the current match, after clamping and shrinking.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    /// Turn number, starting at 1 with the human's first turn.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Bumped by every state change, for display layers that poll.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Narrated log of the current match, oldest first.
    #[must_use]
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Every committed action of the current match, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn fusion_pool(&self) -> &CardPool {
        &self.fusion_pool
    }

    /// Statistics of the AI's last decision.
    #[must_use]
    pub fn search_stats(&self) -> Option<&SearchStats> {
        self.policy.last_stats()
    }

    /// Fusions available from the human's hand.
    #[must_use]
    pub fn available_fusions(&self) -> Vec<(CardUid, CardUid, Arc<CardDefinition>)> {
        self.resolver
            .enumerate_possible(self.human().hand(), &self.fusion_pool)
            .into_iter()
            .map(|c| (c.first.uid(), c.second.uid(), c.result))
            .collect()
    }

    /// Read-only view for the display layer.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        let skip = self.log.len().saturating_sub(self.config.log_window);
        MatchSnapshot {
            human: self.side_view(Seat::Human, true),
            ai: self.side_view(Seat::Ai, self.config.reveal_ai_hand),
            turn_owner: self.turn_owner,
            turn_owner_name: self.players[self.turn_owner].name().to_string(),
            phase: self.phase,
            turn: self.turn,
            revision: self.revision,
            log: self.log[skip..].to_vec(),
            winner: self.winner,
            winner_name: self.winner.map(|seat| self.players[seat].name().to_string()),
        }
    }

    fn side_view(&self, seat: Seat, reveal_hand: bool) -> SideView {
        let player = &self.players[seat];
        SideView {
            name: player.name().to_string(),
            seat,
            life_points: player.life_points(),
            hand: if reveal_hand {
                HandView::Cards {
                    cards: player.hand().iter().map(CardView::from).collect(),
                }
            } else {
                HandView::Hidden {
                    count: player.hand().len(),
                }
            },
            field: player.field().iter().map(CardView::from).collect(),
            deck_count: player.deck().len(),
            graveyard_count: player.graveyard().len(),
            summoned_this_turn: self.summoned[seat],
        }
    }

    // === Human commands ===

    /// Summon a hand card. Once per turn.
    pub fn play_card(
        &mut self,
        card: CardUid,
        position: Position,
    ) -> CommandResult<Vec<MatchEvent>> {
        self.check_human_turn()?;
        if self.summoned[Seat::Human] {
            return Err(CommandError::AlreadySummoned);
        }
        self.commit(Seat::Human, Action::Play { card, position })
    }

    /// Attack an AI field card.
    pub fn attack(&mut self, attacker: CardUid, target: CardUid) -> CommandResult<Vec<MatchEvent>> {
        self.check_human_turn()?;
        self.commit(Seat::Human, Action::Attack { attacker, target })
    }

    /// Attack the AI's life points. Only with an empty AI field.
    pub fn direct_attack(&mut self, attacker: CardUid) -> CommandResult<Vec<MatchEvent>> {
        self.check_human_turn()?;
        self.commit(Seat::Human, Action::DirectAttack { attacker })
    }

    /// Flip a field card between attack and defense.
    pub fn change_position(&mut self, card: CardUid) -> CommandResult<Vec<MatchEvent>> {
        self.check_human_turn()?;
        self.commit(Seat::Human, Action::Reposition { card })
    }

    /// Fuse two hand cards.
    pub fn fuse(&mut self, first: CardUid, second: CardUid) -> CommandResult<Vec<MatchEvent>> {
        self.check_human_turn()?;
        self.commit(Seat::Human, Action::Fuse { first, second })
    }

    /// End the human's turn and run the AI's turn.
    pub fn end_turn(&mut self) -> CommandResult<TurnReport> {
        self.check_human_turn()?;
        let mut events = Vec::new();

        self.begin_turn(Seat::Ai, &mut events);
        let chosen = self
            .policy
            .choose_action(&self.players[Seat::Ai], &self.players[Seat::Human]);

        let ai_action = match self.commit(Seat::Ai, chosen) {
            Ok(applied) => {
                events.extend(applied);
                chosen
            }
            Err(err) => {
                warn!(action = %chosen, %err, "AI action rejected, passing");
                if let Ok(applied) = self.commit(Seat::Ai, Action::Pass) {
                    events.extend(applied);
                }
                Action::Pass
            }
        };

        if self.winner.is_none() {
            self.begin_turn(Seat::Human, &mut events);
        }
        Ok(TurnReport { ai_action, events })
    }

    // === Internals ===

    fn check_human_turn(&self) -> CommandResult<()> {
        if self.winner.is_some() {
            return Err(CommandError::MatchOver);
        }
        if self.turn_owner != Seat::Human {
            return Err(CommandError::NotYourTurn);
        }
        Ok(())
    }

    /// Apply `action` for `seat`, record it, and check for a winner.
    fn commit(&mut self, seat: Seat, action: Action) -> CommandResult<Vec<MatchEvent>> {
        let (actor, opponent) = self.players.pair_mut(seat);
        let mut events = apply_action(actor, opponent, &action, &self.resolver, &self.fusion_pool)?;

        if matches!(action, Action::Play { .. }) {
            self.summoned[seat] = true;
        }
        self.history.push(ActionRecord::new(seat, action, self.turn));
        debug!(%seat, %action, turn = self.turn, "action committed");

        if let Some(winner) = self.check_winner() {
            events.push(MatchEvent::MatchWon { winner });
        }
        self.record(&events);
        Ok(events)
    }

    fn begin_turn(&mut self, seat: Seat, events: &mut Vec<MatchEvent>) {
        if seat != self.turn_owner {
            self.turn += 1;
        }
        self.turn_owner = seat;
        self.summoned[seat] = false;

        let drawn = match self.players[seat].draw() {
            Some(card) => MatchEvent::CardDrawn {
                seat,
                card: Arc::clone(card.definition()),
            },
            None => MatchEvent::DrawFailed { seat },
        };
        let started = [
            MatchEvent::TurnStarted {
                seat,
                turn: self.turn,
            },
            drawn,
        ];
        self.record(&started);
        events.extend(started);
    }

    /// Set the winner if a player is newly defeated. The human is checked
    /// first.
    fn check_winner(&mut self) -> Option<Seat> {
        if self.winner.is_some() {
            return None;
        }
        let winner = if self.players[Seat::Human].is_defeated() {
            Seat::Ai
        } else if self.players[Seat::Ai].is_defeated() {
            Seat::Human
        } else {
            return None;
        };
        self.winner = Some(winner);
        self.phase = Phase::Ended;
        info!(%winner, turn = self.turn, "match over");
        Some(winner)
    }

    fn record(&mut self, events: &[MatchEvent]) {
        self.log.extend(events.iter().map(ToString::to_string));
        self.revision += 1;
    }
}

/// One card as the display layer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub uid: CardUid,
    pub catalog_id: CatalogId,
    pub name: String,
    pub attack: u32,
    pub defense: u32,
    pub level: u8,
    pub attribute: Attribute,
    pub creature_type: String,
    pub art: String,
    pub position: Position,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        let def = card.definition();
        Self {
            uid: card.uid(),
            catalog_id: def.id,
            name: def.name.clone(),
            attack: def.attack,
            defense: def.defense,
            level: def.level,
            attribute: def.attribute,
            creature_type: def.creature_type.clone(),
            art: def.art.clone(),
            position: card.position(),
        }
    }
}

/// A hand, either shown or reduced to its size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "visibility", rename_all = "snake_case")]
pub enum HandView {
    Cards { cards: Vec<CardView> },
    Hidden { count: usize },
}

impl HandView {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            HandView::Cards { cards } => cards.len(),
            HandView::Hidden { count } => *count,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SideView {
    pub name: String,
    pub seat: Seat,
    pub life_points: u32,
    pub hand: HandView,
    pub field: Vec<CardView>,
    pub deck_count: usize,
    pub graveyard_count: usize,
    pub summoned_this_turn: bool,
}

/// Everything the display layer needs to draw the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchSnapshot {
    pub human: SideView,
    pub ai: SideView,
    pub turn_owner: Seat,
    pub turn_owner_name: String,
    pub phase: Phase,
    pub turn: u32,
    pub revision: u64,
    /// The most recent `MatchConfig::log_window` log lines.
    pub log: Vec<String>,
    pub winner: Option<Seat>,
    pub winner_name: Option<String>,
}
