//! Seats and players.
//!
//! ## Seat
//!
//! A duel always has exactly two sides: the human and the search-driven AI.
//!
//! ## SeatMap
//!
//! Per-seat storage with O(1) access and a split borrow of both sides.
//!
//! ## Player
//!
//! Owns the four zones (deck, hand, field, graveyard) and the life total.
//! Zones are `im::Vector`s, so `Player::clone` is O(1) with structural
//! sharing: a clone and its original never observe each other's mutations,
//! which is what search rollouts rely on.

use std::ops::{Index, IndexMut};
use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::{FIELD_LIMIT, HAND_LIMIT, STARTING_LIFE};
use super::entity::CardUid;
use crate::cards::{Card, CardDefinition, Position};

/// One side of the duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Human,
    Ai,
}

impl Seat {
    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Seat::Human => Seat::Ai,
            Seat::Ai => Seat::Human,
        }
    }

    const fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Ai => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Human => f.write_str("Human"),
            Seat::Ai => f.write_str("AI"),
        }
    }
}

/// Per-seat data storage.
///
/// ```
/// use fusion_duel::core::{Seat, SeatMap};
///
/// let mut flags = SeatMap::with_value(false);
/// flags[Seat::Ai] = true;
/// assert!(!flags[Seat::Human]);
///
/// let (mine, theirs) = flags.pair_mut(Seat::Ai);
/// assert!(*mine && !*theirs);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::Human), factory(Seat::Ai)],
        }
    }

    /// Create from the human's and the AI's entries.
    pub fn from_parts(human: T, ai: T) -> Self {
        Self { data: [human, ai] }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Mutable access to `seat`'s entry and its opponent's, in that order.
    pub fn pair_mut(&mut self, seat: Seat) -> (&mut T, &mut T) {
        let [human, ai] = &mut self.data;
        match seat {
            Seat::Human => (human, ai),
            Seat::Ai => (ai, human),
        }
    }

    /// Iterate over (Seat, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        [Seat::Human, Seat::Ai].into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        &mut self.data[seat.index()]
    }
}

/// A duelist: zones, life points, and a uid allocator for minted cards.
///
/// ## Invariants
///
/// - `hand.len() <= HAND_LIMIT`, `field.len() <= FIELD_LIMIT`
/// - every card is in exactly one zone
/// - uids are unique across this player's zones
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    seat: Seat,
    life_points: u32,
    deck: Vector<Card>,
    hand: Vector<Card>,
    field: Vector<Card>,
    graveyard: Vector<Card>,
    next_uid: CardUid,
}

impl Player {
    /// Create a player with full life and the given deck, front card first.
    pub fn new(
        name: impl Into<String>,
        seat: Seat,
        deck: impl IntoIterator<Item = Arc<CardDefinition>>,
    ) -> Self {
        let mut player = Self {
            name: name.into(),
            seat,
            life_points: STARTING_LIFE,
            deck: Vector::new(),
            hand: Vector::new(),
            field: Vector::new(),
            graveyard: Vector::new(),
            next_uid: CardUid::new(0),
        };
        for definition in deck {
            let card = player.mint(definition);
            player.deck.push_back(card);
        }
        player
    }

    /// Create a card instance with a fresh uid. The card is not placed in
    /// any zone.
    pub fn mint(&mut self, definition: Arc<CardDefinition>) -> Card {
        let uid = self.next_uid;
        self.next_uid = uid.next();
        Card::new(uid, definition)
    }

    // === Accessors ===

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    #[must_use]
    pub fn is_ai(&self) -> bool {
        self.seat == Seat::Ai
    }

    #[must_use]
    pub fn life_points(&self) -> u32 {
        self.life_points
    }

    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &Vector<Card> {
        &self.hand
    }

    #[must_use]
    pub fn field(&self) -> &Vector<Card> {
        &self.field
    }

    #[must_use]
    pub fn graveyard(&self) -> &Vector<Card> {
        &self.graveyard
    }

    /// Find a card in hand by uid.
    #[must_use]
    pub fn hand_card(&self, uid: CardUid) -> Option<&Card> {
        self.hand.iter().find(|c| c.uid() == uid)
    }

    /// Find a card on the field by uid.
    #[must_use]
    pub fn field_card(&self, uid: CardUid) -> Option<&Card> {
        self.field.iter().find(|c| c.uid() == uid)
    }

    /// Highest-power card on the field.
    #[must_use]
    pub fn strongest_on_field(&self) -> Option<&Card> {
        self.field.iter().max_by_key(|c| c.power())
    }

    /// Sum of `power()` over the field.
    #[must_use]
    pub fn field_power(&self) -> u32 {
        self.field.iter().map(Card::power).sum()
    }

    /// Number of field cards in attack position.
    #[must_use]
    pub fn attackers_on_field(&self) -> usize {
        self.field.iter().filter(|c| c.is_attacking()).count()
    }

    // === Zone moves ===

    /// Move the front deck card into hand.
    ///
    /// Returns `None` with no effect if the deck is empty or the hand full.
    pub fn draw(&mut self) -> Option<Card> {
        if self.hand.len() >= HAND_LIMIT {
            return None;
        }
        let card = self.deck.pop_front()?;
        self.hand.push_back(card.clone());
        Some(card)
    }

    /// Draw `count` times, ignoring draws that fail.
    pub fn draw_initial(&mut self, count: usize) {
        for _ in 0..count {
            self.draw();
        }
    }

    /// Move a hand card to the field in `position`.
    ///
    /// Returns `false` with no effect if the card is not in hand or the
    /// field is full.
    pub fn play(&mut self, uid: CardUid, position: Position) -> bool {
        if self.field.len() >= FIELD_LIMIT {
            return false;
        }
        let Some(index) = position_of(&self.hand, uid) else {
            return false;
        };
        let mut card = self.hand.remove(index);
        card.set_position(position);
        self.field.push_back(card);
        true
    }

    /// Move a field card to the graveyard. Returns `false` if absent.
    pub fn remove_from_field(&mut self, uid: CardUid) -> bool {
        match position_of(&self.field, uid) {
            Some(index) => {
                let card = self.field.remove(index);
                self.graveyard.push_back(card);
                true
            }
            None => false,
        }
    }

    /// Flip a field card's position. Returns the new position, or `None`
    /// if the card is not on the field.
    pub fn toggle_position(&mut self, uid: CardUid) -> Option<Position> {
        let index = position_of(&self.field, uid)?;
        let card = self.field.get_mut(index)?;
        card.toggle_position();
        Some(card.position())
    }

    /// Replace two hand cards with a fusion result.
    ///
    /// Both inputs go to the graveyard and a freshly minted `result` joins
    /// the hand. Returns `None` with no effect unless both uids are distinct
    /// cards in hand.
    pub fn fuse_in_hand(
        &mut self,
        first: CardUid,
        second: CardUid,
        result: Arc<CardDefinition>,
    ) -> Option<Card> {
        if first == second {
            return None;
        }
        let first_index = position_of(&self.hand, first)?;
        position_of(&self.hand, second)?;

        let first_card = self.hand.remove(first_index);
        let second_index = position_of(&self.hand, second)?;
        let second_card = self.hand.remove(second_index);
        self.graveyard.push_back(first_card);
        self.graveyard.push_back(second_card);

        let fused = self.mint(result);
        self.hand.push_back(fused.clone());
        Some(fused)
    }

    /// Lose life, never going below zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.life_points = self.life_points.saturating_sub(amount);
    }

    // === Predicates ===

    /// Out of life, or out of cards everywhere except the graveyard.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.life_points == 0
            || (self.deck.is_empty() && self.hand.is_empty() && self.field.is_empty())
    }

    #[must_use]
    pub fn has_field_cards(&self) -> bool {
        !self.field.is_empty()
    }

    /// Room on the field and something to put there.
    #[must_use]
    pub fn can_play_card(&self) -> bool {
        self.field.len() < FIELD_LIMIT && !self.hand.is_empty()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - LP: {} | Field: {} | Hand: {} | Deck: {}",
            self.name,
            self.life_points,
            self.field.len(),
            self.hand.len(),
            self.deck.len()
        )
    }
}

fn position_of(zone: &Vector<Card>, uid: CardUid) -> Option<usize> {
    zone.iter().position(|c| c.uid() == uid)
}
