//! Card piles for one battle.
//!
//! `Piles` owns every card instance in the battle. Cards only ever move
//! between piles; they are never shared or mutated. It supports:
//! - Ordered deck with explicit position control (draw end = top)
//! - Hand with a size limit and overflow into discard
//! - Reshuffling the discard pile into an empty deck
//! - Restoring the original deck at teardown

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::GameRng;

/// The possible locations of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pile {
    Deck,
    Hand,
    Discard,
    Exhaust,
    /// Played power cards. Never drawn, discarded, or exhausted again.
    UsedPowers,
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Pile::Deck => "deck",
            Pile::Hand => "hand",
            Pile::Discard => "discard",
            Pile::Exhaust => "exhaust",
            Pile::UsedPowers => "used powers",
        };
        f.write_str(label)
    }
}

/// Position for inserting a card into the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Draw end: drawn next.
    Top,
    /// Drawn last.
    Bottom,
    /// Insert at specific index (0 = bottom).
    Index(usize),
}

/// All card piles of one battle.
///
/// ## Usage
///
/// ```
/// use deck_battle::cards::{Card, CardType, Cost};
/// use deck_battle::zones::{Pile, Piles};
///
/// let deck = vec![
///     Card::new("1", "Strike", Cost::Fixed(1), CardType::Attack),
///     Card::new("2", "Defend", Cost::Fixed(1), CardType::Skill),
/// ];
/// let mut piles = Piles::new(deck);
///
/// let top = piles.pop_top().unwrap();
/// assert_eq!(top.name, "Defend");
/// assert_eq!(piles.add_to_hand(top, 10), Pile::Hand);
/// assert_eq!(piles.total(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Piles {
    /// Draw pile. The last element is the top.
    pub deck: Vec<Card>,
    pub hand: Vec<Card>,
    pub discard: Vec<Card>,
    pub exhaust: Vec<Card>,
    pub used_powers: Vec<Card>,

    /// The deck as handed to the battle, restored at teardown.
    original: Vec<Card>,
}

impl Piles {
    /// Create piles with every card in the deck, top = last.
    #[must_use]
    pub fn new(deck: Vec<Card>) -> Self {
        Self {
            original: deck.clone(),
            deck,
            ..Self::default()
        }
    }

    /// The deck as it was before the battle.
    #[must_use]
    pub fn original(&self) -> &[Card] {
        &self.original
    }

    /// Cards in one pile.
    #[must_use]
    pub fn cards(&self, pile: Pile) -> &[Card] {
        match pile {
            Pile::Deck => &self.deck,
            Pile::Hand => &self.hand,
            Pile::Discard => &self.discard,
            Pile::Exhaust => &self.exhaust,
            Pile::UsedPowers => &self.used_powers,
        }
    }

    fn cards_mut(&mut self, pile: Pile) -> &mut Vec<Card> {
        match pile {
            Pile::Deck => &mut self.deck,
            Pile::Hand => &mut self.hand,
            Pile::Discard => &mut self.discard,
            Pile::Exhaust => &mut self.exhaust,
            Pile::UsedPowers => &mut self.used_powers,
        }
    }

    /// Number of cards in one pile.
    #[must_use]
    pub fn len(&self, pile: Pile) -> usize {
        self.cards(pile).len()
    }

    /// Cards across every pile.
    #[must_use]
    pub fn total(&self) -> usize {
        self.deck.len()
            + self.hand.len()
            + self.discard.len()
            + self.exhaust.len()
            + self.used_powers.len()
    }

    /// Shuffle the deck.
    pub fn shuffle_deck(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.deck);
    }

    /// Move innate cards to the top of the deck, keeping relative order.
    pub fn raise_innate(&mut self) {
        let (innate, rest): (Vec<Card>, Vec<Card>) =
            std::mem::take(&mut self.deck).into_iter().partition(|c| c.innate);
        self.deck = rest;
        self.deck.extend(innate);
    }

    /// Move the whole discard pile into the deck and shuffle it.
    ///
    /// Returns how many cards moved.
    pub fn reshuffle_discard(&mut self, rng: &mut GameRng) -> usize {
        let moved = self.discard.len();
        self.deck.append(&mut self.discard);
        rng.shuffle(&mut self.deck);
        moved
    }

    /// Take the top card of the deck.
    pub fn pop_top(&mut self) -> Option<Card> {
        self.deck.pop()
    }

    /// Put a card into the deck at a position.
    pub fn insert_into_deck(&mut self, card: Card, position: ZonePosition) {
        match position {
            ZonePosition::Top => self.deck.push(card),
            ZonePosition::Bottom => self.deck.insert(0, card),
            ZonePosition::Index(idx) => {
                let idx = idx.min(self.deck.len());
                self.deck.insert(idx, card);
            }
        }
    }

    /// Put a card into the deck at a uniformly random index.
    pub fn insert_into_deck_randomly(&mut self, card: Card, rng: &mut GameRng) {
        let idx = rng.insertion_index(self.deck.len());
        self.insert_into_deck(card, ZonePosition::Index(idx));
    }

    /// Add to hand, or to discard if the hand already holds `hand_limit` cards.
    ///
    /// Returns the pile the card landed in.
    pub fn add_to_hand(&mut self, card: Card, hand_limit: usize) -> Pile {
        if self.hand.len() < hand_limit {
            self.hand.push(card);
            Pile::Hand
        } else {
            self.discard.push(card);
            Pile::Discard
        }
    }

    /// Append a card to the end of a pile.
    pub fn push(&mut self, pile: Pile, card: Card) {
        self.cards_mut(pile).push(card);
    }

    /// Remove a card from the hand by index.
    pub fn take_from_hand(&mut self, index: usize) -> Option<Card> {
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }

    /// Remove and return every hand card matching `pred`, keeping the rest
    /// in order.
    pub fn drain_hand_where(&mut self, mut pred: impl FnMut(&Card) -> bool) -> Vec<Card> {
        let (taken, kept): (Vec<Card>, Vec<Card>) =
            std::mem::take(&mut self.hand).into_iter().partition(|c| pred(c));
        self.hand = kept;
        taken
    }

    /// Restore the original deck and clear every other pile.
    pub fn reset(&mut self) {
        self.deck = self.original.clone();
        self.hand.clear();
        self.discard.clear();
        self.exhaust.clear();
        self.used_powers.clear();
    }
}
