//! The draw pile and its visible window.
//!
//! The deck is an ordered pile — front card draws next — with a derived
//! window over the first [`VISIBLE_WINDOW`] cards. The window is what a
//! player can switch against; it is always exactly the pile prefix and is
//! exposed read-only.

use serde::{Deserialize, Serialize};

use crate::cards::{Archetype, Card};
use crate::core::GameRng;

/// How many pile cards are visible for switching.
pub const VISIBLE_WINDOW: usize = 5;

/// Per-archetype card counts in a standard deck.
pub const CARDS_PER_ARCHETYPE: usize = 10;

/// An ordered draw pile. Front = next card to draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pile: Vec<Card>,
}

impl Deck {
    /// Build a deck with the given count of each archetype and shuffle it.
    #[must_use]
    pub fn new(stone: usize, paper: usize, scissors: usize, rng: &mut GameRng) -> Self {
        let mut pile = Vec::with_capacity(stone + paper + scissors);
        pile.extend((0..stone).map(|_| Card::new(Archetype::Stone)));
        pile.extend((0..paper).map(|_| Card::new(Archetype::Paper)));
        pile.extend((0..scissors).map(|_| Card::new(Archetype::Scissors)));

        rng.shuffle(&mut pile);

        Self { pile }
    }

    /// Build the standard 30-card deck.
    #[must_use]
    pub fn standard(rng: &mut GameRng) -> Self {
        Self::new(
            CARDS_PER_ARCHETYPE,
            CARDS_PER_ARCHETYPE,
            CARDS_PER_ARCHETYPE,
            rng,
        )
    }

    /// Draw up to `count` cards from the front of the pile.
    ///
    /// Returns fewer when the pile runs short.
    pub fn draw(&mut self, count: usize) -> Vec<Card> {
        let take = count.min(self.pile.len());
        self.pile.drain(..take).collect()
    }

    /// Draw a single card, or `None` when the pile is empty.
    pub fn draw_one(&mut self) -> Option<Card> {
        if self.pile.is_empty() {
            None
        } else {
            Some(self.pile.remove(0))
        }
    }

    /// Remove the card at `index` within the visible window.
    ///
    /// Returns `None` when `index` falls outside the current window. The
    /// rest of the pile keeps its order and the window refills from behind.
    pub fn take_visible(&mut self, index: usize) -> Option<Card> {
        if index < self.visible().len() {
            Some(self.pile.remove(index))
        } else {
            None
        }
    }

    /// The visible window: the first [`VISIBLE_WINDOW`] pile cards.
    #[must_use]
    pub fn visible(&self) -> &[Card] {
        &self.pile[..VISIBLE_WINDOW.min(self.pile.len())]
    }

    /// Cards left in the pile.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pile.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_deck(rng: &mut GameRng) -> Deck {
        Deck::new(2, 2, 2, rng)
    }

    #[test]
    fn test_standard_composition() {
        let mut rng = GameRng::new(42);
        let deck = Deck::standard(&mut rng);

        assert_eq!(deck.remaining(), 30);
        for archetype in Archetype::ALL {
            let count = deck
                .pile
                .iter()
                .filter(|card| card.archetype() == archetype)
                .count();
            assert_eq!(count, CARDS_PER_ARCHETYPE);
        }
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);

        assert_eq!(Deck::standard(&mut rng1), Deck::standard(&mut rng2));
    }

    #[test]
    fn test_visible_is_pile_prefix() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::standard(&mut rng);

        assert_eq!(deck.visible().len(), VISIBLE_WINDOW);
        assert_eq!(deck.visible(), &deck.pile[..VISIBLE_WINDOW]);

        deck.draw(27);
        assert_eq!(deck.remaining(), 3);
        assert_eq!(deck.visible().len(), 3);

        deck.draw(3);
        assert!(deck.visible().is_empty());
    }

    #[test]
    fn test_draw_from_front() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::standard(&mut rng);

        let expected: Vec<_> = deck.pile[..5].to_vec();
        let drawn = deck.draw(5);

        assert_eq!(drawn, expected);
        assert_eq!(deck.remaining(), 25);
    }

    #[test]
    fn test_draw_more_than_remaining() {
        let mut rng = GameRng::new(42);
        let mut deck = small_deck(&mut rng);

        let drawn = deck.draw(10);
        assert_eq!(drawn.len(), 6);
        assert!(deck.is_empty());

        assert!(deck.draw(3).is_empty());
    }

    #[test]
    fn test_draw_one() {
        let mut rng = GameRng::new(42);
        let mut deck = small_deck(&mut rng);

        for _ in 0..6 {
            assert!(deck.draw_one().is_some());
        }
        assert_eq!(deck.draw_one(), None);
    }

    #[test]
    fn test_take_visible_preserves_order() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::standard(&mut rng);

        let before = deck.pile.clone();
        let taken = deck.take_visible(2).unwrap();

        assert_eq!(taken, before[2]);
        assert_eq!(deck.pile[..2], before[..2]);
        assert_eq!(deck.pile[2..], before[3..]);
        // Window refills from the pile
        assert_eq!(deck.visible().len(), VISIBLE_WINDOW);
    }

    #[test]
    fn test_take_visible_out_of_window() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::standard(&mut rng);

        assert_eq!(deck.take_visible(VISIBLE_WINDOW), None);

        deck.draw(28);
        assert_eq!(deck.visible().len(), 2);
        assert_eq!(deck.take_visible(2), None);
        assert!(deck.take_visible(1).is_some());
    }
}
