//! A player: a fixed five-slot hand plus per-turn action flags.
//!
//! The hand never grows or shrinks. Defeated cards keep their slot, so
//! slot indices stay stable for the whole game; a switch replaces the card
//! in a slot, it never reorders the others.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Slots in a player's hand, fixed for the whole game.
pub const HAND_SIZE: usize = 5;

/// One of the two participants in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    slots: SmallVec<[Card; HAND_SIZE]>,
    has_attacked_this_turn: bool,
    has_switched_this_turn: bool,
}

impl Player {
    /// Create a player holding exactly [`HAND_SIZE`] dealt cards.
    ///
    /// # Panics
    ///
    /// Panics unless exactly [`HAND_SIZE`] cards are supplied.
    pub(crate) fn new(name: impl Into<String>, cards: impl IntoIterator<Item = Card>) -> Self {
        let slots: SmallVec<[Card; HAND_SIZE]> = cards.into_iter().collect();
        assert_eq!(slots.len(), HAND_SIZE, "a hand holds exactly {HAND_SIZE} cards");

        Self {
            name: name.into(),
            slots,
            has_attacked_this_turn: false,
            has_switched_this_turn: false,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full hand, in slot order.
    #[must_use]
    pub fn slots(&self) -> &[Card] {
        &self.slots
    }

    /// The card in one slot, or `None` past the fixed hand.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&Card> {
        self.slots.get(index)
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.slots.get_mut(index)
    }

    /// Install `new_card` in `index`, returning the displaced card.
    ///
    /// # Panics
    ///
    /// Panics when `index` is outside `[0, HAND_SIZE)`. Callers validate
    /// user-supplied indices before reaching this point; an out-of-range
    /// index here is a bug, not an input error.
    pub(crate) fn replace_slot(&mut self, index: usize, new_card: Card) -> Card {
        assert!(index < HAND_SIZE, "slot index {index} out of range");
        std::mem::replace(&mut self.slots[index], new_card)
    }

    /// True once every slot holds a defeated card.
    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.slots.iter().all(Card::is_defeated)
    }

    /// Whether this player already attacked in the current turn.
    #[must_use]
    pub fn has_attacked_this_turn(&self) -> bool {
        self.has_attacked_this_turn
    }

    /// Whether this player already switched cards in the current turn.
    #[must_use]
    pub fn has_switched_this_turn(&self) -> bool {
        self.has_switched_this_turn
    }

    pub(crate) fn mark_attacked(&mut self) {
        self.has_attacked_this_turn = true;
    }

    pub(crate) fn mark_switched(&mut self) {
        self.has_switched_this_turn = true;
    }

    /// Reset the per-turn flags and run each card's end-of-turn hook.
    pub(crate) fn start_new_turn(&mut self) {
        self.has_attacked_this_turn = false;
        self.has_switched_this_turn = false;

        for card in &mut self.slots {
            card.end_of_turn();
        }
    }
}
