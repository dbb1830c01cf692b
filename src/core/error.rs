//! Command errors returned to the presentation layer.
//!
//! These cover every recoverable rule violation a caller can trigger:
//! acting after the game is over, acting twice in a turn, bad indices,
//! acting on defeated cards, and malformed switch selections. They never
//! leave the session in a partially applied state — validation happens
//! before any mutation.
//!
//! Out-of-range slot access from *internal* callers is a precondition
//! violation and panics instead (see `Player::replace_slot`).

use thiserror::Error;

/// A rejected command. The message is display-ready; the presentation layer
/// needs no further interpretation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Any command after the game has ended.
    #[error("the game is already over")]
    GameOver,

    /// The current player already attacked this turn. Also rejects a switch
    /// attempted after attacking.
    #[error("you have already attacked this turn")]
    AlreadyAttacked,

    /// The current player already switched cards this turn.
    #[error("you have already switched cards this turn")]
    AlreadySwitched,

    /// Attacking-card index outside the current player's hand.
    #[error("invalid attacking card index: {0}")]
    InvalidAttackerIndex(usize),

    /// Target-card index outside the opponent's hand.
    #[error("invalid target card index: {0}")]
    InvalidTargetIndex(usize),

    /// The chosen attacking card has already been defeated.
    #[error("cannot attack with a defeated card")]
    AttackerDefeated,

    /// The chosen target card has already been defeated.
    #[error("target card is already defeated")]
    TargetAlreadyDefeated,

    /// A switch selection with no pairs.
    #[error("no cards selected for switching")]
    EmptySelection,

    /// Slot count and deck-card count in a switch selection differ.
    #[error("selected {slots} hand slot(s) but {picks} deck card(s)")]
    MismatchedSelection { slots: usize, picks: usize },

    /// The same hand slot appears twice in one selection.
    #[error("hand slot {0} selected more than once")]
    DuplicateSlot(usize),

    /// The same visible deck card appears twice in one selection.
    #[error("visible deck card {0} selected more than once")]
    DuplicatePick(usize),

    /// Hand-slot index outside the fixed hand.
    #[error("invalid hand slot index: {0}")]
    InvalidSlotIndex(usize),

    /// The selected slot holds a defeated card, which can never be switched
    /// out.
    #[error("cannot switch out the defeated card in slot {0}")]
    SlotDefeated(usize),

    /// The deck's visible window has fewer cards than the selection needs.
    #[error("only {available} card(s) visible in the deck, needed {requested}")]
    NotEnoughVisibleCards { available: usize, requested: usize },

    /// A visible-window position outside the current window.
    #[error("no visible deck card at position {0}")]
    InvalidPickIndex(usize),
}
