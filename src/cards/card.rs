//! Runtime card state.
//!
//! A [`Card`] is created once, at deal or draw time, from its archetype's
//! stat template. After that the combat resolver is the only writer: stat
//! changes go through the clamping reducers here, so
//! `0 <= current_life <= max_life` and `0 <= current_defence <= max_defence`
//! hold at all times. A card whose life reaches 0 is defeated; it stays in
//! its hand slot for the rest of the game.

use serde::{Deserialize, Serialize};

use super::archetype::Archetype;

/// A single card in play or in the deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    archetype: Archetype,
    name: String,
    max_life: i32,
    current_life: i32,
    max_defence: i32,
    current_defence: i32,
    attack: i32,
    attack_muted: bool,
    defence_muted: bool,
}

impl Card {
    /// Create a fresh card from its archetype's stat template.
    #[must_use]
    pub fn new(archetype: Archetype) -> Self {
        let template = archetype.template();
        Self {
            archetype,
            name: template.name.to_string(),
            max_life: template.life,
            current_life: template.life,
            max_defence: template.defence,
            current_defence: template.defence,
            attack: template.attack,
            attack_muted: false,
            defence_muted: false,
        }
    }

    #[must_use]
    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn max_life(&self) -> i32 {
        self.max_life
    }

    #[must_use]
    pub fn current_life(&self) -> i32 {
        self.current_life
    }

    #[must_use]
    pub fn max_defence(&self) -> i32 {
        self.max_defence
    }

    #[must_use]
    pub fn current_defence(&self) -> i32 {
        self.current_defence
    }

    /// Attack power. Fixed for the card's lifetime.
    #[must_use]
    pub fn attack(&self) -> i32 {
        self.attack
    }

    /// Whether this card's attack has been muted.
    #[must_use]
    pub fn is_attack_muted(&self) -> bool {
        self.attack_muted
    }

    /// Whether this card's defence-damage path has been muted.
    #[must_use]
    pub fn is_defence_muted(&self) -> bool {
        self.defence_muted
    }

    /// A card is defeated once its life reaches 0. Defeated cards keep
    /// their slot but can no longer attack or be switched out.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.current_life == 0
    }

    /// Reduce defence by up to `amount`, clamping at 0.
    ///
    /// Returns the amount actually absorbed.
    pub(crate) fn reduce_defence(&mut self, amount: i32) -> i32 {
        let absorbed = amount.min(self.current_defence);
        self.current_defence -= absorbed;
        absorbed
    }

    /// Reduce life by up to `amount`, clamping at 0.
    ///
    /// Returns the amount actually lost.
    pub(crate) fn reduce_life(&mut self, amount: i32) -> i32 {
        let lost = amount.min(self.current_life);
        self.current_life -= lost;
        lost
    }

    pub(crate) fn mute_attack(&mut self) {
        self.attack_muted = true;
    }

    pub(crate) fn mute_defence(&mut self) {
        self.defence_muted = true;
    }

    /// Per-archetype end-of-turn hook, run by `Player::start_new_turn`.
    ///
    /// Currently a no-op for all three archetypes: mute flags persist for
    /// the rest of the game once set. New archetypes with turn-scoped
    /// effects clear them here.
    pub(crate) fn end_of_turn(&mut self) {
        match self.archetype {
            Archetype::Stone | Archetype::Paper | Archetype::Scissors => {}
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) - Life: {}/{}, Defence: {}/{}, Attack: {}",
            self.name,
            self.archetype,
            self.current_life,
            self.max_life,
            self.current_defence,
            self.max_defence,
            self.attack
        )
    }
}
