//! The game session: turn state machine, command validation, win detection.
//!
//! A session moves through two states: awaiting an action from the current
//! player, and game over. Per turn the current player gets at most one
//! switch and at most one attack; a switch is rejected once the player has
//! attacked, so the effective order is switch-then-attack. Every command
//! validates fully before mutating anything, so a rejected command leaves
//! the session untouched.
//!
//! The session owns the only [`GameRng`]; a fixed seed replays the shuffle
//! and every combat roll.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::combat::{resolve_attack, AttackOutcome};
use crate::core::{CommandError, GameRng};
use crate::deck::Deck;
use crate::player::{Player, HAND_SIZE};

/// Cards dealt to each player at the start.
const INITIAL_HAND_SIZE: usize = HAND_SIZE;

/// A switch request: hand slots paired with visible-window positions.
///
/// Pairs match by position: `slots[i]` receives the window card at
/// `picks[i]`. Both sides are sets — a duplicate entry on either side is
/// rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchSelection {
    /// Hand-slot indices to replace.
    pub slots: Vec<usize>,
    /// Positions within the deck's visible window, matched to `slots`.
    pub picks: Vec<usize>,
}

impl SwitchSelection {
    /// Build a selection from `(slot, pick)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let (slots, picks) = pairs.into_iter().unzip();
        Self { slots, picks }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// One slot replacement performed by a switch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// The hand slot that changed.
    pub slot: usize,
    /// The card switched out.
    pub old_card: Card,
    /// The card installed from the visible window.
    pub new_card: Card,
}

/// The result of a successful switch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchOutcome {
    /// Every replacement, in selection order.
    pub replacements: Vec<Replacement>,
    narrative: String,
}

impl SwitchOutcome {
    /// The display-ready, per-pair narrative.
    #[must_use]
    pub fn narrative(&self) -> &str {
        &self.narrative
    }
}

impl std::fmt::Display for SwitchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.narrative)
    }
}

/// One two-player game, from deal to victory.
#[derive(Clone, Debug)]
pub struct GameSession {
    players: [Player; 2],
    deck: Deck,
    current: usize,
    game_over: bool,
    winner: Option<usize>,
    status: String,
    rng: GameRng,
}

impl GameSession {
    /// Start a new game from a seed.
    ///
    /// Builds the standard 30-card deck, shuffles it, and deals
    /// [`HAND_SIZE`] cards to each player. The first player acts first.
    #[must_use]
    pub fn new(name1: impl Into<String>, name2: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(name1, name2, GameRng::new(seed))
    }

    /// Start a new game with an injected RNG.
    #[must_use]
    pub fn with_rng(name1: impl Into<String>, name2: impl Into<String>, mut rng: GameRng) -> Self {
        let mut deck = Deck::standard(&mut rng);
        let player1 = Player::new(name1, deck.draw(INITIAL_HAND_SIZE));
        let player2 = Player::new(name2, deck.draw(INITIAL_HAND_SIZE));

        debug!(
            "new game: {} vs {}, {} cards left in the deck",
            player1.name(),
            player2.name(),
            deck.remaining()
        );

        Self {
            players: [player1, player2],
            deck,
            current: 0,
            game_over: false,
            winner: None,
            status: "Game started".to_string(),
            rng,
        }
    }

    /// Attack the opponent's card at `target_index` with the current
    /// player's card at `attacker_index`.
    ///
    /// Marks the current player as having attacked (a muted attacker still
    /// consumes the attack) and, when the opponent's last card falls, ends
    /// the game with the current player as winner.
    pub fn perform_attack(
        &mut self,
        attacker_index: usize,
        target_index: usize,
    ) -> Result<AttackOutcome, CommandError> {
        if self.game_over {
            return Err(CommandError::GameOver);
        }
        if self.current_player().has_attacked_this_turn() {
            return Err(CommandError::AlreadyAttacked);
        }

        let (left, right) = self.players.split_at_mut(1);
        let (attacker_hand, target_hand) = if self.current == 0 {
            (&left[0], &mut right[0])
        } else {
            (&right[0], &mut left[0])
        };

        let attacker = attacker_hand
            .slot(attacker_index)
            .ok_or(CommandError::InvalidAttackerIndex(attacker_index))?;
        if target_hand.slot(target_index).is_none() {
            return Err(CommandError::InvalidTargetIndex(target_index));
        }
        if attacker.is_defeated() {
            return Err(CommandError::AttackerDefeated);
        }

        let target = target_hand
            .slot_mut(target_index)
            .expect("target index validated above");
        if target.is_defeated() {
            return Err(CommandError::TargetAlreadyDefeated);
        }

        debug!(
            "{}: slot {} attacks opposing slot {}",
            attacker_hand.name(),
            attacker_index,
            target_index
        );

        let outcome = resolve_attack(attacker, target, &mut self.rng);

        self.players[self.current].mark_attacked();

        if self.opponent().has_lost() {
            self.game_over = true;
            self.winner = Some(self.current);
            self.status = format!("{} has won the game!", self.current_player().name());
            info!("{}", self.status);
        }

        Ok(outcome)
    }

    /// Replace the selected hand slots with their paired cards from the
    /// deck's visible window.
    ///
    /// The window refreshes from the pile as cards leave it; unselected
    /// slots keep their order and identity.
    pub fn switch_cards(
        &mut self,
        selection: &SwitchSelection,
    ) -> Result<SwitchOutcome, CommandError> {
        if self.game_over {
            return Err(CommandError::GameOver);
        }

        let player = &self.players[self.current];
        if player.has_attacked_this_turn() {
            return Err(CommandError::AlreadyAttacked);
        }
        if player.has_switched_this_turn() {
            return Err(CommandError::AlreadySwitched);
        }

        if selection.slots.len() != selection.picks.len() {
            return Err(CommandError::MismatchedSelection {
                slots: selection.slots.len(),
                picks: selection.picks.len(),
            });
        }
        if selection.is_empty() {
            return Err(CommandError::EmptySelection);
        }

        for (i, &slot) in selection.slots.iter().enumerate() {
            if selection.slots[..i].contains(&slot) {
                return Err(CommandError::DuplicateSlot(slot));
            }
            let card = player
                .slot(slot)
                .ok_or(CommandError::InvalidSlotIndex(slot))?;
            if card.is_defeated() {
                return Err(CommandError::SlotDefeated(slot));
            }
        }

        let visible = self.deck.visible().len();
        if visible < selection.picks.len() {
            return Err(CommandError::NotEnoughVisibleCards {
                available: visible,
                requested: selection.picks.len(),
            });
        }
        for (i, &pick) in selection.picks.iter().enumerate() {
            if selection.picks[..i].contains(&pick) {
                return Err(CommandError::DuplicatePick(pick));
            }
            if pick >= visible {
                return Err(CommandError::InvalidPickIndex(pick));
            }
        }

        debug!(
            "{}: switching {} card(s)",
            player.name(),
            selection.len()
        );

        // Pull the picked cards out of the pile. Removing in descending
        // window order keeps the not-yet-removed positions stable.
        let mut incoming: Vec<(usize, Card)> = Vec::with_capacity(selection.len());
        let mut ordered: Vec<(usize, usize)> = selection
            .slots
            .iter()
            .copied()
            .zip(selection.picks.iter().copied())
            .collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1));
        for (slot, pick) in ordered {
            let card = self
                .deck
                .take_visible(pick)
                .expect("pick validated against the window");
            incoming.push((slot, card));
        }

        let player = &mut self.players[self.current];
        let mut replacements = Vec::with_capacity(incoming.len());
        let mut lines = vec!["Switched cards:".to_string()];

        // Report in the caller's selection order.
        for &slot in &selection.slots {
            let position = incoming
                .iter()
                .position(|(s, _)| *s == slot)
                .expect("every selected slot has an incoming card");
            let (_, new_card) = incoming.swap_remove(position);

            let old_card = player.replace_slot(slot, new_card.clone());
            lines.push(format!(
                "- Replaced {} with {}",
                old_card.name(),
                new_card.name()
            ));
            replacements.push(Replacement {
                slot,
                old_card,
                new_card,
            });
        }

        player.mark_switched();

        Ok(SwitchOutcome {
            replacements,
            narrative: lines.join("\n"),
        })
    }

    /// Hand the turn to the other player.
    ///
    /// Resets the new current player's per-turn flags and runs their cards'
    /// end-of-turn hooks.
    pub fn end_turn(&mut self) {
        self.current = (self.current + 1) % 2;
        self.players[self.current].start_new_turn();
        self.status = format!("{}'s turn", self.current_player().name());

        debug!("{}", self.status);
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// The player waiting for their turn.
    #[must_use]
    pub fn opponent(&self) -> &Player {
        &self.players[1 - self.current]
    }

    /// Index of the current player: 0 or 1.
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current
    }

    /// Both players, in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// True once a player has lost all five cards. Never resets.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The winning player, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|index| &self.players[index])
    }

    /// Display-ready status line: whose turn it is, or who won.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }
}
