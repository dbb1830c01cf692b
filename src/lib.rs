//! # rps-duel
//!
//! Rules engine for a two-player, turn-based card battle game built on
//! three card archetypes: Stone, Paper, and Scissors.
//!
//! The engine owns all game logic — combat resolution, archetype abilities,
//! the deck's draw/visible-window mechanic, and the turn state machine —
//! and exposes a narrow command/query surface. A presentation layer issues
//! commands ([`GameSession::perform_attack`], [`GameSession::switch_cards`],
//! [`GameSession::end_turn`]) and reads state back for display; it owns no
//! rules of its own.
//!
//! ## Design Principles
//!
//! 1. **Synchronous and atomic**: every command either completes or fails
//!    with a [`CommandError`], and a failed command never mutates state.
//!
//! 2. **Deterministic**: all randomness (shuffle, Paper's coin-flip,
//!    Scissors's damage rolls) flows through one seedable [`GameRng`] per
//!    session, so games replay exactly.
//!
//! 3. **Data-driven archetypes**: card kinds are a tagged enum with a stat
//!    template table and a per-archetype attack sequence, not a trait
//!    hierarchy.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG and command errors
//! - `cards`: archetypes, stat templates, runtime card state
//! - `combat`: damage application and attack sequences
//! - `deck`: draw pile and visible window
//! - `player`: five-slot hand and per-turn flags
//! - `game`: the session state machine
//!
//! ## Example
//!
//! ```
//! use rps_duel::{GameSession, SwitchSelection};
//!
//! let mut session = GameSession::new("Alice", "Bob", 42);
//!
//! // Alice trades her slot 0 for the first visible deck card, then attacks.
//! session.switch_cards(&SwitchSelection::from_pairs([(0, 0)])).unwrap();
//! let outcome = session.perform_attack(0, 0).unwrap();
//! println!("{outcome}");
//!
//! session.end_turn();
//! assert_eq!(session.current_player().name(), "Bob");
//! ```

pub mod cards;
pub mod combat;
pub mod core;
pub mod deck;
pub mod game;
pub mod player;

// Re-export commonly used types
pub use crate::cards::{Archetype, Card, StatTemplate};
pub use crate::combat::{apply_damage, resolve_attack, AttackOutcome, HitReport, MutedStat};
pub use crate::core::{CommandError, GameRng, GameRngState};
pub use crate::deck::{Deck, CARDS_PER_ARCHETYPE, VISIBLE_WINDOW};
pub use crate::game::{GameSession, Replacement, SwitchOutcome, SwitchSelection};
pub use crate::player::{Player, HAND_SIZE};
