//! Card archetypes and their stat templates.
//!
//! The three archetypes are a fixed, closed set. Each carries a constant
//! stat template; per-archetype combat behavior lives in the combat module
//! as a match over the tag rather than a trait-object hierarchy, so new
//! archetypes extend one table and one match arm.

use serde::{Deserialize, Serialize};

/// The three card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// High defence, low attack and life. No special ability.
    Stone,
    /// High life, low defence. Attacks can mute the target.
    Paper,
    /// Moderate stats. Attacks hit up to three times.
    Scissors,
}

/// Base stats a card of an archetype starts with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatTemplate {
    /// Display name for new cards of this archetype.
    pub name: &'static str,
    /// Starting (and maximum) life.
    pub life: i32,
    /// Starting (and maximum) defence.
    pub defence: i32,
    /// Attack power.
    pub attack: i32,
}

impl Archetype {
    /// All archetypes, in deck-building order.
    pub const ALL: [Archetype; 3] = [Archetype::Stone, Archetype::Paper, Archetype::Scissors];

    /// The stat template for this archetype.
    #[must_use]
    pub const fn template(self) -> StatTemplate {
        match self {
            Archetype::Stone => StatTemplate {
                name: "Regular Stone",
                life: 2,
                defence: 10,
                attack: 2,
            },
            Archetype::Paper => StatTemplate {
                name: "Regular Paper",
                life: 10,
                defence: 1,
                attack: 2,
            },
            Archetype::Scissors => StatTemplate {
                name: "Regular Scissors",
                life: 5,
                defence: 3,
                attack: 3,
            },
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Archetype::Stone => "Stone",
            Archetype::Paper => "Paper",
            Archetype::Scissors => "Scissors",
        };
        write!(f, "{label}")
    }
}
