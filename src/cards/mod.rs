//! Card model: archetypes, stat templates, and runtime card state.

pub mod archetype;
pub mod card;

pub use archetype::{Archetype, StatTemplate};
pub use card::Card;
