//! Core engine plumbing: deterministic RNG and command errors.

pub mod error;
pub mod rng;

pub use error::CommandError;
pub use rng::{GameRng, GameRngState};
