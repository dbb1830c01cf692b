//! Combat resolution: damage application and archetype attack sequences.

pub mod resolver;

pub use resolver::{apply_damage, resolve_attack, AttackOutcome, HitReport, MutedStat};
