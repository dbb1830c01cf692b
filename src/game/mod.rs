//! Game orchestration: the session state machine and its command surface.

pub mod session;

pub use session::{GameSession, Replacement, SwitchOutcome, SwitchSelection};
