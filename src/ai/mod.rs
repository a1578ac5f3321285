//! The autonomous side.
//!
//! - `OpponentPolicy`: makes the choices (`ScriptedOpponent` by default)
//! - `Pacer`: waits between steps (`ThreadPacer`, or `NoPacing` in tests)
//! - `AutoStep`: the queued turn sequence driven by `Duel::step_autonomous`

mod pacing;
mod policy;
mod sequence;

pub use pacing::{NoPacing, Pacer, ThreadPacer};
pub use policy::{OpponentPolicy, PassiveOpponent, ScriptedOpponent};
pub use sequence::AutoStep;
