//! The rules engine.
//!
//! `Duel` is the match context. Its operations are split by concern:
//! damage and death, combat, turns and draws, card play, and the human
//! side's selection state machine. The autonomous side's sequence lives
//! in `ai`.

mod actions;
mod combat;
mod damage;
pub mod engine;
mod play;
mod turn;

pub use engine::Duel;
pub use turn::Draw;
