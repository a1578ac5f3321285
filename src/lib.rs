//! # duel-ccg
//!
//! A rules engine for a two-sided collectible card game: a human-driven
//! side against a scripted autonomous side.
//!
//! ## Design Principles
//!
//! 1. **One match context**: all state lives in a single `MatchState`
//!    owned by `Duel`. Human actions, the autonomous sequence and card
//!    scripts all operate on the same `&mut Duel`.
//!
//! 2. **Behaviour keyed by card id**: card scripts are plain functions in
//!    a `ScriptTable`. Mechanic tags are data; only a few generic tags
//!    (taunt, shield, deathrattle, battlecry, regenerate, spellburst)
//!    carry engine meaning.
//!
//! 3. **Bounded resolution**: the death sweep runs in passes capped by
//!    `MatchConfig::resolution_limit`. Running past the cap halts the
//!    engine instead of recursing forever.
//!
//! 4. **Rejections change nothing**: an invalid action returns a
//!    `DuelError` and leaves state exactly as it was.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: zones are `im` vectors, so a full
//!   snapshot of the match clones in O(1).
//!
//! - **Step queue for the autonomous side**: its turn is a queue of
//!   `AutoStep`s. Pacing goes through an injectable `Pacer`, so tests run
//!   whole turns synchronously with `NoPacing`.
//!
//! ## Modules
//!
//! - `core`: Instance IDs, sides, state, targets, RNG, configuration, errors
//! - `cards`: Card definitions, instances, catalog, the standard set
//! - `effects`: Card scripts, attached effects, auras, targeting
//! - `rules`: The `Duel` engine (damage, combat, turns, play, actions)
//! - `ai`: Opponent policy, pacing and the autonomous step queue
//!
//! ## Example
//!
//! ```
//! use duel_ccg::ai::NoPacing;
//! use duel_ccg::core::{MatchConfig, Side};
//! use duel_ccg::rules::Duel;
//!
//! let mut duel = Duel::standard(MatchConfig::default().with_seed(42));
//! duel.start_game().unwrap();
//!
//! duel.end_turn().unwrap();
//! assert!(duel.is_thinking());
//!
//! duel.run_autonomous(&mut NoPacing::default()).unwrap();
//! assert_eq!(duel.active_side(), Side::Player);
//! assert_eq!(duel.turn(), 2);
//! ```

pub mod core;
pub mod cards;
pub mod effects;
pub mod rules;
pub mod ai;

// Re-export commonly used types
pub use crate::core::{
    InstanceId, Side, SideMap,
    GameRng,
    MatchConfig, PacingConfig,
    Selection, Target, TargetKind, TargetingMode,
    Hero, Mana, MatchState, Outcome, Phase, PlayerState, Zone,
    AttackBlock, CatalogError, DuelError, ErrorKind,
};

pub use crate::cards::{
    CardId, CardType, CardDefinition, CardInstance, CardCatalog, Mechanic, TargetType,
};

pub use crate::effects::{ArtifactAura, Effect, ScriptContext, ScriptFn, ScriptTable};

pub use crate::rules::{Draw, Duel};

pub use crate::ai::{AutoStep, NoPacing, OpponentPolicy, Pacer, ScriptedOpponent, ThreadPacer};
