//! Effect dispatch: card scripts, attached effects, auras and targeting.
//!
//! - `ScriptTable`: per-id battlecry, spell, deathrattle and placement
//!   scripts, plus artifact auras
//! - `Effect`: declarative modifier attached to an instance
//! - `aura`: on-demand modifiers (effective cost, spellburst)
//! - `targeting`: target validation for targeted cards

pub mod aura;
mod effect;
mod scripts;
pub mod targeting;

pub use aura::{effective_cost, equipped_aura, has_aura, spellburst, ArtifactAura};
pub use effect::{Effect, EffectAction, EffectKind, EffectTarget, EffectTrigger};
pub use scripts::{ScriptContext, ScriptFn, ScriptTable};
pub use targeting::{candidates, validate_target};
