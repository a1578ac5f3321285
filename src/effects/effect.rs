//! Attached effect records.
//!
//! An `Effect` is a declarative modifier attached to a card instance and
//! evaluated at trigger sites. Only one trigger site exists today (a minion
//! being attacked); new triggers and actions extend the enums rather than
//! adding flags to `CardInstance`.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// What kind of modifier this is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    Retaliate,
}

/// When the effect is evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectTrigger {
    /// The carrier survived an attacker's damage.
    OnAttacked,
}

/// What the effect does when triggered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectAction {
    DealDamage,
}

/// Who the action is aimed at, relative to the trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectTarget {
    Attacker,
}

/// An effect attached to a card instance. Never expires on its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    /// The card that attached it.
    pub source: CardId,
    pub trigger: EffectTrigger,
    pub action: EffectAction,
    pub value: i32,
    pub target: EffectTarget,
}

impl Effect {
    /// Deal `value` damage back to whoever attacks the carrier.
    #[must_use]
    pub fn retaliate(source: CardId, value: i32) -> Self {
        Self {
            kind: EffectKind::Retaliate,
            source,
            trigger: EffectTrigger::OnAttacked,
            action: EffectAction::DealDamage,
            value,
            target: EffectTarget::Attacker,
        }
    }

    /// Does this effect fire as attacked-damage back at the attacker?
    #[must_use]
    pub fn is_retaliation(&self) -> bool {
        self.trigger == EffectTrigger::OnAttacked
            && self.action == EffectAction::DealDamage
            && self.target == EffectTarget::Attacker
    }
}
