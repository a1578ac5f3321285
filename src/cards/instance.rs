//! Card instances - runtime card state.
//!
//! `CardInstance` is one physical copy of a card in a match. It is created
//! by cloning a `CardDefinition` and carries the mutable fields the rules
//! touch: current stats, status flags, artifact duration and attached
//! reactive effects.
//!
//! An instance lives in exactly one zone at a time (deck, hand, board,
//! artifact slot or graveyard). Instances are never destroyed, only moved.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::{CardDefinition, CardId, Mechanic};
use crate::core::{AttackBlock, InstanceId};
use crate::effects::Effect;

/// A card instance in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Process-wide unique ID, never reused.
    pub instance_id: InstanceId,

    /// The definition this instance was cloned from.
    pub def: CardDefinition,

    pub current_health: i32,
    pub current_attack: i32,

    pub is_frozen: bool,
    pub can_attack: bool,
    pub has_divine_shield: bool,
    pub is_silenced: bool,
    /// One-shot: flips false -> true at most once.
    pub has_reincarnated: bool,
    /// Cannot attack until the binding side's next turn.
    pub is_shackled: bool,

    /// Artifact turns left. Set on equip; `None` never expires.
    pub remaining_duration: Option<u32>,

    /// Attached reactive effects, in attach order.
    pub effects: SmallVec<[Effect; 2]>,
}

impl CardInstance {
    /// Create a fresh instance of a definition with a new instance ID.
    #[must_use]
    pub fn new(def: &CardDefinition) -> Self {
        Self {
            instance_id: InstanceId::next(),
            def: def.clone(),
            current_health: def.health.unwrap_or(0),
            current_attack: def.attack.unwrap_or(0),
            is_frozen: false,
            can_attack: false,
            has_divine_shield: def.has(&Mechanic::DivineShield),
            is_silenced: false,
            has_reincarnated: false,
            is_shackled: false,
            remaining_duration: None,
            effects: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn card_id(&self) -> CardId {
        self.def.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.def.name
    }

    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.def.is_creature()
    }

    /// Does the instance currently have a generic mechanic?
    ///
    /// Silenced instances have none.
    #[must_use]
    pub fn has_mechanic(&self, mechanic: &Mechanic) -> bool {
        !self.is_silenced && self.def.has(mechanic)
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    /// Why this minion cannot be declared as an attacker, if it can't.
    #[must_use]
    pub fn attack_block(&self) -> Option<AttackBlock> {
        if !self.can_attack {
            Some(AttackBlock::Exhausted)
        } else if self.is_frozen {
            Some(AttackBlock::Frozen)
        } else if self.is_shackled {
            Some(AttackBlock::Shackled)
        } else if self.current_attack <= 0 {
            Some(AttackBlock::NoAttack)
        } else {
            None
        }
    }

    /// Return to 1 health instead of dying. Returns `false` if the
    /// instance already used its reincarnation.
    pub fn reincarnate(&mut self) -> bool {
        if self.has_reincarnated {
            return false;
        }
        self.has_reincarnated = true;
        self.current_health = 1;
        true
    }

    /// Strip generic mechanics, shield and attached effects.
    pub fn silence(&mut self) {
        self.is_silenced = true;
        self.has_divine_shield = false;
        self.effects.clear();
    }

    /// Attach a reactive effect.
    pub fn attach(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Prepare an artifact for its slot.
    pub fn equip(&mut self) {
        self.remaining_duration = self.def.durability;
    }
}

impl std::fmt::Display for CardInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_creature() {
            write!(
                f,
                "{} [{}] {}/{}",
                self.def.name, self.instance_id, self.current_attack, self.current_health
            )
        } else {
            write!(f, "{} [{}]", self.def.name, self.instance_id)
        }
    }
}
