//! Targets and selection state.
//!
//! A `Target` names a character: a side's hero or a minion on a side's
//! board. The same descriptor is used for damage, attack declaration and
//! effect targeting.
//!
//! `Selection` is the human side's in-progress action: at most one of a
//! hand card awaiting a target or a board minion awaiting an attack target.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use super::player::Side;

/// Kind of character a target refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    Minion,
    Hero,
}

/// A character that can be damaged, attacked or targeted.
///
/// ```
/// use duel_ccg::core::{InstanceId, Side, Target, TargetKind};
///
/// let hero = Target::hero(Side::Opponent);
/// assert_eq!(hero.kind(), TargetKind::Hero);
/// assert_eq!(hero.instance_id(), None);
///
/// let minion = Target::minion(Side::Player, InstanceId(9));
/// assert_eq!(minion.owner(), Side::Player);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// A side's hero.
    Hero(Side),
    /// A minion on `owner`'s board.
    Minion { owner: Side, id: InstanceId },
}

impl Target {
    /// Target a side's hero.
    #[must_use]
    pub const fn hero(side: Side) -> Self {
        Target::Hero(side)
    }

    /// Target a minion.
    #[must_use]
    pub const fn minion(owner: Side, id: InstanceId) -> Self {
        Target::Minion { owner, id }
    }

    /// Hero or minion.
    #[must_use]
    pub const fn kind(&self) -> TargetKind {
        match self {
            Target::Hero(_) => TargetKind::Hero,
            Target::Minion { .. } => TargetKind::Minion,
        }
    }

    /// The side the character belongs to.
    #[must_use]
    pub const fn owner(&self) -> Side {
        match self {
            Target::Hero(side) => *side,
            Target::Minion { owner, .. } => *owner,
        }
    }

    /// Instance ID for minion targets.
    #[must_use]
    pub const fn instance_id(&self) -> Option<InstanceId> {
        match self {
            Target::Hero(_) => None,
            Target::Minion { id, .. } => Some(*id),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Hero(side) => write!(f, "{} hero", side),
            Target::Minion { owner, id } => write!(f, "{} minion {}", owner, id),
        }
    }
}

/// What the human side is currently choosing a target for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetingMode {
    #[default]
    None,
    /// A hand card awaits its target.
    Card,
    /// A board minion awaits its attack target.
    Attack,
}

/// The human side's pending selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub mode: TargetingMode,
    pub card: Option<InstanceId>,
    pub attacker: Option<InstanceId>,
}

impl Selection {
    /// Clear all selection fields.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Drop the selected hand card and leave card-targeting mode.
    pub fn clear_card(&mut self) {
        self.card = None;
        if self.mode == TargetingMode::Card {
            self.mode = TargetingMode::None;
        }
    }

    /// Drop the selected attacker and leave attack-targeting mode.
    pub fn clear_attacker(&mut self) {
        self.attacker = None;
        if self.mode == TargetingMode::Attack {
            self.mode = TargetingMode::None;
        }
    }
}
