//! Target validation for targeted cards.
//!
//! A card's `TargetType` is checked twice: structurally (kind and owner
//! relative to the caster) and against the live state (the minion is still
//! on the named board).

use crate::cards::TargetType;
use crate::core::{DuelError, MatchState, Side, Target};

/// Check a supplied target for a card cast by `caster`.
pub fn validate_target(
    state: &MatchState,
    caster: Side,
    target_type: TargetType,
    target: &Target,
) -> Result<(), DuelError> {
    if !target_type.accepts(target, caster) {
        return Err(DuelError::InvalidTarget);
    }
    if !state.target_exists(target) {
        return Err(DuelError::InvalidTarget);
    }
    Ok(())
}

/// Every target currently legal for a card cast by `caster`.
#[must_use]
pub fn candidates(state: &MatchState, caster: Side, target_type: TargetType) -> Vec<Target> {
    let enemy = caster.other();
    match target_type {
        TargetType::FriendlyMinion => minions(state, caster),
        TargetType::EnemyMinion => minions(state, enemy),
        TargetType::EnemyCharacter => state.player(enemy).all_characters(enemy),
    }
}

fn minions(state: &MatchState, side: Side) -> Vec<Target> {
    state
        .player(side)
        .board
        .iter()
        .map(|m| Target::minion(side, m.instance_id))
        .collect()
}
