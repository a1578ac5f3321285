//! Artifact auras and other on-demand modifiers.
//!
//! Auras are not events. They are computed from the equipped artifact
//! whenever a rule needs them.

use serde::{Deserialize, Serialize};

use super::scripts::ScriptTable;
use crate::cards::{CardInstance, Mechanic};
use crate::core::PlayerState;

/// Passive behaviour granted by an equipped artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactAura {
    /// Owner's cards cost 1 less, minimum 1.
    CostReduction,
    /// Each friendly minion survives its first death at 1 health.
    Reincarnation,
    /// 1 damage to every character at the start of the owner's turn.
    StartOfTurnDamage,
}

/// The aura of a side's equipped artifact, if it has one and it has
/// duration left.
#[must_use]
pub fn equipped_aura(scripts: &ScriptTable, player: &PlayerState) -> Option<ArtifactAura> {
    let artifact = player.artifact.as_ref()?;
    if artifact.remaining_duration == Some(0) {
        return None;
    }
    scripts.artifact_aura(artifact.card_id())
}

/// Does the side's artifact grant `aura` right now?
#[must_use]
pub fn has_aura(scripts: &ScriptTable, player: &PlayerState, aura: ArtifactAura) -> bool {
    equipped_aura(scripts, player) == Some(aura)
}

/// Mana a side actually pays for `card`.
#[must_use]
pub fn effective_cost(scripts: &ScriptTable, player: &PlayerState, card: &CardInstance) -> u32 {
    let base = card.def.cost;
    if has_aura(scripts, player, ArtifactAura::CostReduction) {
        base.saturating_sub(1).max(1)
    } else {
        base
    }
}

/// Grow every living spellburst minion on the board by +1 attack.
/// Returns how many grew.
pub fn spellburst(player: &mut PlayerState) -> usize {
    let mut grown = 0;
    for minion in player.board.iter_mut() {
        if minion.is_alive() && minion.has_mechanic(&Mechanic::SpellburstAttack) {
            minion.current_attack += 1;
            grown += 1;
        }
    }
    grown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ids, CardCatalog, CardDefinition, CardId};
    use crate::core::{MatchConfig, Side};

    fn instance(catalog: &CardCatalog, id: CardId) -> CardInstance {
        CardInstance::new(catalog.get(id).unwrap())
    }

    #[test]
    fn test_effective_cost_with_chronometer() {
        let catalog = CardCatalog::standard();
        let scripts = ScriptTable::standard();
        let mut player = PlayerState::new(&MatchConfig::default(), Side::Player);

        let troll = instance(&catalog, ids::IRON_TROLL);
        let sprite = instance(&catalog, ids::RATTLE_SPRITE);
        let pulse = instance(&catalog, ids::ARCANE_PULSE);
        assert_eq!(effective_cost(&scripts, &player, &troll), 7);

        let mut relic = instance(&catalog, ids::ANCIENT_CHRONOMETER);
        relic.equip();
        player.artifact = Some(relic);

        assert_eq!(effective_cost(&scripts, &player, &troll), 6);
        assert_eq!(effective_cost(&scripts, &player, &sprite), 1);
        assert_eq!(effective_cost(&scripts, &player, &pulse), 1);

        if let Some(a) = player.artifact.as_mut() {
            a.remaining_duration = Some(0);
        }
        assert_eq!(effective_cost(&scripts, &player, &troll), 7);
    }

    #[test]
    fn test_other_artifacts_do_not_reduce_cost() {
        let catalog = CardCatalog::standard();
        let scripts = ScriptTable::standard();
        let mut player = PlayerState::new(&MatchConfig::default(), Side::Player);
        let mut orb = instance(&catalog, ids::CALAMITY_ORB);
        orb.equip();
        player.artifact = Some(orb);

        assert_eq!(equipped_aura(&scripts, &player), Some(ArtifactAura::StartOfTurnDamage));
        assert_eq!(effective_cost(&scripts, &player, &instance(&catalog, ids::IRON_TROLL)), 7);
    }

    #[test]
    fn test_spellburst_skips_dead_and_untagged() {
        let catalog = CardCatalog::standard();
        let mut player = PlayerState::new(&MatchConfig::default(), Side::Player);

        let blade = instance(&catalog, ids::SHARDBLADE);
        let mut dying = instance(&catalog, ids::SHARDBLADE);
        dying.current_health = 0;
        let plain = CardInstance::new(&CardDefinition::creature(CardId::new(99), "Plain", 1, 1, 1));
        player.board.push_back(blade);
        player.board.push_back(dying);
        player.board.push_back(plain);

        assert_eq!(spellburst(&mut player), 1);
        assert_eq!(player.board[0].current_attack, 5);
        assert_eq!(player.board[1].current_attack, 4);
        assert_eq!(player.board[2].current_attack, 1);
    }
}
