//! Combat.
//!
//! An attack is a simultaneous exchange. The attacker's damage lands,
//! a surviving target's on-attacked effects strike back, and a minion
//! target hits the attacker with the attack it had when combat began.
//! One death sweep follows, so two minions that trade both die in the
//! same sweep and their deathrattles queue together.

use log::{debug, info};
use smallvec::SmallVec;

use super::engine::Duel;
use crate::core::{DuelError, InstanceId, Side, Target};
use crate::effects::{aura, ArtifactAura};

impl Duel {
    /// Characters `side` may attack right now: the enemy's living taunt
    /// minions if there are any, otherwise the enemy hero and every
    /// enemy minion.
    #[must_use]
    pub fn attack_pool(&self, side: Side) -> Vec<Target> {
        let enemy = side.other();
        let defender = self.state.player(enemy);
        let taunts = defender.taunt_targets(enemy);
        if !taunts.is_empty() {
            return taunts;
        }
        std::iter::once(Target::hero(enemy))
            .chain(defender.board.iter().map(|m| Target::minion(enemy, m.instance_id)))
            .collect()
    }

    /// Check that `attacker` may attack `target` for `side`.
    pub(crate) fn validate_attack(
        &self,
        side: Side,
        attacker: InstanceId,
        target: &Target,
    ) -> Result<(), DuelError> {
        let minion = self
            .state
            .player(side)
            .minion(attacker)
            .ok_or(DuelError::NotOnBoard(attacker))?;
        if let Some(block) = minion.attack_block() {
            return Err(DuelError::CannotAttack(block));
        }

        let enemy = side.other();
        let taunts = self.state.player(enemy).taunt_targets(enemy);
        if !taunts.is_empty() && !taunts.contains(target) {
            return Err(DuelError::MustTargetTaunt);
        }
        if target.owner() == side {
            return Err(DuelError::FriendlyTarget);
        }
        if !self.state.target_exists(target) {
            return Err(DuelError::InvalidTarget);
        }
        Ok(())
    }

    /// Validate and resolve an attack by `side`.
    pub(crate) fn attack(
        &mut self,
        side: Side,
        attacker: InstanceId,
        target: Target,
    ) -> Result<(), DuelError> {
        self.ensure_running()?;
        if self.state.active != side {
            return Err(DuelError::NotYourTurn);
        }
        self.validate_attack(side, attacker, &target)?;
        self.resolve_combat(side, attacker, target)
    }

    /// Resolve an already validated attack.
    pub(crate) fn resolve_combat(
        &mut self,
        side: Side,
        attacker: InstanceId,
        target: Target,
    ) -> Result<(), DuelError> {
        let striker = self
            .state
            .player(side)
            .minion(attacker)
            .ok_or(DuelError::InstanceNotFound(attacker))?;
        let power = striker.current_attack;
        info!("{} {} attacks {}", side, striker, target);

        let counter = self.state.target_minion(&target).map_or(0, |m| m.current_attack);
        let attacker_target = Target::minion(side, attacker);

        if power > 0 {
            self.deal_damage(target, power);
        }

        // On-attacked effects of a target that survives the hit, counting
        // a reincarnation the sweep is about to grant.
        let reincarnates = aura::has_aura(
            &self.scripts,
            self.state.player(target.owner()),
            ArtifactAura::Reincarnation,
        );
        let retaliation: SmallVec<[i32; 2]> = match self.state.target_minion(&target) {
            Some(defender) if defender.is_alive() || (reincarnates && !defender.has_reincarnated) => defender
                .effects
                .iter()
                .filter(|e| e.is_retaliation())
                .map(|e| e.value)
                .collect(),
            _ => SmallVec::new(),
        };
        for amount in retaliation {
            debug!("{} retaliates for {}", target, amount);
            self.deal_damage(attacker_target, amount);
        }

        if counter > 0 && self.state.target_exists(&target) {
            self.deal_damage(attacker_target, counter);
        }

        self.death_sweep()?;

        if let Some(striker) = self.state.player_mut(side).minion_mut(attacker) {
            striker.can_attack = false;
        }
        Ok(())
    }
}
