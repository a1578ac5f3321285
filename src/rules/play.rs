//! Playing cards from hand.
//!
//! All validation happens before anything changes: a rejected play leaves
//! mana, hand and board exactly as they were.

use log::{debug, info};

use super::engine::{log_failure, Duel};
use crate::cards::{CardDefinition, CardInstance, CardType, Mechanic};
use crate::core::{DuelError, InstanceId, Side, Target};
use crate::effects::{aura, validate_target, ScriptContext};

impl Duel {
    /// Play a card from the human player's hand.
    ///
    /// `target` is required for targeted spells and optional for targeted
    /// battlecries (a missing battlecry target resolves as a no-op). It is
    /// ignored for untargeted cards. Rejected with `OpponentActing` while
    /// the opponent's sequence runs.
    pub fn play_card(&mut self, card: InstanceId, target: Option<Target>) -> Result<(), DuelError> {
        self.ensure_human_turn()
            .and_then(|()| self.try_play_card(Side::Player, card, target))
            .inspect_err(|e| log_failure("play_card", e))
    }

    /// Play a card for either side. Used by the selection flow and the
    /// autonomous sequence, which do their own turn checks.
    pub(crate) fn play_for(
        &mut self,
        side: Side,
        card: InstanceId,
        target: Option<Target>,
    ) -> Result<(), DuelError> {
        self.try_play_card(side, card, target)
            .inspect_err(|e| log_failure("play_card", e))
    }

    fn try_play_card(
        &mut self,
        side: Side,
        card_id: InstanceId,
        target: Option<Target>,
    ) -> Result<(), DuelError> {
        self.ensure_running()?;
        if self.state.active != side {
            return Err(DuelError::NotYourTurn);
        }

        let player = self.state.player(side);
        let card = player.hand_card(card_id).ok_or(DuelError::NotInHand(card_id))?;
        let cost = aura::effective_cost(&self.scripts, player, card);
        if !player.mana.can_afford(cost) {
            return Err(DuelError::InsufficientMana {
                cost,
                available: player.mana.current,
            });
        }
        if card.is_creature() && !player.board_has_room(self.config.board_capacity) {
            return Err(DuelError::BoardFull);
        }
        let target = self.check_play_target(side, &card.def, target)?;

        // Commit.
        let player = self.state.player_mut(side);
        let index = player
            .hand_index(card_id)
            .ok_or(DuelError::InstanceNotFound(card_id))?;
        let card = player.hand.remove(index);
        player.mana.current -= cost;
        player.played_card_this_turn = true;
        info!("{} plays {} for {} mana", side, card, cost);

        match card.def.card_type {
            CardType::Creature => self.resolve_creature(side, card, target),
            CardType::Spell => self.resolve_spell(side, card, target),
            CardType::Artifact => {
                self.equip_artifact(side, card);
                Ok(())
            }
        }
    }

    /// Validate the target a card will be played with. Returns the target
    /// to pass on (`None` for untargeted cards).
    fn check_play_target(
        &self,
        side: Side,
        def: &CardDefinition,
        target: Option<Target>,
    ) -> Result<Option<Target>, DuelError> {
        if !def.requires_target {
            return Ok(None);
        }
        let Some(target) = target else {
            return match def.card_type {
                CardType::Spell => Err(DuelError::MissingTarget),
                _ => Ok(None),
            };
        };
        match def.target_type {
            Some(target_type) => validate_target(&self.state, side, target_type, &target)?,
            None if !self.state.target_exists(&target) => return Err(DuelError::InvalidTarget),
            None => {}
        }
        Ok(Some(target))
    }

    fn resolve_creature(
        &mut self,
        side: Side,
        mut card: CardInstance,
        target: Option<Target>,
    ) -> Result<(), DuelError> {
        let ctx = ScriptContext {
            source: card.instance_id,
            card: card.card_id(),
            owner: side,
            target,
        };

        if let Some(place) = self.scripts.placement(ctx.card) {
            let result = place(self, &ctx);
            self.state.player_mut(side).graveyard.push_back(card);
            result?;
            return self.death_sweep();
        }

        card.can_attack = false;
        let battlecry = card.has_mechanic(&Mechanic::Battlecry);
        self.state.player_mut(side).board.push_back(card);

        if battlecry {
            match self.scripts.battlecry(ctx.card) {
                Some(script) => {
                    info!("battlecry: {}", ctx.card);
                    script(self, &ctx)?;
                }
                None => debug!("no battlecry defined for {}", ctx.card),
            }
            self.death_sweep()?;
        }
        Ok(())
    }

    fn resolve_spell(
        &mut self,
        side: Side,
        card: CardInstance,
        target: Option<Target>,
    ) -> Result<(), DuelError> {
        let ctx = ScriptContext {
            source: card.instance_id,
            card: card.card_id(),
            owner: side,
            target,
        };
        self.state.player_mut(side).played_spell_this_turn = true;

        let result = match self.scripts.spell(ctx.card) {
            Some(script) => script(self, &ctx).and_then(|()| self.death_sweep()),
            None => {
                info!("{} has no effect defined", card.name());
                Ok(())
            }
        };
        if result.is_ok() {
            let grown = aura::spellburst(self.state.player_mut(side));
            if grown > 0 {
                debug!("spellburst: {} minions grow", grown);
            }
        }
        self.state.player_mut(side).graveyard.push_back(card);
        result
    }

    fn equip_artifact(&mut self, side: Side, mut card: CardInstance) {
        card.equip();
        let player = self.state.player_mut(side);
        info!("{} equips {}", side, card);
        if let Some(old) = player.artifact.replace(card) {
            info!("{} replaced", old);
            player.graveyard.push_back(old);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ids, CardId};
    use crate::core::MatchConfig;

    fn duel() -> Duel {
        let mut duel = Duel::standard(MatchConfig::default().with_seed(5));
        duel.start_game().unwrap();
        duel
    }

    fn give(duel: &mut Duel, side: Side, id: CardId) -> InstanceId {
        let card = CardInstance::new(duel.catalog().get(id).unwrap());
        let iid = card.instance_id;
        duel.state_mut().player_mut(side).hand.push_back(card);
        iid
    }

    #[test]
    fn test_play_creature() {
        let mut duel = duel();
        let troll = give(&mut duel, Side::Player, ids::IRON_TROLL);

        duel.play_card(troll, None).unwrap();

        assert_eq!(duel.mana(Side::Player).current, 0);
        let m = duel.state().player(Side::Player).minion(troll).unwrap();
        assert!(!m.can_attack);
        assert!(duel.player(Side::Player).played_card_this_turn);
    }

    #[test]
    fn test_insufficient_mana_changes_nothing() {
        let mut duel = duel();
        duel.state_mut().player_mut(Side::Player).mana.current = 2;
        let troll = give(&mut duel, Side::Player, ids::IRON_TROLL);
        let before = duel.snapshot();

        let err = duel.play_card(troll, None).unwrap_err();
        assert_eq!(err, DuelError::InsufficientMana { cost: 7, available: 2 });
        assert_eq!(duel.snapshot(), before);
    }

    #[test]
    fn test_spell_target_checks() {
        let mut duel = duel();
        let burst = give(&mut duel, Side::Player, ids::FROST_BURST);
        let before = duel.snapshot();

        assert_eq!(duel.play_card(burst, None), Err(DuelError::MissingTarget));
        assert_eq!(
            duel.play_card(burst, Some(Target::hero(Side::Player))),
            Err(DuelError::InvalidTarget)
        );
        assert_eq!(duel.snapshot(), before);

        duel.play_card(burst, Some(Target::hero(Side::Opponent))).unwrap();
        assert_eq!(duel.hero(Side::Opponent).hp, 27);
        assert!(duel.player(Side::Player).played_spell_this_turn);
        assert_eq!(duel.graveyard(Side::Player).last().unwrap().instance_id, burst);
    }

    #[test]
    fn test_frost_burst_freezes_surviving_minion() {
        let mut duel = duel();
        let troll = CardInstance::new(duel.catalog().get(ids::IRON_TROLL).unwrap());
        let troll_id = troll.instance_id;
        duel.state_mut().player_mut(Side::Opponent).board.push_back(troll);
        let burst = give(&mut duel, Side::Player, ids::FROST_BURST);

        duel.play_card(burst, Some(Target::minion(Side::Opponent, troll_id))).unwrap();

        let m = duel.state().player(Side::Opponent).minion(troll_id).unwrap();
        assert_eq!(m.current_health, 4);
        assert!(m.is_frozen);
    }

    #[test]
    fn test_spellburst_after_spell() {
        let mut duel = duel();
        let blade = CardInstance::new(duel.catalog().get(ids::SHARDBLADE).unwrap());
        let blade_id = blade.instance_id;
        duel.state_mut().player_mut(Side::Player).board.push_back(blade);
        let swap = give(&mut duel, Side::Player, ids::ARCANE_SWAP);

        duel.play_card(swap, None).unwrap();

        assert_eq!(duel.state().player(Side::Player).minion(blade_id).unwrap().current_attack, 5);
    }

    #[test]
    fn test_board_full_rejects_creature() {
        let mut duel = duel();
        let filler = duel.catalog().get(ids::IRON_TROLL).unwrap().clone();
        for _ in 0..7 {
            duel.summon(Side::Player, &filler);
        }
        let sprite = give(&mut duel, Side::Player, ids::RATTLE_SPRITE);

        assert_eq!(duel.play_card(sprite, None), Err(DuelError::BoardFull));
        assert!(duel.player(Side::Player).hand_card(sprite).is_some());
    }

    #[test]
    fn test_mistwolf_combo() {
        let mut duel = duel();
        let pack = give(&mut duel, Side::Player, ids::MISTWOLF_PACK);
        duel.play_card(pack, None).unwrap();
        assert_eq!(duel.board(Side::Player).len(), 2);
        assert_eq!(duel.graveyard(Side::Player).last().unwrap().instance_id, pack);

        let mut duel2 = self::duel();
        duel2.state_mut().player_mut(Side::Player).played_spell_last_turn = true;
        let pack = give(&mut duel2, Side::Player, ids::MISTWOLF_PACK);
        duel2.play_card(pack, None).unwrap();
        assert_eq!(duel2.board(Side::Player).len(), 3);
        assert!(duel2.board(Side::Player).iter().all(|w| w.card_id() == ids::MISTWOLF));
    }

    #[test]
    fn test_artifact_replacement() {
        let mut duel = duel();
        let charm = give(&mut duel, Side::Player, ids::MITHRIL_CHARM);
        let relic = give(&mut duel, Side::Player, ids::ANCIENT_CHRONOMETER);

        duel.play_card(charm, None).unwrap();
        duel.play_card(relic, None).unwrap();

        let equipped = duel.artifact(Side::Player).unwrap();
        assert_eq!(equipped.instance_id, relic);
        assert_eq!(equipped.remaining_duration, Some(3));
        assert_eq!(duel.graveyard(Side::Player).last().unwrap().instance_id, charm);
    }

    #[test]
    fn test_not_your_turn() {
        let mut duel = duel();
        let troll = give(&mut duel, Side::Opponent, ids::IRON_TROLL);
        assert_eq!(duel.play_for(Side::Opponent, troll, None), Err(DuelError::NotYourTurn));
    }

    #[test]
    fn test_targeted_battlecry_without_target() {
        let mut duel = duel();
        let walker = give(&mut duel, Side::Player, ids::RIFT_WALKER);
        duel.play_card(walker, None).unwrap();
        assert!(duel.state().player(Side::Player).minion(walker).is_some());
    }
}
