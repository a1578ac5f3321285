//! The human side's action and targeting state machine.
//!
//! Targeting mode is `None`, `Card` (a hand card awaits its target) or
//! `Attack` (a board minion awaits its attack target). At most one
//! selection is active at a time.

use log::debug;

use super::engine::{log_failure, Duel};
use crate::core::{DuelError, InstanceId, Selection, Side, Target, TargetingMode};
use crate::effects::{aura, candidates};

impl Duel {
    /// Select a card in the human side's hand.
    ///
    /// A card that needs a target enters `Card` mode. Anything else is
    /// played at once. A targeted battlecry with nothing to target is
    /// also played at once, and its battlecry does nothing.
    pub fn select_card(&mut self, card: InstanceId) -> Result<(), DuelError> {
        self.try_select_card(card)
            .inspect_err(|e| log_failure("select_card", e))
    }

    fn try_select_card(&mut self, card_id: InstanceId) -> Result<(), DuelError> {
        self.ensure_human_turn()?;
        let side = Side::Player;
        let player = self.state.player(side);
        let card = player.hand_card(card_id).ok_or(DuelError::NotInHand(card_id))?;

        let cost = aura::effective_cost(&self.scripts, player, card);
        if !player.mana.can_afford(cost) {
            let available = player.mana.current;
            self.state.selection.clear();
            return Err(DuelError::InsufficientMana { cost, available });
        }

        let awaits_target = card.def.requires_target
            && match card.def.target_type {
                Some(target_type) => {
                    !card.is_creature() || !candidates(&self.state, side, target_type).is_empty()
                }
                None => !card.is_creature(),
            };

        if awaits_target {
            debug!("{} awaits a target", card);
            self.state.selection = Selection {
                mode: TargetingMode::Card,
                card: Some(card_id),
                attacker: None,
            };
            return Ok(());
        }

        self.play_for(side, card_id, None)?;
        self.state.selection.clear();
        Ok(())
    }

    /// Supply the target for the selected card and play it.
    pub fn select_card_target(&mut self, target: Target) -> Result<(), DuelError> {
        let checked = self.ensure_human_turn().and_then(|()| {
            match (self.state.selection.mode, self.state.selection.card) {
                (TargetingMode::Card, Some(_)) => Ok(()),
                (TargetingMode::Card, None) => Err(DuelError::NoSelection),
                _ => Err(DuelError::WrongTargetingMode),
            }
        });
        if let Err(e) = checked {
            log_failure("select_card_target", &e);
            return Err(e);
        }
        self.play_selected_card(Some(target))
    }

    /// Play the selected card.
    ///
    /// On `BoardFull` or a target error the selection is kept so another
    /// target can be chosen. Other failures (the card is gone or no longer
    /// affordable) drop it.
    pub fn play_selected_card(&mut self, target: Option<Target>) -> Result<(), DuelError> {
        self.try_play_selected_card(target)
            .inspect_err(|e| log_failure("play_selected_card", e))
    }

    fn try_play_selected_card(&mut self, target: Option<Target>) -> Result<(), DuelError> {
        self.ensure_human_turn()?;
        let card = self.state.selection.card.ok_or(DuelError::NoSelection)?;
        match self.play_for(Side::Player, card, target) {
            Ok(()) => {
                self.state.selection.clear();
                Ok(())
            }
            Err(err @ (DuelError::InsufficientMana { .. } | DuelError::NotInHand(_))) => {
                self.state.selection.clear();
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Select (or deselect) an attacker on the human side's board.
    ///
    /// Selecting the selected attacker again deselects it. Selecting
    /// another replaces it and drops any card selection.
    pub fn select_attacker(&mut self, minion: InstanceId) -> Result<(), DuelError> {
        self.try_select_attacker(minion)
            .inspect_err(|e| log_failure("select_attacker", e))
    }

    fn try_select_attacker(&mut self, id: InstanceId) -> Result<(), DuelError> {
        self.ensure_human_turn()?;
        if self.state.selection.attacker == Some(id) {
            self.state.selection.clear_attacker();
            debug!("attacker {} deselected", id);
            return Ok(());
        }

        let minion = self
            .state
            .player(Side::Player)
            .minion(id)
            .ok_or(DuelError::NotOnBoard(id))?;
        if let Some(block) = minion.attack_block() {
            return Err(DuelError::CannotAttack(block));
        }

        self.state.selection = Selection {
            mode: TargetingMode::Attack,
            card: None,
            attacker: Some(id),
        };
        Ok(())
    }

    /// Attack `target` with the selected attacker.
    pub fn select_attack_target(&mut self, target: Target) -> Result<(), DuelError> {
        self.try_select_attack_target(target)
            .inspect_err(|e| log_failure("select_attack_target", e))
    }

    fn try_select_attack_target(&mut self, target: Target) -> Result<(), DuelError> {
        self.ensure_human_turn()?;
        if self.state.selection.mode != TargetingMode::Attack {
            return Err(DuelError::WrongTargetingMode);
        }
        let attacker = self.state.selection.attacker.ok_or(DuelError::NoSelection)?;

        self.attack(Side::Player, attacker, target)?;
        self.state.selection.clear();
        Ok(())
    }

    /// Drop every selection. Always succeeds.
    pub fn cancel_selection(&mut self) {
        self.state.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ids, CardId, CardInstance};
    use crate::core::{AttackBlock, MatchConfig};

    fn duel() -> Duel {
        let mut duel = Duel::standard(MatchConfig::default().with_seed(9));
        duel.start_game().unwrap();
        duel
    }

    fn give(duel: &mut Duel, id: CardId) -> InstanceId {
        let card = CardInstance::new(duel.catalog().get(id).unwrap());
        let iid = card.instance_id;
        duel.state_mut().player_mut(Side::Player).hand.push_back(card);
        iid
    }

    fn ready_minion(duel: &mut Duel, side: Side, id: CardId) -> InstanceId {
        let mut m = CardInstance::new(duel.catalog().get(id).unwrap());
        m.can_attack = true;
        let iid = m.instance_id;
        duel.state_mut().player_mut(side).board.push_back(m);
        iid
    }

    #[test]
    fn test_select_untargeted_plays_immediately() {
        let mut duel = duel();
        let troll = give(&mut duel, ids::IRON_TROLL);

        duel.select_card(troll).unwrap();

        assert_eq!(duel.targeting_mode(), TargetingMode::None);
        assert!(duel.state().player(Side::Player).minion(troll).is_some());
    }

    #[test]
    fn test_select_targeted_spell_waits() {
        let mut duel = duel();
        let burst = give(&mut duel, ids::FROST_BURST);

        duel.select_card(burst).unwrap();
        assert_eq!(duel.targeting_mode(), TargetingMode::Card);
        assert_eq!(duel.selected_card(), Some(burst));

        assert_eq!(
            duel.select_card_target(Target::hero(Side::Player)),
            Err(DuelError::InvalidTarget)
        );
        assert_eq!(duel.selected_card(), Some(burst));

        duel.select_card_target(Target::hero(Side::Opponent)).unwrap();
        assert_eq!(duel.targeting_mode(), TargetingMode::None);
        assert_eq!(duel.hero(Side::Opponent).hp, 27);
    }

    #[test]
    fn test_unaffordable_selection_clears() {
        let mut duel = duel();
        duel.state_mut().player_mut(Side::Player).mana.current = 1;
        let burst = give(&mut duel, ids::FROST_BURST);

        assert!(matches!(
            duel.select_card(burst),
            Err(DuelError::InsufficientMana { cost: 2, available: 1 })
        ));
        assert_eq!(duel.selected_card(), None);
    }

    #[test]
    fn test_targeted_battlecry_without_candidates_plays() {
        let mut duel = duel();
        let walker = give(&mut duel, ids::RIFT_WALKER);

        duel.select_card(walker).unwrap();
        assert_eq!(duel.targeting_mode(), TargetingMode::None);
        assert!(duel.state().player(Side::Player).minion(walker).is_some());
    }

    #[test]
    fn test_rift_walker_refreshes_attacker() {
        let mut duel = duel();
        let troll = CardInstance::new(duel.catalog().get(ids::IRON_TROLL).unwrap());
        let troll_id = troll.instance_id;
        duel.state_mut().player_mut(Side::Player).board.push_back(troll);
        let walker = give(&mut duel, ids::RIFT_WALKER);

        duel.select_card(walker).unwrap();
        assert_eq!(duel.targeting_mode(), TargetingMode::Card);
        duel.select_card_target(Target::minion(Side::Player, troll_id)).unwrap();

        assert!(duel.state().player(Side::Player).minion(troll_id).unwrap().can_attack);
    }

    #[test]
    fn test_attacker_toggle_and_replace() {
        let mut duel = duel();
        let a = ready_minion(&mut duel, Side::Player, ids::IRON_TROLL);
        let b = ready_minion(&mut duel, Side::Player, ids::SHARDBLADE);

        duel.select_attacker(a).unwrap();
        assert_eq!(duel.selected_attacker(), Some(a));
        duel.select_attacker(b).unwrap();
        assert_eq!(duel.selected_attacker(), Some(b));
        duel.select_attacker(b).unwrap();
        assert_eq!(duel.selected_attacker(), None);
        assert_eq!(duel.targeting_mode(), TargetingMode::None);
    }

    #[test]
    fn test_frozen_attacker_rejected() {
        let mut duel = duel();
        let a = ready_minion(&mut duel, Side::Player, ids::IRON_TROLL);
        duel.state_mut().player_mut(Side::Player).minion_mut(a).unwrap().is_frozen = true;

        assert_eq!(duel.select_attacker(a), Err(DuelError::CannotAttack(AttackBlock::Frozen)));
    }

    #[test]
    fn test_attack_through_selection() {
        let mut duel = duel();
        let a = ready_minion(&mut duel, Side::Player, ids::IRON_TROLL);
        let guard = ready_minion(&mut duel, Side::Opponent, ids::GROVE_WARDEN);

        assert_eq!(
            duel.select_attack_target(Target::hero(Side::Opponent)),
            Err(DuelError::WrongTargetingMode)
        );
        duel.select_attacker(a).unwrap();
        assert_eq!(
            duel.select_attack_target(Target::hero(Side::Opponent)),
            Err(DuelError::MustTargetTaunt)
        );
        assert_eq!(duel.selected_attacker(), Some(a));

        duel.select_attack_target(Target::minion(Side::Opponent, guard)).unwrap();
        assert!(duel.state().player(Side::Opponent).minion(guard).is_none());
        assert_eq!(duel.state().player(Side::Player).minion(a).unwrap().current_health, 5);
        assert_eq!(duel.selected_attacker(), None);
    }

    #[test]
    fn test_cancel_selection() {
        let mut duel = duel();
        let burst = give(&mut duel, ids::FROST_BURST);
        duel.select_card(burst).unwrap();

        duel.cancel_selection();
        assert_eq!(duel.state().selection, Selection::default());
        duel.cancel_selection();
        assert_eq!(duel.state().selection, Selection::default());
    }
}
