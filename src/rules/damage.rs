//! Damage and death.
//!
//! ## Damage
//!
//! `deal_damage` applies a single hit:
//! - A shielded minion loses its shield and takes nothing.
//! - A hero loses armor first, then hit points.
//! - A minion loses health; a surviving `RegenerateOnDamage` minion
//!   gets 1 back.
//!
//! `apply_damage` is `deal_damage` followed by a death sweep.
//!
//! ## Death sweep
//!
//! Each pass partitions both boards (player side first) into survivors
//! and the dead. A dead minion whose side has a reincarnation artifact and
//! which has not reincarnated yet returns at 1 health instead. The rest go
//! to the graveyard, and their deathrattles queue in death order.
//!
//! If the queue is empty the sweep has settled: hero deaths are checked
//! and the outcome recorded. Otherwise the deathrattles resolve and the
//! next pass runs. Passes are bounded by `MatchConfig::resolution_limit`;
//! running past it halts the engine.

use im::Vector;
use log::{debug, info, warn};

use super::engine::Duel;
use crate::cards::{CardDefinition, Mechanic};
use crate::core::{DuelError, InstanceId, Outcome, Side, Target};
use crate::effects::{aura, ArtifactAura, ScriptContext};

impl Duel {
    /// Apply one hit without sweeping. Callers sweep afterwards.
    ///
    /// A minion target that is no longer on its board is logged and
    /// ignored.
    pub fn deal_damage(&mut self, target: Target, amount: i32) {
        if amount <= 0 {
            return;
        }
        match target {
            Target::Hero(side) => {
                let hero = &mut self.state.player_mut(side).hero;
                let absorbed = amount.min(hero.armor.max(0));
                hero.armor -= absorbed;
                hero.hp -= amount - absorbed;
                debug!(
                    "{} hero takes {} ({} absorbed), now {} hp / {} armor",
                    side, amount, absorbed, hero.hp, hero.armor
                );
            }
            Target::Minion { owner, id } => {
                let Some(minion) = self.state.player_mut(owner).minion_mut(id) else {
                    warn!("damage target {} not found", target);
                    return;
                };
                if minion.has_divine_shield {
                    minion.has_divine_shield = false;
                    info!("{} loses its shield", minion.def.name);
                    return;
                }
                minion.current_health -= amount;
                if minion.is_alive() && minion.has_mechanic(&Mechanic::RegenerateOnDamage) {
                    minion.current_health += 1;
                }
                debug!("{} takes {}", minion, amount);
            }
        }
    }

    /// Apply one hit and run the death sweep.
    ///
    /// An effect primitive for card scripts, which run inside engine
    /// operations. It does not check whose turn it is.
    pub fn apply_damage(&mut self, target: Target, amount: i32) -> Result<(), DuelError> {
        self.deal_damage(target, amount);
        self.death_sweep()
    }

    /// Resolve deaths until the boards settle, then check the heroes.
    pub fn death_sweep(&mut self) -> Result<(), DuelError> {
        if self.halted {
            return Err(DuelError::Halted);
        }
        let limit = self.config.resolution_limit;
        let mut passes = 0;
        loop {
            if passes >= limit {
                return Err(self.halt(DuelError::ResolutionLimit { limit }));
            }
            passes += 1;

            let queue = self.collect_dead();
            if queue.is_empty() {
                self.check_heroes();
                return Ok(());
            }
            for ctx in queue {
                self.resolve_deathrattle(&ctx)?;
            }
        }
    }

    /// Move the dead to graveyards. Returns the deathrattles to resolve.
    fn collect_dead(&mut self) -> Vec<ScriptContext> {
        let mut queue = Vec::new();
        for side in Side::BOTH {
            let reincarnates =
                aura::has_aura(&self.scripts, self.state.player(side), ArtifactAura::Reincarnation);
            let player = self.state.player_mut(side);
            if player.board.iter().all(|m| m.is_alive()) {
                continue;
            }

            let mut survivors = Vector::new();
            for mut minion in std::mem::take(&mut player.board) {
                if minion.is_alive() {
                    survivors.push_back(minion);
                    continue;
                }
                if reincarnates && minion.reincarnate() {
                    info!("{} reincarnates", minion);
                    survivors.push_back(minion);
                    continue;
                }
                info!("{} {} dies", side, minion);
                if minion.has_mechanic(&Mechanic::Deathrattle) {
                    queue.push(ScriptContext {
                        source: minion.instance_id,
                        card: minion.card_id(),
                        owner: side,
                        target: None,
                    });
                }
                player.graveyard.push_back(minion);
            }
            player.board = survivors;
        }
        queue
    }

    fn resolve_deathrattle(&mut self, ctx: &ScriptContext) -> Result<(), DuelError> {
        match self.scripts.deathrattle(ctx.card) {
            Some(script) => {
                info!("deathrattle: {} for {}", ctx.card, ctx.owner);
                script(self, ctx)
            }
            None => {
                debug!("no deathrattle defined for {}", ctx.card);
                Ok(())
            }
        }
    }

    /// Record the outcome if a hero has fallen. Both at once is a draw.
    fn check_heroes(&mut self) {
        if self.state.is_over() {
            return;
        }
        let player_dead = self.state.player(Side::Player).hero.is_dead();
        let opponent_dead = self.state.player(Side::Opponent).hero.is_dead();
        let outcome = match (player_dead, opponent_dead) {
            (true, true) => Outcome::Draw,
            (true, false) => Outcome::OpponentWins,
            (false, true) => Outcome::PlayerWins,
            (false, false) => return,
        };
        info!("match over: {:?}", outcome);
        self.state.outcome = Some(outcome);
    }

    /// Put a fresh instance of `def` on `side`'s board with summoning
    /// sickness. Returns `None` (and does nothing) when the board is full.
    /// Like [`Duel::apply_damage`], a script primitive with no turn check.
    pub fn summon(&mut self, side: Side, def: &CardDefinition) -> Option<InstanceId> {
        let capacity = self.config.board_capacity;
        let player = self.state.player_mut(side);
        if !player.board_has_room(capacity) {
            debug!("{} board full, {} not summoned", side, def.name);
            return None;
        }
        let minion = crate::cards::CardInstance::new(def);
        let id = minion.instance_id;
        info!("{} summons {}", side, minion);
        player.board.push_back(minion);
        Some(id)
    }

    /// Take a random creature out of `from`'s graveyard and summon a fresh
    /// copy of it for `to`. Nothing happens if `to`'s board is full or the
    /// graveyard holds no creature.
    pub fn resurrect_random(&mut self, from: Side, to: Side) -> Option<InstanceId> {
        if !self.state.player(to).board_has_room(self.config.board_capacity) {
            return None;
        }
        let creatures: Vec<usize> = self
            .state
            .player(from)
            .graveyard
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_creature())
            .map(|(i, _)| i)
            .collect();
        let pick = creatures[self.rng.choose_index(creatures.len())?];
        let corpse = self.state.player_mut(from).graveyard.remove(pick);

        let def = self
            .catalog
            .get(corpse.card_id())
            .cloned()
            .unwrap_or_else(|| corpse.def.clone());
        self.summon(to, &def)
    }
}
