//! The autonomous side's turn as an explicit step queue.
//!
//! When the opponent's turn starts, the engine queues
//! `Think, PlayCards, Pause, Attack, Pause, EndTurn` and sets the
//! thinking flag. Each `step_autonomous` call runs one step; pauses go
//! through the injected `Pacer`. Human actions are rejected while the
//! flag is set.
//!
//! The end of the match is checked when the sequence begins and by every
//! engine operation it calls. A match that ends mid-phase stops that
//! phase; the remaining steps still run and become no-ops.

use log::{debug, info, warn};

use super::pacing::Pacer;
use crate::core::{AutoPhase, DuelError, ErrorKind, InstanceId, Phase, Side};
use crate::effects::aura;
use crate::rules::Duel;

/// One step of the autonomous sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoStep {
    /// Initial pause; stops the sequence if the match is already over.
    Think,
    PlayCards,
    Pause,
    Attack,
    EndTurn,
}

const SEQUENCE: [AutoStep; 6] = [
    AutoStep::Think,
    AutoStep::PlayCards,
    AutoStep::Pause,
    AutoStep::Attack,
    AutoStep::Pause,
    AutoStep::EndTurn,
];

impl Duel {
    /// Queue the autonomous side's turn.
    pub(crate) fn schedule_autonomous(&mut self) {
        self.state.thinking = true;
        self.state.phase = Phase::OpponentAuto(AutoPhase::PlayCards);
        self.pending.clear();
        self.pending.extend(SEQUENCE);
        debug!("autonomous turn scheduled");
    }

    /// Steps still queued.
    #[must_use]
    pub fn pending_steps(&self) -> Vec<AutoStep> {
        self.pending.iter().copied().collect()
    }

    /// Run the next queued step. Returns `None` when nothing is queued.
    pub fn step_autonomous(&mut self, pacer: &mut dyn Pacer) -> Result<Option<AutoStep>, DuelError> {
        if self.halted {
            return Err(DuelError::Halted);
        }
        let Some(step) = self.pending.pop_front() else {
            return Ok(None);
        };

        match step {
            AutoStep::Think => {
                if self.state.is_over() {
                    info!("match already over, autonomous turn abandoned");
                    self.pending.clear();
                    self.state.thinking = false;
                    return Ok(Some(step));
                }
                pacer.pause(self.config.pacing.turn_start());
            }
            AutoStep::PlayCards => {
                self.state.phase = Phase::OpponentAuto(AutoPhase::PlayCards);
                let played = self.autonomous_play_phase();
                self.settle_phase("play phase", played)?;
            }
            AutoStep::Pause => pacer.pause(self.config.pacing.between_actions()),
            AutoStep::Attack => {
                self.state.phase = Phase::OpponentAuto(AutoPhase::Attack);
                let attacks = self.autonomous_attack_phase();
                self.settle_phase("attack phase", attacks)?;
            }
            AutoStep::EndTurn => {
                self.state.phase = Phase::OpponentAuto(AutoPhase::End);
                self.state.thinking = false;
                match self.end_turn() {
                    Err(err) if err.kind() == ErrorKind::Terminal => {
                        info!("match over, turn not passed");
                    }
                    other => other?,
                }
            }
        }
        Ok(Some(step))
    }

    /// Run queued steps until the queue is empty. Returns the number of
    /// steps run.
    pub fn run_autonomous(&mut self, pacer: &mut dyn Pacer) -> Result<usize, DuelError> {
        let mut steps = 0;
        while self.step_autonomous(pacer)?.is_some() {
            steps += 1;
        }
        Ok(steps)
    }

    /// Fatal errors propagate; anything else ends the phase early.
    fn settle_phase(&mut self, phase: &str, result: Result<usize, DuelError>) -> Result<(), DuelError> {
        match result {
            Ok(count) => {
                debug!("{} done: {} actions", phase, count);
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::Fatal => Err(err),
            Err(err) => {
                warn!("{} stopped early: {}", phase, err);
                Ok(())
            }
        }
    }

    /// Affordable creatures in the opponent's hand, in hand order, while
    /// the board has room.
    fn playable_creatures(&self, side: Side) -> Vec<InstanceId> {
        let player = self.state.player(side);
        if !player.board_has_room(self.config.board_capacity) {
            return Vec::new();
        }
        player
            .hand
            .iter()
            .filter(|c| c.is_creature())
            .filter(|c| player.mana.can_afford(aura::effective_cost(&self.scripts, player, c)))
            .map(|c| c.instance_id)
            .collect()
    }

    fn autonomous_play_phase(&mut self) -> Result<usize, DuelError> {
        let side = Side::Opponent;
        let mut played = 0;
        loop {
            let playable = self.playable_creatures(side);
            let Some(card) = self.policy.choose_play(&playable) else {
                break;
            };
            info!("{} chooses to play {}", side, card);
            self.play_for(side, card, None)?;
            played += 1;
        }
        Ok(played)
    }

    fn autonomous_attack_phase(&mut self) -> Result<usize, DuelError> {
        let side = Side::Opponent;
        let attackers: Vec<InstanceId> = self
            .state
            .player(side)
            .board
            .iter()
            .map(|m| m.instance_id)
            .collect();

        let mut attacks = 0;
        for attacker in attackers {
            let Some(minion) = self.state.player(side).minion(attacker) else {
                debug!("attacker {} died earlier this phase", attacker);
                continue;
            };
            if minion.attack_block().is_some() {
                continue;
            }
            let pool = self.attack_pool(side);
            let Some(target) = self.policy.choose_attack_target(&pool, &mut self.rng) else {
                continue;
            };
            self.attack(side, attacker, target)?;
            attacks += 1;
        }
        if self.state.is_over() {
            info!("match ended during the attack phase");
        }
        Ok(attacks)
    }
}
