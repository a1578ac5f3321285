//! Game start, turn transitions and drawing.

use log::{debug, info};

use super::engine::{log_failure, Duel};
use crate::cards::CardInstance;
use crate::core::{DuelError, InstanceId, MatchState, Phase, Side};
use crate::effects::{aura, ArtifactAura};

/// What a single draw did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Draw {
    /// The card went to hand.
    Card(InstanceId),
    /// The hand was full; the card went to the graveyard.
    Burned(InstanceId),
    /// The deck was empty; the hero took this much fatigue damage.
    Fatigue(i32),
}

impl Duel {
    /// Start (or restart) a match.
    ///
    /// Each side's deck holds `copies_per_card` fresh instances of every
    /// catalog entry, shuffled. The player draws its opening hand, then
    /// the opponent, and the player acts first.
    pub fn start_game(&mut self) -> Result<(), DuelError> {
        if self.halted {
            return Err(DuelError::Halted);
        }
        self.state = MatchState::new(&self.config);
        self.pending.clear();

        let copies = self.config.copies_per_card;
        for side in Side::BOTH {
            let mut deck: Vec<CardInstance> = self
                .catalog
                .iter()
                .flat_map(|def| (0..copies).map(move |_| CardInstance::new(def)))
                .collect();
            self.rng.shuffle(&mut deck);
            self.state.player_mut(side).deck = deck.into_iter().collect();
        }
        for side in Side::BOTH {
            for _ in 0..self.config.opening_hand[side] {
                self.draw_from_deck(side);
            }
        }

        self.state.phase = Phase::PlayerMain;
        info!(
            "match started (seed {}): decks {}/{}",
            self.rng.seed(),
            self.state.player(Side::Player).deck.len(),
            self.state.player(Side::Opponent).deck.len()
        );
        Ok(())
    }

    /// End the active side's turn and start the other side's.
    ///
    /// Rejected with `OpponentActing` while the autonomous sequence runs;
    /// that sequence ends its own turn.
    pub fn end_turn(&mut self) -> Result<(), DuelError> {
        self.try_end_turn().inspect_err(|e| log_failure("end_turn", e))
    }

    fn try_end_turn(&mut self) -> Result<(), DuelError> {
        self.ensure_running()?;
        if self.state.thinking {
            return Err(DuelError::OpponentActing);
        }

        let ending = self.state.active;
        let player = self.state.player_mut(ending);
        for minion in player.board.iter_mut() {
            minion.can_attack = true;
        }
        player.played_card_last_turn = player.played_card_this_turn;
        player.played_spell_last_turn = player.played_spell_this_turn;
        player.played_card_this_turn = false;
        player.played_spell_this_turn = false;
        if ending.is_human() {
            self.state.selection.clear();
        }

        let next = ending.other();
        self.state.active = next;
        if next.is_human() {
            self.state.turn += 1;
        }
        info!("turn {}: {} to act", self.state.turn, next);

        self.start_turn(next)?;
        if self.state.is_over() {
            return Ok(());
        }
        if next.is_human() {
            self.state.phase = Phase::PlayerMain;
        } else {
            self.schedule_autonomous();
        }
        Ok(())
    }

    /// Start-of-turn sequence for `side`.
    fn start_turn(&mut self, side: Side) -> Result<(), DuelError> {
        self.tick_artifact(side);

        if aura::has_aura(&self.scripts, self.state.player(side), ArtifactAura::StartOfTurnDamage) {
            info!("{} artifact deals 1 damage to every character", side);
            for owner in Side::BOTH {
                for target in self.state.player(owner).all_characters(owner) {
                    self.deal_damage(target, 1);
                }
            }
            self.death_sweep()?;
            if self.state.is_over() {
                return Ok(());
            }
        }

        for minion in self.state.player_mut(side).board.iter_mut() {
            minion.is_frozen = false;
        }
        for minion in self.state.player_mut(side.other()).board.iter_mut() {
            minion.is_shackled = false;
        }

        let cap = self.config.max_mana;
        let mana = &mut self.state.player_mut(side).mana;
        mana.grow_and_refill(cap);
        debug!("{} mana {}/{}", side, mana.current, mana.max);

        self.draw_card(side)?;
        Ok(())
    }

    /// Count down a finite artifact; an expired one goes to the graveyard.
    fn tick_artifact(&mut self, side: Side) {
        let player = self.state.player_mut(side);
        let expired = match player.artifact.as_mut().and_then(|a| a.remaining_duration.as_mut()) {
            Some(turns) => {
                *turns = turns.saturating_sub(1);
                *turns == 0
            }
            None => false,
        };
        if expired {
            if let Some(artifact) = player.artifact.take() {
                info!("{} {} expires", side, artifact);
                player.graveyard.push_back(artifact);
            }
        }
    }

    /// Draw one card for `side` without sweeping.
    pub fn draw_from_deck(&mut self, side: Side) -> Draw {
        let capacity = self.config.hand_capacity;
        let player = self.state.player_mut(side);
        match player.deck.pop_front() {
            Some(card) => {
                let id = card.instance_id;
                if player.hand.len() >= capacity {
                    info!("{} hand full, {} burns", side, card);
                    player.graveyard.push_back(card);
                    Draw::Burned(id)
                } else {
                    debug!("{} draws {}", side, card);
                    player.hand.push_back(card);
                    Draw::Card(id)
                }
            }
            None => {
                let damage = player.fatigue;
                player.hero.hp -= damage;
                player.fatigue += 1;
                info!("{} takes {} fatigue damage", side, damage);
                Draw::Fatigue(damage)
            }
        }
    }

    /// Draw one card for `side`, then sweep (fatigue can kill). A script
    /// primitive with no turn check.
    pub fn draw_card(&mut self, side: Side) -> Result<Draw, DuelError> {
        let drawn = self.draw_from_deck(side);
        self.death_sweep()?;
        Ok(drawn)
    }
}
