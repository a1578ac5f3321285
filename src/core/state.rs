//! Match state.
//!
//! ## PlayerState
//!
//! One side's zones and resources:
//! - Deck (ordered, drawn from the front), hand, board (ordered), one
//!   artifact slot, graveyard
//! - Hero, mana, fatigue counter, combo flags
//!
//! ## MatchState
//!
//! The single shared aggregate for a match: both sides, the turn counter,
//! the active side, the human side's selection and the outcome.
//!
//! Zones use `im` persistent vectors, so cloning a whole `MatchState`
//! for a read-only snapshot is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Selection, Target};
use super::config::MatchConfig;
use super::entity::InstanceId;
use super::player::{Side, SideMap};
use crate::cards::{CardInstance, Mechanic};

/// A side's hero. Not a card: armor absorbs damage before hit points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub hp: i32,
    pub armor: i32,
    pub max_hp: i32,
}

impl Hero {
    /// Create a hero at full health.
    #[must_use]
    pub fn new(hp: i32, armor: i32) -> Self {
        Self {
            hp,
            armor,
            max_hp: hp,
        }
    }

    /// Is the hero dead?
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

/// Mana pool. `current <= max <= cap`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mana {
    pub current: u32,
    pub max: u32,
}

impl Mana {
    /// A full pool of `amount`.
    #[must_use]
    pub fn full(amount: u32) -> Self {
        Self {
            current: amount,
            max: amount,
        }
    }

    /// Grow max by one (up to `cap`) and refill.
    pub fn grow_and_refill(&mut self, cap: u32) {
        self.max = (self.max + 1).min(cap);
        self.current = self.max;
    }

    /// Can `cost` be paid?
    #[must_use]
    pub fn can_afford(&self, cost: u32) -> bool {
        self.current >= cost
    }
}

/// One side's complete state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Draw from the front.
    pub deck: Vector<CardInstance>,
    pub hand: Vector<CardInstance>,
    /// Left to right.
    pub board: Vector<CardInstance>,
    pub artifact: Option<CardInstance>,
    pub graveyard: Vector<CardInstance>,
    pub hero: Hero,
    pub mana: Mana,
    /// Damage taken by the next empty-deck draw.
    pub fatigue: i32,
    pub played_card_this_turn: bool,
    pub played_card_last_turn: bool,
    pub played_spell_this_turn: bool,
    pub played_spell_last_turn: bool,
}

impl PlayerState {
    /// Create an empty side using the config's starting values.
    #[must_use]
    pub fn new(config: &MatchConfig, side: Side) -> Self {
        Self {
            deck: Vector::new(),
            hand: Vector::new(),
            board: Vector::new(),
            artifact: None,
            graveyard: Vector::new(),
            hero: Hero::new(config.starting_hp, config.starting_armor),
            mana: Mana::full(config.starting_mana[side].min(config.max_mana)),
            fatigue: 1,
            played_card_this_turn: false,
            played_card_last_turn: false,
            played_spell_this_turn: false,
            played_spell_last_turn: false,
        }
    }

    // === Lookup ===

    /// Position of a minion on the board.
    #[must_use]
    pub fn board_index(&self, id: InstanceId) -> Option<usize> {
        self.board.iter().position(|m| m.instance_id == id)
    }

    /// Position of a card in hand.
    #[must_use]
    pub fn hand_index(&self, id: InstanceId) -> Option<usize> {
        self.hand.iter().position(|c| c.instance_id == id)
    }

    /// Find a minion on the board.
    #[must_use]
    pub fn minion(&self, id: InstanceId) -> Option<&CardInstance> {
        self.board.iter().find(|m| m.instance_id == id)
    }

    /// Find a minion on the board, mutably.
    pub fn minion_mut(&mut self, id: InstanceId) -> Option<&mut CardInstance> {
        self.board.iter_mut().find(|m| m.instance_id == id)
    }

    /// Find a card in hand.
    #[must_use]
    pub fn hand_card(&self, id: InstanceId) -> Option<&CardInstance> {
        self.hand.iter().find(|c| c.instance_id == id)
    }

    /// Is there room for another minion?
    #[must_use]
    pub fn board_has_room(&self, capacity: usize) -> bool {
        self.board.len() < capacity
    }

    /// Living taunt minions, as targets owned by `side`.
    #[must_use]
    pub fn taunt_targets(&self, side: Side) -> Vec<Target> {
        self.board
            .iter()
            .filter(|m| m.has_mechanic(&Mechanic::Taunt) && m.is_alive())
            .map(|m| Target::minion(side, m.instance_id))
            .collect()
    }

    /// Every character on this side: board minions in order, then the hero.
    #[must_use]
    pub fn all_characters(&self, side: Side) -> Vec<Target> {
        self.board
            .iter()
            .map(|m| Target::minion(side, m.instance_id))
            .chain(std::iter::once(Target::hero(side)))
            .collect()
    }

    /// Which zone holds `id`, if any.
    #[must_use]
    pub fn zone_of(&self, id: InstanceId) -> Option<Zone> {
        let has = |v: &Vector<CardInstance>| v.iter().any(|c| c.instance_id == id);
        if has(&self.deck) {
            Some(Zone::Deck)
        } else if has(&self.hand) {
            Some(Zone::Hand)
        } else if has(&self.board) {
            Some(Zone::Board)
        } else if self.artifact.as_ref().is_some_and(|a| a.instance_id == id) {
            Some(Zone::Artifact)
        } else if has(&self.graveyard) {
            Some(Zone::Graveyard)
        } else {
            None
        }
    }
}

/// The zones an instance can live in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Hand,
    Board,
    Artifact,
    Graveyard,
}

/// Sub-phases of the autonomous side's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoPhase {
    PlayCards,
    Attack,
    End,
}

/// Turn state machine position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No game started yet.
    #[default]
    Setup,
    /// The human side is acting.
    PlayerMain,
    /// The autonomous side is acting.
    OpponentAuto(AutoPhase),
}

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWins,
    OpponentWins,
    /// Both heroes fell in the same settled sweep.
    Draw,
}

impl Outcome {
    /// The winning side, if any.
    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::PlayerWins => Some(Side::Player),
            Outcome::OpponentWins => Some(Side::Opponent),
            Outcome::Draw => None,
        }
    }
}

/// The complete state of one match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Turn number, incremented when control returns to the human side.
    pub turn: u32,
    pub active: Side,
    pub phase: Phase,
    pub players: SideMap<PlayerState>,
    pub selection: Selection,
    /// Set while the autonomous side's sequence is running.
    pub thinking: bool,
    pub outcome: Option<Outcome>,
}

impl MatchState {
    /// A fresh, not yet started match.
    #[must_use]
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            turn: 1,
            active: Side::Player,
            phase: Phase::Setup,
            players: SideMap::new(|side| PlayerState::new(config, side)),
            selection: Selection::default(),
            thinking: false,
            outcome: None,
        }
    }

    /// A side's state.
    #[must_use]
    pub fn player(&self, side: Side) -> &PlayerState {
        &self.players[side]
    }

    /// A side's state, mutably.
    pub fn player_mut(&mut self, side: Side) -> &mut PlayerState {
        &mut self.players[side]
    }

    /// Find which board holds a minion.
    #[must_use]
    pub fn locate_minion(&self, id: InstanceId) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|&side| self.players[side].minion(id).is_some())
    }

    /// Resolve a minion target to its instance. `None` for heroes and
    /// minions no longer on the named board.
    #[must_use]
    pub fn target_minion(&self, target: &Target) -> Option<&CardInstance> {
        match *target {
            Target::Minion { owner, id } => self.players[owner].minion(id),
            Target::Hero(_) => None,
        }
    }

    /// Does the target currently exist?
    #[must_use]
    pub fn target_exists(&self, target: &Target) -> bool {
        match target {
            Target::Hero(_) => true,
            Target::Minion { .. } => self.target_minion(target).is_some(),
        }
    }

    /// Has the match ended?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardId};

    fn minion(taunt: bool) -> CardInstance {
        let mut def = CardDefinition::creature(CardId::new(1), "Test", 1, 1, 2);
        if taunt {
            def = def.with_mechanic(Mechanic::Taunt);
        }
        CardInstance::new(&def)
    }

    #[test]
    fn test_new_player_state() {
        let config = MatchConfig::default();
        let p = PlayerState::new(&config, Side::Player);
        let o = PlayerState::new(&config, Side::Opponent);

        assert_eq!(p.hero, Hero::new(30, 0));
        assert_eq!(p.mana, Mana::full(7));
        assert_eq!(o.mana, Mana::full(0));
        assert_eq!(p.fatigue, 1);
    }

    #[test]
    fn test_mana_growth_caps() {
        let mut mana = Mana::full(9);
        mana.current = 2;

        mana.grow_and_refill(10);
        assert_eq!(mana, Mana::full(10));

        mana.grow_and_refill(10);
        assert_eq!(mana, Mana::full(10));
    }

    #[test]
    fn test_taunt_targets() {
        let mut p = PlayerState::new(&MatchConfig::default(), Side::Opponent);
        let plain = minion(false);
        let taunt = minion(true);
        let taunt_id = taunt.instance_id;
        p.board.push_back(plain);
        p.board.push_back(taunt);

        assert_eq!(p.taunt_targets(Side::Opponent), vec![Target::minion(Side::Opponent, taunt_id)]);
        assert_eq!(p.all_characters(Side::Opponent).len(), 3);
    }

    #[test]
    fn test_zone_of() {
        let mut p = PlayerState::new(&MatchConfig::default(), Side::Player);
        let card = minion(false);
        let id = card.instance_id;

        assert_eq!(p.zone_of(id), None);
        p.hand.push_back(card);
        assert_eq!(p.zone_of(id), Some(Zone::Hand));
    }

    #[test]
    fn test_locate_and_target_exists() {
        let mut state = MatchState::new(&MatchConfig::default());
        let card = minion(false);
        let id = card.instance_id;
        state.player_mut(Side::Opponent).board.push_back(card);

        assert_eq!(state.locate_minion(id), Some(Side::Opponent));
        assert!(state.target_exists(&Target::minion(Side::Opponent, id)));
        assert!(!state.target_exists(&Target::minion(Side::Player, id)));
        assert!(state.target_exists(&Target::hero(Side::Player)));
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::PlayerWins.winner(), Some(Side::Player));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
