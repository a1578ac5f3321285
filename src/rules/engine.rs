//! The match context.
//!
//! `Duel` owns everything a match needs: configuration, the immutable
//! catalog, the script table, the shared `MatchState`, the RNG and the
//! autonomous side's policy and step queue. Every operation (human action,
//! autonomous step, card script) goes through the same `&mut Duel`, so
//! there is no ambient state and no interleaving.
//!
//! Operations live in sibling modules:
//! - `damage`: damage pipeline, death sweep, summons
//! - `combat`: attack validation and resolution
//! - `turn`: game start, turn transitions, draws
//! - `play`: playing cards from hand
//! - `actions`: the human side's selection state machine
//! - `ai::sequence`: the autonomous side's step queue

use std::collections::VecDeque;

use im::Vector;
use log::{error, warn};

use crate::ai::{AutoStep, OpponentPolicy, ScriptedOpponent};
use crate::cards::{CardCatalog, CardInstance};
use crate::core::{
    DuelError, ErrorKind, GameRng, Hero, InstanceId, Mana, MatchConfig, MatchState, Outcome, Phase,
    PlayerState, Side, TargetingMode,
};
use crate::effects::{aura, ScriptTable};

/// A single match between the human side and the autonomous side.
pub struct Duel {
    pub(crate) config: MatchConfig,
    pub(crate) catalog: CardCatalog,
    pub(crate) scripts: ScriptTable,
    pub(crate) state: MatchState,
    pub(crate) rng: GameRng,
    pub(crate) policy: Box<dyn OpponentPolicy>,
    pub(crate) pending: VecDeque<AutoStep>,
    pub(crate) halted: bool,
}

impl std::fmt::Debug for Duel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Duel")
            .field("turn", &self.state.turn)
            .field("active", &self.state.active)
            .field("phase", &self.state.phase)
            .field("outcome", &self.state.outcome)
            .field("pending", &self.pending)
            .field("halted", &self.halted)
            .finish()
    }
}

impl Duel {
    /// Create a match over `catalog` with the given scripts.
    ///
    /// The match is in `Phase::Setup` until `start_game` is called.
    #[must_use]
    pub fn new(catalog: CardCatalog, scripts: ScriptTable, config: MatchConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            state: MatchState::new(&config),
            config,
            catalog,
            scripts,
            policy: Box::new(ScriptedOpponent),
            pending: VecDeque::new(),
            halted: false,
        }
    }

    /// A match with the built-in card set and scripts.
    ///
    /// ```
    /// use duel_ccg::core::{MatchConfig, Side};
    /// use duel_ccg::rules::Duel;
    ///
    /// let mut duel = Duel::standard(MatchConfig::default().with_seed(7));
    /// duel.start_game().unwrap();
    ///
    /// assert_eq!(duel.hand(Side::Player).len(), 3);
    /// assert_eq!(duel.hand(Side::Opponent).len(), 4);
    /// ```
    #[must_use]
    pub fn standard(config: MatchConfig) -> Self {
        Self::new(CardCatalog::standard(), ScriptTable::standard(), config)
    }

    /// Replace the autonomous side's policy (builder pattern).
    #[must_use]
    pub fn with_policy(mut self, policy: Box<dyn OpponentPolicy>) -> Self {
        self.policy = policy;
        self
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn scripts(&self) -> &ScriptTable {
        &self.scripts
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Direct state access, for card scripts and scenario setup.
    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    /// An O(1) copy of the whole match state.
    #[must_use]
    pub fn snapshot(&self) -> MatchState {
        self.state.clone()
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.state.turn
    }

    #[must_use]
    pub fn active_side(&self) -> Side {
        self.state.active
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn player(&self, side: Side) -> &PlayerState {
        self.state.player(side)
    }

    #[must_use]
    pub fn hero(&self, side: Side) -> Hero {
        self.state.player(side).hero
    }

    #[must_use]
    pub fn mana(&self, side: Side) -> Mana {
        self.state.player(side).mana
    }

    #[must_use]
    pub fn hand(&self, side: Side) -> &Vector<CardInstance> {
        &self.state.player(side).hand
    }

    #[must_use]
    pub fn board(&self, side: Side) -> &Vector<CardInstance> {
        &self.state.player(side).board
    }

    #[must_use]
    pub fn artifact(&self, side: Side) -> Option<&CardInstance> {
        self.state.player(side).artifact.as_ref()
    }

    #[must_use]
    pub fn graveyard(&self, side: Side) -> &Vector<CardInstance> {
        &self.state.player(side).graveyard
    }

    #[must_use]
    pub fn targeting_mode(&self) -> TargetingMode {
        self.state.selection.mode
    }

    #[must_use]
    pub fn selected_card(&self) -> Option<InstanceId> {
        self.state.selection.card
    }

    #[must_use]
    pub fn selected_attacker(&self) -> Option<InstanceId> {
        self.state.selection.attacker
    }

    /// Is the autonomous side's sequence running?
    #[must_use]
    pub fn is_thinking(&self) -> bool {
        self.state.thinking
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome
    }

    /// Has a fatal error stopped the engine?
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Mana `side` would pay for a card in its hand.
    #[must_use]
    pub fn effective_cost(&self, side: Side, card: InstanceId) -> Option<u32> {
        let player = self.state.player(side);
        player
            .hand_card(card)
            .map(|c| aura::effective_cost(&self.scripts, player, c))
    }

    // === Guards ===

    /// Fail unless a match is in progress.
    pub(crate) fn ensure_running(&self) -> Result<(), DuelError> {
        if self.halted {
            return Err(DuelError::Halted);
        }
        if self.state.is_over() {
            return Err(DuelError::GameOver);
        }
        if self.state.phase == Phase::Setup {
            return Err(DuelError::NotStarted);
        }
        Ok(())
    }

    /// Fail unless the human side may act right now.
    pub(crate) fn ensure_human_turn(&self) -> Result<(), DuelError> {
        self.ensure_running()?;
        if self.state.thinking {
            return Err(DuelError::OpponentActing);
        }
        if !self.state.active.is_human() {
            return Err(DuelError::NotYourTurn);
        }
        Ok(())
    }

    /// Stop the engine. Every later operation returns `Halted`.
    pub(crate) fn halt(&mut self, err: DuelError) -> DuelError {
        error!("engine halted: {}", err);
        self.halted = true;
        self.state.thinking = false;
        self.pending.clear();
        err
    }
}

/// Log a failed operation at a level matching its kind.
pub(crate) fn log_failure(op: &str, err: &DuelError) {
    match err.kind() {
        ErrorKind::InvalidAction | ErrorKind::Terminal => warn!("{} rejected: {}", op, err),
        ErrorKind::Invariant => error!("{} aborted: {}", op, err),
        ErrorKind::Fatal => error!("{} failed: {}", op, err),
    }
}
