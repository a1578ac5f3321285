//! Match configuration.
//!
//! `MatchConfig` holds every tunable number the rules read: starting
//! life and mana, zone capacities, opening hand sizes, the death
//! resolution bound and the opponent's pacing delays.
//!
//! Configure with the builder-style setters or load from JSON. Missing
//! JSON fields fall back to the defaults.
//!
//! ```
//! use duel_ccg::core::{MatchConfig, Side};
//!
//! let config = MatchConfig::default().with_seed(7).with_starting_hp(20);
//! assert_eq!(config.seed, 7);
//! assert_eq!(config.opening_hand[Side::Opponent], 4);
//!
//! let loaded = MatchConfig::from_json(r#"{ "board_capacity": 5 }"#).unwrap();
//! assert_eq!(loaded.board_capacity, 5);
//! assert_eq!(loaded.hand_capacity, 10);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::player::{Side, SideMap};

/// Delays between the autonomous side's actions.
///
/// Purely cosmetic: no rule reads them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Pause before the autonomous side starts acting (ms).
    pub turn_start_ms: u64,
    /// Pause after each individual play or attack and between phases (ms).
    pub between_actions_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            turn_start_ms: 1000,
            between_actions_ms: 500,
        }
    }
}

impl PacingConfig {
    /// Pause before the autonomous side starts acting.
    #[must_use]
    pub fn turn_start(&self) -> Duration {
        Duration::from_millis(self.turn_start_ms)
    }

    /// Pause between autonomous actions.
    #[must_use]
    pub fn between_actions(&self) -> Duration {
        Duration::from_millis(self.between_actions_ms)
    }
}

/// Configuration for a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// RNG seed for shuffles and random choices.
    pub seed: u64,

    /// Hero hit points (and max hit points) at game start.
    pub starting_hp: i32,

    /// Hero armor at game start.
    pub starting_armor: i32,

    /// Mana (current and max) each side starts with.
    pub starting_mana: SideMap<u32>,

    /// Upper bound for mana growth.
    pub max_mana: u32,

    /// Maximum cards in hand. Draws beyond this burn the card.
    pub hand_capacity: usize,

    /// Maximum minions on a board.
    pub board_capacity: usize,

    /// Cards drawn by each side when the game starts.
    pub opening_hand: SideMap<usize>,

    /// Copies of each catalog entry in each deck.
    pub copies_per_card: usize,

    /// Bound on nested and repeated death-resolution passes.
    /// Exceeding it halts the engine.
    pub resolution_limit: u32,

    /// Opponent pacing delays.
    pub pacing: PacingConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            starting_hp: 30,
            starting_armor: 0,
            starting_mana: SideMap::new(|side| match side {
                Side::Player => 7,
                Side::Opponent => 0,
            }),
            max_mana: 10,
            hand_capacity: 10,
            board_capacity: 7,
            opening_hand: SideMap::new(|side| match side {
                Side::Player => 3,
                Side::Opponent => 4,
            }),
            copies_per_card: 1,
            resolution_limit: 32,
            pacing: PacingConfig::default(),
        }
    }
}

impl MatchConfig {
    /// Load a configuration from JSON. Absent fields use defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set hero starting hit points.
    #[must_use]
    pub fn with_starting_hp(mut self, hp: i32) -> Self {
        self.starting_hp = hp;
        self
    }

    /// Set hero starting armor.
    #[must_use]
    pub fn with_starting_armor(mut self, armor: i32) -> Self {
        self.starting_armor = armor.max(0);
        self
    }

    /// Set one side's starting mana.
    #[must_use]
    pub fn with_starting_mana(mut self, side: Side, mana: u32) -> Self {
        self.starting_mana[side] = mana.min(self.max_mana);
        self
    }

    /// Set one side's opening hand size.
    #[must_use]
    pub fn with_opening_hand(mut self, side: Side, cards: usize) -> Self {
        self.opening_hand[side] = cards;
        self
    }

    /// Set copies of each catalog entry per deck.
    #[must_use]
    pub fn with_copies_per_card(mut self, copies: usize) -> Self {
        self.copies_per_card = copies;
        self
    }

    /// Set the death-resolution bound.
    #[must_use]
    pub fn with_resolution_limit(mut self, limit: u32) -> Self {
        self.resolution_limit = limit.max(1);
        self
    }

    /// Set the pacing delays.
    #[must_use]
    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }
}
