//! Core engine types: instance IDs, sides, state, targets, RNG, configuration, errors.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use entity::InstanceId;
pub use player::{Side, SideMap};
pub use rng::GameRng;
pub use config::{MatchConfig, PacingConfig};
pub use action::{Selection, Target, TargetKind, TargetingMode};
pub use state::{AutoPhase, Hero, Mana, MatchState, Outcome, Phase, PlayerState, Zone};
pub use error::{AttackBlock, CatalogError, DuelError, ErrorKind};
