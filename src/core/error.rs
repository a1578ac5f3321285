//! Error types.
//!
//! Every engine operation returns `Result<(), DuelError>`. Errors fall into
//! four kinds (see `ErrorKind`):
//!
//! - **Invalid action**: soft rejection. State is left untouched and the
//!   same call fails the same way if retried.
//! - **Invariant**: a referenced instance was not where it had to be.
//!   Only the current operation is aborted.
//! - **Terminal**: the match is over. Queries keep working.
//! - **Fatal**: the engine halted (runaway death resolution). Every later
//!   operation returns `Halted`.

use thiserror::Error;

use super::entity::InstanceId;
use crate::cards::CardId;

/// Why a minion may not be declared as an attacker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackBlock {
    /// Summoning sickness or already attacked this turn.
    Exhausted,
    /// Frozen until its owner's next turn.
    Frozen,
    /// Bound by an enemy effect until the caster's next turn.
    Shackled,
    /// Current attack is zero.
    NoAttack,
}

impl std::fmt::Display for AttackBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            AttackBlock::Exhausted => "exhausted",
            AttackBlock::Frozen => "frozen",
            AttackBlock::Shackled => "shackled",
            AttackBlock::NoAttack => "has no attack",
        };
        f.write_str(text)
    }
}

/// Classification of a `DuelError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidAction,
    Invariant,
    Terminal,
    Fatal,
}

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DuelError {
    #[error("no game in progress")]
    NotStarted,
    #[error("it is not the acting side's turn")]
    NotYourTurn,
    #[error("the opponent is acting")]
    OpponentActing,
    #[error("not enough mana: cost {cost}, available {available}")]
    InsufficientMana { cost: u32, available: u32 },
    #[error("board is full")]
    BoardFull,
    #[error("card {0} is not in hand")]
    NotInHand(InstanceId),
    #[error("minion {0} is not on the acting side's board")]
    NotOnBoard(InstanceId),
    #[error("card requires a target")]
    MissingTarget,
    #[error("invalid target")]
    InvalidTarget,
    #[error("minion cannot attack: {0}")]
    CannotAttack(AttackBlock),
    #[error("a taunt minion must be attacked first")]
    MustTargetTaunt,
    #[error("cannot attack a friendly character")]
    FriendlyTarget,
    #[error("nothing is selected")]
    NoSelection,
    #[error("not in the required targeting mode")]
    WrongTargetingMode,

    #[error("instance {0} not found")]
    InstanceNotFound(InstanceId),
    #[error("card {0} is not in the catalog")]
    UnknownCard(CardId),

    #[error("the game is over")]
    GameOver,

    #[error("death resolution exceeded {limit} passes")]
    ResolutionLimit { limit: u32 },
    #[error("engine halted after a fatal error")]
    Halted,
}

impl DuelError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            DuelError::InstanceNotFound(_) | DuelError::UnknownCard(_) => ErrorKind::Invariant,
            DuelError::GameOver => ErrorKind::Terminal,
            DuelError::ResolutionLimit { .. } | DuelError::Halted => ErrorKind::Fatal,
            _ => ErrorKind::InvalidAction,
        }
    }

    /// Is this a soft rejection that left state unchanged?
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        self.kind() == ErrorKind::InvalidAction
    }
}

/// Errors raised while loading a card catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("card {0} registered twice")]
    DuplicateCard(CardId),
    #[error("catalog is empty")]
    Empty,
    #[error("creature {0} has no attack/health")]
    MissingStats(CardId),
}
