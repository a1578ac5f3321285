//! Card instance identification.
//!
//! Every physical copy of a card in a match gets its own `InstanceId`.
//!
//! ## Allocation
//!
//! IDs come from a single process-wide monotonic counter. They are never
//! reused, not even across matches: starting a new game allocates fresh
//! IDs for every deck card, and resurrection or summon effects allocate
//! new IDs for the instances they create.
//!
//! ```
//! use duel_ccg::core::InstanceId;
//!
//! let a = InstanceId::next();
//! let b = InstanceId::next();
//! assert!(b > a);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

impl InstanceId {
    /// Allocate the next unused instance ID.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "inst-{}", self.0)
    }
}
