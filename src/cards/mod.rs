//! Card system: definitions, instances, catalog and the standard set.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Static card data (type, cost, stats, mechanic tags)
//! - `CardInstance`: Runtime card state (current stats, status flags, effects)
//! - `CardCatalog`: Ordered definition lookup

pub mod definition;
pub mod instance;
pub mod registry;
pub mod standard;

pub use definition::{CardDefinition, CardId, CardType, Mechanic, TargetType};
pub use instance::CardInstance;
pub use registry::CardCatalog;
pub use standard::{ids, mistwolf_token, standard_cards};
