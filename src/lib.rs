// Roster - Core Library
// Exposes all modules for use in the CLI demo and tests

pub mod lookup;
pub mod registry;
pub mod shapes;

// Re-export commonly used types
pub use lookup::{find_slot, lookup_name, NameTriple, SlotNotFound};
pub use registry::{EntityId, NameRegistry, NamedEntity, RegistryError, RosterRecord};
pub use shapes::{Point, Shape};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
