// Evolution Schema - Shared type definitions
// This crate contains the core enums and data structs that are shared between
// the evolution engine, the scene code, and the external RON tables, so that
// the data format and the runtime agree on one set of serde definitions.

// Re-export the main types
pub use evolution_data::*;
pub use pokemon_types::*;
pub use species::*;

pub mod evolution_data;
pub mod pokemon_types;
pub mod species;
