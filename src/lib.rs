// In: src/lib.rs

//! Pokemon Evolution Engine
//!
//! The evolution subsystem of a frame-driven RPG engine: a pure rule engine
//! that decides whether and into what a creature evolves, a session-scoped
//! queue deferring presentation to a safe moment, and the finite state
//! machine that plays the evolution cinematic across frames.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod clock;
pub mod errors;
pub mod evolution;
pub mod pokedata;
pub mod pokemon;
pub mod scene;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pokemon-evolution`
// crate, making it easy for users to import the most important types
// directly.

// --- From the `schema` crate ---
// Re-export all core data definitions and static enums.
pub use schema::{
    EvolutionCondition, EvolutionMethod, EvolutionTable, EvolutionTarget, Gender, Item, Move,
    Species, SpeciesEvolutions,
};

// --- From this crate's modules (`src/`) ---

// Decision logic and deferral.
pub use evolution::{
    evolved, try_spawn_shedinja, EvolutionRuleEngine, PendingEvolution, PendingEvolutionQueue,
};

// The cinematic and its collaborator seams.
pub use scene::{
    DefaultHost, EvolutionScene, FrameBuffer, SceneDriver, SceneHost, SequenceState,
};

// Overworld time.
pub use clock::{Clock, ClockTime, FixedClock, Season, SystemClock, TimeOfDay};

// Party data.
pub use pokemon::{Party, PartyPokemon, PARTY_CAPACITY};

// Primary data access functions.
pub use pokedata::{default_table, load_table};

// Crate-specific error and result types.
pub use errors::{
    EvolutionDataError, EvolutionDataResult, EvolutionError, EvolutionResult, PartyError,
    PartyResult,
};
