// Decision logic for evolutions: the pure rule engine, the deferred
// presentation queue, and the commit-time transforms.

pub mod apply;
pub mod engine;
pub mod queue;

#[cfg(test)]
mod test_queue;
#[cfg(test)]
mod test_rule_engine;

pub use apply::{evolved, try_spawn_shedinja};
pub use engine::EvolutionRuleEngine;
pub use queue::{PendingEvolution, PendingEvolutionQueue};
