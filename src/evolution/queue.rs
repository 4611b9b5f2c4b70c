use crate::pokemon::PARTY_CAPACITY;
use schema::EvolutionCondition;
use std::collections::VecDeque;

/// A matched evolution whose presentation has been deferred to a safe
/// moment, such as after a battle ends. The creature is identified by its
/// party slot rather than copied, so the cinematic later operates on the
/// live creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingEvolution {
    pub party_index: usize,
    pub condition: EvolutionCondition,
}

/// Session-scoped FIFO of pending evolutions.
///
/// Producers (battle results, item use) and the consumer (the overworld
/// dispatcher) only run between frames on one thread, so no internal
/// synchronization is needed. The queue is never cleared automatically;
/// call [`clear`](Self::clear) when the game session ends.
#[derive(Debug, Default)]
pub struct PendingEvolutionQueue {
    pending: VecDeque<PendingEvolution>,
}

impl PendingEvolutionQueue {
    pub fn new() -> Self {
        PendingEvolutionQueue {
            pending: VecDeque::with_capacity(PARTY_CAPACITY),
        }
    }

    /// Append unconditionally to the tail.
    pub fn enqueue(&mut self, party_index: usize, condition: EvolutionCondition) {
        self.pending.push_back(PendingEvolution {
            party_index,
            condition,
        });
    }

    /// Remove and return the head, or `None` when nothing is pending
    /// (a normal negative result, not an error).
    pub fn next(&mut self) -> Option<PendingEvolution> {
        self.pending.pop_front()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
