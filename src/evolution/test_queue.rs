#[cfg(test)]
mod tests {
    use crate::evolution::PendingEvolutionQueue;
    use pretty_assertions::assert_eq;
    use schema::{EvolutionCondition, EvolutionMethod, EvolutionTarget, Species};

    fn condition(into: Species) -> EvolutionCondition {
        EvolutionCondition {
            method: EvolutionMethod::LevelUp { min_level: 16 },
            into: EvolutionTarget {
                species: into,
                form: 0,
            },
        }
    }

    #[test]
    fn queue_is_first_in_first_out() {
        let mut queue = PendingEvolutionQueue::new();
        queue.enqueue(0, condition(Species::Machoke));
        queue.enqueue(3, condition(Species::Kadabra));

        let first = queue.next().unwrap();
        assert_eq!(first.party_index, 0);
        assert_eq!(first.condition.into.species, Species::Machoke);

        let second = queue.next().unwrap();
        assert_eq!(second.party_index, 3);
        assert_eq!(second.condition.into.species, Species::Kadabra);

        // Empty queue reports None, a normal negative result.
        assert_eq!(queue.next(), None);
    }

    #[test]
    fn queue_survives_until_explicitly_cleared() {
        let mut queue = PendingEvolutionQueue::new();
        queue.enqueue(1, condition(Species::Machoke));
        assert_eq!(queue.len(), 1);
        assert!(!queue.is_empty());

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.next(), None);
    }
}
