//! Commit-time transforms, kept separate from the cinematic so they can be
//! tested without any animation timing.

use crate::pokemon::{Party, PartyPokemon};
use log::debug;
use schema::{EvolutionCondition, Gender, Species};

/// The pure evolution transform: the same creature with its species and
/// form replaced by the condition's target. Nickname, stats, item, moves
/// and personality value all carry over.
pub fn evolved(pkmn: &PartyPokemon, condition: &EvolutionCondition) -> PartyPokemon {
    let mut next = pkmn.clone();
    next.species = condition.into.species;
    next.form = condition.into.form;
    next
}

/// When Nincada evolves into Ninjask, a Shedinja is left behind in the
/// party, cloned from the creature *before* it mutates. Requires a free
/// party slot; silently skipped otherwise.
///
/// Returns the new member's slot on success.
pub fn try_spawn_shedinja(party: &mut Party, source_index: usize) -> Option<usize> {
    if party.is_full() {
        return None;
    }
    let source = party.get(source_index).ok()?;
    let mut shed = source.clone();
    shed.species = Species::Shedinja;
    shed.form = 0;
    shed.nickname = Species::Shedinja.name().to_string();
    shed.gender = Gender::Genderless;
    shed.held_item = None;
    let slot = party.push(shed).ok()?;
    debug!("spawned Shedinja in slot {}", slot);
    Some(slot)
}
