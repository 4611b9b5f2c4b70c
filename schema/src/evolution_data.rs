use crate::{Item, Move, Species};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a species evolves. One variant per trigger family, each carrying its
/// own parameter, so predicate dispatch is exhaustive instead of a
/// method-code-plus-raw-param pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvolutionMethod {
    // Friendship family (checked on level up)
    Friendship { min: u8 },
    FriendshipDay { min: u8 },
    FriendshipNight { min: u8 },
    // Level family
    LevelUp { min_level: u8 },
    /// Level-up that additionally spawns a Shedinja when the party has room.
    NinjaskLevelUp { min_level: u8 },
    // Stat-comparison family (level-gated)
    AtkGtDefLevelUp { min_level: u8 },
    AtkEqDefLevelUp { min_level: u8 },
    AtkLtDefLevelUp { min_level: u8 },
    // Personality-value split family: (pid >> 16) % 10 decides the branch
    SilcoonLevelUp { min_level: u8 },
    CascoonLevelUp { min_level: u8 },
    // Held-item family (checked on level up and on item use)
    ItemDayLevelUp { item: Item },
    ItemNightLevelUp { item: Item },
    // Known-move family
    MoveLevelUp { known: Move },
    // Gendered level family
    MaleLevelUp { min_level: u8 },
    FemaleLevelUp { min_level: u8 },
    // Party-composition family
    PartySpeciesLevelUp { partner: Species },
    // Item-use family
    Stone { item: Item },
    MaleStone { item: Item },
    FemaleStone { item: Item },
    // Trade family
    Trade,
    ItemTrade { held: Item },
    /// Shelmet and Karrablast trade-evolve into each other regardless of
    /// which side initiates.
    ShelmetKarrablast,
    // Recognized but never matched; see the rule engine for the limitation.
    ShedinjaLevelUp,
    BeautyLevelUp { min_beauty: u8 },
}

/// The species/form a condition evolves into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionTarget {
    pub species: Species,
    #[serde(default)]
    pub form: u8,
}

/// One evolution rule: a trigger method paired with its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionCondition {
    pub method: EvolutionMethod,
    pub into: EvolutionTarget,
}

/// All evolution rules for one species/form, in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesEvolutions {
    pub species: Species,
    #[serde(default)]
    pub form: u8,
    pub conditions: Vec<EvolutionCondition>,
}

/// The full evolution table, as deserialized from RON.
///
/// Condition lists are ordered: the rule engine evaluates top to bottom and
/// the first satisfied predicate wins, so order encodes priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionTable {
    pub entries: Vec<SpeciesEvolutions>,
    #[serde(skip)]
    index: HashMap<(Species, u8), usize>,
}

impl EvolutionTable {
    pub fn new(entries: Vec<SpeciesEvolutions>) -> Self {
        let mut table = EvolutionTable {
            entries,
            index: HashMap::new(),
        };
        table.rebuild_index();
        table
    }

    /// Rebuild the (species, form) lookup index. Must be called after
    /// deserialization, since the index is not part of the data format.
    pub fn rebuild_index(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| ((e.species, e.form), i))
            .collect();
    }

    /// Ordered condition list for a species/form; empty when the species
    /// has no evolutions.
    pub fn conditions_for(&self, species: Species, form: u8) -> &[EvolutionCondition] {
        match self.index.get(&(species, form)) {
            Some(&i) => &self.entries[i].conditions,
            None => &[],
        }
    }
}
