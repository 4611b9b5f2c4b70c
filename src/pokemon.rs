use crate::errors::{PartyError, PartyResult};
use rand::Rng;
use schema::{Gender, Item, Move, Species};
use serde::{Deserialize, Serialize};

/// Maximum number of Pokemon a party can hold.
pub const PARTY_CAPACITY: usize = 6;

/// One Pokemon in the player's party.
///
/// Externally owned and mutable; the evolution core reads most fields and
/// writes `species`/`form` exactly once, at the commit point of the
/// evolution cinematic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyPokemon {
    pub nickname: String,
    pub species: Species,
    pub form: u8,
    pub gender: Gender,
    pub shiny: bool,
    pub level: u8,
    pub friendship: u8,
    pub attack: u16,
    pub defense: u16,
    pub held_item: Option<Item>,
    pub moves: [Option<Move>; 4],
    /// Personality value; `(pid >> 16) % 10` breaks the Silcoon/Cascoon tie.
    pub pid: u32,
    pub is_egg: bool,
}

impl PartyPokemon {
    /// Create a Pokemon with a freshly rolled personality value and the
    /// species name as nickname.
    pub fn new(species: Species, gender: Gender, level: u8) -> Self {
        let mut rng = rand::rng();
        PartyPokemon {
            nickname: species.name().to_string(),
            species,
            form: 0,
            gender,
            shiny: false,
            level,
            friendship: 70,
            attack: 10,
            defense: 10,
            held_item: None,
            moves: [None; 4],
            pid: rng.random(),
            is_egg: false,
        }
    }

    pub fn knows_move(&self, move_: Move) -> bool {
        self.moves.iter().flatten().any(|&m| m == move_)
    }
}

/// The player's party, at most [`PARTY_CAPACITY`] members.
///
/// Evolution code identifies members by slot index, so slots stay stable
/// for as long as a pending evolution or running cinematic refers to them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    members: Vec<PartyPokemon>,
}

impl Party {
    pub fn new() -> Self {
        Party {
            members: Vec::with_capacity(PARTY_CAPACITY),
        }
    }

    pub fn push(&mut self, pokemon: PartyPokemon) -> PartyResult<usize> {
        if self.members.len() >= PARTY_CAPACITY {
            return Err(PartyError::PartyFull);
        }
        self.members.push(pokemon);
        Ok(self.members.len() - 1)
    }

    pub fn get(&self, index: usize) -> PartyResult<&PartyPokemon> {
        self.members.get(index).ok_or(PartyError::InvalidIndex(index))
    }

    pub fn get_mut(&mut self, index: usize) -> PartyResult<&mut PartyPokemon> {
        self.members
            .get_mut(index)
            .ok_or(PartyError::InvalidIndex(index))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= PARTY_CAPACITY
    }

    pub fn iter(&self) -> impl Iterator<Item = &PartyPokemon> {
        self.members.iter()
    }
}
