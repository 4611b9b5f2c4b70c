use schema::Species;
use std::fmt;
use std::path::PathBuf;

/// Main error type for the evolution subsystem
#[derive(Debug)]
pub enum EvolutionError {
    /// Error related to evolution table loading or lookup
    Data(EvolutionDataError),
    /// Error related to party manipulation
    Party(PartyError),
}

/// Errors related to evolution table data.
///
/// Absence of a matching evolution is never an error; these only cover
/// missing or malformed table data, which is a fatal configuration problem.
#[derive(Debug)]
pub enum EvolutionDataError {
    /// The evolution table file could not be read
    TableNotFound(PathBuf, std::io::Error),
    /// The evolution table file did not parse as RON
    MalformedTable(String),
    /// A condition evolves a species/form into itself
    SelfTarget(Species),
}

/// Errors related to party manipulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartyError {
    /// Party slot index is out of bounds
    InvalidIndex(usize),
    /// The party already holds the maximum number of members
    PartyFull,
}

impl fmt::Display for EvolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvolutionError::Data(err) => write!(f, "Evolution data error: {}", err),
            EvolutionError::Party(err) => write!(f, "Party error: {}", err),
        }
    }
}

impl fmt::Display for EvolutionDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvolutionDataError::TableNotFound(path, err) => {
                write!(f, "Evolution table not found at {}: {}", path.display(), err)
            }
            EvolutionDataError::MalformedTable(details) => {
                write!(f, "Malformed evolution table: {}", details)
            }
            EvolutionDataError::SelfTarget(species) => {
                write!(f, "Evolution table maps {:?} onto itself", species)
            }
        }
    }
}

impl fmt::Display for PartyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartyError::InvalidIndex(index) => write!(f, "Invalid party index: {}", index),
            PartyError::PartyFull => write!(f, "Party is full"),
        }
    }
}

impl std::error::Error for EvolutionError {}
impl std::error::Error for EvolutionDataError {}
impl std::error::Error for PartyError {}

impl From<EvolutionDataError> for EvolutionError {
    fn from(err: EvolutionDataError) -> Self {
        EvolutionError::Data(err)
    }
}

impl From<PartyError> for EvolutionError {
    fn from(err: PartyError) -> Self {
        EvolutionError::Party(err)
    }
}

/// Type alias for Results using EvolutionError
pub type EvolutionResult<T> = Result<T, EvolutionError>;

/// Type alias for Results using EvolutionDataError
pub type EvolutionDataResult<T> = Result<T, EvolutionDataError>;

/// Type alias for Results using PartyError
pub type PartyResult<T> = Result<T, PartyError>;
