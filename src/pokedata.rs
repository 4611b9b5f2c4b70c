//! Loading of the evolution table from RON data files.
//!
//! The table is external data: the engine only ever reads it. A missing or
//! malformed file is a fatal configuration error, reported here at load
//! time; the rule engine itself has no error path.

use crate::errors::{EvolutionDataError, EvolutionDataResult};
use schema::EvolutionTable;
use std::fs;
use std::path::Path;

/// The evolution table shipped with the crate, covering the built-in
/// species set.
const DEFAULT_TABLE: &str = include_str!("../data/evolutions.ron");

/// Load an evolution table from a RON file.
pub fn load_table(path: &Path) -> EvolutionDataResult<EvolutionTable> {
    let content = fs::read_to_string(path)
        .map_err(|e| EvolutionDataError::TableNotFound(path.to_path_buf(), e))?;
    parse_table(&content)
}

/// The compiled-in default table. Malformed data here is a bug, but the
/// loader still reports it as an error rather than panicking.
pub fn default_table() -> EvolutionDataResult<EvolutionTable> {
    parse_table(DEFAULT_TABLE)
}

fn parse_table(content: &str) -> EvolutionDataResult<EvolutionTable> {
    let mut table: EvolutionTable = ron::from_str(content)
        .map_err(|e| EvolutionDataError::MalformedTable(e.to_string()))?;
    table.rebuild_index();
    validate_table(&table)?;
    Ok(table)
}

fn validate_table(table: &EvolutionTable) -> EvolutionDataResult<()> {
    for entry in &table.entries {
        for condition in &entry.conditions {
            if condition.into.species == entry.species && condition.into.form == entry.form {
                return Err(EvolutionDataError::SelfTarget(entry.species));
            }
        }
    }
    Ok(())
}
