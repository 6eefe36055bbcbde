use std::collections::BTreeMap;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::expression::ShapeSet;
use crate::table::{LookupTable, TableError, canonical_multisets};
use crate::utils::CanonicalKey;

/// Sparse, serde-friendly form of a [`LookupTable`].
///
/// Only keys with at least one solution are written; on load every other
/// multiset is restored as solved-with-no-answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedTable {
    pub target: i64,
    pub shapes: ShapeSet,
    pub entries: BTreeMap<u16, Vec<String>>,
}

impl ExportedTable {
    pub fn from_table(table: &LookupTable) -> Self {
        let entries = table
            .entries()
            .map(|(key, solutions)| (key.value(), solutions.to_vec()))
            .collect();

        Self {
            target: table.target(),
            shapes: table.shapes(),
            entries,
        }
    }

    /// # Errors
    ///
    /// Returns [`TableError::InvalidExport`] if a key is not the sorted form
    /// of a digit multiset or a solution list is not sorted and unique.
    pub fn into_table(mut self) -> Result<LookupTable, TableError> {
        for (&value, solutions) in &self.entries {
            if CanonicalKey::from_value(value).is_none() {
                return Err(TableError::InvalidExport(format!(
                    "key {} is not a canonical digit multiset",
                    value
                )));
            }
            if !solutions.windows(2).all(|pair| pair[0] < pair[1]) {
                return Err(TableError::InvalidExport(format!(
                    "solutions for key {} are not sorted and unique",
                    value
                )));
            }
        }

        let mut restored = Vec::with_capacity(canonical_multisets().len());
        for digits in canonical_multisets() {
            let key = CanonicalKey::from_digits(digits)?;
            let solutions = self.entries.remove(&key.value()).unwrap_or_default();
            restored.push((key, solutions));
        }
        debug!("Restored {} multisets from export", restored.len());

        LookupTable::from_entries(self.target, self.shapes, restored)
    }
}

/// # Errors
///
/// Returns [`TableError::Json`] if serialization fails.
pub fn to_json(table: &LookupTable) -> Result<String, TableError> {
    let exported = ExportedTable::from_table(table);
    info!("Exporting {} populated keys as JSON", exported.entries.len());
    Ok(serde_json::to_string_pretty(&exported)?)
}

/// # Errors
///
/// Returns [`TableError::Json`] for malformed JSON and
/// [`TableError::InvalidExport`] for well-formed JSON that is not a table.
pub fn from_json(text: &str) -> Result<LookupTable, TableError> {
    let exported: ExportedTable = serde_json::from_str(text)?;
    info!("Loading {} populated keys from JSON", exported.entries.len());
    exported.into_table()
}
