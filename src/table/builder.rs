use log::{debug, info};
use rayon::prelude::*;

use crate::solver::Make10Solver;
use crate::table::errors::TableError;
use crate::table::lookup::LookupTable;
use crate::utils::CanonicalKey;

/// Multisets of four digits drawn from ten values: C(13, 4)
pub const CANONICAL_MULTISETS: usize = 715;

/// Every non-decreasing digit quadruple, in ascending key order
pub fn canonical_multisets() -> Vec<[u8; 4]> {
    let mut multisets = Vec::with_capacity(CANONICAL_MULTISETS);
    for a in 0..=9u8 {
        for b in a..=9 {
            for c in b..=9 {
                for d in c..=9 {
                    multisets.push([a, b, c, d]);
                }
            }
        }
    }
    multisets
}

/// Runs the solver once per multiset and assembles the table
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    solver: Make10Solver,
}

impl TableBuilder {
    pub fn new(solver: Make10Solver) -> Self {
        Self { solver }
    }

    pub fn solver(&self) -> &Make10Solver {
        &self.solver
    }

    /// Solve all 715 multisets in parallel and collect them into a table.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::BuildFault`] if a multiset does not map onto its
    /// own canonical key or two multisets claim the same slot. No partial
    /// table is ever returned.
    pub fn build(&self) -> Result<LookupTable, TableError> {
        let config = *self.solver.config();
        let multisets = canonical_multisets();
        info!(
            "Building lookup table for {} multisets (target {}, {:?} shapes)",
            multisets.len(),
            config.target,
            config.shapes
        );

        let entries = multisets
            .par_iter()
            .map(|&digits| {
                let key = CanonicalKey::from_digits(digits).map_err(|err| {
                    TableError::BuildFault(format!("multiset {:?} has no key: {}", digits, err))
                })?;
                if key.digits() != digits {
                    return Err(TableError::BuildFault(format!(
                        "multiset {:?} packed to non-canonical key {}",
                        digits, key
                    )));
                }

                let solutions = self.solver.solve(digits);
                debug!("Key {} has {} solutions", key, solutions.len());
                Ok((key, solutions))
            })
            .collect::<Result<Vec<_>, TableError>>()?;

        let table = LookupTable::from_entries(config.target, config.shapes, entries)?;
        info!(
            "Lookup table built: {} of {} multisets solvable, {} expressions",
            table.populated(),
            table.considered(),
            table.total_solutions()
        );
        Ok(table)
    }
}
