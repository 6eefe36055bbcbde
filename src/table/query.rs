use crate::table::errors::TableError;
use crate::table::lookup::LookupTable;
use crate::utils::canonical_key;

/// O(1) answers backed by a table built elsewhere
#[derive(Debug, Clone, Copy)]
pub struct TableQuery<'a> {
    table: &'a LookupTable,
}

impl<'a> TableQuery<'a> {
    pub fn new(table: &'a LookupTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a LookupTable {
        self.table
    }

    /// Look up the solutions for four digits given in any order.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UtilsError`] wrapping `InvalidDigit` if any
    /// digit is outside `0..=9`.
    pub fn solve(&self, d1: u8, d2: u8, d3: u8, d4: u8) -> Result<&'a [String], TableError> {
        let key = canonical_key(d1, d2, d3, d4)?;
        Ok(self.table.get(key))
    }
}
