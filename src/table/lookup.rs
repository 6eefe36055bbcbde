use crate::expression::ShapeSet;
use crate::table::errors::TableError;
use crate::utils::{CanonicalKey, MAX_KEY, TABLE_SLOTS};

/// Immutable mapping from [`CanonicalKey`] to its sorted solution list.
///
/// Storage is dense: one slot per possible key. `None` marks a key that was
/// never considered, `Some(vec![])` one that was solved and has no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    slots: Vec<Option<Vec<String>>>,
    target: i64,
    shapes: ShapeSet,
}

impl LookupTable {
    /// # Errors
    ///
    /// Returns [`TableError::BuildFault`] for a key past the last slot or a
    /// key supplied twice.
    pub(crate) fn from_entries<I>(target: i64, shapes: ShapeSet, entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (CanonicalKey, Vec<String>)>,
    {
        let mut slots = vec![None; TABLE_SLOTS];

        for (key, solutions) in entries {
            let Some(slot) = slots.get_mut(key.index()) else {
                return Err(TableError::BuildFault(format!(
                    "key {} outside 0..={}",
                    key, MAX_KEY
                )));
            };
            if slot.is_some() {
                return Err(TableError::BuildFault(format!("key {} produced twice", key)));
            }
            *slot = Some(solutions);
        }

        Ok(Self {
            slots,
            target,
            shapes,
        })
    }

    /// Solutions stored for `key`; empty when it has none
    pub fn get(&self, key: CanonicalKey) -> &[String] {
        self.slot(key.index())
    }

    /// Raw slot access by index, empty for unused or out-of-range slots
    pub fn slot(&self, index: usize) -> &[String] {
        self.slots
            .get(index)
            .and_then(Option::as_deref)
            .unwrap_or(&[])
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn shapes(&self) -> ShapeSet {
        self.shapes
    }

    /// Number of multisets the table holds an answer for, solvable or not
    pub fn considered(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Number of multisets with at least one solution
    pub fn populated(&self) -> usize {
        self.entries().count()
    }

    pub fn total_solutions(&self) -> usize {
        self.entries().map(|(_, solutions)| solutions.len()).sum()
    }

    /// Non-empty entries in ascending key order
    pub fn entries(&self) -> impl Iterator<Item = (CanonicalKey, &[String])> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let solutions = slot.as_deref().filter(|solutions| !solutions.is_empty())?;
            let key = CanonicalKey::from_value(u16::try_from(index).ok()?)?;
            Some((key, solutions))
        })
    }
}
