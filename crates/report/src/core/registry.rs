// standard library
use std::collections::btree_map::{BTreeMap, Values};

// crate modules
use crate::core::Cell;

/// Keyed collection of [Cell] records for a single output file
///
/// Cells are created on first reference by any of the section decoders and
/// then enriched by the others. Iteration is always in ascending cell number.
///
/// A registry belongs to exactly one parsed file. Nothing is shared between
/// files, so a batch of outputs never sees data from a previous run.
///
/// ```rust
/// # use outp_report::CellRegistry;
/// let mut cells = CellRegistry::new();
/// cells.entry(11).volume = Some(2.0);
/// cells.entry(10).material = Some(1);
///
/// // repeated references enrich the same record
/// cells.entry(11).material = Some(3);
///
/// assert_eq!(cells.len(), 2);
/// assert_eq!(cells.numbers(), vec![10, 11]);
/// assert_eq!(cells.get(11).unwrap().material, Some(3));
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CellRegistry {
    cells: BTreeMap<u32, Cell>,
}

impl CellRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell for `number`, creating it if it does not exist yet
    pub fn entry(&mut self, number: u32) -> &mut Cell {
        self.cells
            .entry(number)
            .or_insert_with(|| Cell::new(number))
    }

    /// Reference to an existing cell, if it exists
    pub fn get(&self, number: u32) -> Option<&Cell> {
        self.cells.get(&number)
    }

    /// Mutable reference to an existing cell, without creating anything
    pub fn get_mut(&mut self, number: u32) -> Option<&mut Cell> {
        self.cells.get_mut(&number)
    }

    /// Check if a cell has been referenced
    pub fn contains(&self, number: u32) -> bool {
        self.cells.contains_key(&number)
    }

    /// Number of cells in the registry
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if no cells have been referenced
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cell numbers in ascending order
    pub fn numbers(&self) -> Vec<u32> {
        self.cells.keys().copied().collect()
    }

    /// Iterate over cells in ascending cell number
    pub fn iter(&self) -> Values<'_, u32, Cell> {
        self.cells.values()
    }
}

impl<'a> IntoIterator for &'a CellRegistry {
    type Item = &'a Cell;
    type IntoIter = Values<'a, u32, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_does_not_create() {
        let mut cells = CellRegistry::new();
        assert!(cells.get(5).is_none());
        assert!(cells.get_mut(5).is_none());
        assert!(cells.is_empty());

        cells.entry(5);
        assert!(cells.contains(5));
        assert_eq!(cells.len(), 1);
    }

    #[test]
    fn ordered_iteration() {
        let mut cells = CellRegistry::new();
        for n in [30, 10, 20] {
            cells.entry(n);
        }

        let order: Vec<u32> = cells.iter().map(|c| c.number).collect();
        assert_eq!(order, vec![10, 20, 30]);
    }
}
