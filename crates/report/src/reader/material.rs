// crate modules
use crate::core::CellRegistry;
use crate::parsers::{token_i64, token_u32};
use crate::reader::Row;

// external crates
use log::trace;

/// Decode the cell/material print table into the registry
///
/// Each row is `[index, cell, material, density, ...]` and the table ends at
/// the first row that does not start with an integer, typically the `total`
/// row.
///
/// Void cells (material 0) are skipped and never create a cell. Any other
/// material is assigned to the cell, creating it if needed.
pub fn decode_materials(block: &[Row], cells: &mut CellRegistry) {
    for row in block {
        if row.first().and_then(|t| token_i64(t)).is_none() {
            trace!("  End of material table at {row:?}");
            break;
        }

        let (Some(number), Some(material)) = (
            row.get(1).and_then(|t| token_u32(t)),
            row.get(2).and_then(|t| token_u32(t)),
        ) else {
            trace!("  End of material table at malformed row {row:?}");
            break;
        };

        if material == 0 {
            continue;
        }

        trace!("  Cell {number:>6} material = {material}");
        cells.entry(number).material = Some(material);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(text: &str) -> Vec<Row> {
        text.lines()
            .map(|l| l.split_whitespace().collect::<Row>())
            .filter(|r| !r.is_empty())
            .collect()
    }

    #[test]
    fn void_cells_are_not_created() {
        let block = rows(
            "        1       10        1  7.06280E-02 1.00000E+00
                     2       11        0  0.00000E+00 0.00000E+00
                     3       12        2  1.00000E-01 1.00000E+00
                total                     5.00000E+00",
        );

        let mut cells = CellRegistry::new();
        decode_materials(&block, &mut cells);

        assert_eq!(cells.numbers(), vec![10, 12]);
        assert_eq!(cells.get(10).unwrap().material, Some(1));
        assert_eq!(cells.get(12).unwrap().material, Some(2));
        assert!(!cells.contains(11));
    }

    #[test]
    fn stops_at_first_non_integer_row() {
        let block = rows(
            "        1       10        1  7.06280E-02
                 minimum source weight = 1.0
                     2       11        3  1.00000E-01",
        );

        let mut cells = CellRegistry::new();
        decode_materials(&block, &mut cells);
        assert_eq!(cells.numbers(), vec![10]);
    }

    #[test]
    fn enriches_existing_cells() {
        let mut cells = CellRegistry::new();
        cells.entry(10).volume = Some(4.0);

        decode_materials(&rows("  1  10  7  1.0"), &mut cells);

        let cell = cells.get(10).unwrap();
        assert_eq!(cell.volume, Some(4.0));
        assert_eq!(cell.material, Some(7));
    }

    #[test]
    fn existing_void_cells_keep_no_material() {
        let mut cells = CellRegistry::new();
        cells.entry(11);

        decode_materials(&rows("  2  11  0  0.0"), &mut cells);
        assert_eq!(cells.get(11).unwrap().material, None);
    }
}
