// crate modules
use crate::core::{CellRegistry, Flux};
use crate::parsers::{token_f64, token_u32};
use crate::reader::Row;

// external crates
use log::{trace, warn};

/// Decode the rows of a type 4 flux tally block into the registry
///
/// Two kinds of rows are of interest, everything else is ignored:
///
/// ```text
///                    cell:       10           11          <- cell listing
///                          1.00000E+00  2.00000E+00       <- volumes
///
///  cell  10                                               <- single cell
///                  1.23000E-02 0.0100                     <- flux, rel. error
/// ```
///
/// Every cell number in a listing is created in the registry along with the
/// volume in the same column of the following row. Single cell rows assign
/// the flux and relative standard deviation from the first two values of the
/// following row, creating the cell if it does not already exist.
///
/// Rows that are cut short or contain junk are skipped with a warning.
pub fn decode_tally(block: &[Row], cells: &mut CellRegistry) {
    for (i, row) in block.iter().enumerate() {
        let next = block.get(i + 1);
        match row.first() {
            Some(&"cell:") => cell_listing(row, next, cells),
            Some(&"cell") => cell_result(row, next, cells),
            _ => continue,
        }
    }
}

/// Cells and volumes from a `cell:` listing row and the row beneath it
fn cell_listing(row: &Row, volumes: Option<&Row>, cells: &mut CellRegistry) {
    for (column, token) in row.iter().skip(1).enumerate() {
        let Some(number) = token_u32(token) else {
            warn!("  Skipping invalid cell number \"{token}\" in tally listing");
            continue;
        };

        let cell = cells.entry(number);
        match volumes.and_then(|v| v.get(column)).and_then(|v| token_f64(v)) {
            Some(volume) => {
                trace!("  Cell {number:>6} volume = {volume}");
                cell.volume = Some(volume)
            }
            None => warn!("  Cell {number} has no volume in the tally listing"),
        }
    }
}

/// Flux and relative error for the cell named in a `cell <n>` row
fn cell_result(row: &Row, values: Option<&Row>, cells: &mut CellRegistry) {
    let Some(number) = row.get(1).and_then(|n| token_u32(n)) else {
        warn!("  Skipping tally row with no valid cell number: {row:?}");
        return;
    };

    let flux = values.and_then(|v| {
        let value = v.first().and_then(|t| token_f64(t))?;
        let std_dev = v.get(1).and_then(|t| token_f64(t))?;
        Some(Flux::new(value, std_dev))
    });

    let cell = cells.entry(number);
    match flux {
        Some(flux) => {
            trace!("  Cell {number:>6} flux = {} +/- {}", flux.value, flux.std_dev);
            cell.flux = Some(flux)
        }
        None => warn!("  Cell {number} has no valid flux result beneath it"),
    }
}
