//! Write operations for extracted cell data

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::core::{CellRegistry, KeffCycle};
use crate::error::Result;

// outp modules
use outp_utils::{f, ValueExt};

// external crates
use log::{debug, warn};
use serde::Deserialize;

/// Column headings of the tabulated cell results
pub const CELL_TABLE_HEADER: [&str; 6] = [
    "Cell Number",
    "X",
    "Y",
    "Z",
    "Cell Flux",
    "Standard Deviation",
];

/// Column headings of the keff cycle table
pub const KEFF_TABLE_HEADER: [&str; 3] = ["Cycle", "Keff", "Standard Deviation"];

/// Write the tabulated cell results to a CSV file
///
/// Every cell with both a flux and a location is written as
///
/// ```text
/// Cell Number,X,Y,Z,Cell Flux,Standard Deviation
/// 10,0.00000E+00,0.00000E+00,0.00000E+00,1.23000E-02,1.00000E-02
/// ```
///
/// with all values in the fixed `d.dddddE±XX` scientific format. Cells that
/// are missing either are left out with a warning.
///
/// Returns the number of cells written.
pub fn write_cell_table<P: AsRef<Path>>(cells: &CellRegistry, path: P) -> Result<usize> {
    write_cell_table_to(cells, init_writer(path)?)
}

/// Write the tabulated cell results to anything implementing [Write]
///
/// See [write_cell_table()] for details.
pub fn write_cell_table_to<W: Write>(cells: &CellRegistry, writer: W) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(CELL_TABLE_HEADER)?;

    let mut written = 0;
    for cell in cells {
        let Some(([x, y, z], flux)) = cell.location_and_flux() else {
            if cell.location.is_none() {
                warn!("  Cell {:>3} does not have location data", cell.number);
            }
            if cell.flux.is_none() {
                warn!("  Cell {:>3} does not have flux data", cell.number);
            }
            warn!("  Did not write cell {} due to missing data", cell.number);
            continue;
        };

        writer.write_record([
            f!("{}", cell.number),
            x.sci_upper(5, 2),
            y.sci_upper(5, 2),
            z.sci_upper(5, 2),
            flux.value.sci_upper(5, 2),
            flux.std_dev.sci_upper(5, 2),
        ])?;
        written += 1;
    }

    writer.flush()?;
    debug!("Wrote {written} of {} cells", cells.len());
    Ok(written)
}

/// Single row of a tabulated cell results file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CellRow {
    /// Cell number
    #[serde(rename = "Cell Number")]
    pub number: u32,
    /// x coordinate of the cell centre
    #[serde(rename = "X")]
    pub x: f64,
    /// y coordinate of the cell centre
    #[serde(rename = "Y")]
    pub y: f64,
    /// z coordinate of the cell centre
    #[serde(rename = "Z")]
    pub z: f64,
    /// Flux tally result
    #[serde(rename = "Cell Flux")]
    pub flux: f64,
    /// Relative standard deviation on the flux
    #[serde(rename = "Standard Deviation")]
    pub std_dev: f64,
}

/// Read a tabulated cell results file back in
///
/// This is the table written by [write_cell_table()], and is what anything
/// plotting the cell results will want to consume.
pub fn read_cell_table<P: AsRef<Path>>(path: P) -> Result<Vec<CellRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<CellRow>, csv::Error>>()?;
    Ok(rows)
}

/// Name of a cell table, adding the `.csv` extension if it is missing
///
/// ```rust
/// # use outp_report::cell_table_name;
/// assert_eq!(cell_table_name("run1_o"), "run1_o.csv");
/// assert_eq!(cell_table_name("run1_o.csv"), "run1_o.csv");
/// ```
pub fn cell_table_name(name: &str) -> String {
    if name.ends_with(".csv") {
        name.to_string()
    } else {
        f!("{name}.csv")
    }
}

/// Write every cell to a human readable text file
///
/// Unlike the tabulated results, all cells are written whether or not they
/// are complete, in ascending cell number.
///
/// ```text
/// Cell number:  10
///   Center of cell: (0.00000E+00,0.00000E+00,0.00000E+00)
///   Cell Flux: 1.23000E-02 +/- 0.0100
///   Material : 1
/// ```
pub fn write_cells<P: AsRef<Path>>(cells: &CellRegistry, path: P) -> Result<()> {
    let mut writer = init_writer(path)?;
    for cell in cells {
        writeln!(writer, "{cell}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write every cell to a JSON file
///
/// This is a direct serialisation of each [Cell](crate::Cell) as a list, in
/// ascending cell number.
pub fn write_json<P: AsRef<Path>>(cells: &CellRegistry, path: P) -> Result<()> {
    let writer = init_writer(path)?;
    serde_json::to_writer_pretty(writer, &cells.iter().collect::<Vec<_>>())?;
    Ok(())
}

/// Write the active keff cycle table to a CSV file
pub fn write_keff_cycles<P: AsRef<Path>>(cycles: &[KeffCycle], path: P) -> Result<()> {
    let mut writer = csv::Writer::from_writer(init_writer(path)?);
    writer.write_record(KEFF_TABLE_HEADER)?;
    for c in cycles {
        writer.write_record([f!("{}", c.cycle), f!("{}", c.keff), f!("{}", c.std_dev)])?;
    }
    writer.flush()?;
    Ok(())
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Flux;

    fn registry() -> CellRegistry {
        let mut cells = CellRegistry::new();

        let cell = cells.entry(10);
        cell.flux = Some(Flux::new(1.23e-2, 0.01));
        cell.location = Some([0.0, 1.5, -2.0]);

        // flux but no location
        cells.entry(11).flux = Some(Flux::new(4.56e-2, 0.02));

        // location but no flux
        cells.entry(12).location = Some([1.0, 1.0, 1.0]);
        cells
    }

    #[test]
    fn only_complete_cells_are_tabulated() {
        let mut buffer = Vec::new();
        let written = write_cell_table_to(&registry(), &mut buffer).unwrap();
        assert_eq!(written, 1);

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "Cell Number,X,Y,Z,Cell Flux,Standard Deviation\n\
             10,0.00000E+00,1.50000E+00,-2.00000E+00,1.23000E-02,1.00000E-02\n"
        );
    }

    #[test]
    fn empty_registry_writes_header() {
        let mut buffer = Vec::new();
        assert_eq!(write_cell_table_to(&CellRegistry::new(), &mut buffer).unwrap(), 0);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Cell Number,X,Y,Z,Cell Flux,Standard Deviation\n"
        );
    }

    #[test]
    fn text_listing_includes_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cells.txt");
        write_cells(&registry(), &path).unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text.matches("Cell number:").count(), 3);
        assert!(text.contains("Cell Flux: 4.56000E-02 +/- 0.0200"));
    }

    #[test]
    fn json_listing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cells.json");
        write_json(&registry(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[0]["number"], 10);
        assert_eq!(value[1]["location"], serde_json::Value::Null);
    }

    #[test]
    fn keff_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keff.csv");
        let cycles = [KeffCycle {
            cycle: 16,
            keff: 1.00104,
            std_dev: 0.00231,
        }];
        write_keff_cycles(&cycles, &path).unwrap();

        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "Cycle,Keff,Standard Deviation\n16,1.00104,0.00231\n"
        );
    }
}
