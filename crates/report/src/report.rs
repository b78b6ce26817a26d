// Crate types
use crate::error::Result;
use crate::reader::Reader;
use crate::{CellRegistry, KeffCycle, RunSummary};

// Other libraries
use log::info;
use std::path::Path;

/// Data structure for everything extracted from an MCNP output file
///
/// The [Report] is the primary data structure containing the parsed file data.
/// Each one owns a fresh [CellRegistry], so parsing one file can never leak
/// into the results of another.
///
/// | Data          | Description                                              |
/// | ------------- | -------------------------------------------------------- |
/// | [CellRegistry]| volume, flux, material, and location of each cell        |
/// | [RunSummary]  | particles per cycle, final keff, and run time            |
/// | [KeffCycle]   | keff for every active cycle                              |
///
/// Note that the registry is only ever populated by type 4 flux tallies and
/// the cell/material print table. Locations are attached afterwards from a
/// side file (see [attach_locations()](crate::attach_locations)).
#[derive(Debug, Default, Clone)]
pub struct Report {
    /// Cell records referenced anywhere in the output
    pub cells: CellRegistry,
    /// Scalar run metrics
    pub summary: RunSummary,
    /// Active keff cycle table
    pub cycles: Vec<KeffCycle>,
    /// Number of flux tally blocks decoded
    pub tally_blocks: usize,
}

impl Report {
    /// Read an MCNP output file
    ///
    /// Parses the file at `path` into the [Report] data structure. The only
    /// failure is being unable to read the file, anything missing from the
    /// content is simply absent from the results.
    ///
    /// The `path` may be a [&str], [String], [Path], etc..
    ///
    /// Example
    /// ```rust, no_run
    /// # use outp_report::Report;
    /// let report = Report::from_file("path/to/outp").unwrap();
    /// println!("{} cells found", report.cells.len());
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Reading {}", path.as_ref().display());
        Ok(Reader::new(path)?.read())
    }

    /// Parse output text that is already in memory
    ///
    /// ```rust
    /// # use outp_report::Report;
    /// let report = Report::from_text("      5-       kcode 5000 1.0 15 115");
    /// assert_eq!(report.summary.particles_per_cycle, Some(5000));
    /// assert!(!report.has_tally_data());
    /// ```
    pub fn from_text(text: &str) -> Self {
        Reader::from_text(text).read()
    }

    /// Check if at least one flux tally block was found
    ///
    /// An output without one has nothing to tabulate, even when the cell
    /// material table is present.
    pub fn has_tally_data(&self) -> bool {
        self.tally_blocks > 0
    }
}

/// Read only the active keff cycle table from an MCNP output file
///
/// Returns the `(cycle, keff, std dev)` for every row of the first table of
/// active cycles. An output with no table gives an empty list.
///
/// ```rust, no_run
/// # use outp_report::read_keff_cycles;
/// let cycles = read_keff_cycles("path/to/outp").unwrap();
/// for c in cycles {
///     println!("{} {} {}", c.cycle, c.keff, c.std_dev);
/// }
/// ```
pub fn read_keff_cycles<P: AsRef<Path>>(path: P) -> Result<Vec<KeffCycle>> {
    Ok(Reader::new(path)?.read_cycles())
}
