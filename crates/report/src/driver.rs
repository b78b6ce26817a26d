//! Process a single output from file to tabulated results

// standard library
use std::path::PathBuf;

// crate modules
use crate::error::Result;
use crate::location::attach_locations;
use crate::options::ProcessOptions;
use crate::writer::write_cell_table;
use crate::Report;

// external crates
use log::{debug, info, warn};

/// Result code of processing a single output
///
/// The numeric codes are kept for anything expecting the legacy values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The output could not be opened or read
    Inaccessible,
    /// The output was read but contains no flux tally
    NoTallyData,
    /// Cell table written
    Success,
}

impl Status {
    /// Legacy integer code
    ///
    /// | Status         | Code |
    /// | -------------- | ---- |
    /// | `Inaccessible` |  0   |
    /// | `NoTallyData`  | -1   |
    /// | `Success`      |  1   |
    pub fn code(&self) -> i8 {
        match self {
            Self::Inaccessible => 0,
            Self::NoTallyData => -1,
            Self::Success => 1,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Inaccessible => "inaccessible",
            Self::NoTallyData => "no tally data",
            Self::Success => "success",
        };
        write!(f, "{s}")
    }
}

/// Everything produced by processing a single output
#[derive(Debug)]
pub enum Outcome {
    /// Could not read the output, nothing was written
    Inaccessible,
    /// No flux tally found, nothing was written
    NoTallyData(Report),
    /// Cell table written to `table`
    Success {
        /// Full parsed output, including locations where found
        report: Report,
        /// Path to the cell table
        table: PathBuf,
        /// Number of cells written to the table
        written: usize,
    },
}

impl Outcome {
    /// Result code for the outcome
    pub fn status(&self) -> Status {
        match self {
            Self::Inaccessible => Status::Inaccessible,
            Self::NoTallyData(_) => Status::NoTallyData,
            Self::Success { .. } => Status::Success,
        }
    }

    /// Parsed output, if the file could be read at all
    pub fn report(&self) -> Option<&Report> {
        match self {
            Self::Inaccessible => None,
            Self::NoTallyData(report) => Some(report),
            Self::Success { report, .. } => Some(report),
        }
    }
}

/// Process the output `name` found in the reports directory
///
/// 1. Read and parse the output, giving up as [Status::Inaccessible] if the
///    file can not be read
/// 2. Give up as [Status::NoTallyData] if no type 4 flux tally was found
/// 3. Attach any cell locations from the side file
/// 4. Write `<csv dir>/<name>.csv` with every cell that has both a flux and
///    a location
///
/// Content problems never fail. An `Err` is only returned when the cell table
/// itself can not be written.
///
/// ```rust, no_run
/// # use outp_report::{process_report, ProcessOptions, Status};
/// let options = ProcessOptions::new("path/to/study");
/// let outcome = process_report("f5000_o", &options).unwrap();
///
/// if outcome.status() == Status::Success {
///     let summary = &outcome.report().unwrap().summary;
///     println!("keff = {:?}", summary.final_eigenvalue);
/// }
/// ```
pub fn process_report(name: &str, options: &ProcessOptions) -> Result<Outcome> {
    info!("Processing: {name}");
    let path = options.report_path(name);

    let mut report = match Report::from_file(&path) {
        Ok(report) => report,
        Err(e) => {
            warn!("  Could not open {}: {e}", path.display());
            return Ok(Outcome::Inaccessible);
        }
    };

    if !report.has_tally_data() {
        warn!("  No flux tally data found in {name}");
        return Ok(Outcome::NoTallyData(report));
    }

    let status = attach_locations(options, &mut report.cells);
    debug!("  Locations: {status:?}");

    std::fs::create_dir_all(options.csv_path())?;
    let table = options.table_path(name);
    let written = write_cell_table(&report.cells, &table)?;
    info!("  Wrote {written} cells to {}", table.display());

    Ok(Outcome::Success {
        report,
        table,
        written,
    })
}
