//! Module for extracting cell tallies and run metrics from MCNP output files
//!
//! The MCNP output file is a long human readable report of everything in a
//! run. This crate pulls out the handful of sections needed to tabulate cell
//! flux results and compare criticality runs against one another.
//!
//! - [Report] - Primary data structure containing the parsed file data
//!
//! Everything extracted falls into one of the following:
//!
//! | Data             | Description                                          |
//! | ---------------- | ---------------------------------------------------- |
//! | [CellRegistry]   | volume, flux, material, and location of every cell   |
//! | [RunSummary]     | particles per cycle, final keff, and computer time   |
//! | [KeffCycle]      | keff estimate for every active cycle                 |
//!
//! Only type 4 (track length estimate of flux) tallies are considered. Cell
//! locations are never printed by MCNP, so are attached from an optional
//! side file of `cell x y z` rows (see [attach_locations()]).
//!
//! # Quickstart example
//!
//! Processing a single output into `csv/<name>.csv` follows the usual study
//! layout of [ProcessOptions].
//!
//! ```rust, no_run
//! # use outp_report::{process_report, ProcessOptions, Status};
//! let options = ProcessOptions::new("/path/to/study");
//! let outcome = process_report("f5000_o", &options).unwrap();
//!
//! match outcome.status() {
//!     Status::Success => println!("tabulated"),
//!     Status::NoTallyData => println!("nothing to tabulate"),
//!     Status::Inaccessible => println!("could not read the output"),
//! }
//! ```
//!
//! Or for direct access to the data:
//!
//! ```rust, no_run
//! # use outp_report::Report;
//! let report = Report::from_file("/path/to/f5000_o").unwrap();
//!
//! for cell in &report.cells {
//!     println!("{cell}");
//! }
//! ```
//!
//! # Batch processing
//!
//! A whole study of outputs listed in `outputs.txt` is processed by the
//! [BatchRunner], which also writes `csv/summary.csv` with one row of run
//! metrics per successful output.

mod batch;
mod core;
mod driver;
mod error;
mod location;
mod options;
mod parsers;
mod report;
mod summary;
mod writer;

pub mod reader;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use report::{read_keff_cycles, Report};

#[doc(inline)]
pub use crate::core::*;

#[doc(inline)]
pub use options::ProcessOptions;

#[doc(inline)]
pub use location::{
    attach_locations, find_location_file, merge_location_file, merge_locations, LocationStatus,
};

#[doc(inline)]
pub use writer::{
    cell_table_name, read_cell_table, write_cell_table, write_cell_table_to, write_cells,
    write_json, write_keff_cycles, CellRow, CELL_TABLE_HEADER, KEFF_TABLE_HEADER,
};

#[doc(inline)]
pub use summary::{
    read_summary, run_name, split_series, write_summary, RunSeries, SummaryRecord, SummaryWriter,
};

#[doc(inline)]
pub use driver::{process_report, Outcome, Status};

#[doc(inline)]
pub use batch::{read_output_list, BatchReport, BatchRunner};
