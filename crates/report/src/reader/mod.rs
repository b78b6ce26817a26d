//! Block extraction and section decoders for MCNP output files
//!
//! Everything here is driven by [Report::from_file()](crate::Report), which
//! makes a single forward pass over the lines of an output. The building
//! blocks are public for anyone wanting finer control, or to run a decoder
//! over text from somewhere else.
//!
//! | Function / type      | Purpose                                           |
//! | -------------------- | ------------------------------------------------- |
//! | [extract_block()]    | slice out token rows following a section header   |
//! | [decode_tally()]     | cell volumes and fluxes from a type 4 tally       |
//! | [decode_materials()] | non-void material assignments                     |
//! | [CycleScanner]       | active keff cycle table state machine             |

mod block;
mod cycles;
mod material;
mod tally;

// re-exports for clean API + documentation
#[doc(inline)]
pub use block::{extract_block, Row};

#[doc(inline)]
pub use cycles::{CycleScanner, CycleState};

#[doc(inline)]
pub use material::decode_materials;

#[doc(inline)]
pub use tally::decode_tally;

// standard library
use std::path::Path;

// crate modules
use crate::core::{CellRegistry, RunSummary};
use crate::error::Result;
use crate::parsers::{classify_line, Line};
use crate::Report;

// external crates
use log::{debug, trace};

/// Internal reader for MCNP output files
pub(crate) struct Reader {
    lines: Vec<String>,
}

// ! Internal API
impl Reader {
    /// Read the whole file at `path` into memory
    ///
    /// Outputs are not guaranteed to be clean UTF-8, so anything invalid is
    /// replaced rather than failing the whole file.
    pub(crate) fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self::from_text(&String::from_utf8_lossy(&bytes)))
    }

    /// Reader over text that is already in memory
    pub(crate) fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Parse the output in a single forward pass
    pub(crate) fn read(&self) -> Report {
        let mut cells = CellRegistry::new();
        let mut summary = RunSummary::default();
        let mut scanner = CycleScanner::new();
        let mut tally_blocks = 0;

        for (idx, line) in self.lines.iter().enumerate() {
            scanner.feed(line);

            match classify_line(line, summary.particles_per_cycle.is_none()) {
                Line::FluxTally => {
                    debug!("-----------------------------");
                    debug!(" Parsing flux tally (line {}) ", idx + 1);
                    debug!("-----------------------------");
                    decode_tally(&extract_block(&self.lines, idx), &mut cells);
                    tally_blocks += 1;
                }
                Line::Material => {
                    debug!("-----------------------------");
                    debug!(" Parsing materials (line {}) ", idx + 1);
                    debug!("-----------------------------");
                    decode_materials(&extract_block(&self.lines, idx), &mut cells);
                }
                Line::ComputerTime(minutes) => {
                    trace!("Run time    = {minutes}");
                    summary.run_time_minutes = Some(minutes.to_string());
                }
                Line::Kcode(nps) => {
                    debug!("NPS/cycle   = {nps}");
                    summary.particles_per_cycle = Some(nps);
                }
                Line::FinalResult(keff, std_dev) => {
                    trace!("Final keff  = {keff} +/- {std_dev}");
                    summary.final_eigenvalue = Some(keff.to_string());
                    summary.eigenvalue_std_dev = Some(std_dev.to_string());
                }
                Line::Other => (),
            }
        }

        debug!("Tallies     = {tally_blocks}");
        debug!("Cells       = {}", cells.len());
        debug!("Summary     = {summary:?}");

        Report {
            cells,
            summary,
            cycles: scanner.finish(),
            tally_blocks,
        }
    }

    /// Only run the keff cycle state machine, stopping once the table is done
    pub(crate) fn read_cycles(&self) -> Vec<crate::KeffCycle> {
        let mut scanner = CycleScanner::new();
        for line in &self.lines {
            scanner.feed(line);
            if scanner.state() == CycleState::Done {
                break;
            }
        }
        scanner.finish()
    }
}
