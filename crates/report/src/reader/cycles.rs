// crate modules
use crate::core::KeffCycle;
use crate::parsers::{is_active_cycles_marker, keff_cycle_row};

// external crates
use log::{debug, trace};

/// Progress through the table of active keff cycles
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    /// Looking for the `begin active keff cycles` marker
    #[default]
    Searching,
    /// Collecting rows until the first empty line
    InTable,
    /// Table finished, everything else is ignored
    Done,
}

/// Line-by-line state machine for the active keff cycle table
///
/// ```text
/// Searching --(marker)--> InTable --(empty line)--> Done
/// ```
///
/// While in the table, lines that do not look like a cycle row are silently
/// skipped. Only the first table in a file is collected.
///
/// ```rust
/// # use outp_report::reader::{CycleScanner, CycleState};
/// let mut scanner = CycleScanner::new();
/// scanner.feed("      1   0.99812 | ...");
/// assert_eq!(scanner.state(), CycleState::Searching);
///
/// scanner.feed(" cycle 15   begin active keff cycles");
/// scanner.feed("     16   0.99876 | 0.99912 | 0.99805 |   1.00104  0.00231");
/// scanner.feed("");
/// assert_eq!(scanner.state(), CycleState::Done);
///
/// let cycles = scanner.finish();
/// assert_eq!(cycles.len(), 1);
/// assert_eq!(cycles[0].keff, 1.00104);
/// ```
#[derive(Debug, Default)]
pub struct CycleScanner {
    state: CycleState,
    cycles: Vec<KeffCycle>,
}

impl CycleScanner {
    /// Create a new scanner in the [CycleState::Searching] state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of the scanner
    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Cycles collected so far
    pub fn cycles(&self) -> &[KeffCycle] {
        &self.cycles
    }

    /// Advance the state machine by a single line
    pub fn feed(&mut self, line: &str) {
        match self.state {
            CycleState::Searching => {
                if is_active_cycles_marker(line) {
                    debug!("Found active keff cycles");
                    self.state = CycleState::InTable;
                }
            }
            CycleState::InTable => {
                if line.is_empty() {
                    debug!("Cycles      = {}", self.cycles.len());
                    self.state = CycleState::Done;
                } else if let Ok((_, cycle)) = keff_cycle_row(line) {
                    trace!("  {cycle:?}");
                    self.cycles.push(cycle);
                }
            }
            CycleState::Done => (),
        }
    }

    /// Consume the scanner and return every cycle collected
    ///
    /// A file that ends without an empty line simply ends the table.
    pub fn finish(self) -> Vec<KeffCycle> {
        self.cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(lines: &[&str]) -> CycleScanner {
        let mut scanner = CycleScanner::new();
        for line in lines {
            scanner.feed(line);
        }
        scanner
    }

    #[test]
    fn nothing_without_marker() {
        let scanner = scan(&["     16   0.99876 | a | b |   1.00104  0.00231"]);
        assert_eq!(scanner.state(), CycleState::Searching);
        assert!(scanner.cycles().is_empty());
    }

    #[test]
    fn skips_junk_rows_inside_table() {
        let scanner = scan(&[
            " xx begin active keff cycles",
            " cycle  k(col) | k(trk) | k(abs) |  keff  std",
            "     16   0.99876 | a | b |   1.00104  0.00231",
            "  warning. something odd happened",
            "     17   0.99801 | a | b |   1.00021  0.00198",
        ]);

        assert_eq!(scanner.state(), CycleState::InTable);
        let cycles = scanner.finish();
        assert_eq!(
            cycles.iter().map(|c| c.cycle).collect::<Vec<_>>(),
            vec![16, 17]
        );
        assert_eq!(cycles[1].std_dev, 0.00198);
    }

    #[test]
    fn ignores_everything_after_table() {
        let scanner = scan(&[
            " xx begin active keff cycles",
            "     16   0.99876 | a | b |   1.00104  0.00231",
            "",
            "     17   0.99801 | a | b |   1.00021  0.00198",
            " xx begin active keff cycles",
            "     18   0.99801 | a | b |   1.00021  0.00198",
        ]);

        assert_eq!(scanner.state(), CycleState::Done);
        assert_eq!(scanner.cycles().len(), 1);
    }

    #[test]
    fn whitespace_rows_do_not_end_table() {
        let scanner = scan(&[
            " xx begin active keff cycles",
            "     16   0.99876 | a | b |   1.00104  0.00231",
            "      ",
            "     17   0.99801 | a | b |   1.00021  0.00198",
        ]);

        assert_eq!(scanner.state(), CycleState::InTable);
        assert_eq!(scanner.finish().len(), 2);
    }
}
