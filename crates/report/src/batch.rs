//! Process every output listed for a study
//!
//! The list of outputs is a plain text file with one name per line. Only the
//! first whitespace separated token is used, so anything after the name can
//! be used for notes.
//!
//! ```text
//! f1000_o    forward, 1000 per cycle
//! f5000_o
//! a1000_o    adjoint
//! ```

// standard library
use std::path::Path;

// crate modules
use crate::driver::{process_report, Outcome};
use crate::error::{Error, Result};
use crate::options::ProcessOptions;
use crate::summary::{SummaryRecord, SummaryWriter};

// outp modules
use outp_utils::f;

// external crates
use kdam::{Bar, BarBuilder, BarExt};
use log::{debug, error, info};

/// Read the names of outputs from a list file
///
/// Fails if the file can not be read, or if there is not a single name in it.
pub fn read_output_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    debug!("Reading output list {}", path.display());

    let names = std::fs::read_to_string(path)?
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect::<Vec<String>>();

    if names.is_empty() {
        return Err(Error::EmptyOutputList(path.display().to_string()));
    }

    Ok(names)
}

/// Names of outputs sorted by how processing went
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BatchReport {
    /// Cell tables written and summary rows added
    pub passed: Vec<String>,
    /// Read, but no flux tally data found
    pub no_tally: Vec<String>,
    /// Could not be opened
    pub inaccessible: Vec<String>,
    /// Parsed fine, but the results could not be written
    pub failed: Vec<String>,
}

impl BatchReport {
    /// Total number of outputs processed
    pub fn total(&self) -> usize {
        self.passed.len() + self.no_tally.len() + self.inaccessible.len() + self.failed.len()
    }

    /// Check if every output was successful
    pub fn all_passed(&self) -> bool {
        self.passed.len() == self.total()
    }
}

impl std::fmt::Display for BatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let groups = [
            ("Cell data was not found in", &self.no_tally),
            ("Could not access", &self.inaccessible),
            ("Unable to write results for", &self.failed),
        ];

        writeln!(f, "{} of {} outputs processed", self.passed.len(), self.total())?;
        for (heading, names) in groups.iter().filter(|(_, names)| !names.is_empty()) {
            writeln!(f, "{heading}:")?;
            let options = textwrap::Options::new(80)
                .initial_indent("  ")
                .subsequent_indent("  ");
            writeln!(f, "{}", textwrap::fill(&names.join(" "), options))?;
        }
        Ok(())
    }
}

/// Runs the single output driver over a whole study
///
/// ```rust, no_run
/// # use outp_report::{BatchRunner, ProcessOptions};
/// let mut runner = BatchRunner::new(ProcessOptions::new("path/to/study"));
/// runner.disable_progress();
///
/// let batch = runner.run().unwrap();
/// println!("{batch}");
/// ```
#[derive(Debug, Clone)]
pub struct BatchRunner {
    options: ProcessOptions,
    disable_progress: bool,
}

impl BatchRunner {
    /// Runner for the study layout in `options`
    pub fn new(options: ProcessOptions) -> Self {
        Self {
            options,
            disable_progress: false,
        }
    }

    /// Do not print the tqdm progress indicators
    pub fn disable_progress(&mut self) {
        self.disable_progress = true;
    }

    /// Layout of the study being processed
    pub fn options(&self) -> &ProcessOptions {
        &self.options
    }

    /// Process every listed output, writing the summary table as it goes
    ///
    /// Only failing to read the list or create the summary file is an error.
    /// Any problem with an individual output is recorded in the returned
    /// [BatchReport] and processing moves on to the next.
    pub fn run(&self) -> Result<BatchReport> {
        let names = read_output_list(self.options.outputs_list_path())?;
        info!("Found {} outputs to process", names.len());

        std::fs::create_dir_all(self.options.csv_path())?;
        let summary_path = self.options.summary_path();
        let mut summary = SummaryWriter::create(&summary_path)?;

        let mut progress_bar = self.init_progress_bar(names.len())?;
        if !self.disable_progress {
            progress_bar.refresh()?;
        }

        let mut batch = BatchReport::default();
        for name in names {
            match process_report(&name, &self.options) {
                Ok(Outcome::Success { report, .. }) => {
                    summary.write(&SummaryRecord::new(&name, &report.summary))?;
                    batch.passed.push(name);
                }
                Ok(Outcome::NoTallyData(_)) => batch.no_tally.push(name),
                Ok(Outcome::Inaccessible) => batch.inaccessible.push(name),
                Err(e) => {
                    error!("  Failed to write results for {name}: {e}");
                    batch.failed.push(name);
                }
            }
            progress_bar.update(1)?;
        }

        summary.finish()?;
        info!("Summary written to {}", summary_path.display());
        Ok(batch)
    }

    /// Initialise the progress bar, if wanted
    fn init_progress_bar(&self, total: usize) -> Result<Bar> {
        BarBuilder::default()
            .total(total)
            .unit(" outputs")
            .disable(self.disable_progress)
            .build()
            .map_err(|e| Error::ProgressBar(f!("{e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_token_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outputs.txt");
        std::fs::write(&path, "f1000_o  forward\n\n   \na1000_o\n").unwrap();

        assert_eq!(read_output_list(&path).unwrap(), vec!["f1000_o", "a1000_o"]);
    }

    #[test]
    fn empty_list_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outputs.txt");
        std::fs::write(&path, "\n  \n").unwrap();

        assert!(matches!(
            read_output_list(&path),
            Err(Error::EmptyOutputList(_))
        ));
    }

    #[test]
    fn display_lists_problem_outputs() {
        let batch = BatchReport {
            passed: vec!["f1000_o".into()],
            no_tally: vec![],
            inaccessible: vec!["missing_o".into(), "gone_o".into()],
            failed: vec![],
        };

        assert_eq!(
            batch.to_string(),
            "1 of 3 outputs processed\nCould not access:\n  missing_o gone_o\n"
        );
        assert!(!batch.all_passed());
    }
}
