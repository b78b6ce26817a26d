//! Run directory layout

// standard library
use std::path::{Path, PathBuf};

// outp modules
use outp_utils::f;

/// Where to find outputs and where to put the tables
///
/// Defaults follow the usual layout of a study directory:
///
/// ```text
/// <run dir>/
/// ├── outputs.txt      list of output names
/// ├── locations.txt    optional cell centres
/// ├── mcnp_o/          MCNP output files
/// └── csv/             cell tables and summary.csv
/// ```
///
/// ```rust
/// # use outp_report::ProcessOptions;
/// # use std::path::Path;
/// let mut options = ProcessOptions::new("study");
/// options.set_csv_dir("tables");
///
/// assert_eq!(options.report_path("run1_o"), Path::new("study/mcnp_o/run1_o"));
/// assert_eq!(options.table_path("run1_o"), Path::new("study/tables/run1_o.csv"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOptions {
    run_dir: PathBuf,
    reports_dir: String,
    csv_dir: String,
    locations_file: String,
    outputs_list: String,
    summary_file: String,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            run_dir: PathBuf::from("."),
            reports_dir: "mcnp_o".to_string(),
            csv_dir: "csv".to_string(),
            locations_file: "locations.txt".to_string(),
            outputs_list: "outputs.txt".to_string(),
            summary_file: "summary.csv".to_string(),
        }
    }
}

impl ProcessOptions {
    /// Default layout rooted at `run_dir`
    pub fn new<P: AsRef<Path>>(run_dir: P) -> Self {
        Self {
            run_dir: run_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Change the subdirectory holding the MCNP outputs ('mcnp_o' default)
    pub fn set_reports_dir(&mut self, name: &str) {
        self.reports_dir = name.to_string();
    }

    /// Change the subdirectory for generated tables ('csv' default)
    pub fn set_csv_dir(&mut self, name: &str) {
        self.csv_dir = name.to_string();
    }

    /// Change the name of the location side file ('locations.txt' default)
    pub fn set_locations_file(&mut self, name: &str) {
        self.locations_file = name.to_string();
    }

    /// Change the name of the list of outputs ('outputs.txt' default)
    pub fn set_outputs_list(&mut self, name: &str) {
        self.outputs_list = name.to_string();
    }

    /// Base directory of the run
    pub fn run_dir(&self) -> &Path {
        &self.run_dir
    }

    /// Directory containing the MCNP outputs
    pub fn reports_path(&self) -> PathBuf {
        self.run_dir.join(&self.reports_dir)
    }

    /// Directory for generated tables
    pub fn csv_path(&self) -> PathBuf {
        self.run_dir.join(&self.csv_dir)
    }

    /// Full path to the output file `name`
    pub fn report_path(&self, name: &str) -> PathBuf {
        self.reports_path().join(name)
    }

    /// Full path to the cell table generated for output `name`
    pub fn table_path(&self, name: &str) -> PathBuf {
        self.csv_path().join(f!("{name}.csv"))
    }

    /// Full path to the list of outputs in a batch
    pub fn outputs_list_path(&self) -> PathBuf {
        self.run_dir.join(&self.outputs_list)
    }

    /// Full path to the batch summary table
    pub fn summary_path(&self) -> PathBuf {
        self.csv_path().join(&self.summary_file)
    }

    /// Candidate locations of the side file, in the order they are searched
    ///
    /// The run directory is always checked before the outputs directory.
    pub fn location_candidates(&self) -> [PathBuf; 2] {
        [
            self.run_dir.join(&self.locations_file),
            self.reports_path().join(&self.locations_file),
        ]
    }
}
