//! Batch summary table of run metrics
//!
//! Every successfully processed output contributes a single headerless row to
//! `summary.csv`:
//!
//! ```text
//! name,particles per cycle,final keff,keff std dev,run time (minutes)
//! ```
//!
//! Metrics that were not found are left as empty fields.

// standard library
use std::io::Write;
use std::path::Path;

// crate modules
use crate::core::RunSummary;
use crate::error::Result;

// external crates
use log::{trace, warn};
use serde::{Deserialize, Serialize};

/// Single row of the summary table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Name of the output as given in the batch list
    pub name: String,
    /// Number of source particles per cycle
    pub particles_per_cycle: Option<u64>,
    /// Final combined keff estimate
    pub final_eigenvalue: Option<String>,
    /// Standard deviation on the final keff estimate
    pub eigenvalue_std_dev: Option<String>,
    /// Total computer time (minutes)
    pub run_time_minutes: Option<String>,
}

impl SummaryRecord {
    /// Summary row for the output `name`
    pub fn new(name: &str, summary: &RunSummary) -> Self {
        Self {
            name: name.to_string(),
            particles_per_cycle: summary.particles_per_cycle,
            final_eigenvalue: summary.final_eigenvalue.clone(),
            eigenvalue_std_dev: summary.eigenvalue_std_dev.clone(),
            run_time_minutes: summary.run_time_minutes.clone(),
        }
    }
}

/// Writes summary rows as they become available
///
/// Rows are flushed by [SummaryWriter::finish()], or on drop of the inner
/// writer.
pub struct SummaryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl SummaryWriter<std::fs::File> {
    /// Create (or truncate) the summary file at `path`
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        Ok(Self { writer })
    }
}

impl<W: Write> SummaryWriter<W> {
    /// Summary rows written to anything implementing [Write]
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(writer),
        }
    }

    /// Append a single row
    pub fn write(&mut self, record: &SummaryRecord) -> Result<()> {
        trace!("Summary row for {}", record.name);
        self.writer.serialize(record)?;
        Ok(())
    }

    /// Flush everything written so far
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Write a complete summary table to `path`
pub fn write_summary<P: AsRef<Path>>(records: &[SummaryRecord], path: P) -> Result<()> {
    let mut writer = SummaryWriter::create(path)?;
    for record in records {
        writer.write(record)?;
    }
    writer.finish()
}

/// Read every row of a summary table
pub fn read_summary<P: AsRef<Path>>(path: P) -> Result<Vec<SummaryRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    let records = reader
        .deserialize()
        .collect::<std::result::Result<Vec<SummaryRecord>, csv::Error>>()?;
    Ok(records)
}

/// Metrics of a related set of runs, ready for plotting against each other
///
/// All four lists are always the same length, and the same index refers to
/// the same run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunSeries {
    /// Names of the runs in the series
    pub names: Vec<String>,
    /// Number of source particles per cycle
    pub particles: Vec<u64>,
    /// Final combined keff estimates
    pub eigenvalues: Vec<f64>,
    /// Standard deviations on the final keff
    pub std_devs: Vec<f64>,
    /// Computer time (minutes)
    pub run_times: Vec<f64>,
}

impl RunSeries {
    /// Number of runs in the series
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the series has no runs
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Add a run, provided every metric is known and numeric
    fn push(&mut self, record: &SummaryRecord) -> bool {
        let number = |text: &Option<String>| text.as_deref().and_then(|t| t.parse::<f64>().ok());
        let (Some(nps), Some(keff), Some(sd), Some(time)) = (
            record.particles_per_cycle,
            number(&record.final_eigenvalue),
            number(&record.eigenvalue_std_dev),
            number(&record.run_time_minutes),
        ) else {
            return false;
        };

        self.names.push(record.name.clone());
        self.particles.push(nps);
        self.eigenvalues.push(keff);
        self.std_devs.push(sd);
        self.run_times.push(time);
        true
    }
}

/// Split summary rows into the forward and adjoint series
///
/// Run names starting with `f` are forward runs, and those starting with `a`
/// are adjoint runs. Anything else is bad data and is skipped, as are rows
/// missing any of the metrics.
///
/// ```rust
/// # use outp_report::{split_series, SummaryRecord, RunSummary};
/// let summary = RunSummary {
///     particles_per_cycle: Some(5000),
///     final_eigenvalue: Some("1.00200".into()),
///     eigenvalue_std_dev: Some("0.00050".into()),
///     run_time_minutes: Some("12.30".into()),
/// };
///
/// let records = [
///     SummaryRecord::new("f5000_o", &summary),
///     SummaryRecord::new("a5000_o", &summary),
///     SummaryRecord::new("x5000_o", &summary),
/// ];
///
/// let (forward, adjoint) = split_series(&records);
/// assert_eq!(forward.names, vec!["f5000_o"]);
/// assert_eq!(adjoint.particles, vec![5000]);
/// ```
pub fn split_series(records: &[SummaryRecord]) -> (RunSeries, RunSeries) {
    let mut forward = RunSeries::default();
    let mut adjoint = RunSeries::default();

    for record in records {
        let series = match record.name.chars().next() {
            Some('f') => &mut forward,
            Some('a') => &mut adjoint,
            _ => {
                warn!("Bad data found in summary: {record:?}");
                continue;
            }
        };

        if !series.push(record) {
            warn!("Incomplete summary row for {}", record.name);
        }
    }

    (forward, adjoint)
}

/// Run name from the path of an output file
///
/// MCNP names outputs by appending `o` to the run name, so this strips the
/// trailing `_o` or `o` from the file name.
///
/// ```rust
/// # use outp_report::run_name;
/// assert_eq!(run_name("runs/mcnp_o/f5000_o"), "f5000");
/// assert_eq!(run_name("runs/mcnp_o/inpo"), "inp");
/// assert_eq!(run_name("runs/mcnp_o/output"), "output");
/// ```
pub fn run_name<P: AsRef<Path>>(path: P) -> String {
    let name = path
        .as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    name.strip_suffix("_o")
        .or_else(|| name.strip_suffix('o'))
        .unwrap_or(&name)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, nps: Option<u64>) -> SummaryRecord {
        SummaryRecord {
            name: name.to_string(),
            particles_per_cycle: nps,
            final_eigenvalue: Some("1.00000".to_string()),
            eigenvalue_std_dev: Some("0.00050".to_string()),
            run_time_minutes: Some("12.30".to_string()),
        }
    }

    #[test]
    fn rows_have_no_header() {
        let mut buffer = Vec::new();
        let mut writer = SummaryWriter::from_writer(&mut buffer);
        writer.write(&record("f5000_o", Some(5000))).unwrap();
        writer.write(&record("a5000_o", None)).unwrap();
        writer.finish().unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "f5000_o,5000,1.00000,0.00050,12.30\na5000_o,,1.00000,0.00050,12.30\n"
        );
    }

    #[test]
    fn read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        let records = vec![record("f5000_o", Some(5000)), record("a5000_o", None)];

        write_summary(&records, &path).unwrap();
        assert_eq!(read_summary(&path).unwrap(), records);
    }

    #[test]
    fn incomplete_rows_are_skipped() {
        let records = [
            record("f1000_o", Some(1000)),
            record("f2000_o", None),
            record("a1000_o", Some(1000)),
            record("", Some(1000)),
        ];

        let (forward, adjoint) = split_series(&records);
        assert_eq!(forward.len(), 1);
        assert_eq!(adjoint.len(), 1);
        assert_eq!(forward.eigenvalues, vec![1.0]);
        assert_eq!(adjoint.run_times, vec![12.3]);
    }

    #[test]
    fn printed_metrics_reach_the_table_unchanged() {
        let report = crate::Report::from_text(
            "          9-       kcode 5000 1.0 15 115\n\
             \x20        col/abs/trk len    final result  1.00000   0.00050\n\
             \x20computer time =   12.30 minutes",
        );

        let mut buffer = Vec::new();
        let mut writer = SummaryWriter::from_writer(&mut buffer);
        writer.write(&SummaryRecord::new("f5000_o", &report.summary)).unwrap();
        writer.finish().unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "f5000_o,5000,1.00000,0.00050,12.30\n"
        );
    }
}
