//! Command line tool to tabulate MCNP output files
//!
//! Extracts cell flux tallies and criticality run metrics from MCNP output
//! files into CSV tables ready for plotting.
//!
//! # Usage
//!
//! ```text
//! Usage: outp <command> [options]
//! ```
//!
//! Help is printed with the `-h` flag, and `--help` will show examples, default
//! values, examples, and any important behaviour.
//!
//! ## Commands
//!
//! ### > summary
//!
//! Process every output listed in `outputs.txt`, writing a cell table for
//! each along with `csv/summary.csv`.
//!
//! ```bash
//! # Process the study in the current directory
//! outp summary
//!
//! # Process a study elsewhere, with outputs in "runs/"
//! outp summary --run-dir /path/to/study --reports runs
//! ```
//!
//! ### > cells
//!
//! Process a single output, optionally dumping every cell found to a text
//! listing or JSON.
//!
//! ```bash
//! outp cells f5000_o --text --json
//! ```
//!
//! ### > keff
//!
//! Write the active keff cycle table of one or two outputs to CSV.
//!
//! ```bash
//! outp keff mcnp_o/f5000_o mcnp_o/a5000_o
//! ```

// standard libraries
use std::path::PathBuf;

// crate modules
use outp::report::{
    process_report, read_keff_cycles, run_name, write_cells, write_json, write_keff_cycles,
    BatchRunner, Outcome, ProcessOptions, Result,
};
use outp::utils::f;

// external crates
use clap::{arg, Args, Parser, Subcommand};
use log::*;

#[doc(hidden)]
fn main() -> Result<()> {
    // set up the command line interface and match arguments
    let cli: Cli = Cli::parse();

    // set up logging (+2 to make 'Info' the default)
    let verbosity = cli.verbose as usize + 2;
    logging_init(verbosity, cli.quiet);

    match &cli.command {
        Command::Summary { layout, no_progress } => summary(layout, *no_progress),
        Command::Cells {
            name,
            layout,
            text,
            json,
        } => cells(name, layout, *text, *json),
        Command::Keff { outputs, output } => keff(outputs, output.as_ref()),
    }
}

/// Tabulate cell tallies and run metrics from MCNP outputs
///
/// Only type 4 track length flux tallies are considered. Cell centres are
/// never printed by MCNP, so are taken from an optional `locations.txt` of
/// `cell x y z` rows in the run directory or the outputs directory.
///
/// Cells without both a flux and a location are left out of the tables.
///
/// Examples
/// --------
///
///  Process every output in outputs.txt
///     $ outp summary
///
///  Process a single output and dump all cells
///     $ outp cells f5000_o --text
///
///  Compare keff convergence of two outputs
///     $ outp keff mcnp_o/f5000_o mcnp_o/a5000_o
///
#[doc(hidden)]
#[derive(Parser)]
#[command(
    verbatim_doc_comment,
    arg_required_else_help(true),
    before_help(banner()),
    after_help("Typical use: outp summary --run-dir study\n\nNOTE: --help shows more detail and examples"),
    term_width(70),
    hide_possible_values(true),
    override_usage("outp <command> [options]")
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    // * Flags
    /// Verbose logging (-v, -vv)
    ///
    /// If specified, the default log level of INFO is increased to DEBUG (-v)
    /// or TRACE (-vv). Errors and Warnings are always logged unless in quiet
    /// (-q) mode.
    #[arg(short, long, global = true)]
    #[arg(action = clap::ArgAction::Count)]
    verbose: u8,

    /// Supress all log output (overrules --verbose)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[doc(hidden)]
#[derive(Subcommand)]
enum Command {
    /// Process every output listed for a study
    ///
    /// Reads names from the outputs list, writes `<csv>/<name>.csv` for
    /// each output with flux tally data, and a headerless summary row of
    /// `name,nps/cycle,keff,std dev,minutes` to `<csv>/summary.csv`.
    Summary {
        #[command(flatten)]
        layout: Layout,

        /// Do not show the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Process a single output
    Cells {
        /// Name of the output in the reports directory
        #[arg(name = "name")]
        name: String,

        #[command(flatten)]
        layout: Layout,

        /// Also write every cell to `<csv>/<name>.txt`
        #[arg(long)]
        text: bool,

        /// Also write every cell to `<csv>/<name>.json`
        #[arg(long)]
        json: bool,
    },

    /// Write the active keff cycles of one or two outputs
    ///
    /// Tables are written to `<output>_<run>.csv`, where the run name is the
    /// output file name without the trailing `o`.
    Keff {
        /// Paths to the outputs
        #[arg(name = "outputs", num_args = 1..=2, required = true)]
        outputs: Vec<PathBuf>,

        /// Prefix for output files ('keff' default)
        #[arg(short, long)]
        #[arg(value_name = "path")]
        output: Option<String>,
    },
}

/// Directory layout of a study
#[doc(hidden)]
#[derive(Args)]
struct Layout {
    /// Base directory of the study ('.' default)
    #[arg(help_heading("Layout options"))]
    #[arg(short, long)]
    #[arg(value_name = "path")]
    #[arg(default_value = ".")]
    run_dir: PathBuf,

    /// Subdirectory containing the MCNP outputs ('mcnp_o' default)
    #[arg(help_heading("Layout options"))]
    #[arg(long)]
    #[arg(value_name = "dir")]
    #[arg(default_value = "mcnp_o")]
    reports: String,

    /// Subdirectory for generated tables ('csv' default)
    #[arg(help_heading("Layout options"))]
    #[arg(long)]
    #[arg(value_name = "dir")]
    #[arg(default_value = "csv")]
    csv: String,

    /// List of output names, relative to the run directory
    #[arg(help_heading("Layout options"))]
    #[arg(long)]
    #[arg(value_name = "file")]
    #[arg(default_value = "outputs.txt")]
    list: String,
}

impl Layout {
    fn options(&self) -> ProcessOptions {
        let mut options = ProcessOptions::new(&self.run_dir);
        options.set_reports_dir(&self.reports);
        options.set_csv_dir(&self.csv);
        options.set_outputs_list(&self.list);
        options
    }
}

#[doc(hidden)]
fn summary(layout: &Layout, no_progress: bool) -> Result<()> {
    let mut runner = BatchRunner::new(layout.options());
    if no_progress {
        runner.disable_progress();
    }

    let batch = runner.run()?;
    for line in batch.to_string().lines() {
        info!("{line}");
    }
    info!(
        "All completed cell tables are in {}",
        runner.options().csv_path().display()
    );
    Ok(())
}

#[doc(hidden)]
fn cells(name: &str, layout: &Layout, text: bool, json: bool) -> Result<()> {
    let options = layout.options();
    let outcome = process_report(name, &options)?;
    info!("Status: {} ({})", outcome.status(), outcome.status().code());

    let Outcome::Success { report, .. } = outcome else {
        return Ok(());
    };

    if text {
        let path = options.csv_path().join(f!("{name}.txt"));
        write_cells(&report.cells, &path)?;
        info!("  Wrote {}", path.display());
    }

    if json {
        let path = options.csv_path().join(f!("{name}.json"));
        write_json(&report.cells, &path)?;
        info!("  Wrote {}", path.display());
    }

    Ok(())
}

#[doc(hidden)]
fn keff(outputs: &[PathBuf], prefix: Option<&String>) -> Result<()> {
    let prefix = prefix.map(String::as_str).unwrap_or("keff");

    for path in outputs {
        let cycles = read_keff_cycles(path)?;
        if cycles.is_empty() {
            warn!("  No keff cycle data found in {}", path.display());
            continue;
        }

        let output = f!("{prefix}_{}.csv", run_name(path));
        write_keff_cycles(&cycles, &output)?;
        info!("  - {output} ({} cycles)", cycles.len());
    }

    Ok(())
}

/// Sets up logging at runtime to allow for multiple verbosity levels
#[doc(hidden)]
fn logging_init(verbosity: usize, quiet: bool) {
    stderrlog::new()
        .modules(vec![module_path!(), "outp_report"])
        .quiet(quiet)
        .verbosity(verbosity)
        .show_level(false)
        .color(stderrlog::ColorChoice::Never)
        .timestamp(stderrlog::Timestamp::Off)
        .init()
        .expect("logger initialised more than once");
}

/// Creates a banner for the command line
#[doc(hidden)]
fn banner() -> String {
    let mut s = f!("{:-<1$}\n", "", 70);
    s += &f!("{:^70}\n", "Outp :: MCNP output tables");
    s += &f!("{:-<1$}", "", 70);
    s
}
