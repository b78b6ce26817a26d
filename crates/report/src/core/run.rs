// external crates
use serde::Serialize;

/// Criticality run metrics extracted from a single output file
///
/// Every value is optional since MCNP only prints each line when relevant,
/// and truncated outputs may be missing any of them.
///
/// The keff and run time values are kept as the text printed by MCNP, so
/// that `1.00000` or `12.30` reach the summary table unchanged. Parse them
/// where a number is needed.
///
/// | Field                 | Source line                                 |
/// | --------------------- | ------------------------------------------- |
/// | `particles_per_cycle` | first `kcode` card echoed in the output     |
/// | `final_eigenvalue`    | `final result` line                         |
/// | `eigenvalue_std_dev`  | `final result` line                         |
/// | `run_time_minutes`    | `computer time =` line                      |
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Number of source particles per cycle
    pub particles_per_cycle: Option<u64>,
    /// Final combined keff estimate
    pub final_eigenvalue: Option<String>,
    /// Standard deviation on the final keff estimate
    pub eigenvalue_std_dev: Option<String>,
    /// Total computer time (minutes)
    pub run_time_minutes: Option<String>,
}

impl RunSummary {
    /// Check if every metric was found
    pub fn is_complete(&self) -> bool {
        self.particles_per_cycle.is_some()
            && self.final_eigenvalue.is_some()
            && self.eigenvalue_std_dev.is_some()
            && self.run_time_minutes.is_some()
    }
}

/// Eigenvalue estimate for a single active cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeffCycle {
    /// Active cycle number
    pub cycle: u32,
    /// Eigenvalue estimate
    pub keff: f64,
    /// Standard deviation on the estimate
    pub std_dev: f64,
}
