//! Cell centre coordinates from an optional side file
//!
//! MCNP outputs do not contain any useful cell positions, so these may be
//! provided separately as rows of `cell x y z`:
//!
//! ```text
//! 10   0.0   0.0  0.0
//! 11   5.0   0.0  0.0
//! 12  10.0   0.0  0.0
//! ```
//!
//! This is purely an enrichment. Without a side file the cells simply have no
//! location and are left out of the tabulated results.

// standard library
use std::path::{Path, PathBuf};

// crate modules
use crate::core::CellRegistry;
use crate::error::Result;
use crate::options::ProcessOptions;
use crate::parsers::{token_f64, token_u32};

// external crates
use log::{debug, info, trace, warn};

/// Outcome of searching for and merging the location side file
#[derive(Debug, Clone, PartialEq)]
pub enum LocationStatus {
    /// No side file in the run directory or the outputs directory
    NotFound,
    /// Side file merged, with the number of rows that had to be skipped
    Merged { path: PathBuf, skipped: usize },
}

/// Find the side file, checking the run directory before the outputs
pub fn find_location_file(options: &ProcessOptions) -> Option<PathBuf> {
    options
        .location_candidates()
        .into_iter()
        .find(|path| path.is_file())
}

/// Attach cell centres to the registry from wherever the side file is found
///
/// Never fails. A side file that exists but can not be read is treated the
/// same as one that does not exist, with a warning.
pub fn attach_locations(options: &ProcessOptions, cells: &mut CellRegistry) -> LocationStatus {
    let Some(path) = find_location_file(options) else {
        info!(
            "  No location file found in {} or {}",
            options.run_dir().display(),
            options.reports_path().display()
        );
        return LocationStatus::NotFound;
    };

    match merge_location_file(&path, cells) {
        Ok(skipped) => {
            if skipped > 0 {
                info!("  Obtained location data with {skipped} rows missing location data");
            }
            LocationStatus::Merged { path, skipped }
        }
        Err(e) => {
            warn!("  Unable to read {}: {e}", path.display());
            LocationStatus::NotFound
        }
    }
}

/// Merge a location file at `path` into the registry
///
/// Returns the number of rows that were skipped.
pub fn merge_location_file<P: AsRef<Path>>(path: P, cells: &mut CellRegistry) -> Result<usize> {
    debug!("Reading locations from {}", path.as_ref().display());
    let text = std::fs::read_to_string(path)?;
    Ok(merge_locations(&text, cells))
}

/// Merge `cell x y z` rows into the registry
///
/// Only cells already in the registry receive a location, rows for anything
/// else are ignored and never create new cells.
///
/// Rows with fewer than four values, including blank lines, are counted as
/// skipped. Rows that do not parse as an integer and three numbers are also
/// counted. The total number skipped is returned.
///
/// ```rust
/// # use outp_report::{merge_locations, CellRegistry};
/// let mut cells = CellRegistry::new();
/// cells.entry(10);
/// cells.entry(11);
///
/// let skipped = merge_locations("10 0.0 1.0 2.0\n11 5.0\n99 1.0 1.0 1.0", &mut cells);
///
/// assert_eq!(skipped, 1);
/// assert_eq!(cells.get(10).unwrap().location, Some([0.0, 1.0, 2.0]));
/// assert_eq!(cells.get(11).unwrap().location, None);
/// assert!(!cells.contains(99));
/// ```
pub fn merge_locations(text: &str, cells: &mut CellRegistry) -> usize {
    let mut skipped = 0;

    for (n, line) in text.lines().enumerate() {
        let row: Vec<&str> = line.split_whitespace().collect();
        if row.len() < 4 {
            trace!("  Short location row {}: {line:?}", n + 1);
            skipped += 1;
            continue;
        }

        let Some((number, location)) = location_row(&row) else {
            warn!("  Invalid location row {}: {line:?}", n + 1);
            skipped += 1;
            continue;
        };

        if let Some(cell) = cells.get_mut(number) {
            cell.location = Some(location);
        }
    }

    skipped
}

/// Cell number and `[x, y, z]` from the first four tokens of a row
fn location_row(row: &[&str]) -> Option<(u32, [f64; 3])> {
    let number = token_u32(row[0])?;
    let x = token_f64(row[1])?;
    let y = token_f64(row[2])?;
    let z = token_f64(row[3])?;
    Some((number, [x, y, z]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_rows_are_counted() {
        let mut cells = CellRegistry::new();
        for n in [1, 2, 3] {
            cells.entry(n);
        }

        let text = "1 0.0 0.0 0.0\n\n2 1.0 1.0\n3 2.0 0.0 -1.0 extra\n4";
        assert_eq!(merge_locations(text, &mut cells), 3);

        assert_eq!(cells.get(1).unwrap().location, Some([0.0, 0.0, 0.0]));
        assert_eq!(cells.get(2).unwrap().location, None);
        assert_eq!(cells.get(3).unwrap().location, Some([2.0, 0.0, -1.0]));
    }

    #[test]
    fn invalid_rows_are_counted() {
        let mut cells = CellRegistry::new();
        cells.entry(1);

        assert_eq!(merge_locations("cell x y z\n1 a b c", &mut cells), 2);
        assert_eq!(cells.get(1).unwrap().location, None);
    }

    #[test]
    fn run_directory_is_searched_first() {
        let dir = tempfile::tempdir().unwrap();
        let options = ProcessOptions::new(dir.path());
        assert_eq!(find_location_file(&options), None);

        std::fs::create_dir(options.reports_path()).unwrap();
        let [in_run, in_reports] = options.location_candidates();

        std::fs::write(&in_reports, "1 0 0 0").unwrap();
        assert_eq!(find_location_file(&options), Some(in_reports.clone()));

        std::fs::write(&in_run, "1 0 0 0").unwrap();
        assert_eq!(find_location_file(&options), Some(in_run));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let options = ProcessOptions::new(dir.path());

        let mut cells = CellRegistry::new();
        cells.entry(1);

        assert_eq!(attach_locations(&options, &mut cells), LocationStatus::NotFound);
        assert_eq!(cells.get(1).unwrap().location, None);
    }
}
