// outp modules
use outp_utils::{OptionExt, ValueExt};

// external crates
use serde::Serialize;

/// Track length estimate of flux for a single cell
///
/// The `std_dev` is the relative standard deviation exactly as printed by
/// MCNP next to the tally value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Flux {
    /// Tally value (1/cm^2)
    pub value: f64,
    /// Relative standard deviation
    pub std_dev: f64,
}

impl Flux {
    /// Create a new flux result
    pub fn new(value: f64, std_dev: f64) -> Self {
        Self { value, std_dev }
    }
}

/// Everything known about a single geometry cell
///
/// Only the cell number is guaranteed. Every other attribute is populated by
/// whichever section of the output happens to mention the cell:
///
/// | Attribute  | Source                                         |
/// | ---------- | ---------------------------------------------- |
/// | `volume`   | `cell:` listing in the flux tally              |
/// | `flux`     | `cell` result rows in the flux tally           |
/// | `material` | cell/material print table (non-void only)      |
/// | `location` | optional `locations.txt` side file             |
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Cell {
    /// Cell number from the MCNP input deck
    pub number: u32,
    /// Cell volume (cm^3)
    pub volume: Option<f64>,
    /// Flux tally result
    pub flux: Option<Flux>,
    /// Material id, never `Some(0)`
    pub material: Option<u32>,
    /// Coordinates of the cell centre as `[x, y, z]` (cm)
    pub location: Option<[f64; 3]>,
}

impl Cell {
    /// Create a new cell with nothing but the cell number
    pub fn new(number: u32) -> Self {
        Self {
            number,
            ..Default::default()
        }
    }

    /// Check that both the flux and location are known
    ///
    /// Only complete cells are written to the tabulated CSV output.
    pub fn is_complete(&self) -> bool {
        self.location_and_flux().is_some()
    }

    /// Cell centre and flux together, only when both are known
    pub fn location_and_flux(&self) -> Option<([f64; 3], Flux)> {
        Some((self.location?, self.flux?))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Cell number: {:>3}", self.number)?;

        match self.location {
            Some([x, y, z]) => writeln!(
                f,
                "  Center of cell: ({},{},{})",
                x.sci_upper(5, 2),
                y.sci_upper(5, 2),
                z.sci_upper(5, 2)
            )?,
            None => writeln!(f, "  Center of cell: none")?,
        }

        match self.flux {
            Some(flux) => writeln!(
                f,
                "  Cell Flux: {} +/- {:6.4}",
                flux.value.sci_upper(5, 2),
                flux.std_dev
            )?,
            None => writeln!(f, "  Cell Flux: none")?,
        }

        write!(f, "  Material : {}", self.material.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completeness() {
        let mut cell = Cell::new(10);
        assert!(!cell.is_complete());

        cell.flux = Some(Flux::new(1.23e-2, 0.01));
        assert!(!cell.is_complete());

        cell.flux = None;
        cell.location = Some([0.0, 1.0, 2.0]);
        assert!(!cell.is_complete());
        assert_eq!(cell.location_and_flux(), None);

        cell.flux = Some(Flux::new(1.23e-2, 0.01));
        assert!(cell.is_complete());
        assert_eq!(
            cell.location_and_flux(),
            Some(([0.0, 1.0, 2.0], Flux::new(1.23e-2, 0.01)))
        );
    }

    #[test]
    fn text_listing() {
        let mut cell = Cell::new(7);
        cell.flux = Some(Flux::new(4.56e-2, 0.02));
        cell.location = Some([1.0, -2.5, 0.0]);

        let expected = "Cell number:   7\n\
                        \x20 Center of cell: (1.00000E+00,-2.50000E+00,0.00000E+00)\n\
                        \x20 Cell Flux: 4.56000E-02 +/- 0.0200\n\
                        \x20 Material : none";
        assert_eq!(cell.to_string(), expected);
    }
}
