// nom parser combinators
use nom::bytes::complete::{is_a, tag};
use nom::character::complete::char;
use nom::sequence::{preceded, tuple};
use nom::IResult;

use crate::parsers::{blanks0, blanks1};

/// Checks for the heading of a type 4 (track length) flux tally
///
/// e.g.
/// ```text
///            tally type 4    track length estimate of particle flux.      units   1/cm**2
/// ```
pub(crate) fn is_flux_tally_header(i: &str) -> bool {
    flux_tally_header(i).is_ok()
}

/// Checks for the column headings of the cell/material print table
///
/// e.g.
/// ```text
///               cell      mat   density     density     volume       mass
/// ```
pub(crate) fn is_material_header(i: &str) -> bool {
    material_header(i).is_ok()
}

/// Checks for the end of a data block
///
/// A single leading space followed by a run of `*` or `=` characters, which
/// MCNP uses for the banners and rules between output sections.
pub(crate) fn is_end_of_block(i: &str) -> bool {
    end_of_block(i).is_ok()
}

fn flux_tally_header(i: &str) -> IResult<&str, &str> {
    let (i, _) = tuple((blanks0, tag("tally type 4"), blanks1))(i)?;
    let (i, _) = tag("track length estimate of particle flux.")(i)?;
    let (i, _) = tuple((blanks0, tag("units"), blanks0))(i)?;
    tag("1/cm**2")(i)
}

fn material_header(i: &str) -> IResult<&str, &str> {
    let (i, _) = tuple((blanks0, tag("cell"), blanks0, tag("mat"), blanks0))(i)?;
    tag("density")(i)
}

fn end_of_block(i: &str) -> IResult<&str, &str> {
    preceded(char(' '), is_a("*="))(i)
}
