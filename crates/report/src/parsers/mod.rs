// All nom parsers split amoung files for organisation
mod metric;
mod number;
mod section;

// Internal re-exports for convenience
pub(crate) use metric::*;
pub(crate) use number::*;
pub(crate) use section::*;

use nom::bytes::complete::{take_while, take_while1};
use nom::error::{Error, ErrorKind};
use nom::IResult;

/// Classification of a single output line
///
/// Only one classification is ever made per line, checked in the order the
/// variants are listed here.
#[derive(Debug, PartialEq)]
pub(crate) enum Line<'a> {
    /// Header of a type 4 flux tally block
    FluxTally,
    /// Header of the cell/material print table
    Material,
    /// `computer time =` line in minutes
    ComputerTime(&'a str),
    /// Particles per cycle from the kcode card
    Kcode(u64),
    /// Final keff and its standard deviation
    FinalResult(&'a str, &'a str),
    /// Nothing of interest
    Other,
}

/// Find out what, if anything, a line of the output contains
///
/// The kcode card is echoed in several places of an output. Only the first
/// is of interest, so `want_kcode` should be false once one has been found.
pub(crate) fn classify_line(i: &str, want_kcode: bool) -> Line<'_> {
    if is_flux_tally_header(i) {
        Line::FluxTally
    } else if is_material_header(i) {
        Line::Material
    } else if let Some(minutes) = computer_time(i) {
        Line::ComputerTime(minutes)
    } else if let Some(nps) = kcode_particles(i).filter(|_| want_kcode) {
        Line::Kcode(nps)
    } else if let Some((keff, std_dev)) = final_result(i) {
        Line::FinalResult(keff, std_dev)
    } else {
        Line::Other
    }
}

/// More convenient error creation for nom
pub(in crate::parsers) fn cause(s: &str) -> nom::Err<Error<&str>> {
    nom::Err::Error(Error::new(s, ErrorKind::Fail))
}

/// Zero or more literal spaces, tabs are not accepted
pub(in crate::parsers) fn blanks0(i: &str) -> IResult<&str, &str> {
    take_while(|c| c == ' ')(i)
}

/// One or more literal spaces, tabs are not accepted
pub(in crate::parsers) fn blanks1(i: &str) -> IResult<&str, &str> {
    take_while1(|c| c == ' ')(i)
}
