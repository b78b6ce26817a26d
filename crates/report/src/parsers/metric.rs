// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while_m_n};
use nom::character::complete::{self, char, digit1};
use nom::combinator::{eof, recognize};
use nom::sequence::{preceded, tuple};
use nom::IResult;

use crate::parsers::{blanks1, cause, plain_decimal, uint32};
use crate::KeffCycle;

/// Run time in minutes from the `computer time =` line
///
/// The time is always printed to two decimal places, anything after that is
/// ignored. The text is kept exactly as printed.
///
/// e.g.
/// ```text
///  computer time =    12.34 minutes
/// ```
pub(crate) fn computer_time(i: &str) -> Option<&str> {
    i.match_indices("computer time =")
        .filter(|(idx, _)| i[..*idx].ends_with(' '))
        .find_map(|(idx, key)| minutes(&i[idx + key.len()..]).ok())
        .map(|(_, value)| value)
}

/// Number of particles per cycle from an echoed kcode card
///
/// The keyword may be in any case, and must be followed by at least one
/// space and an integer that ends the line or is followed by a space.
///
/// e.g.
/// ```text
///    12-       kcode 5000 1.0 15 115
/// ```
pub(crate) fn kcode_particles(i: &str) -> Option<u64> {
    let lowercase = i.to_ascii_lowercase();
    lowercase
        .match_indices("kcode")
        .find_map(|(idx, key)| particles(&i[idx + key.len()..]).ok())
        .map(|(_, nps)| nps)
}

/// Final keff and standard deviation from the `final result` line
///
/// At least one character must come before the keyword. When it appears more
/// than once the last valid occurrence wins. Both values are kept exactly as
/// printed.
pub(crate) fn final_result(i: &str) -> Option<(&str, &str)> {
    i.match_indices("final result")
        .filter(|(idx, _)| *idx > 0)
        .filter_map(|(idx, key)| decimal_pair(&i[idx + key.len()..]).ok())
        .last()
        .map(|(_, pair)| pair)
}

/// Checks for the line announcing the table of active keff cycles
///
/// At least one character must come before the marker.
pub(crate) fn is_active_cycles_marker(i: &str) -> bool {
    i.match_indices("begin active keff cycles")
        .any(|(idx, _)| idx > 0)
}

/// Parse a row of the active keff cycle table
///
/// A row starts with the cycle number, then at least three `|` delimited
/// fields, with the keff and standard deviation following the last of them.
///
/// e.g.
/// ```text
///      16   1.00234 ...  |  ...  |  ...  |   1.00512  0.00412 ...
/// ```
pub(crate) fn keff_cycle_row(i: &str) -> IResult<&str, KeffCycle> {
    let (rest, cycle) = uint32(i)?;

    // pipes need at least one character between each of them and the cycle
    let pipes: Vec<usize> = rest.match_indices('|').map(|(idx, _)| idx).collect();
    let third = pipes
        .iter()
        .find(|p| **p >= 1)
        .and_then(|first| pipes.iter().find(|p| **p >= first + 2))
        .and_then(|second| pipes.iter().position(|p| *p >= second + 2))
        .ok_or_else(|| cause("fewer than three delimited fields"))?;

    // the last pipe followed by the two values is the one used
    pipes[third..]
        .iter()
        .rev()
        .find_map(|p| {
            let (i, (keff, std_dev)) = decimal_pair(&rest[p + 1..]).ok()?;
            Some((i, keff.parse::<f64>().ok()?, std_dev.parse::<f64>().ok()?))
        })
        .map(|(i, keff, std_dev)| {
            (
                i,
                KeffCycle {
                    cycle,
                    keff,
                    std_dev,
                },
            )
        })
        .ok_or_else(|| cause("no keff and standard deviation after delimiters"))
}

/// Two `[\d\.]+` values, each preceded by at least one space
fn decimal_pair(i: &str) -> IResult<&str, (&str, &str)> {
    let (i, first) = preceded(blanks1, plain_decimal)(i)?;
    let (i, second) = preceded(blanks1, plain_decimal)(i)?;
    Ok((i, (first, second)))
}

/// Integer followed by a space or the end of the line
fn particles(i: &str) -> IResult<&str, u64> {
    let (i, nps) = preceded(blanks1, complete::u64)(i)?;
    let (i, _) = alt((tag(" "), eof))(i)?;
    Ok((i, nps))
}

/// Run time with exactly two decimal places
fn minutes(i: &str) -> IResult<&str, &str> {
    preceded(
        blanks1,
        recognize(tuple((
            digit1,
            char('.'),
            take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
        ))),
    )(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_time() {
        assert_eq!(computer_time(" computer time =    12.34 minutes"), Some("12.34"));
        assert_eq!(computer_time(" computer time =    12.30 minutes"), Some("12.30"));
        assert_eq!(computer_time(" computer time =    0.527"), Some("0.52"));

        // needs a leading space and two decimal places
        assert_eq!(computer_time("computer time =    12.34"), None);
        assert_eq!(computer_time(" computer time =    12.3"), None);
        assert_eq!(computer_time(" computer time =12.34"), None);
    }

    #[test]
    fn kcode_cards() {
        assert_eq!(kcode_particles("    5-       kcode 5000 1.0 15 115"), Some(5000));
        assert_eq!(kcode_particles("KCODE    20000 1.0 50 250"), Some(20000));
        assert_eq!(kcode_particles("kcode 1000"), Some(1000));

        assert_eq!(kcode_particles("kcode 1000.0 1.0"), None);
        assert_eq!(kcode_particles("kcode source cycles"), None);
        assert_eq!(kcode_particles("kcode"), None);
    }

    #[test]
    fn final_results() {
        let line = " | the col/abs/trk-len final result  1.00234  0.00056 |";
        assert_eq!(final_result(line), Some(("1.00234", "0.00056")));

        // trailing zeros are kept
        let line = "  col/abs/trk len    final result  1.00000   0.00050";
        assert_eq!(final_result(line), Some(("1.00000", "0.00050")));

        // must not be at the very start of the line
        assert_eq!(final_result("final result 1.0 0.1"), None);
        assert_eq!(final_result(" final result 1.0"), None);
        assert_eq!(final_result(" final result -1.0 0.1"), None);
    }

    #[test]
    fn active_cycles_marker() {
        assert!(is_active_cycles_marker(
            " source distribution written to file srctp    cycle =    15   begin active keff cycles"
        ));
        assert!(!is_active_cycles_marker("begin active keff cycles"));
        assert!(!is_active_cycles_marker(" begin inactive keff cycles"));
    }

    #[test]
    fn keff_rows() {
        let row = "     16   0.99876 | 0.99912 1.00012 | 0.99805 |   1.00104  0.00231";
        let (_, cycle) = keff_cycle_row(row).unwrap();
        assert_eq!(cycle.cycle, 16);
        assert_eq!(cycle.keff, 1.00104);
        assert_eq!(cycle.std_dev, 0.00231);

        // the values follow the final delimiter
        let row = "  2 a | b | c | d |  1.5  0.5";
        assert_eq!(keff_cycle_row(row).unwrap().1.keff, 1.5);
    }

    #[test]
    fn keff_rows_rejected() {
        // too few delimited fields
        assert!(keff_cycle_row("  3  1.0 | 1.0 |  1.0 0.1").is_err());
        // no cycle number
        assert!(keff_cycle_row(" cycle k(col) | k(trk) | k(abs) |  keff  std").is_err());
        // empty fields between delimiters
        assert!(keff_cycle_row("  4 ||| 1.0 0.1").is_err());
        // missing standard deviation
        assert!(keff_cycle_row("  5 a | b | c | 1.0").is_err());
    }
}
