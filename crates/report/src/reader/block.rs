// crate modules
use crate::parsers::is_end_of_block;

/// Whitespace separated tokens of a single non-blank line
pub type Row<'a> = Vec<&'a str>;

/// Slice out the block of token rows following a section header
///
/// Rows are collected from the line after `header` up to, but not including,
/// the first end-of-block line (a single space followed by a run of `*` or `=`
/// characters). If no terminator is ever found the block runs to the end of
/// the file.
///
/// Blank lines are dropped, and neither the header nor the terminator are
/// part of the block.
///
/// ```rust
/// # use outp_report::reader::extract_block;
/// let lines = [
///     "           tally type 4    track length estimate of particle flux.      units   1/cm**2",
///     "",
///     "                   cell:       10           11",
///     "                         1.00000E+00  2.00000E+00",
///     " ===========================",
///     " cell  12",
/// ];
///
/// let block = extract_block(&lines, 0);
/// assert_eq!(block.len(), 2);
/// assert_eq!(block[0], vec!["cell:", "10", "11"]);
/// ```
pub fn extract_block<S: AsRef<str>>(lines: &[S], header: usize) -> Vec<Row<'_>> {
    lines
        .iter()
        .skip(header + 1)
        .map(|line| line.as_ref())
        .take_while(|line| !is_end_of_block(line))
        .map(|line| line.split_whitespace().collect::<Row>())
        .filter(|row| !row.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_to_end_of_file() {
        let lines = vec![
            "header".to_string(),
            "  1  2  3".to_string(),
            "   ".to_string(),
            "  4  5".to_string(),
        ];

        let block = extract_block(&lines, 0);
        assert_eq!(block, vec![vec!["1", "2", "3"], vec!["4", "5"]]);
    }

    #[test]
    fn stops_at_terminators() {
        let lines = ["header", " a b", " ****", " c d"];
        assert_eq!(extract_block(&lines, 0), vec![vec!["a", "b"]]);

        let lines = ["header", " =====", " a b"];
        assert!(extract_block(&lines, 0).is_empty());
    }

    #[test]
    fn header_index_is_respected() {
        let lines = ["junk", "more junk", "header", " x", " y"];
        assert_eq!(extract_block(&lines, 2), vec![vec!["x"], vec!["y"]]);

        // header on the final line gives nothing
        assert!(extract_block(&lines, 4).is_empty());
    }
}
