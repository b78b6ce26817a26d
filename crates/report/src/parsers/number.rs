// nom parser combinators
use nom::bytes::complete::is_a;
use nom::character::complete::{self, digit1, one_of};
use nom::combinator::{all_consuming, opt, recognize};
use nom::number::complete::double;
use nom::sequence::pair;
use nom::IResult;

use crate::parsers::cause;

/// A whole token as an unsigned 32-bit integer, e.g. a cell or material id
pub(crate) fn token_u32(token: &str) -> Option<u32> {
    all_consuming(complete::u32::<&str, ()>)(token)
        .ok()
        .map(|(_, v)| v)
}

/// A whole token as a signed integer, e.g. a row index
pub(crate) fn token_i64(token: &str) -> Option<i64> {
    let signed: IResult<&str, &str> =
        all_consuming(recognize(pair(opt(one_of("+-")), digit1)))(token);
    signed.ok().and_then(|(_, v)| v.parse().ok())
}

/// A whole token as a double, e.g. `1.00000E+00`
pub(crate) fn token_f64(token: &str) -> Option<f64> {
    all_consuming(double::<&str, ()>)(token)
        .ok()
        .map(|(_, v)| v)
}

/// Unsigned decimal made of digits and points only, i.e. `[\d\.]+`
///
/// The text is returned exactly as printed so that trailing zeros survive.
/// Anything matching the character set but not a valid number, such as
/// `1.2.3`, fails.
pub(in crate::parsers) fn plain_decimal(i: &str) -> IResult<&str, &str> {
    let (rest, value) = is_a("0123456789.")(i)?;
    match value.parse::<f64>() {
        Ok(_) => Ok((rest, value)),
        Err(_) => Err(cause("not a plain decimal number")),
    }
}

/// Unsigned 32-bit integer value, trimming preceding spaces
pub(in crate::parsers) fn uint32(i: &str) -> IResult<&str, u32> {
    complete::u32(i.trim_start_matches(' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_tokens() {
        assert_eq!(token_u32("10"), Some(10));
        assert_eq!(token_u32("10a"), None);
        assert_eq!(token_u32("-1"), None);
        assert_eq!(token_u32("cell:"), None);

        assert_eq!(token_i64("-3"), Some(-3));
        assert_eq!(token_i64("+3"), Some(3));
        assert_eq!(token_i64("3.0"), None);
        assert_eq!(token_i64("total"), None);
    }

    #[test]
    fn float_tokens() {
        assert_eq!(token_f64("1.00000E+00"), Some(1.0));
        assert_eq!(token_f64("0.0100"), Some(0.01));
        assert_eq!(token_f64("4.56e-2"), Some(0.0456));
        assert_eq!(token_f64("1.0x"), None);
        assert_eq!(token_f64(""), None);
    }

    #[test]
    fn plain_decimals() {
        assert_eq!(plain_decimal("1.00234 rest"), Ok((" rest", "1.00234")));
        assert_eq!(plain_decimal("1.00000"), Ok(("", "1.00000")));
        assert!(plain_decimal("1.2.3").is_err());
        assert!(plain_decimal("-1.0").is_err());
        assert!(plain_decimal("1.0E+00").is_ok_and(|(rest, _)| rest == "E+00"));
    }
}
