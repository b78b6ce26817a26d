use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Better scientific number formatting
    ///
    /// The default is not very consistent for scientific in particular, so this
    /// allows easy definition.
    ///
    /// Works for anything that can be represented as scientific using the
    /// `LowerExp` trait, which is pretty much every numerical primitive.
    ///
    /// ```rust
    /// # use outp_utils::ValueExt;
    /// let number: f64 = -1.0;
    /// assert_eq!(number.sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!((1.0_f64).sci(5, 2), "1.00000e+00".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;

    /// Scientific formatting with an uppercase exponent marker
    ///
    /// This is the fortran style found throughout MCNP outputs, and matches
    /// the classic `{:11.5E}` layout when called as `sci_upper(5, 2)`.
    ///
    /// ```rust
    /// # use outp_utils::ValueExt;
    /// assert_eq!((0.0123_f64).sci_upper(5, 2), "1.23000E-02".to_string());
    /// assert_eq!((-250.0_f64).sci_upper(5, 2), "-2.50000E+02".to_string());
    /// ```
    fn sci_upper(&self, precision: usize, exp_pad: usize) -> String {
        self.sci(precision, exp_pad).to_uppercase()
    }
}

impl<T: std::fmt::LowerExp> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let mut num = f!("{:.precision$e}", &self, precision = precision);

        // inf and NaN have no exponent to pad
        let Some(idx) = num.find('e') else {
            return num;
        };

        let exp = num.split_off(idx);
        // Make sure the exponent is signed
        let (sign, exp) = match exp.strip_prefix("e-") {
            Some(exp) => ('-', exp),
            None => ('+', &exp[1..]),
        };
        // Pad the exponent with zeros if needed and put it back on the number
        num.push_str(&f!("e{}{:0>pad$}", sign, exp, pad = exp_pad));
        num
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponent_padding() {
        assert_eq!((1.0e-120_f64).sci(3, 2), "1.000e-120");
        assert_eq!((1.0e5_f64).sci(2, 3), "1.00e+005");
        assert_eq!((0.0_f64).sci(5, 2), "0.00000e+00");
    }

    #[test]
    fn uppercase_matches_fortran_layout() {
        assert_eq!((12.5_f64).sci_upper(5, 2), "1.25000E+01");
        assert_eq!((4.56e-2_f64).sci_upper(5, 2), "4.56000E-02");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(f64::INFINITY.sci(5, 2), "inf");
        assert_eq!(f64::NAN.sci_upper(5, 2), "NAN");
    }
}
