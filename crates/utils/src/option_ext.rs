use crate::f;

/// Extends Option for easy display formatting
pub trait OptionExt {
    /// Either the value contained within `Some()` or "none"
    ///
    /// ```rust
    /// # use outp_utils::OptionExt;
    /// let material: Option<u32> = Some(2);
    /// assert_eq!(material.display(), "2");
    ///
    /// let material: Option<u32> = None;
    /// assert_eq!(material.display(), "none");
    /// ```
    fn display(&self) -> String {
        self.display_or("none")
    }

    /// Either the value contained within `Some()` or the `placeholder` text
    ///
    /// Useful for table columns where a missing value should stay blank.
    ///
    /// ```rust
    /// # use outp_utils::OptionExt;
    /// let runtime: Option<f64> = None;
    /// assert_eq!(runtime.display_or(""), "");
    /// assert_eq!(Some(12.34).display_or(""), "12.34");
    /// ```
    fn display_or(&self, placeholder: &str) -> String;
}

impl<T: std::fmt::Display> OptionExt for Option<T> {
    fn display_or(&self, placeholder: &str) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => placeholder.to_string(),
        }
    }
}
