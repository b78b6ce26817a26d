//! Common formatting utilities for extended `std` types
//!
//! These are left public for convenience.
//!
//! Scientific number formatting in particular needs to match the fixed style
//! used by MCNP and by every table written from the parsed results.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod option_ext;
mod value_ext;

// Flatten
pub use option_ext::OptionExt;
pub use value_ext::ValueExt;
