//! Result and Error types for outp-report

/// Type alias for `Result<T, report::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `outp-report` crate
///
/// Note that problems with the content of an output file are never errors.
/// Missing sections and malformed rows resolve to a [Status](crate::Status)
/// or a logged diagnostic instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed CSV operation")]
    Csv(#[from] csv::Error),

    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    #[error("unable to initialise progress bar: {0}")]
    ProgressBar(String),

    #[error("no report names found in \"{0}\"")]
    EmptyOutputList(String),
}

