//! Error types for the report lookup pipeline.

use thiserror::Error;

/// A domain failure of one pipeline stage.
///
/// These are carried as `Outcome::Failure` values, never raised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ReportError {
    /// The id was missing or blank.
    #[error("Invalid report id")]
    InvalidReportId,

    /// No report name is registered for the id.
    #[error("Report id not found")]
    ReportIdNotFound,

    /// The report exists but has no numbers to average.
    #[error("Report has no numbers")]
    ReportHasNoNumbers,
}

/// Errors raised while loading configuration from the environment.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The variable is set but is not valid Unicode.
    #[error("{key} is not valid Unicode")]
    NotUnicode {
        /// The name of the environment variable.
        key: String,
    },

    /// The variable is set but lists no ids.
    #[error("{key} lists no report ids")]
    Empty {
        /// The name of the environment variable.
        key: String,
    },
}
