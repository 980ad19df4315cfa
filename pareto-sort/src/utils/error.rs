#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use thiserror::Error;

/// An error which can happen while configuring the archive, reading its input or writing its
/// output. All of them are fatal for a run: there is no partial archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Objective indices, epsilons or io settings are inconsistent.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A source row is not a numeric record of the expected width.
    #[error("malformed record in '{origin}' at line {line}: {details}")]
    MalformedRecord {
        /// A name of the input collection.
        origin: String,
        /// One-based line number within the input collection.
        line: u64,
        /// What exactly is wrong with the record.
        details: String,
    },

    /// An underlying io operation has failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for result type with `ArchiveError`.
pub type ArchiveResult<T> = Result<T, ArchiveError>;

impl ArchiveError {
    /// Creates a configuration error.
    pub fn configuration(details: impl Into<String>) -> Self {
        Self::Configuration(details.into())
    }

    /// Creates a malformed record error.
    pub fn malformed(origin: &str, line: u64, details: impl Into<String>) -> Self {
        Self::MalformedRecord { origin: origin.to_string(), line, details: details.into() }
    }
}
