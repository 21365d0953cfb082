//! Error types for RTU Dashboard
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// Malformed CSV row or header
    #[snafu(display("CSV error at line {line}: {source}"))]
    Csv { line: u64, source: csv::Error },

    /// `Time` column that matches none of the accepted formats
    #[snafu(display("Unrecognized time {value:?} at line {line}"))]
    InvalidTime { line: u64, value: String },

    /// Record whose time does not strictly follow the previous one
    #[snafu(display("Record at line {line} is not later than the previous record"))]
    OutOfOrder { line: u64 },

    /// CSV contained a header but no records
    #[snafu(display("Dataset contains no records"))]
    EmptyDataset,

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
