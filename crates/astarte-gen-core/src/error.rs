//! Error types for interface generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type GenResult<T> = Result<T, GenError>;

/// Error type for generator operations
///
/// Every variant aborts the run; nothing is recovered locally.
#[derive(Error, Debug)]
pub enum GenError {
    /// Reading a schema or writing an output file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A schema file is not well-formed JSON
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A required field is missing or holds a value outside its vocabulary
    #[error("schema error in {location}: {message}")]
    Schema { location: String, message: String },

    /// Reliability code outside the 0..=2 table
    #[error("unknown reliability code {code} for endpoint {endpoint} of interface {interface}")]
    Lookup {
        interface: String,
        endpoint: String,
        code: i128,
    },

    /// Two schema files declare the same interface name
    #[error("interface {name} declared twice: {} and {}", first.display(), second.display())]
    DuplicateName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Two distinct interface names collapse to the same C symbol
    #[error("interfaces {first} and {second} both derive the symbol suffix {symbol}")]
    DuplicateSymbol {
        symbol: String,
        first: String,
        second: String,
    },

    /// Invalid generator configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Generated output on disk differs from what the schemas produce
    #[error("generated file is out of date: {}", path.display())]
    Stale { path: PathBuf },
}

impl GenError {
    /// Returns a stable numeric code for the error kind
    pub fn error_code(&self) -> u32 {
        match self {
            GenError::Io { .. } => 1,
            GenError::Parse { .. } => 2,
            GenError::Schema { .. } => 3,
            GenError::Lookup { .. } => 4,
            GenError::DuplicateName { .. } => 5,
            GenError::DuplicateSymbol { .. } => 6,
            GenError::Config(_) => 7,
            GenError::Stale { .. } => 8,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn schema(location: impl Into<String>, message: impl Into<String>) -> Self {
        GenError::Schema {
            location: location.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
