//! Error types for Folio
//!
//! Search and indexing never fail; only the configuration surface does.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for Folio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Folio
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (reading or writing a config file)
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Config file could not be parsed or serialized
    #[error("Config error: {0}")]
    Config(String),

    /// A configuration value is out of range
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create an `InvalidInput` error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create a `Config` error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Config(e.to_string())
    }
}
