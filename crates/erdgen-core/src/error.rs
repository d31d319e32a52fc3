use std::path::PathBuf;

use thiserror::Error;

/// Core error type shared across erdgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The filter configuration file could not be parsed.
    #[error("{format} syntax error in {}: {message}", path.display())]
    ConfigSyntax {
        format: &'static str,
        path: PathBuf,
        message: String,
    },
    /// Reading a configuration or snapshot file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A descriptor handed to the pipeline is missing a required field.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Database error or adapter failure during discovery.
    #[error("database error: {0}")]
    Db(String),
    /// A model snapshot file is malformed or has an unsupported version.
    #[error("invalid snapshot: {0}")]
    Snapshot(String),
}

/// Convenience alias for results returned by erdgen crates.
pub type Result<T> = std::result::Result<T, Error>;
