use thiserror::Error;

/// Errors returned by the fallible utilities.
///
/// Only genuine failures surface here. End-of-stream during a pattern search
/// and unparsable floats are reported through `Option` instead.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while opening, reading or seeking
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A pattern search was asked to look for zero bytes
    #[error("Search pattern must not be empty")]
    EmptyPattern,

    /// The running program's location could not be determined
    #[error("Cannot locate program: {0}")]
    ProgramPath(String),
}

impl Error {
    pub fn program_path(msg: impl Into<String>) -> Self {
        Self::ProgramPath(msg.into())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
