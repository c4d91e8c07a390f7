//! Error types for the stdio tool server

use thiserror::Error;

/// Errors that stop the server loop
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output writer stopped: {0}")]
    WriterStopped(String),
}
