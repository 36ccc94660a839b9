//! Echo loop error model.

use thiserror::Error;

pub type EchoResult<T> = Result<T, EchoError>;

/// Failure of the underlying streams.
///
/// End-of-stream is not an error; it is how the loop terminates.
#[derive(Debug, Error)]
pub enum EchoError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
