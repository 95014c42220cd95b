//! Error types for Drover.
//!
//! One enum for the whole library; callers that only care about "did the
//! driver come up" can match on [`DroverError::DriverNotFound`] and treat
//! everything else as infrastructure failure.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for driver supervision.
#[derive(Debug, Error)]
pub enum DroverError {
    /// The driver binary could not be resolved on the executable search
    /// path. This is a startup precondition failure, not recoverable by
    /// the supervisor.
    #[error("ChromeDriver executable not found in PATH (looked for `{binary}`)")]
    DriverNotFound { binary: String },

    /// The spawn syscall itself failed after the binary was resolved.
    #[error("Failed to spawn `{binary}`: {source}")]
    Spawn {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The process table could not be listed, or a PID token in it did
    /// not parse as an integer.
    #[error("Process table scan failed: {message}")]
    ProcessTable { message: String },

    // Generic IO errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },
}

/// Result type alias for Drover operations.
pub type Result<T> = std::result::Result<T, DroverError>;

impl From<std::io::Error> for DroverError {
    fn from(err: std::io::Error) -> Self {
        DroverError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_not_found_message_names_the_binary() {
        let err = DroverError::DriverNotFound {
            binary: "chromedriver".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ChromeDriver executable not found"));
        assert!(msg.contains("chromedriver"));
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: DroverError = io.into();
        assert!(matches!(err, DroverError::Io { .. }));
    }
}
